//! Enemy pursuit: one greedy step toward the food per scheduled move,
//! measuring distance on the torus formed by the interior cells.

use super::grid::Cell;
use super::spawner::Spawner;
use super::state::GameState;

/// What the enemy did on its move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyAdvance {
    /// The enemy reached the food; it has been relocated.
    pub ate_food: bool,
    /// The enemy stepped onto the snake head.
    pub caught_snake: bool,
}

/// Signed displacement from `from` to `to` on a ring of `extent` cells,
/// preferring the wrap-around route whenever it is shorter.
pub fn toroidal_delta(from: i32, to: i32, extent: i32) -> i32 {
    let mut delta = to - from;
    if delta.abs() > extent / 2 {
        delta += if delta > 0 { -extent } else { extent };
    }
    delta
}

/// Advance the enemy one step toward the food.
///
/// Axis priority goes to the larger displacement, horizontal winning ties.
/// A step blocked by the snake body falls back to the other axis; if both
/// are blocked the enemy sits this move out. The enemy is always
/// wrap-capable: a step onto the outer ring re-enters from the opposite
/// interior edge regardless of score.
pub fn advance_enemy(state: &mut GameState, spawner: &mut Spawner) -> EnemyAdvance {
    let mut advance = EnemyAdvance::default();
    let Some(enemy) = state.enemy else {
        return advance;
    };

    let dx = toroidal_delta(enemy.x, state.food.x, state.grid.interior_width() as i32);
    let dy = toroidal_delta(enemy.y, state.food.y, state.grid.interior_height() as i32);

    let horizontal = enemy.offset(dx.signum(), 0);
    let vertical = enemy.offset(0, dy.signum());
    let (first, second) = if dx.abs() >= dy.abs() && dx != 0 {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };

    let mut target = None;
    for candidate in [first, second] {
        if candidate == enemy {
            // zero displacement on this axis
            continue;
        }
        let candidate = state.grid.wrap_through_ring(candidate);
        if state.grid.cell_at(candidate) != Cell::SnakeBody {
            target = Some(candidate);
            break;
        }
    }
    let Some(target) = target else {
        return advance;
    };

    // Food relocation happens before the terminal check, so the enemy can
    // eat and catch the snake head in the same move.
    if target == state.food {
        advance.ate_food = true;
        match spawner.place_food(&mut state.grid) {
            Some(pos) => state.food = pos,
            None => {
                state.won = true;
                state.alive = false;
            }
        }
    }

    if target == state.snake.head() {
        state.alive = false;
        state.grid.set_at(target, Cell::Enemy);
        advance.caught_snake = true;
        return advance;
    }

    state.grid.set_at(enemy, Cell::Empty);
    state.grid.set_at(target, Cell::Enemy);
    state.enemy = Some(target);
    advance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Grid;
    use crate::game::state::{Position, Snake};

    fn state_with(
        grid_w: usize,
        grid_h: usize,
        head: Position,
        enemy: Position,
        food: Position,
    ) -> GameState {
        let mut grid = Grid::new(grid_w, grid_h);
        grid.set_at(head, Cell::SnakeHead);
        grid.set_at(food, Cell::Food);
        grid.set_at(enemy, Cell::Enemy);
        let mut state = GameState::new(grid, Snake::new(head), food, 60, 5);
        state.enemy = Some(enemy);
        state
    }

    #[test]
    fn toroidal_delta_prefers_the_short_way_round() {
        // 10-cell ring: going from 1 to 9 is -2, not +8.
        assert_eq!(toroidal_delta(1, 9, 10), -2);
        assert_eq!(toroidal_delta(9, 1, 10), 2);
        assert_eq!(toroidal_delta(2, 5, 10), 3);
        assert_eq!(toroidal_delta(5, 5, 10), 0);
    }

    #[test]
    fn horizontal_priority_on_pure_east_target() {
        // Food 3 cells east, same row: the enemy steps exactly 1 east.
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(5, 5), Position::new(8, 5));
        let mut spawner = Spawner::seeded(3);

        let advance = advance_enemy(&mut state, &mut spawner);
        assert_eq!(advance, EnemyAdvance::default());
        assert_eq!(state.enemy, Some(Position::new(6, 5)));
        assert_eq!(state.grid.get(6, 5), Cell::Enemy);
        assert_eq!(state.grid.get(5, 5), Cell::Empty);
    }

    #[test]
    fn horizontal_wins_magnitude_ties() {
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(5, 5), Position::new(8, 8));
        let mut spawner = Spawner::seeded(3);

        advance_enemy(&mut state, &mut spawner);
        assert_eq!(state.enemy, Some(Position::new(6, 5)));
    }

    #[test]
    fn vertical_axis_used_when_dominant() {
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(5, 5), Position::new(6, 9));
        let mut spawner = Spawner::seeded(3);

        advance_enemy(&mut state, &mut spawner);
        assert_eq!(state.enemy, Some(Position::new(5, 6)));
    }

    #[test]
    fn blocked_primary_axis_falls_back_to_secondary() {
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(5, 5), Position::new(9, 6));
        state.grid.set(6, 5, Cell::SnakeBody);
        let mut spawner = Spawner::seeded(3);

        advance_enemy(&mut state, &mut spawner);
        assert_eq!(state.enemy, Some(Position::new(5, 6)));
    }

    #[test]
    fn fully_blocked_enemy_stays_put() {
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(5, 5), Position::new(9, 6));
        state.grid.set(6, 5, Cell::SnakeBody);
        state.grid.set(5, 6, Cell::SnakeBody);
        let mut spawner = Spawner::seeded(3);

        let advance = advance_enemy(&mut state, &mut spawner);
        assert_eq!(advance, EnemyAdvance::default());
        assert_eq!(state.enemy, Some(Position::new(5, 5)));
        assert_eq!(state.grid.get(5, 5), Cell::Enemy);
    }

    #[test]
    fn enemy_wraps_through_the_ring() {
        // Enemy hugging the east edge, food far west: the toroidal shortcut
        // sends it east onto the ring, re-entering at x = 1.
        let mut state = state_with(20, 12, Position::new(9, 9), Position::new(18, 5), Position::new(2, 5));
        let mut spawner = Spawner::seeded(3);

        advance_enemy(&mut state, &mut spawner);
        assert_eq!(state.enemy, Some(Position::new(1, 5)));
        assert_ne!(state.grid.get(1, 5), Cell::Wall);
    }

    #[test]
    fn enemy_never_commits_to_a_wall_cell() {
        let mut state = state_with(20, 12, Position::new(9, 9), Position::new(1, 1), Position::new(18, 10));
        let mut spawner = Spawner::seeded(3);

        for _ in 0..200 {
            advance_enemy(&mut state, &mut spawner);
            let enemy = state.enemy.unwrap();
            assert_ne!(state.grid.cell_at(enemy), Cell::Wall);
            assert!(!state.grid.on_ring(enemy));
        }
    }

    #[test]
    fn reaching_food_relocates_it_and_keeps_moving() {
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(7, 5), Position::new(8, 5));
        let mut spawner = Spawner::seeded(11);

        let advance = advance_enemy(&mut state, &mut spawner);
        assert!(advance.ate_food);
        assert!(!advance.caught_snake);
        assert_eq!(state.enemy, Some(Position::new(8, 5)));
        assert_eq!(state.grid.get(8, 5), Cell::Enemy);
        // fresh food somewhere else, on a previously empty cell
        assert_ne!(state.food, Position::new(8, 5));
        assert_eq!(state.grid.cell_at(state.food), Cell::Food);
        assert!(state.alive);
    }

    #[test]
    fn catching_the_head_ends_the_game() {
        let mut state = state_with(20, 12, Position::new(6, 5), Position::new(5, 5), Position::new(9, 5));
        let mut spawner = Spawner::seeded(3);

        let advance = advance_enemy(&mut state, &mut spawner);
        assert!(advance.caught_snake);
        assert!(!state.alive);
        // The fatal contact is drawn, and the enemy's stored position is not
        // advanced past it.
        assert_eq!(state.grid.get(6, 5), Cell::Enemy);
        assert_eq!(state.enemy, Some(Position::new(5, 5)));
    }

    #[test]
    fn no_enemy_means_no_op() {
        let mut state = state_with(20, 12, Position::new(2, 2), Position::new(5, 5), Position::new(8, 5));
        state.enemy = None;
        let mut spawner = Spawner::seeded(3);

        let advance = advance_enemy(&mut state, &mut spawner);
        assert_eq!(advance, EnemyAdvance::default());
    }
}
