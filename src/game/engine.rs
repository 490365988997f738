use super::action::{Action, Direction};
use super::config::GameConfig;
use super::grid::{Cell, Grid};
use super::pursuit;
use super::spawner::Spawner;
use super::state::{GameState, Position, Snake};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head hit the outer ring while wrap-around was still locked.
    Wall,
    /// Head hit the snake's own body.
    OwnBody,
    /// Head walked into the enemy.
    Enemy,
    /// The enemy walked into the head.
    CaughtByEnemy,
}

/// Extra information about one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// The snake ate food this tick.
    pub ate_food: bool,
    /// The enemy reached the food this tick.
    pub enemy_ate_food: bool,
    /// Fatal contact, if any.
    pub collision: Option<CollisionKind>,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// The game is over (collision, capture, or a full board).
    pub terminated: bool,
    pub info: StepInfo,
}

/// The simulation engine: advances the snake, schedules the enemy, and
/// owns the spawner. All state lives in the [`GameState`] passed in.
pub struct GameEngine {
    config: GameConfig,
    spawner: Spawner,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            spawner: Spawner::new(),
        }
    }

    /// Engine with a deterministic spawner, for tests.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            spawner: Spawner::seeded(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: walled grid, one-segment snake at the center,
    /// food placed, no enemy, no direction yet.
    pub fn reset(&mut self) -> GameState {
        let mut grid = Grid::new(self.config.grid_width, self.config.grid_height);

        let head = Position::new(
            self.config.grid_width as i32 / 2,
            self.config.grid_height as i32 / 2,
        );
        grid.set_at(head, Cell::SnakeHead);

        let food = self
            .spawner
            .place_food(&mut grid)
            .expect("a fresh board always has free interior cells");

        GameState::new(
            grid,
            Snake::new(head),
            food,
            self.config.tick_ms,
            self.config.wrap_unlock_score,
        )
    }

    /// Run one simulation tick: steer, move the snake, then let the enemy
    /// take its scheduled pursuit step.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.alive {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        if let Action::Steer(requested) = action {
            match state.direction {
                Some(current) if current.is_reversal_of(requested) => {}
                _ => state.direction = Some(requested),
            }
        }

        state.ticks += 1;
        let mut info = StepInfo::default();

        // The snake stays put until the first steering input; the tick is
        // otherwise normal.
        if let Some(direction) = state.direction {
            self.move_snake(state, direction, &mut info);
        }

        if state.alive
            && state.enemy.is_some()
            && state.ticks % self.config.enemy_move_interval == 0
        {
            let advance = pursuit::advance_enemy(state, &mut self.spawner);
            info.enemy_ate_food = advance.ate_food;
            if advance.caught_snake {
                info.collision = Some(CollisionKind::CaughtByEnemy);
            }
        }

        StepResult {
            terminated: !state.alive,
            info,
        }
    }

    fn move_snake(&mut self, state: &mut GameState, direction: Direction, info: &mut StepInfo) {
        let previous_head = state.snake.head();
        let mut candidate = previous_head.step(direction);
        if state.wrap_unlocked() {
            candidate = state.grid.wrap_through_ring(candidate);
        }

        // Collision check against the grid as currently drawn. The tail has
        // not been cleared yet, so moving into the cell the tail is about to
        // vacate is fatal.
        let fatal = match state.grid.cell_at(candidate) {
            Cell::Wall => Some(CollisionKind::Wall),
            Cell::SnakeBody => Some(CollisionKind::OwnBody),
            Cell::Enemy => Some(CollisionKind::Enemy),
            _ => None,
        };
        if let Some(kind) = fatal {
            state.alive = false;
            info.collision = Some(kind);
            return;
        }

        state.snake.grow(candidate);
        state.grid.set_at(candidate, Cell::SnakeHead);
        state.grid.set_at(previous_head, Cell::SnakeBody);

        if candidate == state.food {
            state.score += 1;
            info.ate_food = true;

            match self.spawner.place_food(&mut state.grid) {
                Some(pos) => state.food = pos,
                None => {
                    // Nowhere left to put food: the snake owns the board.
                    state.won = true;
                    state.alive = false;
                    return;
                }
            }

            if state.score % self.config.enemy_spawn_score == 0 {
                if let Some(pos) = self.spawner.place_enemy(
                    &mut state.grid,
                    candidate,
                    self.config.enemy_exclusion_radius,
                ) {
                    // The replaced enemy's old mark stays on the board.
                    state.enemy = Some(pos);
                }
            }

            state.tick_ms = state.tick_ms.saturating_sub(1);
        } else if let Some(tail) = state.snake.shrink() {
            state.grid.set_at(tail, Cell::Empty);
        }
    }
}
