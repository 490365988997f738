use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::{Cell, Grid};
use super::state::Position;

/// Random attempts per placement before falling back to a linear scan of the
/// interior. Keeps a nearly-full board from livelocking the sampler.
const MAX_RANDOM_ATTEMPTS: usize = 4096;

/// Randomized placement of food and enemies.
///
/// Seeded explicitly in tests; from entropy in normal play.
pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample_interior(&mut self, grid: &Grid) -> Position {
        let x = self.rng.gen_range(1..grid.width() as i32 - 1);
        let y = self.rng.gen_range(1..grid.height() as i32 - 1);
        Position::new(x, y)
    }

    /// First empty interior cell found by rejection sampling, falling back to
    /// a deterministic scan. `None` means the board is full.
    fn free_interior_cell(&mut self, grid: &Grid) -> Option<Position> {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let pos = self.sample_interior(grid);
            if grid.cell_at(pos) == Cell::Empty {
                return Some(pos);
            }
        }
        for y in 1..grid.height() as i32 - 1 {
            for x in 1..grid.width() as i32 - 1 {
                let pos = Position::new(x, y);
                if grid.cell_at(pos) == Cell::Empty {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Drop food onto a random empty interior cell and mark it.
    ///
    /// Returns `None` when no interior cell is free, which the engine treats
    /// as a won game rather than an error.
    pub fn place_food(&mut self, grid: &mut Grid) -> Option<Position> {
        let pos = self.free_interior_cell(grid)?;
        grid.set_at(pos, Cell::Food);
        Some(pos)
    }

    /// Drop the enemy onto a random empty interior cell at least
    /// `exclusion_radius` cells from the snake head on each axis.
    ///
    /// The radius is enforced per axis with a single modular correction: a
    /// coordinate too close to the head is shifted by half the interior
    /// extent and re-normalized. The correction is best-effort (the shifted
    /// coordinate is not re-checked against the radius), but a corrected
    /// cell that is no longer empty rejects the whole sample, so the enemy
    /// never lands on food or the snake. The previous enemy's board mark is
    /// intentionally left in place; the live enemy overwrites marks as it
    /// moves.
    pub fn place_enemy(
        &mut self,
        grid: &mut Grid,
        snake_head: Position,
        exclusion_radius: i32,
    ) -> Option<Position> {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let sampled = self.sample_interior(grid);
            if grid.cell_at(sampled) != Cell::Empty {
                continue;
            }
            let pos = Position::new(
                push_outside_radius(sampled.x, snake_head.x, exclusion_radius, grid.width()),
                push_outside_radius(sampled.y, snake_head.y, exclusion_radius, grid.height()),
            );
            if grid.cell_at(pos) != Cell::Empty {
                continue;
            }
            grid.set_at(pos, Cell::Enemy);
            return Some(pos);
        }
        // Board too crowded for the sampler; take any free cell and accept
        // that the radius cannot be honored.
        let pos = self.free_interior_cell(grid)?;
        grid.set_at(pos, Cell::Enemy);
        Some(pos)
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shift `coord` by half the interior extent when it falls within `radius`
/// of `anchor`, wrapping back into the interior `1..=dim-2`.
fn push_outside_radius(coord: i32, anchor: i32, radius: i32, dim: usize) -> i32 {
    if (coord - anchor).abs() >= radius {
        return coord;
    }
    let interior = dim as i32 - 2;
    (coord - 1 + interior / 2).rem_euclid(interior) + 1
}
