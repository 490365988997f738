use serde::{Deserialize, Serialize};

/// Tunables for one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid width in cells, wall ring included.
    pub grid_width: usize,
    /// Grid height in cells, wall ring included.
    pub grid_height: usize,
    /// Starting tick interval in milliseconds; shrinks as the score rises.
    pub tick_ms: u64,
    /// Score at which the snake may pass through the outer ring.
    pub wrap_unlock_score: u32,
    /// The enemy is (re)placed every this many points.
    pub enemy_spawn_score: u32,
    /// The enemy takes one pursuit step every this many ticks.
    pub enemy_move_interval: u32,
    /// Minimum per-axis distance between a fresh enemy and the snake head.
    pub enemy_exclusion_radius: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 120,
            grid_height: 28,
            tick_ms: 60,
            wrap_unlock_score: 5,
            enemy_spawn_score: 5,
            enemy_move_interval: 2,
            enemy_exclusion_radius: 10,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom board size.
    pub fn with_grid(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// A compact board, handy in tests.
    pub fn small() -> Self {
        Self::with_grid(12, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 120);
        assert_eq!(config.grid_height, 28);
        assert_eq!(config.tick_ms, 60);
        assert_eq!(config.wrap_unlock_score, 5);
    }

    #[test]
    fn custom_grid_keeps_other_defaults() {
        let config = GameConfig::with_grid(40, 20);
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.enemy_spawn_score, 5);
    }
}
