pub mod game_metrics;
pub mod high_score;

pub use game_metrics::GameMetrics;
pub use high_score::{DEFAULT_SCORE_FILE, HighScoreStore};
