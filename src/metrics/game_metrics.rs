use std::time::{Duration, Instant};

/// Per-session play statistics shown in the HUD and on the game-over screen.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Best score seen, seeded from the persisted high score at startup.
    pub best_score: u32,
    pub games_played: u32,
    /// The most recently finished game set a new persisted record.
    pub new_record: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            new_record: false,
        }
    }

    /// Seed the session best from a previously persisted score.
    pub fn with_best_score(best_score: u32) -> Self {
        Self {
            best_score,
            ..Self::new()
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.new_record = false;
    }

    pub fn on_game_over(&mut self, final_score: u32, new_record: bool) {
        self.games_played += 1;
        self.new_record = new_record;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn best_score_never_decreases() {
        let mut metrics = GameMetrics::with_best_score(12);

        metrics.on_game_over(10, false);
        assert_eq!(metrics.best_score, 12);
        assert_eq!(metrics.games_played, 1);
        assert!(!metrics.new_record);

        metrics.on_game_over(15, true);
        assert_eq!(metrics.best_score, 15);
        assert!(metrics.new_record);
    }

    #[test]
    fn restart_clears_the_record_flag() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(3, true);
        assert!(metrics.new_record);

        metrics.on_game_start();
        assert!(!metrics.new_record);
        assert_eq!(metrics.games_played, 1);
    }
}
