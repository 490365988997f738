use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::{DEFAULT_SCORE_FILE, GameMetrics, HighScoreStore};
use crate::render::Renderer;

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive play: one tokio task owning the whole game state, driven by
/// a tick timer, a render timer, and the keyboard event stream.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    scores: HighScoreStore,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_score_file(config, DEFAULT_SCORE_FILE)
    }

    pub fn with_score_file(config: GameConfig, score_file: &str) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let scores = HighScoreStore::new(score_file);
        // A missing or unreadable score file just means no prior best.
        let best = scores.load().unwrap_or(None).unwrap_or(0);

        Self {
            engine,
            state,
            metrics: GameMetrics::with_best_score(best),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            scores,
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop errored.
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    fn tick_timer(&self) -> Interval {
        // The engine floors the interval at 0 ms; the timer itself needs a
        // nonzero period.
        interval(Duration::from_millis(self.state.tick_ms.max(1)))
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_ms = self.state.tick_ms;
        let mut tick_timer = self.tick_timer();
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.advance_tick()?;
                    // Eating shrinks the tick interval; restarts reset it.
                    if self.state.tick_ms != tick_ms {
                        tick_ms = self.state.tick_ms;
                        tick_timer = self.tick_timer();
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.map_key(key) {
                KeyAction::Steer(direction) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::Ignored => {}
            }
        }
    }

    /// One simulation tick; on the tick that ends the game, persist the
    /// score and remember whether it set a record.
    fn advance_tick(&mut self) -> Result<()> {
        if !self.state.alive {
            return Ok(());
        }

        let action = self
            .pending_direction
            .take()
            .map(Action::Steer)
            .unwrap_or(Action::Coast);

        let result = self.engine.step(&mut self.state, action);

        if result.terminated {
            let new_record = self
                .scores
                .record(self.state.score)
                .context("Failed to persist the high score")?;
            self.metrics.on_game_over(self.state.score, new_record);
        }

        Ok(())
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.pending_direction = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
