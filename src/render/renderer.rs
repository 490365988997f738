use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, GameState};
use crate::metrics::GameMetrics;

/// Turns the grid buffer and session stats into ratatui widgets.
///
/// The renderer only consumes data: cell states become styled glyphs, and
/// ratatui owns cursor movement and frame composition.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // status line
                Constraint::Min(0),    // board
                Constraint::Length(1), // controls
            ])
            .split(frame.area());

        frame.render_widget(self.status_line(state, metrics), chunks[0]);

        if state.alive {
            frame.render_widget(self.board(state), chunks[1]);
        } else {
            frame.render_widget(self.final_screen(chunks[1], state, metrics), chunks[1]);
        }

        frame.render_widget(self.controls(), chunks[2]);
    }

    fn cell_span(cell: Cell) -> Span<'static> {
        let glyph = cell.glyph().to_string();
        match cell {
            Cell::SnakeHead => Span::styled(
                glyph,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::SnakeBody => Span::styled(glyph, Style::default().fg(Color::Green)),
            Cell::Food => Span::styled(
                glyph,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Enemy => Span::styled(
                glyph,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Wall => Span::styled(glyph, Style::default().fg(Color::DarkGray)),
            Cell::Empty => Span::raw(glyph),
        }
    }

    fn board(&self, state: &GameState) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(state.grid.height());
        for y in 0..state.grid.height() as i32 {
            let spans: Vec<Span> = (0..state.grid.width() as i32)
                .map(|x| Self::cell_span(state.grid.get(x, y)))
                .collect();
            lines.push(Line::from(spans));
        }
        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn status_line(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let wrap_status = if state.wrap_unlocked() {
            Span::styled(
                "wrap open".to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("wrap in {}", state.points_until_wrap()),
                Style::default().fg(Color::DarkGray),
            )
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.best_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            wrap_status,
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn final_screen(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &GameMetrics,
    ) -> Paragraph<'static> {
        let (title, title_color) = if state.won {
            ("YOU WIN", Color::Green)
        } else {
            ("GAME OVER", Color::Red)
        };

        let record_line = if metrics.new_record {
            Line::from(Span::styled(
                "New high score!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled("High score: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    metrics.best_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ])
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            record_line,
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(title_color)),
        )
    }

    fn controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
