//! Home screen
//!
//! Start destination: a welcome panel with the key bindings.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::keys::key_bindings_help;
use crate::APP_TITLE;

/// Stateless start destination
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the welcome panel and key hints
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Welcome to {}", APP_TITLE),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Your shelves, one drawer away."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let hints: Vec<Line> = key_bindings_help()
            .into_iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>10}", key),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}", what)),
                ])
            })
            .collect();
        let help = Paragraph::new(hints).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys"),
        );
        f.render_widget(help, chunks[1]);
    }
}
