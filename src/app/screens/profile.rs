//! Profile screen
//!
//! Static info card for the signed-in shelf owner.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Stateless profile card
#[derive(Debug, Default)]
pub struct ProfileScreen;

impl ProfileScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the profile card
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                "☺ Guest",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Shelves     3"),
            Line::from("Entries    30"),
            Line::from(""),
            Line::from(Span::styled(
                "Local profile; nothing leaves this terminal.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Profile"));
        f.render_widget(card, area);
    }
}
