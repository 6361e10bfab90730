//! Shell chrome
//!
//! Top app bar and bottom tab bar. Both are pure renders of the
//! current route; the bottom bar keeps no selection state of its own.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::routes::{self, Route, RouteId};
use crate::APP_TITLE;

/// Routes pinned to the bottom tab bar
const BOTTOM_TABS: [RouteId; 2] = [RouteId::Home, RouteId::Profile];

/// Render the top app bar: menu hint, title, current route label
pub fn render_top_bar(f: &mut Frame, area: Rect, route: &Route, drawer_open: bool) {
    let menu_hint = if drawer_open { "✕ close" } else { "☰ menu (m)" };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(menu_hint, Style::default().fg(Color::Black)),
        Span::raw("  "),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(route.label, Style::default().fg(Color::Black)),
    ]))
    .style(Style::default().bg(Color::Cyan))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(bar, area);
}

/// Render the bottom tab bar; a tab highlights exactly when it matches
/// the current route
pub fn render_bottom_bar(f: &mut Frame, area: Rect, current: RouteId) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, BOTTOM_TABS.len() as u32);
            BOTTOM_TABS.len()
        ])
        .split(area);

    for (tab, chunk) in BOTTOM_TABS.iter().zip(chunks.iter()) {
        let route = routes::get(*tab);
        let style = if *tab == current {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::Cyan).fg(Color::DarkGray)
        };
        let tab_widget = Paragraph::new(format!("{} {}", route.icon, route.label))
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(tab_widget, *chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_top_bar_shows_current_route_label() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let route = routes::get(RouteId::Movies);
                render_top_bar(f, f.size(), route, false);
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Movies"));
        assert!(rendered.contains("menu"));
    }

    #[test]
    fn test_bottom_bar_renders_both_tabs() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_bottom_bar(f, f.size(), RouteId::Home))
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Home"));
        assert!(rendered.contains("Profile"));
    }
}
