//! Settings screen
//!
//! Edits the UI configuration field-by-field and writes it back to
//! disk. Changes to tick rate and drawer width take effect on the
//! next start.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::keys::Action;
use crate::config::UiConfig;

/// Tick rate choices cycled with left/right
const TICK_RATES: [u64; 4] = [25, 50, 100, 250];
const DRAWER_WIDTH_STEP: u16 = 4;
const DRAWER_WIDTH_MIN: u16 = 16;
const DRAWER_WIDTH_MAX: u16 = 60;

/// Represents a single editable field in the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsField {
    TickRate,
    DrawerWidth,
    AnimateDrawer,
}

impl SettingsField {
    fn all() -> [Self; 3] {
        [Self::TickRate, Self::DrawerWidth, Self::AnimateDrawer]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::TickRate => "Tick rate",
            Self::DrawerWidth => "Drawer width",
            Self::AnimateDrawer => "Animate drawer",
        }
    }
}

/// Settings screen component
#[derive(Debug)]
pub struct SettingsScreen {
    config: UiConfig,
    selected_field_index: usize,
    status: Option<String>,
}

impl SettingsScreen {
    /// Create a settings screen editing a copy of the given config
    pub fn new(config: &UiConfig) -> Self {
        Self {
            config: config.clone(),
            selected_field_index: 0,
            status: None,
        }
    }

    /// The edited configuration
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Handle a shell action: move between fields, adjust the selected
    /// field, or save to disk
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Up => {
                if self.selected_field_index > 0 {
                    self.selected_field_index -= 1;
                }
            }
            Action::Down => {
                if self.selected_field_index < SettingsField::all().len() - 1 {
                    self.selected_field_index += 1;
                }
            }
            Action::Left => self.adjust(false),
            Action::Right => self.adjust(true),
            Action::Select => self.save(),
            _ => {}
        }
    }

    fn adjust(&mut self, forward: bool) {
        self.status = None;
        match SettingsField::all()[self.selected_field_index] {
            SettingsField::TickRate => {
                let pos = TICK_RATES
                    .iter()
                    .position(|&rate| rate == self.config.tick_rate_ms)
                    .unwrap_or(1);
                let next = if forward {
                    (pos + 1) % TICK_RATES.len()
                } else {
                    (pos + TICK_RATES.len() - 1) % TICK_RATES.len()
                };
                self.config.tick_rate_ms = TICK_RATES[next];
            }
            SettingsField::DrawerWidth => {
                self.config.drawer_width = if forward {
                    (self.config.drawer_width + DRAWER_WIDTH_STEP).min(DRAWER_WIDTH_MAX)
                } else {
                    self.config
                        .drawer_width
                        .saturating_sub(DRAWER_WIDTH_STEP)
                        .max(DRAWER_WIDTH_MIN)
                };
            }
            SettingsField::AnimateDrawer => {
                self.config.animate_drawer = !self.config.animate_drawer;
            }
        }
    }

    fn save(&mut self) {
        self.status = Some(match self.config.save() {
            Ok(()) => "Saved. Takes effect on next start.".to_string(),
            Err(e) => format!("Save failed: {}", e),
        });
    }

    fn field_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::TickRate => format!("{} ms", self.config.tick_rate_ms),
            SettingsField::DrawerWidth => format!("{} cols", self.config.drawer_width),
            SettingsField::AnimateDrawer => {
                if self.config.animate_drawer {
                    "on".to_string()
                } else {
                    "off".to_string()
                }
            }
        }
    }

    /// Render the editable field list and status line
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(2)])
            .split(area);

        let lines: Vec<Line> = SettingsField::all()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let style = if i == self.selected_field_index {
                    Style::default()
                        .bg(Color::Cyan)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!("{:<16} ◂ {:>8} ▸", field.title(), self.field_value(*field)),
                    style,
                ))
            })
            .collect();

        let fields = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Settings  (←/→ adjust, Enter save)"),
        );
        f.render_widget(fields, chunks[0]);

        let status = Paragraph::new(self.status.clone().unwrap_or_default())
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(status, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_selection_stops_at_edges() {
        let mut screen = SettingsScreen::new(&UiConfig::default());
        screen.handle_action(Action::Up);
        assert_eq!(screen.selected_field_index, 0);

        screen.handle_action(Action::Down);
        screen.handle_action(Action::Down);
        screen.handle_action(Action::Down);
        assert_eq!(screen.selected_field_index, 2);
    }

    #[test]
    fn test_tick_rate_cycles() {
        let mut screen = SettingsScreen::new(&UiConfig::default());
        assert_eq!(screen.config().tick_rate_ms, 50);

        screen.handle_action(Action::Right);
        assert_eq!(screen.config().tick_rate_ms, 100);

        screen.handle_action(Action::Left);
        screen.handle_action(Action::Left);
        assert_eq!(screen.config().tick_rate_ms, 25);
    }

    #[test]
    fn test_drawer_width_respects_bounds() {
        let mut screen = SettingsScreen::new(&UiConfig::default());
        screen.handle_action(Action::Down);

        for _ in 0..20 {
            screen.handle_action(Action::Right);
        }
        assert_eq!(screen.config().drawer_width, DRAWER_WIDTH_MAX);

        for _ in 0..20 {
            screen.handle_action(Action::Left);
        }
        assert_eq!(screen.config().drawer_width, DRAWER_WIDTH_MIN);
        assert!(screen.config().validate().is_ok());
    }

    #[test]
    fn test_animate_toggles() {
        let mut screen = SettingsScreen::new(&UiConfig::default());
        screen.handle_action(Action::Down);
        screen.handle_action(Action::Down);

        let before = screen.config().animate_drawer;
        screen.handle_action(Action::Right);
        assert_eq!(screen.config().animate_drawer, !before);
        screen.handle_action(Action::Left);
        assert_eq!(screen.config().animate_drawer, before);
    }
}
