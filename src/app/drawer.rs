//! Navigation drawer overlay
//!
//! Renders the route registry as a selectable list, highlights the
//! entry matching the current route, and slides open/closed on ticks.
//! Route changes themselves are owned by the shell, never by the drawer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::routes::{self, Route, RouteId};
use crate::APP_TITLE;

/// One renderable drawer row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerRow {
    pub route: &'static Route,
    pub is_selected: bool,
}

/// Row descriptors for the full registry, in drawer order.
///
/// Pure function of the registry and the current route; calling it
/// twice with the same input yields the same rows.
pub fn rows(current: RouteId) -> Vec<DrawerRow> {
    routes::all()
        .iter()
        .map(|route| DrawerRow {
            route,
            is_selected: route.id == current,
        })
        .collect()
}

/// Slide-out drawer component
#[derive(Debug)]
pub struct Drawer {
    open: bool,
    /// Currently visible columns; animated toward 0 or `width`
    slide: u16,
    width: u16,
    animate: bool,
    cursor: usize,
    list_state: ListState,
}

impl Drawer {
    /// Create a closed drawer
    pub fn new(width: u16, animate: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            open: false,
            slide: 0,
            width,
            animate,
            cursor: 0,
            list_state,
        }
    }

    /// Whether the drawer is logically open (input goes to it)
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether any part of the drawer is on screen (may still be
    /// sliding closed)
    pub fn is_visible(&self) -> bool {
        self.slide > 0
    }

    /// Start opening; the slide catches up on subsequent ticks
    pub fn open(&mut self) {
        self.open = true;
        if !self.animate {
            self.slide = self.width;
        }
    }

    /// Start closing; fire-and-forget, never gates navigation
    pub fn close(&mut self) {
        self.open = false;
        if !self.animate {
            self.slide = 0;
        }
    }

    /// Advance the slide animation one step
    pub fn tick(&mut self) {
        let step = (self.width / 4).max(1);
        if self.open && self.slide < self.width {
            self.slide = (self.slide + step).min(self.width);
        } else if !self.open && self.slide > 0 {
            self.slide = self.slide.saturating_sub(step);
        }
    }

    /// Move the keyboard cursor up, wrapping
    pub fn select_previous(&mut self) {
        let len = routes::all().len();
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
        self.list_state.select(Some(self.cursor));
    }

    /// Move the keyboard cursor down, wrapping
    pub fn select_next(&mut self) {
        let len = routes::all().len();
        self.cursor = (self.cursor + 1) % len;
        self.list_state.select(Some(self.cursor));
    }

    /// Route under the keyboard cursor
    pub fn cursor_route(&self) -> &'static Route {
        &routes::all()[self.cursor]
    }

    /// Place the cursor on the given route (done when opening, so the
    /// cursor starts on the current destination)
    pub fn set_cursor_to(&mut self, current: RouteId) {
        if let Some(index) = routes::all().iter().position(|r| r.id == current) {
            self.cursor = index;
            self.list_state.select(Some(index));
        }
    }

    /// Render the drawer overlay on the left edge
    pub fn render(&mut self, f: &mut Frame, area: Rect, current: RouteId) {
        if self.slide == 0 {
            return;
        }
        let overlay = Rect {
            x: area.x,
            y: area.y,
            width: self.slide.min(area.width),
            height: area.height,
        };
        f.render_widget(Clear, overlay);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(6),    // Route list
                Constraint::Length(2), // Footer
            ])
            .split(overlay);

        self.render_header(f, chunks[0]);
        self.render_routes(f, chunks[1], current);
        self.render_footer(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "media shelf",
                Style::default().fg(Color::Black),
            )),
        ])
        .style(Style::default().bg(Color::Cyan))
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, area);
    }

    fn render_routes(&mut self, f: &mut Frame, area: Rect, current: RouteId) {
        let items: Vec<ListItem> = rows(current)
            .into_iter()
            .map(|row| {
                let style = if row.is_selected {
                    Style::default().bg(Color::Black).fg(Color::White)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", row.route.icon)),
                    Span::raw(row.route.label),
                ]))
                .style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::RIGHT))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(concat!("medley v", env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP | Borders::RIGHT));
        f.render_widget(footer, area);
    }
}
