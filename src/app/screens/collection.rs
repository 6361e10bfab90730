//! Collection screen
//!
//! Shared scrollable list screen backing the Music, Movies, and Books
//! destinations. Its cursor and scroll offset are the UI state that
//! the navigator saves and restores across drawer navigation.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::nav::ScreenSnapshot;

/// Scrollable list of shelf entries
#[derive(Debug)]
pub struct CollectionScreen {
    title: &'static str,
    items: &'static [&'static str],
    selected: usize,
    list_state: ListState,
}

impl CollectionScreen {
    fn new(title: &'static str, items: &'static [&'static str]) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            title,
            items,
            selected: 0,
            list_state,
        }
    }

    /// The music shelf
    pub fn music() -> Self {
        Self::new(
            "Music",
            &[
                "Kind of Blue — Miles Davis",
                "Abbey Road — The Beatles",
                "Blue Train — John Coltrane",
                "Rumours — Fleetwood Mac",
                "Hounds of Love — Kate Bush",
                "In Rainbows — Radiohead",
                "Illmatic — Nas",
                "Blue — Joni Mitchell",
                "Discovery — Daft Punk",
                "Grace — Jeff Buckley",
            ],
        )
    }

    /// The movies shelf
    pub fn movies() -> Self {
        Self::new(
            "Movies",
            &[
                "Seven Samurai (1954)",
                "2001: A Space Odyssey (1968)",
                "The Godfather (1972)",
                "Alien (1979)",
                "Blade Runner (1982)",
                "Spirited Away (2001)",
                "There Will Be Blood (2007)",
                "Mad Max: Fury Road (2015)",
                "Parasite (2019)",
                "Dune (2021)",
            ],
        )
    }

    /// The books shelf
    pub fn books() -> Self {
        Self::new(
            "Books",
            &[
                "The Left Hand of Darkness — Le Guin",
                "Invisible Cities — Calvino",
                "Kafka on the Shore — Murakami",
                "The Name of the Rose — Eco",
                "Beloved — Morrison",
                "The Dispossessed — Le Guin",
                "Borges: Collected Fictions",
                "Snow Country — Kawabata",
                "The Remains of the Day — Ishiguro",
                "Piranesi — Clarke",
            ],
        )
    }

    /// Move the list cursor up, wrapping
    pub fn select_previous(&mut self) {
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
        self.list_state.select(Some(self.selected));
    }

    /// Move the list cursor down, wrapping
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
        self.list_state.select(Some(self.selected));
    }

    /// Capture the screen's restorable state
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            scroll: self.list_state.offset() as u16,
            selected: Some(self.selected),
        }
    }

    /// Apply a previously captured state, clamping to valid positions.
    /// A default snapshot re-initializes the screen.
    pub fn restore(&mut self, snapshot: ScreenSnapshot) {
        let max = self.items.len().saturating_sub(1);
        self.selected = snapshot.selected.unwrap_or(0).min(max);
        self.list_state.select(Some(self.selected));
        *self.list_state.offset_mut() = (snapshot.scroll as usize).min(max);
    }

    /// Render the shelf list with a count line underneath
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(area);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(*item))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let count = Paragraph::new(format!("{} of {}", self.selected + 1, self.items.len()))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(count, chunks[1]);
    }
}
