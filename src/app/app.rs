//! Main application controller
//!
//! Owns the navigator, the drawer, and the content screens, and wires
//! keyboard input to navigation. The terminal itself lives in `main`
//! so the controller stays testable without a tty.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::{
    app::{
        chrome,
        drawer::Drawer,
        keys::{self, Action},
        screens::{CollectionScreen, HomeScreen, ProfileScreen, SettingsScreen},
    },
    config::UiConfig,
    nav::{NavOptions, Navigator, ScreenSnapshot},
    routes::RouteId,
    Result,
};

/// Application shell controller
pub struct App {
    navigator: Navigator,
    drawer: Drawer,
    home_screen: HomeScreen,
    music_screen: CollectionScreen,
    movies_screen: CollectionScreen,
    books_screen: CollectionScreen,
    profile_screen: ProfileScreen,
    settings_screen: SettingsScreen,
    should_quit: bool,
}

impl App {
    /// Create the shell positioned at the start destination
    pub fn new(config: &UiConfig) -> Self {
        Self {
            navigator: Navigator::new(),
            drawer: Drawer::new(config.drawer_width, config.animate_drawer),
            home_screen: HomeScreen::new(),
            music_screen: CollectionScreen::music(),
            movies_screen: CollectionScreen::movies(),
            books_screen: CollectionScreen::books(),
            profile_screen: ProfileScreen::new(),
            settings_screen: SettingsScreen::new(config),
            should_quit: false,
        }
    }

    /// Whether the main loop should exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The route currently on screen
    pub fn current_route(&self) -> &'static crate::routes::Route {
        self.navigator.current_route()
    }

    /// Whether the drawer overlay currently takes input
    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    /// Advance time-driven state; only the drawer slide animates
    pub fn tick(&mut self) {
        self.drawer.tick();
    }

    /// Draw the full shell: chrome, current screen, drawer overlay
    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Top app bar
                Constraint::Min(6),    // Content
                Constraint::Length(2), // Bottom tab bar
            ])
            .split(area);

        chrome::render_top_bar(f, chunks[0], self.navigator.current_route(), self.drawer.is_open());

        match self.navigator.current_id() {
            RouteId::Home => self.home_screen.render(f, chunks[1]),
            RouteId::Music => self.music_screen.render(f, chunks[1]),
            RouteId::Movies => self.movies_screen.render(f, chunks[1]),
            RouteId::Books => self.books_screen.render(f, chunks[1]),
            RouteId::Profile => self.profile_screen.render(f, chunks[1]),
            RouteId::Settings => self.settings_screen.render(f, chunks[1]),
        }

        chrome::render_bottom_bar(f, chunks[2], self.navigator.current_id());

        // Overlay panel slides over the whole shell
        self.drawer.render(f, area, self.navigator.current_id());
    }

    /// Handle a key press and update state
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = keys::key_to_action(key);
        if action == Action::Quit {
            self.should_quit = true;
            return Ok(());
        }

        if self.drawer.is_open() {
            self.handle_drawer_action(action)
        } else {
            self.handle_screen_action(action);
            Ok(())
        }
    }

    /// Input while the drawer is open goes to the drawer
    fn handle_drawer_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Up => self.drawer.select_previous(),
            Action::Down => self.drawer.select_next(),
            Action::Select => {
                let target = self.drawer.cursor_route().id;
                self.navigate_from_drawer(target.as_str())?;
            }
            Action::Back | Action::ToggleDrawer => self.drawer.close(),
            _ => {}
        }
        Ok(())
    }

    fn handle_screen_action(&mut self, action: Action) {
        match action {
            Action::ToggleDrawer => {
                self.drawer.set_cursor_to(self.navigator.current_id());
                self.drawer.open();
            }
            Action::Back => {
                if self.navigator.go_back() {
                    self.apply_saved_state(self.navigator.current_id());
                } else {
                    // Back at the start destination exits the shell
                    self.should_quit = true;
                }
            }
            other => self.dispatch_to_screen(other),
        }
    }

    /// Drawer selection: navigate with the drawer policy, then close
    /// the overlay. Closing is this shell's side effect and happens
    /// even when the selected row is already the current route.
    fn navigate_from_drawer(&mut self, target: &str) -> Result<()> {
        let outgoing = self.snapshot_of(self.navigator.current_id());
        let changed = self
            .navigator
            .navigate_to(target, NavOptions::drawer(), outgoing)?;
        if changed {
            self.apply_saved_state(self.navigator.current_id());
        }
        self.drawer.close();
        Ok(())
    }

    /// Restore the incoming route's saved state, or re-initialize it
    fn apply_saved_state(&mut self, route: RouteId) {
        let snapshot = self.navigator.take_saved(route).unwrap_or_default();
        match route {
            RouteId::Music => self.music_screen.restore(snapshot),
            RouteId::Movies => self.movies_screen.restore(snapshot),
            RouteId::Books => self.books_screen.restore(snapshot),
            _ => {}
        }
    }

    fn snapshot_of(&self, route: RouteId) -> ScreenSnapshot {
        match route {
            RouteId::Music => self.music_screen.snapshot(),
            RouteId::Movies => self.movies_screen.snapshot(),
            RouteId::Books => self.books_screen.snapshot(),
            _ => ScreenSnapshot::default(),
        }
    }

    fn dispatch_to_screen(&mut self, action: Action) {
        match self.navigator.current_id() {
            RouteId::Music => Self::move_list(&mut self.music_screen, action),
            RouteId::Movies => Self::move_list(&mut self.movies_screen, action),
            RouteId::Books => Self::move_list(&mut self.books_screen, action),
            RouteId::Settings => self.settings_screen.handle_action(action),
            RouteId::Home | RouteId::Profile => {}
        }
    }

    fn move_list(screen: &mut CollectionScreen, action: Action) {
        match action {
            Action::Up => screen.select_previous(),
            Action::Down => screen.select_next(),
            _ => {}
        }
    }
}
