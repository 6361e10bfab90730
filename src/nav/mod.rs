//! Navigation controller
//!
//! Owns the current route, the back-stack, and per-route saved UI
//! state. All mutation happens through `navigate`/`go_back` on the
//! main event loop; rendering reads the current route back out.

use std::collections::HashMap;

use crate::routes::{self, Route, RouteId};
use crate::Result;

/// Per-route UI state retained across navigation.
///
/// Granularity is deliberately small: the scroll offset and list
/// cursor of a content screen. Screens that keep no state use the
/// default value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub scroll: u16,
    pub selected: Option<usize>,
}

/// Options controlling how a `navigate` call manipulates the stack.
///
/// Mirrors the drawer policy of popping to the start destination,
/// avoiding duplicate pushes, and saving/restoring screen state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Truncate the stack back to the start destination before pushing
    pub pop_to_start: bool,
    /// Re-selecting the current route is a no-op
    pub launch_single_top: bool,
    /// Popped routes keep their UI state for later restoration
    pub restore_state: bool,
}

impl NavOptions {
    /// The drawer's navigation policy: all three flags set
    pub fn drawer() -> Self {
        Self {
            pop_to_start: true,
            launch_single_top: true,
            restore_state: true,
        }
    }

    /// A plain forward push with none of the flags
    pub fn push() -> Self {
        Self::default()
    }
}

/// A back-stack entry: the route and the UI state it had when left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BackStackEntry {
    route: RouteId,
    snapshot: ScreenSnapshot,
}

/// Back-stack navigation controller
#[derive(Debug)]
pub struct Navigator {
    current: RouteId,
    back_stack: Vec<BackStackEntry>,
    saved: HashMap<RouteId, ScreenSnapshot>,
}

impl Navigator {
    /// Create a navigator positioned at the start destination
    pub fn new() -> Self {
        Self {
            current: routes::START,
            back_stack: Vec::new(),
            saved: HashMap::new(),
        }
    }

    /// The route currently on screen
    pub fn current_route(&self) -> &'static Route {
        routes::get(self.current)
    }

    /// Typed id of the current route
    pub fn current_id(&self) -> RouteId {
        self.current
    }

    /// Back-stack contents, bottom first (history below the current route)
    pub fn back_stack(&self) -> Vec<RouteId> {
        self.back_stack.iter().map(|entry| entry.route).collect()
    }

    /// String-keyed navigation entry point.
    ///
    /// Fails with `UnknownRoute` for ids not in the registry, leaving
    /// all navigation state untouched. Returns whether the current
    /// route changed.
    pub fn navigate_to(
        &mut self,
        target: &str,
        opts: NavOptions,
        outgoing: ScreenSnapshot,
    ) -> Result<bool> {
        let route = routes::by_id(target)?;
        Ok(self.navigate(route.id, opts, outgoing))
    }

    /// Typed navigation, total over `RouteId`.
    ///
    /// `outgoing` is the current screen's state, captured by the caller;
    /// it travels with the route onto the stack or into the saved map.
    pub fn navigate(&mut self, target: RouteId, opts: NavOptions, outgoing: ScreenSnapshot) -> bool {
        if opts.launch_single_top && target == self.current {
            return false;
        }

        if opts.pop_to_start {
            self.pop_to_start(target, opts.restore_state, outgoing);
        } else {
            // Guarded push: the stack never holds consecutive duplicates
            let top = self.back_stack.last().map(|entry| entry.route);
            if top != Some(self.current) {
                self.back_stack.push(BackStackEntry {
                    route: self.current,
                    snapshot: outgoing,
                });
            }
        }

        let changed = self.current != target;
        self.current = target;
        changed
    }

    /// Pop the stack one entry if non-empty and make it current.
    ///
    /// The popped entry's snapshot becomes restorable via `take_saved`.
    /// Returns false at the root (no-op).
    pub fn go_back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(entry) => {
                self.saved.insert(entry.route, entry.snapshot);
                self.current = entry.route;
                true
            }
            None => false,
        }
    }

    /// Remove and return the saved UI state for a route, if any.
    ///
    /// The shell calls this when a route comes on screen and applies
    /// the snapshot instead of re-initializing the screen.
    pub fn take_saved(&mut self, route: RouteId) -> Option<ScreenSnapshot> {
        self.saved.remove(&route)
    }

    /// Truncate the conceptual stack (back-stack plus current) to the
    /// start destination, then leave `current` ready for the push.
    fn pop_to_start(&mut self, target: RouteId, restore: bool, outgoing: ScreenSnapshot) {
        if self.current != routes::START {
            // The outgoing current sits above start and gets popped too
            if restore {
                self.saved.insert(self.current, outgoing);
            }
        } else if target != routes::START && self.back_stack.is_empty() {
            // Leaving the start destination itself: it becomes the lone
            // back entry, carrying its outgoing state
            self.back_stack.push(BackStackEntry {
                route: self.current,
                snapshot: outgoing,
            });
        }

        // Truncate unconditionally: history built by plain pushes can
        // hold entries above the bottom start entry even while the
        // start destination is current
        while self
            .back_stack
            .last()
            .map_or(false, |entry| entry.route != routes::START)
        {
            let entry = self.back_stack.pop().expect("checked non-empty");
            if restore {
                self.saved.insert(entry.route, entry.snapshot);
            }
        }

        if target == routes::START {
            // Re-selecting start collapses the stack entirely
            if let Some(entry) = self.back_stack.pop() {
                if restore {
                    self.saved.insert(entry.route, entry.snapshot);
                }
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
