//! Navigation state for browsing the catalog.
//!
//! The root screen (the mission list) is implicit: an empty stack means the
//! root is showing. Routes are plain value keys and carry no behavior beyond
//! equality.

use super::layout::DisplayMode;
use crate::model::{Mission, MissionId};
use crate::roster::CrewMember;

/// A screen that can be pushed on top of the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// A mission detail screen.
    Mission(MissionId),
    /// An astronaut detail screen, entered from a mission's crew.
    CrewMember {
        /// Role the astronaut held on the mission.
        role: String,
        /// Id of the astronaut.
        astronaut_id: String,
    },
}

impl Route {
    /// Route to a mission's detail screen.
    #[must_use]
    pub fn mission(mission: &Mission) -> Self {
        Self::Mission(mission.id.clone())
    }

    /// Route to a crew member's astronaut screen.
    #[must_use]
    pub fn crew_member(member: &CrewMember<'_>) -> Self {
        Self::CrewMember {
            role: member.role.to_string(),
            astronaut_id: member.astronaut.id.clone(),
        }
    }
}

/// Screens pushed above the root, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl NavigationStack {
    /// An empty stack showing the root screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new screen.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Leave the current screen, returning it. `None` when already at the root.
    pub fn pop(&mut self) -> Option<Route> {
        self.routes.pop()
    }

    /// The screen currently showing, `None` for the root.
    #[must_use]
    pub fn top(&self) -> Option<&Route> {
        self.routes.last()
    }

    /// Number of screens above the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    /// Check if the root screen is showing.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.routes.is_empty()
    }

    /// Return to the root screen.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// Routes from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

/// All mutable browsing state: the layout toggle and the navigation stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Root-screen layout.
    pub mode: DisplayMode,
    /// Screens above the root.
    pub path: NavigationStack,
}

impl ViewState {
    /// Fresh state at the root in the given mode.
    #[must_use]
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            path: NavigationStack::new(),
        }
    }
}
