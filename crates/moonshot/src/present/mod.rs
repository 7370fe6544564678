//! Terminal screens for browsing the catalog.
//!
//! - **Layouts**: the mission list rendered as a grid of cards or a list of
//!   rows, switchable with [`DisplayMode::toggle`].
//! - **Detail screens**: a mission with its resolved crew, and a single
//!   astronaut's biography.
//! - **Navigation**: a [`ViewState`] holding the layout toggle and the
//!   [`NavigationStack`] of [`Route`]s above the mission list.
//! - **Session**: an interactive line-oriented browser driving all of the above.
//!
//! Nothing here decides what data is valid; screens only render what the
//! catalog and the crew resolver hand them.
//!
//! # Example
//!
//! ```
//! use moonshot::present::{render_mission_detail, DisplayMode, GridLayout, MissionLayout};
//! use moonshot::Catalog;
//!
//! let catalog = Catalog::embedded().unwrap();
//! let grid = GridLayout { width: 80, cell_width: 24 };
//! assert_eq!(grid.mode(), DisplayMode::Grid);
//! print!("{}", grid.render(catalog.missions()));
//!
//! let apollo_8 = &catalog.missions()[2];
//! let crew = catalog.roster(apollo_8).unwrap();
//! print!("{}", render_mission_detail(apollo_8, &crew, 80));
//! ```

mod detail;
mod layout;
mod navigation;
mod session;
pub(crate) mod text;

pub use detail::{
    render_astronaut_detail, render_astronaut_index, render_mission_detail, MissionDetail,
    MissionSummary,
};
pub use layout::{layout_for, DisplayMode, GridLayout, ListLayout, MissionLayout};
pub use navigation::{NavigationStack, Route, ViewState};
pub use session::{ParseCommandError, Session, SessionCommand, Step};
