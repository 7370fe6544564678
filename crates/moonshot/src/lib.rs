//! `moonshot` - Browse the Apollo astronaut and mission catalog
//!
//! This library decodes the bundled astronaut and mission datasets, resolves
//! each mission's crew against the astronauts, and renders the results as
//! terminal screens.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod bundle;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod present;
pub mod roster;

pub use bundle::Bundle;
pub use catalog::{AstronautTable, Catalog};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{Astronaut, CrewRole, Mission, MissionId};
pub use roster::{resolve_crew, CrewMember};
