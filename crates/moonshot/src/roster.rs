//! Mission crew resolution.
//!
//! Joins a mission's crew list against the astronaut table. Every crew entry
//! must resolve; a dangling reference is a data-integrity failure and is
//! never skipped or replaced with a placeholder.

use std::hash::{Hash, Hasher};

use serde::Serialize;
use tracing::trace;

use crate::catalog::AstronautTable;
use crate::error::{Error, Result};
use crate::model::{Astronaut, Mission};

/// A crew role paired with the astronaut that fills it.
///
/// Equality and hashing consider only the role, which is unique within a
/// mission's roster.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrewMember<'a> {
    /// Role label, copied from the mission's crew entry.
    pub role: &'a str,
    /// The resolved astronaut.
    pub astronaut: &'a Astronaut,
}

impl PartialEq for CrewMember<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role
    }
}

impl Eq for CrewMember<'_> {}

impl Hash for CrewMember<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.role.hash(state);
    }
}

/// Resolve a mission's crew in order.
///
/// # Errors
///
/// Returns [`Error::MissingAstronaut`] naming the first crew entry whose join
/// key is not in `astronauts`.
pub fn resolve_crew<'a>(
    mission: &'a Mission,
    astronauts: &'a AstronautTable,
) -> Result<Vec<CrewMember<'a>>> {
    trace!(
        "Resolving {} crew entries for {}",
        mission.crew.len(),
        mission.display_name()
    );
    mission
        .crew
        .iter()
        .map(|entry| {
            astronauts
                .get(&entry.name)
                .map(|astronaut| CrewMember {
                    role: &entry.role,
                    astronaut,
                })
                .ok_or_else(|| Error::missing_astronaut(mission.display_name(), &entry.name))
        })
        .collect()
}
