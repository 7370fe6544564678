//! Detail screens and their JSON views.

use serde::Serialize;

use super::text::{heading, wrap};
use crate::model::{Astronaut, Mission, MissionId};
use crate::roster::CrewMember;

/// Mission detail screen: image key, summary, launch date and crew.
#[must_use]
pub fn render_mission_detail(mission: &Mission, roster: &[CrewMember<'_>], width: usize) -> String {
    let mut out = heading(&mission.display_name(), '=');
    out.push_str(&format!("[{}]\n\n", mission.image()));

    out.push_str(&heading("Mission", '-'));
    for line in wrap(&mission.description, width) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("\nLaunch date: {}\n\n", mission.long_launch_date()));

    out.push_str(&heading("Crew", '-'));
    if roster.is_empty() {
        out.push_str("  No crew.\n");
    }
    for (i, member) in roster.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} - {} [{}]\n",
            i + 1,
            member.astronaut.name,
            member.role,
            member.astronaut.id
        ));
    }
    out
}

/// Astronaut detail screen: image key and biography.
#[must_use]
pub fn render_astronaut_detail(astronaut: &Astronaut, width: usize) -> String {
    let mut out = heading(&astronaut.name, '=');
    out.push_str(&format!("[{}]\n\n", astronaut.id));
    for line in wrap(&astronaut.description, width) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Astronaut index: one `id  name` row per astronaut.
#[must_use]
pub fn render_astronaut_index(astronauts: &[&Astronaut]) -> String {
    if astronauts.is_empty() {
        return "No astronauts.\n".to_string();
    }
    let id_width = astronauts
        .iter()
        .map(|a| a.id.chars().count())
        .max()
        .unwrap_or(0);
    astronauts
        .iter()
        .map(|a| format!("{:<id_width$}  {}\n", a.id, a.name))
        .collect()
}

/// A mission as it appears on the root screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionSummary {
    /// Mission identifier.
    pub id: MissionId,
    /// Human-readable name.
    pub display_name: String,
    /// Image asset key.
    pub image: String,
    /// Abbreviated launch date or the unknown-date sentinel.
    pub formatted_launch_date: String,
}

impl From<&Mission> for MissionSummary {
    fn from(mission: &Mission) -> Self {
        Self {
            id: mission.id.clone(),
            display_name: mission.display_name(),
            image: mission.image(),
            formatted_launch_date: mission.formatted_launch_date(),
        }
    }
}

/// A mission with its resolved crew, as shown on the mission screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionDetail<'a> {
    /// Root-screen fields.
    #[serde(flatten)]
    pub summary: MissionSummary,
    /// Mission summary text.
    pub description: &'a str,
    /// Resolved crew in display order.
    pub crew: &'a [CrewMember<'a>],
}

impl<'a> MissionDetail<'a> {
    /// Pair a mission with its resolved roster.
    #[must_use]
    pub fn new(mission: &'a Mission, crew: &'a [CrewMember<'a>]) -> Self {
        Self {
            summary: MissionSummary::from(mission),
            description: &mission.description,
            crew,
        }
    }
}
