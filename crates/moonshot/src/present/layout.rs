//! Mission list layouts.
//!
//! The root screen lists every mission either as a grid of cards or as a
//! single column of rows. Both layouts number missions from 1 in dataset
//! order; the numbers are what `open <n>` refers to in a browse session.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::{center, pad, truncate};
use crate::config::DisplayConfig;
use crate::model::Mission;

/// Which mission layout the root screen uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Cards arranged in adaptive columns.
    #[default]
    Grid,
    /// One row per mission.
    List,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Switch to the other mode in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::List => write!(f, "list"),
        }
    }
}

/// A strategy for rendering the mission list.
pub trait MissionLayout {
    /// The display mode this layout implements.
    fn mode(&self) -> DisplayMode;

    /// Render every mission, numbered from 1.
    fn render(&self, missions: &[Mission]) -> String;
}

/// Bordered cards in as many columns as fit the screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Screen width in columns.
    pub width: usize,
    /// Card width, borders included.
    pub cell_width: usize,
}

impl GridLayout {
    /// Number of cards per row. Cards are separated by one space.
    #[must_use]
    pub fn columns(&self) -> usize {
        ((self.width + 1) / (self.cell_width + 1)).max(1)
    }

    fn card(&self, index: usize, mission: &Mission) -> [String; 5] {
        let inner = self.cell_width.saturating_sub(2);
        let border = format!("+{}+", "-".repeat(inner));
        [
            border.clone(),
            format!("|{}|", center(&format!("#{index} [{}]", mission.image()), inner)),
            format!("|{}|", center(&mission.display_name(), inner)),
            format!("|{}|", center(&mission.formatted_launch_date(), inner)),
            border,
        ]
    }
}

impl MissionLayout for GridLayout {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Grid
    }

    fn render(&self, missions: &[Mission]) -> String {
        if missions.is_empty() {
            return "No missions.\n".to_string();
        }
        let mut out = String::new();
        let numbered: Vec<(usize, &Mission)> =
            missions.iter().enumerate().map(|(i, m)| (i + 1, m)).collect();
        for row in numbered.chunks(self.columns()) {
            let cards: Vec<[String; 5]> = row.iter().map(|(i, m)| self.card(*i, m)).collect();
            for line in 0..5 {
                let joined: Vec<&str> = cards.iter().map(|c| c[line].as_str()).collect();
                out.push_str(joined.join(" ").trim_end());
                out.push('\n');
            }
        }
        out
    }
}

/// One row per mission with a trailing `>` affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    /// Screen width in columns.
    pub width: usize,
}

impl ListLayout {
    const NAME_WIDTH: usize = 14;
    const DATE_WIDTH: usize = 14;
}

impl MissionLayout for ListLayout {
    fn mode(&self) -> DisplayMode {
        DisplayMode::List
    }

    fn render(&self, missions: &[Mission]) -> String {
        if missions.is_empty() {
            return "No missions.\n".to_string();
        }
        let mut out = String::new();
        for (i, mission) in missions.iter().enumerate() {
            let row = format!(
                "{:>3}. {} {} [{}]",
                i + 1,
                pad(&truncate(&mission.display_name(), Self::NAME_WIDTH), Self::NAME_WIDTH),
                pad(&mission.formatted_launch_date(), Self::DATE_WIDTH),
                mission.image()
            );
            out.push_str(&pad(&row, self.width.saturating_sub(2)));
            out.push_str(" >\n");
        }
        out
    }
}

/// Build the layout for a display mode.
#[must_use]
pub fn layout_for(mode: DisplayMode, display: &DisplayConfig) -> Box<dyn MissionLayout> {
    match mode {
        DisplayMode::Grid => Box::new(GridLayout {
            width: display.width,
            cell_width: display.cell_width,
        }),
        DisplayMode::List => Box::new(ListLayout {
            width: display.width,
        }),
    }
}
