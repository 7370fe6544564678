//! Interactive browse session.
//!
//! A [`Session`] reads one command per line and writes the resulting screen.
//! It owns the [`ViewState`] and borrows the catalog; resolving a mission's
//! crew happens each time a mission screen is entered or redrawn.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use super::detail::{render_astronaut_detail, render_mission_detail};
use super::layout::layout_for;
use super::navigation::{Route, ViewState};
use super::text::heading;
use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::error::Result;

const HELP: &str = "\
Commands:
  open <n>   open item <n> on the current screen (or just type <n>)
  toggle     switch between grid and list layouts
  back       return to the previous screen
  home       return to the mission list
  help       show this message
  quit       leave the session";

/// One line of session input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Open the numbered item on the current screen.
    Open(usize),
    /// Switch the mission layout.
    Toggle,
    /// Pop one screen.
    Back,
    /// Pop every screen.
    Home,
    /// Show available commands.
    Help,
    /// End the session.
    Quit,
}

/// Why a line of input could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError(String);

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseCommandError {}

fn parse_index(raw: &str) -> std::result::Result<usize, ParseCommandError> {
    match raw.parse::<usize>() {
        Ok(0) => Err(ParseCommandError("Items are numbered from 1.".to_string())),
        Ok(n) => Ok(n),
        Err(_) => Err(ParseCommandError(format!("'{raw}' is not an item number."))),
    }
}

impl FromStr for SessionCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError("Empty command.".to_string()));
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "open" | "o" => match words.next() {
                Some(raw) => Self::Open(parse_index(raw)?),
                None => return Err(ParseCommandError("Usage: open <n>".to_string())),
            },
            "toggle" | "t" => Self::Toggle,
            "back" | "b" => Self::Back,
            "home" => Self::Home,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other if other.chars().all(|c| c.is_ascii_digit()) => Self::Open(parse_index(other)?),
            other => {
                return Err(ParseCommandError(format!(
                    "Unknown command '{other}'. Type 'help' for a list."
                )))
            }
        };
        if words.next().is_some() {
            return Err(ParseCommandError(format!("Too many arguments for '{word}'.")));
        }
        Ok(command)
    }
}

/// What the caller should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The screen changed; render it.
    Render,
    /// The screen did not change; show this message.
    Message(String),
    /// The session is over.
    Quit,
}

/// Line-oriented browser over a loaded catalog.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    display: DisplayConfig,
    state: ViewState,
}

impl<'a> Session<'a> {
    /// Start at the mission list in the configured layout.
    #[must_use]
    pub fn new(catalog: &'a Catalog, display: DisplayConfig) -> Self {
        let state = ViewState::new(display.layout);
        Self {
            catalog,
            display,
            state,
        }
    }

    /// Current layout and navigation stack.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Render the screen on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the mission's crew cannot be resolved or a routed
    /// record no longer exists.
    pub fn render(&self) -> Result<String> {
        let catalog = self.catalog;
        let width = self.display.width;
        match self.state.path.top() {
            None => {
                let layout = layout_for(self.state.mode, &self.display);
                Ok(heading("Moonshot", '=') + &layout.render(catalog.missions()))
            }
            Some(Route::Mission(id)) => {
                let mission = catalog.mission(id)?;
                let roster = catalog.roster(mission)?;
                Ok(render_mission_detail(mission, &roster, width))
            }
            Some(Route::CrewMember { astronaut_id, .. }) => Ok(render_astronaut_detail(
                catalog.astronaut(astronaut_id)?,
                width,
            )),
        }
    }

    /// Apply one command to the view state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingAstronaut`] if a mission being opened
    /// has a dangling crew reference.
    pub fn apply(&mut self, command: SessionCommand) -> Result<Step> {
        let catalog = self.catalog;
        let step = match command {
            SessionCommand::Open(n) => match self.state.path.top().cloned() {
                None => match n.checked_sub(1).and_then(|i| catalog.missions().get(i)) {
                    Some(mission) => {
                        catalog.verify_mission(mission)?;
                        info!("Entering {}", mission.display_name());
                        self.state.path.push(Route::mission(mission));
                        Step::Render
                    }
                    None => Step::Message(format!("No mission #{n}.")),
                },
                Some(Route::Mission(id)) => {
                    let mission = catalog.mission(&id)?;
                    let roster = catalog.roster(mission)?;
                    match n.checked_sub(1).and_then(|i| roster.get(i)) {
                        Some(member) => {
                            debug!("Entering crew member {}", member.astronaut.id);
                            self.state.path.push(Route::crew_member(member));
                            Step::Render
                        }
                        None => Step::Message(format!("No crew member #{n}.")),
                    }
                }
                Some(Route::CrewMember { .. }) => {
                    Step::Message("Nothing to open on this screen.".to_string())
                }
            },
            SessionCommand::Toggle => {
                self.state.mode.toggle();
                if self.state.path.is_root() {
                    Step::Render
                } else {
                    Step::Message(format!("Layout set to {}.", self.state.mode))
                }
            }
            SessionCommand::Back => match self.state.path.pop() {
                Some(_) => Step::Render,
                None => Step::Message("Already at the mission list.".to_string()),
            },
            SessionCommand::Home => {
                if self.state.path.is_root() {
                    Step::Message("Already at the mission list.".to_string())
                } else {
                    self.state.path.clear();
                    Step::Render
                }
            }
            SessionCommand::Help => Step::Message(HELP.to_string()),
            SessionCommand::Quit => Step::Quit,
        };
        Ok(step)
    }

    /// Run until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from either stream, or a data-integrity error
    /// from [`Session::apply`]. The session does not continue past either.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        write!(output, "{}", self.render()?)?;
        writeln!(output, "Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<SessionCommand>() {
                Err(err) => writeln!(output, "{err}")?,
                Ok(command) => match self.apply(command)? {
                    Step::Render => write!(output, "{}", self.render()?)?,
                    Step::Message(message) => writeln!(output, "{message}")?,
                    Step::Quit => break,
                },
            }
        }
        output.flush()?;
        Ok(())
    }
}
