//! Challenge modes.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which cycle property the learner is asked to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Visit every vertex exactly once and return to the start.
    Hamiltonian,
    /// Traverse every edge exactly once and return to the start.
    Eulerian,
    /// Shortest Hamiltonian cycle by total edge weight.
    Tsp,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Hamiltonian, Mode::Eulerian, Mode::Tsp];

    /// Eulerian walks may pass through a vertex more than once.
    pub fn allows_revisit(self) -> bool {
        matches!(self, Mode::Eulerian)
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Hamiltonian => "Hamiltonian Cycle",
            Mode::Eulerian => "Eulerian Cycle",
            Mode::Tsp => "TSP Cycle",
        }
    }

    /// Prompt shown when the challenge starts.
    pub fn instructions(self) -> &'static str {
        match self {
            Mode::Hamiltonian => {
                "Find a Hamiltonian cycle: Visit every vertex exactly once and return to start."
            }
            Mode::Eulerian => {
                "Find an Eulerian cycle: Traverse every edge exactly once and return to start."
            }
            Mode::Tsp => "Find the shortest Hamiltonian cycle (TSP): Minimize total edge weight.",
        }
    }

    /// Message for a successful verdict.
    pub(crate) fn success_message(self) -> &'static str {
        match self {
            Mode::Hamiltonian => "Valid Hamiltonian cycle!",
            Mode::Eulerian => "Valid Eulerian cycle!",
            Mode::Tsp => "Optimal TSP cycle found!",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hamiltonian" => Ok(Mode::Hamiltonian),
            "eulerian" => Ok(Mode::Eulerian),
            "tsp" => Ok(Mode::Tsp),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}
