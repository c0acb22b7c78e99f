//! Walk construction from learner vertex picks.
//!
//! A [`PathBuilder`] moves through three states:
//!
//! - `Empty`: nothing chosen yet.
//! - `Building`: a walk whose consecutive vertices are always adjacent.
//! - `Closed`: the start vertex was picked again after at least three vertices.
//!
//! Every accepted pick records a snapshot of the walk so it can be undone. Once the
//! attempt is judged the builder is locked and refuses further picks until undo or reset.

use log::debug;

use crate::error::Rejection;
use crate::graph::{Graph, VertexId};
use crate::mode::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Empty,
    Building,
    Closed,
}

/// What an accepted pick did to the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First vertex of the walk.
    Started,
    /// Walk grew by one vertex.
    Extended,
    /// The start vertex was reached again; the walk is a candidate cycle.
    Closed,
}

#[derive(Debug, Clone)]
pub struct PathBuilder {
    mode: Mode,
    walk: Vec<VertexId>,
    history: Vec<Vec<VertexId>>,
    locked: bool,
}

impl PathBuilder {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            walk: Vec::new(),
            history: Vec::new(),
            locked: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn walk(&self) -> &[VertexId] {
        &self.walk
    }

    /// Number of undo snapshots held.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn state(&self) -> WalkState {
        match self.walk.as_slice() {
            [] => WalkState::Empty,
            [first, .., last] if self.walk.len() > 3 && first == last => WalkState::Closed,
            _ => WalkState::Building,
        }
    }

    /// Try to extend the walk with `vertex`.
    ///
    /// # Errors
    /// Any [`Rejection`]; a rejected pick leaves walk and history untouched.
    pub fn select(&mut self, graph: &Graph, vertex: VertexId) -> Result<Step, Rejection> {
        if self.locked || self.state() == WalkState::Closed {
            return Err(Rejection::AttemptFinished);
        }
        if !graph.contains(vertex) {
            return Err(Rejection::VertexOutOfRange(vertex));
        }

        let (first, last) = match (self.walk.first(), self.walk.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => {
                self.push(vertex);
                return Ok(Step::Started);
            }
        };

        if !graph.has_edge(last, vertex) {
            return Err(Rejection::NoEdge {
                from: last,
                to: vertex,
            });
        }

        let step = if vertex == first {
            if self.walk.len() <= 2 {
                return Err(Rejection::CycleTooShort);
            }
            Step::Closed
        } else if !self.walk.contains(&vertex) || self.mode.allows_revisit() {
            Step::Extended
        } else {
            return Err(Rejection::Revisit(vertex));
        };

        self.push(vertex);
        Ok(step)
    }

    fn push(&mut self, vertex: VertexId) {
        self.walk.push(vertex);
        self.history.push(self.walk.clone());
        debug!("{} walk: {:?}", self.mode, self.walk);
    }

    /// Step back one accepted pick. The first pick cannot be undone.
    /// Returns whether anything changed; undoing clears the lock.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        self.walk = self.history.last().cloned().unwrap_or_default();
        self.locked = false;
        true
    }

    /// Mark the attempt judged.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Replace the walk with a solver-produced one and lock it.
    pub fn complete_with(&mut self, walk: Vec<VertexId>) {
        self.history.push(walk.clone());
        self.walk = walk;
        self.locked = true;
    }

    /// Back to `Empty`: walk, history and lock cleared together.
    pub fn reset(&mut self) {
        self.walk.clear();
        self.history.clear();
        self.locked = false;
    }
}
