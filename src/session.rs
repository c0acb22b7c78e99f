//! The challenge controller.
//!
//! A [`Session`] owns everything one learner interacts with: the current graph, the
//! selected mode with its in-progress walk, and the idle timer. All transitions are
//! synchronous responses to a discrete event (a vertex pick, a button, a timeout);
//! every transition that invalidates the walk cancels the idle timer in the same step.
//!
//! ```rust
//! use graph_cycles::{Mode, Selection, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(7)).unwrap();
//! session.select_mode(Mode::Hamiltonian);
//!
//! // The generator always lays a ring 0-1-..-(n-1)-0 first.
//! let n = session.graph().vertex_count();
//! for v in 0..n {
//!     session.select_vertex(v).unwrap();
//! }
//! match session.select_vertex(0).unwrap() {
//!     Selection::Closed(verdict) => assert!(verdict.is_valid()),
//!     other => panic!("expected a closed walk, got {other:?}"),
//! }
//! ```

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::SessionConfig;
use crate::error::{Failure, Rejection, Result};
use crate::graph::{Graph, GraphGenerator, VertexId, Weight};
use crate::mode::Mode;
use crate::path::{PathBuilder, Step, WalkState};
use crate::solver::{find_eulerian_circuit, find_hamiltonian_cycle, has_eulerian_circuit, TspSearch};
use crate::timer::{IdleTimer, Ticket};
use crate::validator::{Validator, Verdict};

/// Result of an accepted vertex pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// First vertex of a new walk.
    Started,
    /// The walk grew by one vertex.
    Extended,
    /// The walk closed into a cycle and was judged.
    Closed(Verdict),
}

impl Selection {
    pub fn is_closed(&self) -> bool {
        matches!(self, Selection::Closed(_))
    }
}

#[derive(Debug)]
pub struct Session<R: Rng = StdRng> {
    config: SessionConfig,
    generator: GraphGenerator<R>,
    graph: Graph,
    challenge: Option<PathBuilder>,
    timer: IdleTimer,
}

impl Session<StdRng> {
    /// Validate `config` and generate the first graph, seeded from `config.seed`
    /// when set.
    ///
    /// # Errors
    /// Any error from [`SessionConfig::validate`] or graph generation.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let generator = match config.seed {
            Some(seed) => GraphGenerator::from_seed(seed),
            None => GraphGenerator::from_entropy(),
        };
        Self::with_generator(config, generator)
    }
}

impl<R: Rng> Session<R> {
    /// Like [`Session::new`] but drawing randomness from `generator`.
    ///
    /// # Errors
    /// Any error from [`SessionConfig::validate`] or graph generation.
    pub fn with_generator(config: SessionConfig, mut generator: GraphGenerator<R>) -> Result<Self> {
        config.validate()?;
        let graph = generator.generate(config.vertex_count, config.edge_density)?;
        let timer = IdleTimer::new(config.idle_timeout);
        Ok(Self {
            config,
            generator,
            graph,
            challenge: None,
            timer,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mode(&self) -> Option<Mode> {
        self.challenge.as_ref().map(PathBuilder::mode)
    }

    /// The current walk; empty when no challenge is running.
    pub fn walk(&self) -> &[VertexId] {
        self.challenge.as_ref().map(PathBuilder::walk).unwrap_or(&[])
    }

    pub fn state(&self) -> WalkState {
        self.challenge
            .as_ref()
            .map_or(WalkState::Empty, PathBuilder::state)
    }

    /// The attempt has been judged and accepts no more picks.
    pub fn is_locked(&self) -> bool {
        self.challenge.as_ref().is_some_and(PathBuilder::is_locked)
    }

    /// Running weight of the current walk.
    pub fn path_weight(&self) -> Option<Weight> {
        self.graph.walk_weight(self.walk())
    }

    /// Every vertex has even degree, so an Eulerian challenge is solvable.
    pub fn eulerian_feasible(&self) -> bool {
        has_eulerian_circuit(&self.graph)
    }

    pub fn idle_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Ticket of the pending idle firing, for callers that run their own timer.
    pub fn idle_ticket(&self) -> Option<Ticket> {
        self.timer.ticket()
    }

    /// Change the generation parameters and build a new graph. Hard reset: the
    /// mode, walk and timer are discarded.
    ///
    /// # Errors
    /// The parameters are validated first; on error nothing changes.
    pub fn generate_graph(&mut self, vertex_count: usize, edge_density: f64) -> Result<&Graph> {
        let config = self
            .config
            .clone()
            .with_vertex_count(vertex_count)
            .with_edge_density(edge_density);
        config.validate()?;
        let graph = self.generator.generate(vertex_count, edge_density)?;
        self.config = config;
        self.install(graph);
        Ok(&self.graph)
    }

    /// New graph with the current parameters.
    ///
    /// # Errors
    /// Only if generation itself fails.
    pub fn regenerate(&mut self) -> Result<&Graph> {
        self.generate_graph(self.config.vertex_count, self.config.edge_density)
    }

    /// Install a prepared graph with the same hard reset as regeneration.
    pub fn load_graph(&mut self, graph: Graph) {
        self.install(graph);
    }

    fn install(&mut self, graph: Graph) {
        self.timer.cancel();
        self.challenge = None;
        self.graph = graph;
        debug!(
            "new graph: {} vertices, {} edges, degrees {:?}",
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.graph.degree_sequence()
        );
    }

    /// Start a challenge. Any previous walk is discarded.
    pub fn select_mode(&mut self, mode: Mode) {
        self.timer.cancel();
        self.challenge = Some(PathBuilder::new(mode));
        if mode == Mode::Eulerian && !self.eulerian_feasible() {
            info!(
                "Eulerian challenge on a graph with odd-degree vertices {:?}",
                self.graph.odd_vertices()
            );
        } else {
            info!("{} challenge started", mode);
        }
    }

    /// Extend the walk with `vertex`. Closing the walk judges it immediately.
    ///
    /// # Errors
    /// A [`Rejection`]; state is unchanged and the idle timer keeps running.
    pub fn select_vertex(&mut self, vertex: VertexId) -> std::result::Result<Selection, Rejection> {
        let builder = self.challenge.as_mut().ok_or(Rejection::NoChallenge)?;
        match builder.select(&self.graph, vertex)? {
            Step::Started => {
                self.timer.schedule(Instant::now());
                Ok(Selection::Started)
            }
            Step::Extended => {
                self.timer.schedule(Instant::now());
                Ok(Selection::Extended)
            }
            Step::Closed => {
                self.timer.cancel();
                self.judge().map(Selection::Closed)
            }
        }
    }

    /// Undo the last accepted pick. Counts as activity for the idle timer.
    pub fn undo(&mut self) -> bool {
        let Some(builder) = self.challenge.as_mut() else {
            return false;
        };
        let changed = builder.undo();
        if changed {
            self.timer.schedule(Instant::now());
        }
        changed
    }

    /// Drop the current attempt but stay in the same mode.
    pub fn clear_path(&mut self) {
        self.timer.cancel();
        if let Some(builder) = self.challenge.as_mut() {
            builder.reset();
        }
    }

    /// Judge the walk as it stands.
    ///
    /// # Errors
    /// [`Rejection::NoChallenge`] or [`Rejection::AttemptFinished`].
    pub fn check_cycle(&mut self) -> std::result::Result<Verdict, Rejection> {
        let builder = self.challenge.as_ref().ok_or(Rejection::NoChallenge)?;
        if builder.is_locked() {
            return Err(Rejection::AttemptFinished);
        }
        self.timer.cancel();
        self.judge()
    }

    fn judge(&mut self) -> std::result::Result<Verdict, Rejection> {
        let tsp = TspSearch::new(self.config.permutation_cap);
        let builder = self.challenge.as_mut().ok_or(Rejection::NoChallenge)?;
        let verdict = Validator::new(&self.graph, tsp).check(builder.mode(), builder.walk());
        builder.lock();
        Ok(verdict)
    }

    /// Let the solver finish the attempt, then judge and lock it.
    ///
    /// # Errors
    /// [`Rejection::NoChallenge`] or [`Rejection::AttemptFinished`].
    pub fn auto_complete(&mut self) -> std::result::Result<Verdict, Rejection> {
        let tsp = TspSearch::new(self.config.permutation_cap);
        let builder = self.challenge.as_mut().ok_or(Rejection::NoChallenge)?;
        if builder.is_locked() {
            return Err(Rejection::AttemptFinished);
        }
        self.timer.cancel();

        let mode = builder.mode();
        let solution = match mode {
            Mode::Hamiltonian => {
                find_hamiltonian_cycle(&self.graph).ok_or(Failure::NoHamiltonianCycle)
            }
            Mode::Eulerian if !has_eulerian_circuit(&self.graph) => Err(Failure::OddDegree {
                vertices: self.graph.odd_vertices(),
            }),
            Mode::Eulerian => find_eulerian_circuit(&self.graph).ok_or(Failure::NoEulerianCircuit),
            Mode::Tsp => tsp
                .solve(&self.graph)
                .map(|tour| tour.path)
                .ok_or(Failure::NoHamiltonianCycle),
        };

        let verdict = match solution {
            Ok(walk) => {
                builder.complete_with(walk);
                Verdict {
                    auto_completed: true,
                    ..Validator::new(&self.graph, tsp).check(mode, builder.walk())
                }
            }
            Err(failure) => {
                builder.lock();
                Verdict {
                    mode,
                    walk: builder.walk().to_vec(),
                    weight: None,
                    outcome: Err(failure),
                    auto_completed: true,
                }
            }
        };
        info!("{}", verdict.message());
        Ok(verdict)
    }

    /// Auto-complete if the idle deadline has passed by `now`.
    pub fn poll_idle(&mut self, now: Instant) -> Option<Verdict> {
        self.timer.fire_if_due(now)?;
        self.auto_complete().ok()
    }

    /// Auto-complete in response to an external timeout scheduled under `ticket`.
    /// Stale tickets (superseded or cancelled) do nothing.
    pub fn fire_idle(&mut self, ticket: Ticket) -> Option<Verdict> {
        if !self.timer.fire(ticket) {
            debug!("ignoring stale idle ticket {:?}", ticket);
            return None;
        }
        self.auto_complete().ok()
    }
}

#[cfg(test)]
mod tests;
