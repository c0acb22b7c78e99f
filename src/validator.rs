//! Judging closed walks against a challenge mode.

use std::collections::HashSet;

use log::info;

use crate::error::Failure;
use crate::graph::{EdgeKey, Graph, VertexId, Weight};
use crate::mode::Mode;
use crate::solver::TspSearch;

/// Outcome of judging one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub mode: Mode,
    /// The judged walk (the solver's walk when auto-completed).
    pub walk: Vec<VertexId>,
    /// Total weight when every step of the walk is an edge.
    pub weight: Option<Weight>,
    pub outcome: Result<(), Failure>,
    /// The walk came from a solver after the learner went idle.
    pub auto_completed: bool,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.outcome.as_ref().err()
    }

    /// Human-readable reason, phrased for the learner.
    pub fn message(&self) -> String {
        let body = match (&self.outcome, self.mode, self.weight) {
            (Ok(()), Mode::Tsp, Some(weight)) => {
                format!("{} Total weight: {}", self.mode.success_message(), weight)
            }
            (Ok(()), mode, _) => mode.success_message().to_string(),
            (Err(failure), _, _) => failure.to_string(),
        };
        if self.auto_completed {
            format!("Auto-completed: {body}")
        } else {
            body
        }
    }
}

/// Judges walks on one graph.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'g> {
    graph: &'g Graph,
    tsp: TspSearch,
}

impl<'g> Validator<'g> {
    pub fn new(graph: &'g Graph, tsp: TspSearch) -> Self {
        Self { graph, tsp }
    }

    /// Judge `walk` under `mode`. The walk is expected to be closed, but open or
    /// short walks are reported rather than assumed away.
    pub fn check(&self, mode: Mode, walk: &[VertexId]) -> Verdict {
        let weight = self.graph.walk_weight(walk);
        let outcome = self.judge(mode, walk, weight);
        let verdict = Verdict {
            mode,
            walk: walk.to_vec(),
            weight,
            outcome,
            auto_completed: false,
        };
        info!("{} verdict for {:?}: {}", mode, walk, verdict.message());
        verdict
    }

    fn judge(&self, mode: Mode, walk: &[VertexId], weight: Option<Weight>) -> Result<(), Failure> {
        if walk.len() < 4 {
            return Err(Failure::TooShort);
        }
        if walk.first() != walk.last() {
            return Err(Failure::NotClosed);
        }
        if let Some(step) = walk.windows(2).find(|s| !self.graph.has_edge(s[0], s[1])) {
            return Err(Failure::NotAnEdge {
                from: step[0],
                to: step[1],
            });
        }

        match mode {
            Mode::Hamiltonian => self.hamiltonian(walk),
            Mode::Eulerian => self.eulerian(walk),
            Mode::Tsp => {
                self.hamiltonian(walk)?;
                let Some(weight) = weight else {
                    return Ok(());
                };
                match self.tsp.solve(self.graph) {
                    Some(best) if weight > best.weight => Err(Failure::Suboptimal {
                        weight,
                        best: best.weight,
                    }),
                    _ => Ok(()),
                }
            }
        }
    }

    /// Every vertex exactly once before the closing repeat.
    fn hamiltonian(&self, walk: &[VertexId]) -> Result<(), Failure> {
        let body = &walk[..walk.len() - 1];
        let distinct: HashSet<VertexId> = body.iter().copied().collect();
        let required = self.graph.vertex_count();
        if distinct.len() == required && body.len() == required {
            Ok(())
        } else {
            Err(Failure::NotHamiltonian {
                visited: distinct.len(),
                required,
            })
        }
    }

    /// Every edge exactly once.
    fn eulerian(&self, walk: &[VertexId]) -> Result<(), Failure> {
        let mut used = HashSet::new();
        for step in walk.windows(2) {
            if !used.insert(EdgeKey::new(step[0], step[1])) {
                let (u, v) = EdgeKey::new(step[0], step[1]).endpoints();
                return Err(Failure::RepeatedEdge(u, v));
            }
        }
        let total = self.graph.edge_count();
        if used.len() == total {
            Ok(())
        } else {
            Err(Failure::MissingEdges {
                used: used.len(),
                total,
            })
        }
    }
}
