use std::time::{Duration, Instant};

use crate::error::{Error, Failure, Rejection};
use crate::graph::Graph;
use crate::mode::Mode;
use crate::path::WalkState;
use crate::session::{Selection, Session};
use crate::SessionConfig;

fn session_with(graph: Graph) -> Session {
    let mut session = Session::new(SessionConfig::default().with_seed(1)).unwrap();
    session.load_graph(graph);
    session
}

/// Square plus both diagonals, unit weights.
fn k4() -> Graph {
    Graph::from_edges(
        4,
        &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 1), (1, 3, 1)],
    )
    .unwrap()
}

/// [0,1,2,3,0] weighs 10 and [0,2,1,3,0] weighs 8.
fn weighted_k4() -> Graph {
    Graph::from_edges(
        4,
        &[(0, 1, 3), (1, 2, 2), (2, 3, 3), (3, 0, 2), (0, 2, 2), (1, 3, 2)],
    )
    .unwrap()
}

fn bowtie() -> Graph {
    Graph::from_edges(
        5,
        &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1), (3, 4, 1), (4, 2, 1)],
    )
    .unwrap()
}

fn play(session: &mut Session, walk: &[usize]) -> Selection {
    let mut last = None;
    for &v in walk {
        last = Some(session.select_vertex(v).unwrap());
    }
    last.unwrap()
}

fn closed_verdict(selection: Selection) -> crate::Verdict {
    match selection {
        Selection::Closed(verdict) => verdict,
        other => panic!("expected a closed walk, got {other:?}"),
    }
}

#[test]
fn test_new_session_has_no_challenge() {
    let mut session = Session::new(SessionConfig::default().with_seed(3)).unwrap();
    assert_eq!(session.graph().vertex_count(), 6);
    assert_eq!(session.mode(), None);
    assert_eq!(session.select_vertex(0), Err(Rejection::NoChallenge));
    assert_eq!(session.check_cycle(), Err(Rejection::NoChallenge));
    assert_eq!(session.auto_complete(), Err(Rejection::NoChallenge));
    assert!(!session.undo());
}

#[test]
fn test_invalid_config_is_refused() {
    let config = SessionConfig::default().with_edge_density(2.0);
    assert!(matches!(Session::new(config), Err(Error::InvalidDensity(_))));
}

#[test]
fn test_hamiltonian_scenario() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Hamiltonian);
    let verdict = closed_verdict(play(&mut session, &[0, 1, 2, 3, 0]));
    assert!(verdict.is_valid());
    assert!(!verdict.auto_completed);
    assert_eq!(verdict.message(), "Valid Hamiltonian cycle!");
    assert!(session.is_locked());
    assert_eq!(session.state(), WalkState::Closed);
    assert_eq!(session.idle_deadline(), None);
    assert_eq!(session.select_vertex(1), Err(Rejection::AttemptFinished));
}

#[test]
fn test_eulerian_repeated_edge_scenario() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Eulerian);
    assert!(!session.eulerian_feasible());
    let verdict = closed_verdict(play(&mut session, &[0, 1, 2, 1, 0]));
    assert_eq!(verdict.outcome, Err(Failure::RepeatedEdge(1, 2)));
}

#[test]
fn test_eulerian_valid_scenario() {
    let mut session = session_with(bowtie());
    session.select_mode(Mode::Eulerian);
    assert!(session.eulerian_feasible());
    let verdict = closed_verdict(play(&mut session, &[0, 1, 2, 3, 4, 2, 0]));
    assert!(verdict.is_valid());
}

#[test]
fn test_tsp_suboptimal_scenario() {
    let mut session = session_with(weighted_k4());
    session.select_mode(Mode::Tsp);
    let verdict = closed_verdict(play(&mut session, &[0, 1, 2, 3, 0]));
    assert_eq!(
        verdict.outcome,
        Err(Failure::Suboptimal { weight: 10, best: 8 })
    );
    assert_eq!(verdict.weight, Some(10));
}

#[test]
fn test_tsp_optimal_scenario() {
    let mut session = session_with(weighted_k4());
    session.select_mode(Mode::Tsp);
    let verdict = closed_verdict(play(&mut session, &[1, 2, 0, 3, 1]));
    assert!(verdict.is_valid());
    assert_eq!(verdict.weight, Some(8));
}

#[test]
fn test_rejections_leave_state_alone() {
    let square = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
    let mut session = session_with(square);
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[0, 1]);
    let deadline = session.idle_deadline();

    assert_eq!(
        session.select_vertex(3),
        Err(Rejection::NoEdge { from: 1, to: 3 })
    );
    assert_eq!(session.select_vertex(0), Err(Rejection::CycleTooShort));
    assert_eq!(session.select_vertex(7), Err(Rejection::VertexOutOfRange(7)));
    assert_eq!(session.walk(), &[0, 1]);
    assert_eq!(session.idle_deadline(), deadline);
    assert_eq!(session.path_weight(), Some(1));
}

#[test]
fn test_revisit_rejected_outside_eulerian() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Tsp);
    play(&mut session, &[0, 1, 2]);
    assert_eq!(session.select_vertex(1), Err(Rejection::Revisit(1)));
    assert_eq!(session.walk(), &[0, 1, 2]);
}

#[test]
fn test_undo_reopens_judged_attempt() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[0, 1, 2, 0]);
    assert!(session.is_locked());

    assert!(session.undo());
    assert!(!session.is_locked());
    assert_eq!(session.walk(), &[0, 1, 2]);
    assert!(session.idle_deadline().is_some());

    let verdict = closed_verdict(play(&mut session, &[3, 0]));
    assert!(verdict.is_valid());
}

#[test]
fn test_check_cycle_on_open_walk() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[0, 1, 2, 3]);
    let verdict = session.check_cycle().unwrap();
    assert_eq!(verdict.outcome, Err(Failure::NotClosed));
    assert!(session.is_locked());
    assert_eq!(session.idle_deadline(), None);
    assert_eq!(session.check_cycle(), Err(Rejection::AttemptFinished));
}

#[test]
fn test_mode_change_resets_attempt_and_timer() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[0, 1]);
    assert!(session.idle_deadline().is_some());

    session.select_mode(Mode::Eulerian);
    assert_eq!(session.mode(), Some(Mode::Eulerian));
    assert!(session.walk().is_empty());
    assert_eq!(session.idle_deadline(), None);
    assert_eq!(session.poll_idle(Instant::now() + Duration::from_secs(3600)), None);
}

#[test]
fn test_clear_path_keeps_mode() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Tsp);
    play(&mut session, &[0, 1, 2]);
    session.clear_path();
    assert_eq!(session.mode(), Some(Mode::Tsp));
    assert_eq!(session.state(), WalkState::Empty);
    assert_eq!(session.idle_deadline(), None);
}

#[test]
fn test_regeneration_is_a_hard_reset() {
    let mut session = Session::new(SessionConfig::default().with_seed(9)).unwrap();
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[0, 1]);

    let graph = session.generate_graph(8, 0.5).unwrap();
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(session.mode(), None);
    assert!(session.walk().is_empty());
    assert_eq!(session.idle_deadline(), None);
    assert_eq!(session.config().vertex_count, 8);

    session.regenerate().unwrap();
    assert_eq!(session.graph().vertex_count(), 8);
}

#[test]
fn test_bad_generation_parameters_change_nothing() {
    let mut session = Session::new(SessionConfig::default().with_seed(9)).unwrap();
    let before = session.graph().clone();
    session.select_mode(Mode::Eulerian);

    assert!(session.generate_graph(2, 0.5).is_err());
    assert!(session.generate_graph(6, -1.0).is_err());
    assert_eq!(session.graph(), &before);
    assert_eq!(session.mode(), Some(Mode::Eulerian));
    assert_eq!(session.config().vertex_count, 6);
}

#[test]
fn test_idle_timeout_auto_completes() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[2, 3]);

    assert_eq!(session.poll_idle(Instant::now()), None);

    let later = Instant::now() + Duration::from_secs(31);
    let verdict = session.poll_idle(later).unwrap();
    assert!(verdict.auto_completed);
    assert!(verdict.is_valid());
    assert_eq!(verdict.walk, vec![0, 1, 2, 3, 0]);
    assert_eq!(verdict.message(), "Auto-completed: Valid Hamiltonian cycle!");
    assert!(session.is_locked());
    assert_eq!(session.walk(), &[0, 1, 2, 3, 0]);

    // Fires once.
    assert_eq!(session.poll_idle(later), None);
}

#[test]
fn test_stale_ticket_is_ignored() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Hamiltonian);
    play(&mut session, &[0]);
    let first = session.idle_ticket().unwrap();
    play(&mut session, &[1]);
    let second = session.idle_ticket().unwrap();

    assert_eq!(session.fire_idle(first), None);
    assert_eq!(session.walk(), &[0, 1]);
    assert!(!session.is_locked());

    let verdict = session.fire_idle(second).unwrap();
    assert!(verdict.auto_completed);
    assert_eq!(session.fire_idle(second), None);
}

#[test]
fn test_auto_complete_eulerian_without_circuit() {
    let mut session = session_with(k4());
    session.select_mode(Mode::Eulerian);
    play(&mut session, &[0, 1]);
    let verdict = session.auto_complete().unwrap();
    assert_eq!(
        verdict.outcome,
        Err(Failure::OddDegree {
            vertices: vec![0, 1, 2, 3]
        })
    );
    assert!(verdict.auto_completed);
    assert_eq!(verdict.walk, vec![0, 1]);
    assert!(session.is_locked());
    assert_eq!(session.auto_complete(), Err(Rejection::AttemptFinished));
}

#[test]
fn test_auto_complete_eulerian_circuit() {
    let mut session = session_with(bowtie());
    session.select_mode(Mode::Eulerian);
    let verdict = session.auto_complete().unwrap();
    assert!(verdict.is_valid());
    assert_eq!(verdict.walk.len(), 7);
}

#[test]
fn test_auto_complete_tsp() {
    let mut session = session_with(weighted_k4());
    session.select_mode(Mode::Tsp);
    play(&mut session, &[0, 1]);
    let verdict = session.auto_complete().unwrap();
    assert!(verdict.is_valid());
    assert_eq!(verdict.weight, Some(8));
    assert_eq!(
        verdict.message(),
        "Auto-completed: Optimal TSP cycle found! Total weight: 8"
    );
}

#[test]
fn test_auto_complete_without_hamiltonian_cycle() {
    // A triangle with a pendant vertex.
    let g = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)]).unwrap();
    let mut session = session_with(g);
    session.select_mode(Mode::Hamiltonian);
    let verdict = session.auto_complete().unwrap();
    assert_eq!(verdict.outcome, Err(Failure::NoHamiltonianCycle));
    assert_eq!(
        verdict.message(),
        "Auto-completed: No Hamiltonian cycle exists in this graph."
    );
}

#[test]
fn test_generated_graph_ring_is_always_playable() {
    for seed in 0..20 {
        let config = SessionConfig::default().with_seed(seed).with_vertex_count(7);
        let mut session = Session::new(config).unwrap();
        session.select_mode(Mode::Hamiltonian);
        let ring: Vec<usize> = (0..7).chain([0]).collect();
        let verdict = closed_verdict(play(&mut session, &ring));
        assert!(verdict.is_valid(), "seed {seed}");
    }
}

#[test]
fn test_huge_idle_timeout_does_not_overflow() {
    let config = SessionConfig::default()
        .with_seed(1)
        .with_idle_timeout(Duration::MAX);
    assert!(config.validate().is_ok());
    let mut session = Session::new(config).unwrap();
    session.select_mode(Mode::Hamiltonian);

    assert_eq!(session.select_vertex(0), Ok(Selection::Started));
    assert_eq!(session.idle_deadline(), None);
    let ticket = session.idle_ticket().unwrap();
    assert_eq!(session.poll_idle(Instant::now() + Duration::from_secs(3600)), None);
    assert_eq!(session.walk(), &[0]);

    // An external timeout forwarded with the live ticket still completes the walk.
    let verdict = session.fire_idle(ticket).unwrap();
    assert!(verdict.auto_completed);
    assert!(verdict.is_valid());
}

#[test]
fn test_session_is_debug() {
    let session = session_with(k4());
    assert!(format!("{session:?}").contains("Session"));
}
