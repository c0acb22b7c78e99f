pub mod eulerian;
pub mod hamiltonian;
pub mod permutations;
pub mod tsp;

pub use eulerian::{find_eulerian_circuit, has_eulerian_circuit};
pub use hamiltonian::find_hamiltonian_cycle;
pub use permutations::Permutations;
pub use tsp::{Tour, TspSearch, DEFAULT_PERMUTATION_CAP};
