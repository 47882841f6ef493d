//! A* search over the assignment state space.
//!
//! Best-first search for a minimum-makespan complete assignment: a
//! min-priority [`Frontier`] ordered by `f = g + h`, a [`DominanceTable`]
//! recording the best known cost per canonical state, and the
//! [`AstarSolver`] loop tying them together.
//!
//! # Usage
//!
//! ```
//! use u_makespan::models::Instance;
//! use u_makespan::search::AstarSolver;
//!
//! let instance = Instance::new(2, vec![5, 5, 3]);
//! let solution = AstarSolver::new().solve(&instance).unwrap();
//! assert_eq!(solution.makespan(), 8);
//! ```
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Pearl (1984), "Heuristics: Intelligent Search Strategies"

mod astar;
mod dominance;
mod frontier;
pub mod heuristic;

pub use astar::{AstarSolver, SearchError, SearchLimits, SearchStats};
pub use dominance::DominanceTable;
pub use frontier::{Frontier, OpenEntry};

use crate::models::State;
use std::fmt::Debug;

/// Integral cost unit shared by g, h, and f values.
///
/// g is the current makespan; h a lower-bound estimate of the additional
/// makespan still needed; f their sum.
pub type Cost = u64;

/// A lower-bound estimator for the additional makespan needed to complete
/// a state.
///
/// An estimate that never exceeds the true remaining cost keeps the search
/// optimal; an overestimate trades optimality for speed.
pub trait Heuristic: Send + Sync + Debug {
    /// Estimator name (e.g., "SLACK", "ZERO").
    fn name(&self) -> &'static str;

    /// Estimates the additional makespan needed to assign all pending
    /// tasks of `state`. Must be zero for complete states.
    fn estimate(&self, state: &State) -> Cost;

    /// Estimator description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
