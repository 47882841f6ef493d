//! Optimal parallel-machine scheduling via best-first search.
//!
//! Computes a minimum-makespan assignment of a finite set of indivisible,
//! non-preemptive tasks to identical machines (P||C_max). The solver runs
//! A* over the space of partial assignments: each state records the pending
//! tasks and the accumulated load per machine, and each transition assigns
//! one pending task to one machine.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Machine`, `Task`, `Assignment`, `State`,
//!   `Instance`, `Solution`
//! - **`search`**: The search engine — `Heuristic` trait and built-in
//!   estimators, `Frontier` (open set), `DominanceTable` (closed set),
//!   `AstarSolver`
//! - **`validation`**: Input integrity checks (machine count, task durations)
//!
//! # Scope
//!
//! All tasks are known upfront; there is no preemption, no task
//! dependencies, and the search itself is single-threaded. Worst-case
//! frontier growth is exponential in the task count, so `SearchLimits`
//! offers an expansion budget, a wall-clock deadline, and a cooperative
//! stop flag.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod search;
pub mod validation;
