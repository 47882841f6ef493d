//! A* search loop.
//!
//! # Algorithm
//!
//! 1. Push the root state with `f = g + h`.
//! 2. Extract the minimum-f candidate; a complete assignment is returned
//!    immediately as the solution.
//! 3. Candidates the dominance table rejects are discarded unexpanded.
//! 4. Otherwise record the expansion, generate all successors, estimate
//!    their costs, and push them back into the frontier.
//! 5. An emptied frontier without a goal is an explicit `Exhausted`
//!    failure — never a sentinel value that overlaps with valid output.
//!
//! The loop checks the configured [`SearchLimits`] once per iteration, so
//! a runaway instance can be cut off by expansion budget, wall clock, or
//! a cooperative stop flag.
//!
//! # Reference
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths"

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::heuristic::SlackHeuristic;
use super::{DominanceTable, Frontier, Heuristic};
use crate::models::{Instance, Solution};

/// Why a search invocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied without reaching a complete assignment.
    /// Unreachable for any instance with at least one machine.
    Exhausted,
    /// The expansion budget was spent before a solution was found.
    ExpansionBudgetExceeded,
    /// The wall-clock deadline passed before a solution was found.
    DeadlineExceeded,
    /// The cooperative stop flag was raised.
    Stopped,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Exhausted => {
                write!(f, "frontier exhausted without a complete assignment")
            }
            SearchError::ExpansionBudgetExceeded => write!(f, "expansion budget exceeded"),
            SearchError::DeadlineExceeded => write!(f, "deadline exceeded"),
            SearchError::Stopped => write!(f, "stopped by cooperative flag"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Resource guards for a search invocation.
///
/// Frontier growth is worst-case exponential in the task count, so an
/// unguarded run on an adversarial instance can consume unbounded memory
/// and time. Each limit is checked once per loop iteration; tripping one
/// aborts the search with a distinct [`SearchError`], without a partial
/// result.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    max_expansions: Option<u64>,
    deadline: Option<Instant>,
    stop: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// No limits: the search runs to completion or exhaustion.
    pub fn none() -> Self {
        Self::default()
    }

    /// Caps the number of accepted expansions.
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Sets an absolute wall-clock cutoff.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a wall-clock cutoff relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Registers a cooperative stop flag, polled once per iteration.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    fn check(&self, expanded: u64) -> Result<(), SearchError> {
        if let Some(flag) = &self.stop {
            if flag.load(AtomicOrdering::Relaxed) {
                return Err(SearchError::Stopped);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(SearchError::DeadlineExceeded);
            }
        }
        if let Some(max) = self.max_expansions {
            if expanded >= max {
                return Err(SearchError::ExpansionBudgetExceeded);
            }
        }
        Ok(())
    }
}

/// Counters describing one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates accepted and expanded.
    pub expanded: u64,
    /// Successor states pushed into the frontier (root included).
    pub generated: u64,
    /// Candidates the dominance table rejected at pop time.
    pub discarded: u64,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// Best-first solver for minimum-makespan assignments.
///
/// Runs A* over partial-assignment states with a pluggable [`Heuristic`]
/// (default: [`SlackHeuristic`]) and optional [`SearchLimits`].
///
/// # Example
///
/// ```
/// use u_makespan::models::Instance;
/// use u_makespan::search::{AstarSolver, SearchLimits};
///
/// let instance = Instance::new(2, vec![5, 5, 3]);
/// let solver = AstarSolver::new()
///     .with_limits(SearchLimits::none().with_max_expansions(100_000));
///
/// let solution = solver.solve(&instance).unwrap();
/// assert_eq!(solution.makespan(), 8);
/// ```
pub struct AstarSolver {
    heuristic: Arc<dyn Heuristic>,
    limits: SearchLimits,
}

impl AstarSolver {
    /// Creates a solver with the slack heuristic and no limits.
    pub fn new() -> Self {
        Self {
            heuristic: Arc::new(SlackHeuristic),
            limits: SearchLimits::none(),
        }
    }

    /// Replaces the heuristic estimator.
    pub fn with_heuristic<H: Heuristic + 'static>(mut self, heuristic: H) -> Self {
        self.heuristic = Arc::new(heuristic);
        self
    }

    /// Sets the resource guards.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Finds a minimum-makespan complete assignment.
    ///
    /// The caller is expected to have run
    /// [`validate_instance`](crate::validation::validate_instance) first;
    /// an instance without machines ends in [`SearchError::Exhausted`].
    pub fn solve(&self, instance: &Instance) -> Result<Solution, SearchError> {
        self.solve_with_stats(instance).map(|(solution, _)| solution)
    }

    /// Like [`solve`](Self::solve), also returning search counters.
    #[tracing::instrument(level = "debug", name = "A* Search", skip(self, instance))]
    pub fn solve_with_stats(
        &self,
        instance: &Instance,
    ) -> Result<(Solution, SearchStats), SearchError> {
        let tasks = instance.tasks();
        let root = instance.initial_state();

        let mut frontier = Frontier::new();
        let mut dominance = DominanceTable::new();
        let mut stats = SearchStats::default();

        let g = root.makespan();
        let f = g + self.heuristic.estimate(&root);
        frontier.push(root, g, f);
        stats.generated += 1;

        while let Some(entry) = frontier.pop() {
            if entry.state.is_complete() {
                stats.peak_frontier = frontier.peak_len();
                tracing::debug!(
                    "A*: goal reached with makespan {} ({} expanded, {} generated, {} discarded)",
                    entry.g,
                    stats.expanded,
                    stats.generated,
                    stats.discarded
                );
                return Ok((Solution::from_state(&entry.state, &tasks), stats));
            }

            if let Err(err) = self.limits.check(stats.expanded) {
                tracing::debug!("A*: aborting after {} expansions ({})", stats.expanded, err);
                return Err(err);
            }

            let key = entry.state.key();
            if !dominance.admits(&key, entry.g) {
                stats.discarded += 1;
                continue;
            }
            dominance.record(key, entry.g);
            stats.expanded += 1;

            for successor in entry.state.successors() {
                let g = successor.makespan();
                let f = g + self.heuristic.estimate(&successor);
                frontier.push(successor, g, f);
                stats.generated += 1;
            }

            if stats.expanded % 100_000 == 0 {
                tracing::trace!(
                    "A*: {} expanded, frontier {}, closed {}",
                    stats.expanded,
                    frontier.len(),
                    dominance.len()
                );
            }
        }

        stats.peak_frontier = frontier.peak_len();
        tracing::warn!(
            "A*: frontier exhausted after {} expansions without a complete assignment",
            stats.expanded
        );
        Err(SearchError::Exhausted)
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AstarSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstarSolver")
            .field("heuristic", &self.heuristic.name())
            .field("limits", &self.limits)
            .finish()
    }
}
