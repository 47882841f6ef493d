//! Built-in heuristic estimators.
//!
//! # Estimators
//!
//! - [`SlackHeuristic`]: average remaining load minus average idle slack
//! - [`ZeroHeuristic`]: constant zero (uniform-cost fallback)
//!
//! # Reference
//! Pearl (1984), "Heuristics: Intelligent Search Strategies", Ch. 1

use super::{Cost, Heuristic};
use crate::models::State;

/// Slack-based estimator.
///
/// With `M` machines, remaining pending duration `R`, current makespan `C`
/// and total idle slack `S = Σ (C - busy_time)`:
///
/// ```text
/// h = max(0, round(R/M - S/M))
/// ```
///
/// If the remaining work, spread evenly, fits within existing slack, no
/// makespan increase is estimated; otherwise the evenly-spread excess is.
/// Rounding to the nearest integer can exceed the fractional bound by up
/// to 0.5 — it stays within the integral lower bound `ceil((R-S)/M)`, but
/// callers wanting an estimator that is a lower bound by construction can
/// use [`ZeroHeuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackHeuristic;

impl Heuristic for SlackHeuristic {
    fn name(&self) -> &'static str {
        "SLACK"
    }

    fn estimate(&self, state: &State) -> Cost {
        let machine_count = state.machines().len();
        if machine_count == 0 {
            return 0;
        }

        let makespan = state.makespan();
        let remaining: u64 = state.pending_total();
        let slack: u64 = state
            .machines()
            .iter()
            .map(|m| makespan - m.busy_time)
            .sum();

        let machines = machine_count as f64;
        let excess = remaining as f64 / machines - slack as f64 / machines;
        if excess <= 0.0 {
            0
        } else {
            excess.round() as Cost
        }
    }

    fn description(&self) -> &'static str {
        "Average remaining load beyond average idle slack"
    }
}

/// Constant-zero estimator.
///
/// Degenerates A* to uniform-cost search: admissible by construction,
/// explores strictly more states than [`SlackHeuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn name(&self) -> &'static str {
        "ZERO"
    }

    fn estimate(&self, _state: &State) -> Cost {
        0
    }

    fn description(&self) -> &'static str {
        "Constant zero (uniform-cost search)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Machine, State, Task};

    fn state(loads: &[u64], pending: &[u64]) -> State {
        let machines = loads
            .iter()
            .enumerate()
            .map(|(i, &busy)| Machine {
                id: i as u32 + 1,
                busy_time: busy,
            })
            .collect();
        let tasks = pending
            .iter()
            .enumerate()
            .map(|(i, &d)| Task::new(i as u32 + 1, d))
            .collect();
        State::new(machines, tasks)
    }

    #[test]
    fn test_slack_root_state() {
        // All idle: R = 13, S = 0, M = 2 → round(6.5) = 7
        let s = state(&[0, 0], &[5, 5, 3]);
        assert_eq!(SlackHeuristic.estimate(&s), 7);
    }

    #[test]
    fn test_slack_work_fits_in_slack() {
        // Loads {4, 0}: C = 4, S = 4, R = 2 → round(1 - 2) clamped to 0
        let s = state(&[4, 0], &[2]);
        assert_eq!(SlackHeuristic.estimate(&s), 0);
    }

    #[test]
    fn test_slack_excess_beyond_slack() {
        // Loads {2, 2}: C = 2, S = 0, R = 6 → round(3) = 3
        let s = state(&[2, 2], &[4, 2]);
        assert_eq!(SlackHeuristic.estimate(&s), 3);
    }

    #[test]
    fn test_slack_rounds_half_up() {
        // Loads {1, 1}: C = 1, S = 0, R = 1 → round(0.5) = 1
        let s = state(&[1, 1], &[1]);
        assert_eq!(SlackHeuristic.estimate(&s), 1);
    }

    #[test]
    fn test_slack_zero_for_complete_state() {
        let s = state(&[5, 3], &[]);
        assert_eq!(SlackHeuristic.estimate(&s), 0);
    }

    #[test]
    fn test_slack_no_machines() {
        let s = state(&[], &[3, 3]);
        assert_eq!(SlackHeuristic.estimate(&s), 0);
    }

    #[test]
    fn test_zero_heuristic() {
        let s = state(&[0, 0], &[5, 5, 3]);
        assert_eq!(ZeroHeuristic.estimate(&s), 0);
        assert_eq!(ZeroHeuristic.name(), "ZERO");
    }
}
