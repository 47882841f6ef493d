//! Problem instance model.
//!
//! The external configuration boundary: a machine count and an ordered
//! sequence of task durations. Durations become tasks with ids `1..=N`
//! in input order; machines get ids `1..=M` with zero initial load.

use serde::{Deserialize, Serialize};

use super::{Machine, State, Task};

/// A parallel-machine scheduling instance.
///
/// # Example
/// ```
/// use u_makespan::models::Instance;
///
/// let instance = Instance::new(2, vec![5, 5, 3]);
/// assert_eq!(instance.task_count(), 3);
/// assert_eq!(instance.lower_bound(), 7); // ceil(13 / 2)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Number of identical machines.
    pub machine_count: u32,
    /// Task processing times, in input order.
    pub durations: Vec<u64>,
}

impl Instance {
    /// Creates a new instance.
    pub fn new(machine_count: u32, durations: Vec<u64>) -> Self {
        Self {
            machine_count,
            durations,
        }
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.durations.len()
    }

    /// Sum of all task durations.
    pub fn total_duration(&self) -> u64 {
        self.durations.iter().sum()
    }

    /// Tasks with ids `1..=N` in input order.
    pub fn tasks(&self) -> Vec<Task> {
        self.durations
            .iter()
            .enumerate()
            .map(|(i, &duration)| Task::new(i as u32 + 1, duration))
            .collect()
    }

    /// Idle machines with ids `1..=M`.
    pub fn machines(&self) -> Vec<Machine> {
        (1..=self.machine_count).map(Machine::new).collect()
    }

    /// The root search state: all machines idle, all tasks pending,
    /// empty history.
    pub fn initial_state(&self) -> State {
        State::new(self.machines(), self.tasks())
    }

    /// A trivial lower bound on the optimal makespan:
    /// `max(ceil(total / machines), longest task)`.
    ///
    /// Zero when the instance has no machines or no tasks.
    pub fn lower_bound(&self) -> u64 {
        if self.machine_count == 0 || self.durations.is_empty() {
            return 0;
        }
        let machines = u64::from(self.machine_count);
        let balanced = self.total_duration().div_ceil(machines);
        let longest = self.durations.iter().copied().max().unwrap_or(0);
        balanced.max(longest)
    }
}
