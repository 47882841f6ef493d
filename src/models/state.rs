//! Scheduling state and transitions.
//!
//! A `State` is one node of the assignment search space: the per-machine
//! loads, the tasks still pending, and the ordered history of decisions
//! that produced it. States are immutable once built — the only way to
//! derive a new one is [`State::assign`], which returns a fresh value and
//! leaves its input untouched, so states can be shared freely between
//! search-tree branches.
//!
//! # Identity
//!
//! Two states reached by different decision orders are the same search-
//! space node whenever their pending sets and their load profiles agree.
//! [`State::key`] captures exactly that: pending task ids sorted, machine
//! loads as a sorted multiset (so machines with equal loads are
//! interchangeable). `history` is provenance, never identity, and `State`
//! deliberately does not implement `PartialEq`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Machine, Task};

/// A single task-to-machine decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The assigned task.
    pub task_id: u32,
    /// The machine it was placed on.
    pub machine_id: u32,
}

/// Which kind of identifier a failed transition referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReferenceKind {
    /// The task id is not in the state's pending collection.
    TaskNotFound,
    /// The machine id does not exist in the state.
    MachineNotFound,
}

/// Error raised when a transition names an unknown task or machine.
///
/// A malformed request must be reported, not absorbed: silently returning
/// an unchanged copy would be indistinguishable from a true no-op and
/// would corrupt the search's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidReference {
    /// Error category.
    pub kind: InvalidReferenceKind,
    /// The offending identifier.
    pub id: u32,
}

impl InvalidReference {
    fn task_not_found(id: u32) -> Self {
        Self {
            kind: InvalidReferenceKind::TaskNotFound,
            id,
        }
    }

    fn machine_not_found(id: u32) -> Self {
        Self {
            kind: InvalidReferenceKind::MachineNotFound,
            id,
        }
    }
}

impl fmt::Display for InvalidReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InvalidReferenceKind::TaskNotFound => {
                write!(f, "Task {} is not pending in this state", self.id)
            }
            InvalidReferenceKind::MachineNotFound => {
                write!(f, "Machine {} does not exist in this state", self.id)
            }
        }
    }
}

impl std::error::Error for InvalidReference {}

/// Canonical identity of a state for dominance pruning.
///
/// Pending task ids are sorted, and machine loads are treated as a sorted
/// multiset rather than an id-indexed sequence, so symmetric machines
/// collapse into a single entry in the dominance table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pending: Vec<u32>,
    loads: Vec<u64>,
}

/// A partial (or complete) assignment of tasks to machines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    machines: Vec<Machine>,
    pending: Vec<Task>,
    history: Vec<Assignment>,
}

impl State {
    /// Creates a root state: the given machines and tasks, empty history.
    pub fn new(machines: Vec<Machine>, pending: Vec<Task>) -> Self {
        Self {
            machines,
            pending,
            history: Vec::new(),
        }
    }

    /// Machines in fixed id order.
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Tasks not yet assigned.
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Decisions made to reach this state, in order.
    pub fn history(&self) -> &[Assignment] {
        &self.history
    }

    /// Whether every task has been assigned.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total task count: pending plus already assigned.
    pub fn task_count(&self) -> usize {
        self.pending.len() + self.history.len()
    }

    /// Actual cost g: the maximum busy time across machines.
    ///
    /// Defined for every state, not only terminal ones. Monotonically
    /// non-decreasing along any chain of transitions, which is what makes
    /// lazy dominance pruning sound.
    pub fn makespan(&self) -> u64 {
        self.machines.iter().map(|m| m.busy_time).max().unwrap_or(0)
    }

    /// Sum of pending task durations.
    pub fn pending_total(&self) -> u64 {
        self.pending.iter().map(|t| t.duration).sum()
    }

    /// Assigns one pending task to one machine, producing the successor
    /// state. The input state is left unmodified.
    ///
    /// Same inputs always produce the same output state. Unknown ids are
    /// an [`InvalidReference`] error, never a silent unchanged copy.
    pub fn assign(&self, task_id: u32, machine_id: u32) -> Result<State, InvalidReference> {
        let task_idx = self
            .pending
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| InvalidReference::task_not_found(task_id))?;
        let machine_idx = self
            .machines
            .iter()
            .position(|m| m.id == machine_id)
            .ok_or_else(|| InvalidReference::machine_not_found(machine_id))?;
        Ok(self.apply(task_idx, machine_idx))
    }

    /// All states reachable by assigning one pending task to one machine.
    ///
    /// The full Cartesian product pending × machines, lazily produced.
    /// No symmetry reduction happens here; deduplication is the dominance
    /// table's job, via [`State::key`].
    pub fn successors(&self) -> impl Iterator<Item = State> + '_ {
        (0..self.pending.len()).flat_map(move |task_idx| {
            (0..self.machines.len()).map(move |machine_idx| self.apply(task_idx, machine_idx))
        })
    }

    /// Canonical identity for dominance pruning. See [`StateKey`].
    pub fn key(&self) -> StateKey {
        let mut pending: Vec<u32> = self.pending.iter().map(|t| t.id).collect();
        pending.sort_unstable();
        let mut loads: Vec<u64> = self.machines.iter().map(|m| m.busy_time).collect();
        loads.sort_unstable();
        StateKey { pending, loads }
    }

    /// Index-based transition. Infallible: both indices come from this
    /// state's own collections.
    fn apply(&self, task_idx: usize, machine_idx: usize) -> State {
        let task = self.pending[task_idx];
        let mut pending = self.pending.clone();
        pending.remove(task_idx);

        let mut machines = self.machines.clone();
        machines[machine_idx] = machines[machine_idx].loaded(task.duration);

        let mut history = self.history.clone();
        history.push(Assignment {
            task_id: task.id,
            machine_id: machines[machine_idx].id,
        });

        State {
            machines,
            pending,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> State {
        let machines = vec![Machine::new(1), Machine::new(2)];
        let tasks = vec![Task::new(1, 5), Task::new(2, 5), Task::new(3, 3)];
        State::new(machines, tasks)
    }

    #[test]
    fn test_root_state() {
        let s = sample_state();
        assert_eq!(s.machines().len(), 2);
        assert_eq!(s.pending().len(), 3);
        assert!(s.history().is_empty());
        assert!(!s.is_complete());
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.pending_total(), 13);
    }

    #[test]
    fn test_assign_moves_task() {
        let s = sample_state();
        let next = s.assign(2, 1).unwrap();

        assert_eq!(next.pending().len(), 2);
        assert!(next.pending().iter().all(|t| t.id != 2));
        assert_eq!(
            next.history(),
            &[Assignment {
                task_id: 2,
                machine_id: 1
            }]
        );
        assert_eq!(next.machines()[0].busy_time, 5);
        assert_eq!(next.machines()[1].busy_time, 0);
        // Input state untouched
        assert_eq!(s.pending().len(), 3);
        assert_eq!(s.makespan(), 0);
    }

    #[test]
    fn test_assign_unknown_task() {
        let s = sample_state();
        let err = s.assign(99, 1).unwrap_err();
        assert_eq!(err.kind, InvalidReferenceKind::TaskNotFound);
        assert_eq!(err.id, 99);
    }

    #[test]
    fn test_assign_unknown_machine() {
        let s = sample_state();
        let err = s.assign(1, 99).unwrap_err();
        assert_eq!(err.kind, InvalidReferenceKind::MachineNotFound);
        assert_eq!(err.id, 99);
    }

    #[test]
    fn test_assign_already_assigned_task() {
        let s = sample_state();
        let next = s.assign(1, 1).unwrap();
        let err = next.assign(1, 2).unwrap_err();
        assert_eq!(err.kind, InvalidReferenceKind::TaskNotFound);
    }

    #[test]
    fn test_successor_count_is_cartesian_product() {
        let s = sample_state();
        assert_eq!(s.successors().count(), 3 * 2);

        let one_assigned = s.assign(1, 1).unwrap();
        assert_eq!(one_assigned.successors().count(), 2 * 2);
    }

    #[test]
    fn test_makespan_is_monotone_over_successors() {
        let s = sample_state().assign(1, 1).unwrap();
        for succ in s.successors() {
            assert!(succ.makespan() >= s.makespan());
        }
    }

    #[test]
    fn test_conservation_along_transitions() {
        let s = sample_state();
        let mut current = s;
        while let Some(task) = current.pending().first().copied() {
            current = current.assign(task.id, 1).unwrap();
            let mut ids: Vec<u32> = current
                .pending()
                .iter()
                .map(|t| t.id)
                .chain(current.history().iter().map(|a| a.task_id))
                .collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3]);
            assert_eq!(current.task_count(), 3);
        }
        assert!(current.is_complete());
    }

    #[test]
    fn test_load_consistency() {
        let s = sample_state();
        let done = s
            .assign(1, 1)
            .unwrap()
            .assign(3, 1)
            .unwrap()
            .assign(2, 2)
            .unwrap();

        for machine in done.machines() {
            let from_history: u64 = done
                .history()
                .iter()
                .filter(|a| a.machine_id == machine.id)
                .map(|a| match a.task_id {
                    1 => 5,
                    2 => 5,
                    3 => 3,
                    _ => unreachable!(),
                })
                .sum();
            assert_eq!(machine.busy_time, from_history);
        }
        assert_eq!(done.makespan(), 8);
    }

    #[test]
    fn test_key_ignores_history() {
        let s = sample_state();
        // Reach the same pending set and load profile by two orders.
        let a = s.assign(1, 1).unwrap().assign(2, 2).unwrap();
        let b = s.assign(2, 2).unwrap().assign(1, 1).unwrap();
        assert_ne!(a.history(), b.history());
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_collapses_symmetric_machines() {
        let s = sample_state();
        // Same task on either idle machine → identical load multiset.
        let on_first = s.assign(1, 1).unwrap();
        let on_second = s.assign(1, 2).unwrap();
        assert_eq!(on_first.key(), on_second.key());
    }

    #[test]
    fn test_key_distinguishes_different_loads() {
        let s = sample_state();
        let a = s.assign(1, 1).unwrap(); // loads {5, 0}
        let b = s.assign(3, 1).unwrap(); // loads {3, 0}
        assert_ne!(a.key(), b.key());
    }
}
