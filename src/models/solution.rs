//! Solution model.
//!
//! A solution is a complete assignment of every task to a machine,
//! captured from the terminal search state together with the original
//! task list. It answers the reporting questions: which task went where,
//! what each machine carries, and the final makespan.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::{Assignment, Machine, State, Task};

/// A complete minimum-makespan assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Decisions in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Final machine loads, in fixed id order.
    pub machines: Vec<Machine>,
    /// The scheduled tasks (for duration lookups), in input order.
    pub tasks: Vec<Task>,
}

impl Solution {
    /// Captures a solution from a terminal state and the instance's tasks.
    pub fn from_state(state: &State, tasks: &[Task]) -> Self {
        Self {
            assignments: state.history().to_vec(),
            machines: state.machines().to_vec(),
            tasks: tasks.to_vec(),
        }
    }

    /// The makespan: maximum busy time across machines.
    pub fn makespan(&self) -> u64 {
        self.machines.iter().map(|m| m.busy_time).max().unwrap_or(0)
    }

    /// Number of assignment decisions.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Assignments placed on a given machine, in assignment order.
    pub fn assignments_for_machine(&self, machine_id: u32) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .collect()
    }

    /// Task ids assigned to a given machine, in assignment order.
    pub fn tasks_for_machine(&self, machine_id: u32) -> Vec<u32> {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .map(|a| a.task_id)
            .collect()
    }

    /// Durations of the tasks on a given machine, in assignment order.
    pub fn durations_for_machine(&self, machine_id: u32) -> Vec<u64> {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .filter_map(|a| self.duration_of(a.task_id))
            .collect()
    }

    /// The machine a task was assigned to.
    pub fn machine_for_task(&self, task_id: u32) -> Option<u32> {
        self.assignments
            .iter()
            .find(|a| a.task_id == task_id)
            .map(|a| a.machine_id)
    }

    /// Final load of a machine.
    pub fn load_of(&self, machine_id: u32) -> Option<u64> {
        self.machines
            .iter()
            .find(|m| m.id == machine_id)
            .map(|m| m.busy_time)
    }

    /// Machine utilization: busy time over makespan.
    ///
    /// Returns `None` for an unknown machine or a zero makespan.
    pub fn utilization_of(&self, machine_id: u32) -> Option<f64> {
        let makespan = self.makespan();
        if makespan == 0 {
            return None;
        }
        self.load_of(machine_id)
            .map(|busy| busy as f64 / makespan as f64)
    }

    /// Duration of a task by id.
    pub fn duration_of(&self, task_id: u32) -> Option<u64> {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .map(|t| t.duration)
    }
}
