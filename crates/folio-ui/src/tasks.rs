// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Cancellable task bookkeeping.

Every recurring timer or animation-frame loop runs under a [`TaskId`]. Starting
a task hands out a [`TaskTicket`] carrying a generation number; timer and
frame callbacks echo the ticket back, and callbacks for a stopped or restarted
task are recognised as stale and ignored.
*/

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Long-running behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskId {
    LoadingFade,
    LoadingHide,
    Typewriter,
    Counter(usize),
    CursorLoop,
    SmoothScroll,
    NavbarFlush,
}

/// A specific run of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskTicket {
    pub id: TaskId,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct TaskRegistry {
    live: HashMap<TaskId, u64>,
    next_generation: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a task. A restart invalidates the previous ticket,
    /// which is returned so its pending callback can be cancelled.
    pub fn start(&mut self, id: TaskId) -> (TaskTicket, Option<TaskTicket>) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let replaced = self
            .live
            .insert(id, generation)
            .map(|generation| TaskTicket { id, generation });
        (TaskTicket { id, generation }, replaced)
    }

    /// Stop a task, returning its ticket if it was live
    pub fn stop(&mut self, id: TaskId) -> Option<TaskTicket> {
        self.live
            .remove(&id)
            .map(|generation| TaskTicket { id, generation })
    }

    pub fn is_current(&self, ticket: TaskTicket) -> bool {
        self.live.get(&ticket.id) == Some(&ticket.generation)
    }

    pub fn is_running(&self, id: TaskId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Stop everything, in a stable order
    pub fn stop_all(&mut self) -> Vec<TaskTicket> {
        let mut tickets: Vec<TaskTicket> = self
            .live
            .drain()
            .map(|(id, generation)| TaskTicket { id, generation })
            .collect();
        tickets.sort_by_key(|t| t.id);
        tickets
    }
}
