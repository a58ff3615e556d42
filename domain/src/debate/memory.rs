//! Bounded conversational memory for a debate agent.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries an agent remembers.
pub const DEFAULT_MEMORY_LIMIT: usize = 10;

/// Who authored a memory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryRole {
    Human,
    Ai,
}

impl MemoryRole {
    pub fn label(&self) -> &'static str {
        match self {
            MemoryRole::Human => "Human",
            MemoryRole::Ai => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub role: MemoryRole,
    pub content: String,
}

/// Fixed-capacity FIFO of prior turns; the oldest entry is evicted once
/// the capacity is exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentMemory {
    entries: VecDeque<MemoryEntry>,
    capacity: usize,
}

impl AgentMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.entries.iter()
    }

    pub fn record(&mut self, content: impl Into<String>, role: MemoryRole) {
        self.entries.push_back(MemoryEntry {
            role,
            content: content.into(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// One `Role: content` line per entry, oldest first.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "No history available".to_string();
        }
        self.entries
            .iter()
            .map(|e| format!("{}: {}", e.role.label(), e.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for AgentMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_LIMIT)
    }
}
