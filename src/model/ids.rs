//! Identity generation for newly created entities.
//!
//! Entities never mint their own ids. Constructors take an [`IdGenerator`]
//! so production code can use random UUIDs while tests get stable,
//! predictable ids.

use std::cell::Cell;

/// Source of fresh, opaque, unique identifiers.
pub trait IdGenerator {
    /// Produce the next identifier. Never returns the same value twice.
    fn next(&self) -> String;
}

/// Random v4 UUIDs, rendered in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic ids of the form `{prefix}-{n}`, counting from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Cell::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next(&self) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        format!("{}-{}", self.prefix, n)
    }
}
