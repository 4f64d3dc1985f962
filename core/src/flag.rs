//! Observable boolean flag.
//!
//! # Design
//! A `ref`-style reactive boolean rendered as an explicit observer
//! abstraction: one value plus a list of registered change-listeners invoked
//! synchronously on mutation. Listeners fire only when the stored value
//! actually changes, so the idempotent setters never re-notify. Mutation
//! takes `&mut self`; the flag is owned by one scope and does not coordinate
//! concurrent writers.

use std::fmt;

type Listener = Box<dyn FnMut(bool)>;

/// A single observable boolean with `set_true` / `set_false` / `toggle`
/// mutators.
pub struct BooleanFlag {
    value: bool,
    listeners: Vec<Listener>,
}

impl BooleanFlag {
    pub fn new(initial: bool) -> Self {
        Self {
            value: initial,
            listeners: Vec::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.value
    }

    /// Register a change-listener. Listeners run synchronously, in
    /// registration order, receiving the new value.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set the value to `true` unconditionally. Idempotent.
    pub fn set_true(&mut self) {
        self.set(true);
    }

    /// Set the value to `false` unconditionally. Idempotent.
    pub fn set_false(&mut self) {
        self.set(false);
    }

    /// Flip the value. Calling twice restores the prior state.
    pub fn toggle(&mut self) {
        self.set(!self.value);
    }

    fn set(&mut self, value: bool) {
        if self.value == value {
            return;
        }
        self.value = value;
        for listener in &mut self.listeners {
            listener(value);
        }
    }
}

impl Default for BooleanFlag {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for BooleanFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanFlag")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
