use std::{collections::HashMap, fmt};

use crate::interpreter::value::number::Number;

/// The flat runtime store: one binding per assigned variable name.
///
/// Names are kept exactly as written in the assignment. Procedure-local
/// declarations get no separate namespace here; since procedure bodies never
/// run, only assignments reachable from the program's own statement list
/// ever write to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalMemory {
    bindings: HashMap<String, Number>,
}

impl GlobalMemory {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Number> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn assign(&mut self, name: &str, value: Number) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// `true` if nothing has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Number)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the bindings sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Number)> {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

impl fmt::Display for GlobalMemory {
    /// One `name = value` line per binding, sorted by name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.sorted() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
