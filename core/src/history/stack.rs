//! Bounded navigation history shared by the built-in backends

use crate::location::Location;

/// Default number of history entries to keep
pub const DEFAULT_CAPACITY: usize = 50;

/// Navigation entries with a cursor on the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<Location>,
    position: usize,
    capacity: usize,
}

impl HistoryStack {
    /// Create a stack holding only `initial`; capacity is at least one entry
    pub fn new(initial: Location, capacity: usize) -> Self {
        Self {
            entries: vec![initial],
            position: 0,
            capacity: capacity.max(1),
        }
    }

    /// Current entry
    pub fn current(&self) -> &Location {
        &self.entries[self.position]
    }

    /// Add an entry after the current one, dropping any forward entries
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location);

        // Evict the oldest entries once over capacity
        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
        }

        self.position = self.entries.len() - 1;
    }

    /// Overwrite the current entry
    pub fn replace(&mut self, location: Location) {
        self.entries[self.position] = location;
    }

    /// Whether moving the cursor by `delta` stays inside the stack
    pub fn can_go(&self, delta: isize) -> bool {
        let target = self.position as isize + delta;
        target >= 0 && (target as usize) < self.entries.len()
    }

    /// Move the cursor by `delta`; out-of-range moves are ignored
    pub fn go(&mut self, delta: isize) -> bool {
        if !self.can_go(delta) {
            return false;
        }
        self.position = (self.position as isize + delta) as usize;
        true
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> Location {
        Location::parse(path).unwrap()
    }

    #[test]
    fn test_push_and_go() {
        let mut stack = HistoryStack::new(Location::root(), DEFAULT_CAPACITY);
        assert!(!stack.can_go(-1));

        stack.push(loc("/login"));
        assert_eq!(stack.current(), "/login");
        assert!(stack.can_go(-1));
        assert!(!stack.can_go(1));

        assert!(stack.go(-1));
        assert_eq!(stack.current(), "/");
        assert!(stack.go(1));
        assert_eq!(stack.current(), "/login");
        assert!(!stack.go(5));
        assert_eq!(stack.current(), "/login");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut stack = HistoryStack::new(Location::root(), DEFAULT_CAPACITY);
        stack.push(loc("/a"));
        stack.push(loc("/b"));
        stack.go(-2);
        stack.push(loc("/c"));

        assert_eq!(stack.entries(), ["/", "/c"]);
        assert!(!stack.can_go(1));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut stack = HistoryStack::new(Location::root(), 3);
        for path in ["/a", "/b", "/c", "/d"] {
            stack.push(loc(path));
        }

        assert_eq!(stack.entries(), ["/b", "/c", "/d"]);
        assert_eq!(stack.position(), 2);
        assert_eq!(stack.current(), "/d");
    }

    #[test]
    fn test_zero_capacity_keeps_current_entry() {
        let mut stack = HistoryStack::new(Location::root(), 0);
        assert_eq!(stack.capacity(), 1);

        stack.push(loc("/login"));
        assert_eq!(stack.entries(), ["/login"]);
        assert!(!stack.can_go(-1));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut stack = HistoryStack::new(Location::root(), DEFAULT_CAPACITY);
        stack.push(loc("/a"));
        stack.replace(loc("/b"));

        assert_eq!(stack.entries(), ["/", "/b"]);
        assert_eq!(stack.position(), 1);
    }
}
