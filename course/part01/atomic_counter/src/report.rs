use std::fmt;

/// The line `atomic_counter` prints once every worker has joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReport {
    pub value: usize,
}

impl fmt::Display for CounterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter value: {}", self.value)
    }
}

/// The line `lost_updates` prints: what the counter reached against what
/// every worker asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LostUpdatesReport {
    pub value: usize,
    pub expected: usize,
}

impl LostUpdatesReport {
    pub fn lost(&self) -> usize {
        self.expected.saturating_sub(self.value)
    }
}

impl fmt::Display for LostUpdatesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Counter value: {} (expected {}, lost {})",
            self.value,
            self.expected,
            self.lost()
        )
    }
}
