/// Distributed-trace stand-in; both fields are opaque identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_parent: String,
    pub trace_state: String,
}

/// Retry stand-in with fixed counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryContext {
    pub retry_count: u32,
    pub max_retry_count: u32,
}

impl RetryContext {
    pub const FAKE: RetryContext = RetryContext {
        retry_count: 0,
        max_retry_count: 3,
    };
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::FAKE
    }
}
