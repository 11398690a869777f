//! Process-wide logging setup and the audit trail of visitor events.

/// Initialize process-wide observability with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Structured records of domain events.
pub mod audit;
