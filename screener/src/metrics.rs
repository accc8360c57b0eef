// ---------------------------------------------------------------------------
// Screening metrics helpers
// ---------------------------------------------------------------------------
//
// Recorder installation is left to the host process; without one these are
// no-ops.

/// Increment once per completed screening with its outcome label
/// (`pass` or a reason code).
pub fn inc_screening(outcome: &'static str) {
    metrics::increment_counter!("screenings_total", "outcome" => outcome);
}

/// Increment per oracle query with `clean`, `sanctioned`, `error` or `timeout`.
pub fn inc_oracle_call(result: &'static str) {
    metrics::increment_counter!("oracle_calls_total", "result" => result);
}

/// Wall-clock time spent waiting on the oracle, including timed-out calls.
pub fn record_oracle_latency(secs: f64) {
    metrics::histogram!("oracle_latency_seconds", secs);
}

/// Track the size of the denylist the screener was built with.
pub fn set_denylist_size(n: usize) {
    metrics::gauge!("denylist_entries", n as f64);
}
