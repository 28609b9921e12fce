//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (scope-level timing of generation calls)
    pub log_performance: bool,

    /// Log every generated path (seed, length, last price)
    pub log_generation: bool,

    /// Log cursor lookups made by the sampler
    pub log_sampling: bool,
}

pub const LOG_FLAGS: LogFlags = LogFlags {
    log_performance: false,
    log_generation: true,
    log_sampling: false,
};

/// Read by `trace_time!`.
pub const LOG_PERFORMANCE: bool = LOG_FLAGS.log_performance;
