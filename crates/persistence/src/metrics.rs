//! Contact store timings and pool gauges.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

const QUERY_DURATION: &str = "database_query_duration_seconds";
const CONNECTIONS_ACTIVE: &str = "database_connections_active";
const CONNECTIONS_IDLE: &str = "database_connections_idle";
const CONNECTIONS_TOTAL: &str = "database_connections_total";

/// Snapshot of how many pooled connections are open and how many are busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolUsage {
    pub total: usize,
    pub idle: usize,
}

impl PoolUsage {
    pub fn of(pool: &PgPool) -> Self {
        Self {
            total: pool.size() as usize,
            idle: pool.num_idle(),
        }
    }

    pub fn active(&self) -> usize {
        self.total.saturating_sub(self.idle)
    }
}

/// Publish the pool gauges. The health endpoint calls this on every check.
pub fn record_pool_metrics(pool: &PgPool) {
    let usage = PoolUsage::of(pool);
    gauge!(CONNECTIONS_ACTIVE).set(usage.active() as f64);
    gauge!(CONNECTIONS_IDLE).set(usage.idle as f64);
    gauge!(CONNECTIONS_TOTAL).set(usage.total as f64);
}

/// Wall-clock timer for one `ContactRepository` call, labelled with the
/// operation name (`create_contact`, `update_contact`, ...).
pub struct QueryTimer {
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    pub fn record(self) {
        histogram!(QUERY_DURATION, "query" => self.operation)
            .record(self.start.elapsed().as_secs_f64());
    }
}
