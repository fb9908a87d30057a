//! Offset-based pagination utilities.

use serde::Deserialize;

/// Default number of rows skipped when `skip` is absent.
pub const DEFAULT_SKIP: u32 = 0;

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: u32 = 10;

/// Offset/limit page parameters taken from a query string.
///
/// Both values are unsigned, so negative or non-numeric input is rejected
/// while the query string is being deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OffsetPage {
    #[serde(default = "default_skip")]
    pub skip: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_skip() -> u32 {
    DEFAULT_SKIP
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for OffsetPage {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl OffsetPage {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Row offset, widened for binding as a SQL `BIGINT`.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// Row limit, widened for binding as a SQL `BIGINT`.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}
