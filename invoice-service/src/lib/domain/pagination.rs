use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Offset must not be negative, got {0}")]
    NegativeOffset(i64),

    #[error("Limit must be between 1 and {max}, got {actual}")]
    LimitOutOfRange { max: i64, actual: i64 },
}

/// Offset/limit window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    pub const MAX_LIMIT: i64 = 100;

    pub fn new(offset: i64, limit: i64) -> Result<Self, PageError> {
        if offset < 0 {
            return Err(PageError::NegativeOffset(offset));
        }
        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(PageError::LimitOutOfRange {
                max: Self::MAX_LIMIT,
                actual: limit,
            });
        }
        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of pages of `limit` items needed to show `total` items.
    pub fn count_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}
