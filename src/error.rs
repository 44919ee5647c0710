use std::fmt;

/// Why a deal was rejected before anything was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealError {
    /// The interval holds fewer values than were requested.
    RangeTooSmall { requested: usize },
    /// `origin + count - 1` does not fit the value type.
    SpanOverflow,
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::RangeTooSmall { requested } => {
                write!(f, "range holds fewer than {} values", requested)
            }
            DealError::SpanOverflow => write!(f, "range end overflows the value type"),
        }
    }
}

impl std::error::Error for DealError {}
