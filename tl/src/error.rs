//! Task list error types

use thiserror::Error;

/// Errors raised by index-based [`TaskList`](crate::TaskList) operations.
///
/// Lookups by title and removals from an empty list are not errors; they
/// resolve to `None` or do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskListError {
    #[error("invalid index: {index}")]
    InvalidIndex { index: usize, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = TaskListError::InvalidIndex { index: 6, size: 3 };
        assert_eq!(err.to_string(), "invalid index: 6");
    }
}
