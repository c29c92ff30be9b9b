use thiserror::Error;

/// Errors reported by the fallible `BlockDeque` operations (`at`, `at_mut`,
/// `try_reserve`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for deque of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("row storage allocation failed")]
    AllocationFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::OutOfRange { index: 7, len: 3 };
        assert_eq!(e.to_string(), "index 7 out of range for deque of length 3");
        assert_eq!(
            Error::AllocationFailure.to_string(),
            "row storage allocation failed"
        );
    }
}
