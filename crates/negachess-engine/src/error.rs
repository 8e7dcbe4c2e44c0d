//! Errors raised when setting up a search.

/// A search window or parameter the search cannot start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The window is empty or inverted.
    #[error("search window requires alpha < beta, got alpha {alpha} and beta {beta}")]
    InvertedWindow { alpha: i32, beta: i32 },

    /// A bound with no negation in `i32`.
    #[error("search bound {value} cannot be negated")]
    UnnegatableBound { value: i32 },
}

#[cfg(test)]
mod tests {
    use super::SearchError;

    #[test]
    fn display() {
        let err = SearchError::InvertedWindow { alpha: 5, beta: 5 };
        assert_eq!(
            err.to_string(),
            "search window requires alpha < beta, got alpha 5 and beta 5"
        );
    }
}
