use thiserror::Error;

/// Errors reported when configuring an
/// [`Intersector`](crate::Intersector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The overlap/touch tolerance must be a finite, non-negative
    /// number.
    #[error("tolerance must be finite and non-negative")]
    InvalidTolerance,
}
