//! Extension traits for annotating errors without `map_err` boilerplate.
//!
//! - [`ErrorExt`]: call `.annotate()` on any error value
//! - [`ResultExt`]: call `.wrap_err()` on any `Result` whose error converts to [`BoxError`]

use core::error::Error;

use crate::annotated::{AnnotatedError, BoxError};

// ============================================================================
// ErrorExt - .annotate() on error values
// ============================================================================

/// Extension trait that allows calling `.annotate()` on error types.
///
/// Implemented for every `Error + Send + Sync + 'static`, including
/// [`AnnotatedError`] itself (which adds another layer to the chain).
///
/// ```rust
/// use errline::ErrorExt;
/// use std::io;
///
/// let err = io::Error::new(io::ErrorKind::NotFound, "no such file").annotate();
/// assert!(err.to_string().starts_with("no such file "));
/// ```
pub trait ErrorExt: Sized {
    /// Wrap this error and record the caller's location.
    #[track_caller]
    fn annotate(self) -> AnnotatedError;
}

impl<E: Error + Send + Sync + 'static> ErrorExt for E {
    #[track_caller]
    #[inline]
    fn annotate(self) -> AnnotatedError {
        AnnotatedError::wrap(self)
    }
}

// ============================================================================
// ResultExt - .wrap_err() on Results
// ============================================================================

/// Extension trait for annotating the error side of a `Result`.
///
/// `Ok` passes through untouched and no location is captured.
///
/// ```rust
/// use errline::{AnnotatedError, ResultExt};
///
/// fn parse(s: &str) -> Result<u32, AnnotatedError> {
///     let n = s.parse::<u32>().wrap_err()?;
///     Ok(n)
/// }
///
/// assert_eq!(parse("7").unwrap(), 7);
/// let err = parse("x").unwrap_err();
/// assert!(err.to_string().starts_with("invalid digit found in string "));
/// ```
pub trait ResultExt<T> {
    /// Annotate the error with the caller's location if this is `Err`.
    #[track_caller]
    fn wrap_err(self) -> Result<T, AnnotatedError>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    #[inline]
    fn wrap_err(self) -> Result<T, AnnotatedError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(AnnotatedError::wrap(e)),
        }
    }
}
