//! The [`AnnotatedError`] type: an error plus the `file:line` where it was wrapped.
//!
//! This is the only error type the crate produces. It owns the error it wraps
//! (plain or already annotated), so repeated wrapping forms a chain that ends
//! at the root error.

use alloc::boxed::Box;
use core::error::Error;
use core::fmt;

use crate::location::FileLine;
use crate::message::Message;

/// Type-erased error accepted by every constructor.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

// ============================================================================
// AnnotatedError
// ============================================================================

/// An error annotated with the source location where it was wrapped.
///
/// ## Rendering
///
/// `Display` is the wrapped error's message, a space, then `file:line`:
///
/// ```rust
/// let err = errline::new("boom");
/// let line = line!() - 1;
/// assert_eq!(err.to_string(), format!("boom {}:{}", file!(), line));
/// ```
///
/// `Debug` shows the root error and every annotation, origin first:
///
/// ```text
/// Error: boom
///     at src/db.rs:12
///     at src/api.rs:40
/// ```
///
/// ## Immutability
///
/// Both fields are set once by the constructor. There are no setters, and
/// nothing is recomputed when the error is formatted.
pub struct AnnotatedError {
    error: BoxError,
    location: FileLine,
}

impl AnnotatedError {
    /// Annotate `error` with an explicit location.
    ///
    /// Most code wants [`wrap()`](crate::wrap) or [`wrap!`](crate::wrap!), which
    /// capture the caller's location. Use this when the location comes from
    /// somewhere else, e.g. [`FileLine::resolve`].
    #[inline]
    pub fn from_parts(error: impl Into<BoxError>, location: FileLine) -> Self {
        Self {
            error: error.into(),
            location,
        }
    }

    /// Annotate `error` with the caller's location.
    #[track_caller]
    #[inline]
    pub fn wrap(error: impl Into<BoxError>) -> Self {
        Self::from_parts(error, FileLine::caller())
    }

    /// Create a root [`Message`] error and annotate it with the caller's location.
    #[track_caller]
    #[inline]
    pub fn msg(msg: impl Into<Message>) -> Self {
        Self::from_parts(msg.into(), FileLine::caller())
    }

    /// Where this annotation was made.
    #[inline]
    pub fn location(&self) -> &FileLine {
        &self.location
    }

    /// The error this annotation wraps, one level down.
    ///
    /// For a double-wrapped error this is the inner [`AnnotatedError`], not the
    /// root. Use [`root_cause`](Self::root_cause) for the innermost error.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Consume the annotation and return the wrapped error.
    #[inline]
    pub fn into_cause(self) -> BoxError {
        self.error
    }

    /// The innermost error that is not an annotation.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        crate::root_cause(self)
    }

    /// Iterate the chain from this annotation down to the root error.
    ///
    /// ```rust
    /// use errline::{new, wrap};
    ///
    /// let err = wrap(wrap(new("boom")));
    /// assert_eq!(err.chain().count(), 4); // three annotations + root
    /// assert_eq!(err.chain().last().unwrap().to_string(), "boom");
    /// ```
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self as &(dyn Error + 'static)),
        }
    }

    /// Locations of every annotation in the chain, outermost first.
    pub fn locations(&self) -> impl Iterator<Item = &FileLine> + '_ {
        self.chain()
            .filter_map(|e| e.downcast_ref::<AnnotatedError>())
            .map(AnnotatedError::location)
    }

    /// Number of annotation layers (at least 1).
    pub fn depth(&self) -> usize {
        self.locations().count()
    }

    fn write_locations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(inner) = self.error.downcast_ref::<AnnotatedError>() {
            inner.write_locations(f)?;
        }
        writeln!(f, "    at {}", self.location)
    }
}

// ============================================================================
// Chain iterator
// ============================================================================

/// Iterator over an annotation chain, outermost first, ending at the root error.
///
/// Only annotation layers are followed; the root error's own
/// [`source()`](Error::source) is not walked.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .downcast_ref::<AnnotatedError>()
            .map(|a| a.cause() as &(dyn Error + 'static));
        Some(current)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.error, self.location)
    }
}

impl fmt::Debug for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.root_cause())?;
        self.write_locations(f)
    }
}

// ============================================================================
// Error impl
// ============================================================================

impl Error for AnnotatedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause() as &(dyn Error + 'static))
    }
}
