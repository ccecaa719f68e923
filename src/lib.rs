//! # errline - errors annotated with the file and line where they were wrapped
//!
//! ```text
//! connection refused src/db/pool.rs:88
//! ```
//!
//! Wrap any error with [`wrap()`] and it carries the caller's `file:line` from
//! then on. The original error stays reachable through [`cause()`], and its
//! message is always printed verbatim in front of the location.
//!
//! ```rust
//! use errline::{AnnotatedError, cause, wrap};
//! use std::io;
//!
//! fn connect() -> Result<(), AnnotatedError> {
//!     let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
//!     Err(wrap(refused))
//! }
//!
//! let err = connect().unwrap_err();
//! assert!(err.to_string().starts_with("connection refused "));
//! assert_eq!(cause(&err).to_string(), "connection refused");
//! ```
//!
//! ## Creating Annotated Errors
//!
//! | Entry point | Root error | Path form |
//! |-------------|------------|-----------|
//! | [`wrap(err)`](wrap()) | `err` | as the compiler emitted it |
//! | [`new("msg")`](new()) | [`Message`] | as the compiler emitted it |
//! | [`errorf!("{} items", n)`](errorf!) | [`Message`] | relative to the crate's parent dir |
//! | [`wrap!(err)`](wrap!) | `err` | relative to the crate's parent dir |
//! | [`err.annotate()`](ErrorExt::annotate) | `err` | as the compiler emitted it |
//! | [`result.wrap_err()`](ResultExt::wrap_err) | the `Err` value | as the compiler emitted it |
//!
//! Every entry point is `#[track_caller]` (or a macro), so the recorded line is
//! the line that called it, however deeply it is nested in closures.
//!
//! Absence stays absence: [`wrap_opt(None)`](wrap_opt) is `None` and
//! `Ok(v).wrap_err()` is `Ok(v)`, without capturing anything.
//!
//! ## Relative Paths
//!
//! Under Cargo, workspace files are already reported relative to the workspace
//! root, and every entry point keeps them exactly as they are. Files built from
//! elsewhere (registry crates, git checkouts) carry an absolute path. The macros
//! pass the calling crate's `CARGO_MANIFEST_DIR` to [`trim_to_crate`], which cuts
//! such a path down to the crate's own directory:
//!
//! ```rust
//! let dir = "/home/u/.cargo/registry/src/idx/app-1.2.0";
//! assert_eq!(
//!     errline::trim_to_crate(dir, "/home/u/.cargo/registry/src/idx/app-1.2.0/src/lib.rs"),
//!     "app-1.2.0/src/lib.rs",
//! );
//! assert_eq!(errline::trim_to_crate(dir, "crates/app/src/db.rs"), "crates/app/src/db.rs");
//! ```
//!
//! Host-supplied frames whose root is unknown go through [`trim_root`] instead
//! (see [`FileLine::resolve`]).
//!
//! ## Walking the Chain
//!
//! - [`cause()`] peels exactly one annotation, or returns a plain error unchanged.
//! - [`root_cause()`] peels every annotation down to the original error.
//! - [`AnnotatedError::chain()`] and [`AnnotatedError::locations()`] iterate the layers.
//!
//! ```rust
//! use errline::{cause, new, root_cause, wrap, AnnotatedError};
//!
//! let inner = new("boom");
//! let outer = wrap(inner);
//!
//! // One layer down is still annotated.
//! assert!(cause(&outer).is::<AnnotatedError>());
//! // The root is the plain message.
//! assert_eq!(root_cause(&outer).to_string(), "boom");
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod annotated;
mod ext;
mod location;
mod message;
pub mod prelude;

use core::error::Error;
use core::fmt;

pub use annotated::{AnnotatedError, BoxError, Chain};
pub use ext::{ErrorExt, ResultExt};
pub use location::{FileLine, Frame, trim_root, trim_to_crate};
pub use message::Message;

// ============================================================================
// Constructors
// ============================================================================

/// Wrap `err` and capture the caller's location.
///
/// Accepts any `Error + Send + Sync + 'static`, as well as `String` and `&str`.
///
/// The path is recorded as the compiler emitted it. Inside a crate built
/// outside the workspace (a registry dependency) that is absolute; use
/// [`wrap!`] there to get a crate-relative path.
///
/// ```rust
/// use errline::wrap;
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// let (err, line) = (wrap(Timeout), line!());
/// assert_eq!(err.to_string(), format!("timed out {}:{}", file!(), line));
/// ```
#[track_caller]
#[inline]
pub fn wrap(err: impl Into<BoxError>) -> AnnotatedError {
    AnnotatedError::wrap(err)
}

/// Wrap an optional error. `None` stays `None` and no location is captured.
///
/// ```rust
/// use errline::wrap_opt;
/// use std::io;
///
/// assert!(wrap_opt(None::<io::Error>).is_none());
/// assert!(wrap_opt(Some(io::Error::other("x"))).is_some());
/// ```
#[track_caller]
#[inline]
pub fn wrap_opt<E: Into<BoxError>>(err: Option<E>) -> Option<AnnotatedError> {
    match err {
        Some(e) => Some(AnnotatedError::wrap(e)),
        None => None,
    }
}

/// Create an error from a message and capture the caller's location.
///
/// Like [`wrap()`], the path is kept as the compiler emitted it. [`errorf!`]
/// records a crate-relative path for crates built outside the workspace.
///
/// ```rust
/// let (err, line) = (errline::new("boom"), line!());
/// assert_eq!(err.to_string(), format!("boom {}:{}", file!(), line));
/// ```
#[track_caller]
#[inline]
pub fn new(msg: impl Into<Message>) -> AnnotatedError {
    AnnotatedError::msg(msg)
}

/// Create an error from pre-formatted arguments and capture the caller's location.
///
/// Usually reached through [`errorf!`], which also trims absolute paths to the crate.
///
/// ```rust
/// let err = errline::errorf(format_args!("{} items", 3));
/// assert!(err.to_string().starts_with("3 items "));
/// ```
#[track_caller]
#[inline]
pub fn errorf(args: fmt::Arguments<'_>) -> AnnotatedError {
    AnnotatedError::msg(Message::from_args(args))
}

// ============================================================================
// Cause resolution
// ============================================================================

/// Peel one annotation off `err`.
///
/// If `err` is an [`AnnotatedError`], returns the error it directly wraps,
/// which may itself be annotated. Any other error is returned unchanged.
/// Absent errors stay absent with `Option::map`: `None.map(cause)` is `None`.
///
/// ```rust
/// use errline::{cause, wrap};
/// use std::io;
///
/// let plain = io::Error::other("disk full");
/// assert_eq!(cause(&plain).to_string(), "disk full");
///
/// let err = wrap(io::Error::other("disk full"));
/// assert_eq!(cause(&err).to_string(), "disk full");
/// ```
pub fn cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    match err.downcast_ref::<AnnotatedError>() {
        Some(annotated) => annotated.cause() as &(dyn Error + 'static),
        None => err,
    }
}

/// Peel every annotation off `err`, returning the original error.
pub fn root_cause<'a>(mut err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    while let Some(annotated) = err.downcast_ref::<AnnotatedError>() {
        err = annotated.cause();
    }
    err
}

// ============================================================================
// Macros
// ============================================================================

/// Wrap an error, capturing the caller's location relative to the crate's parent directory.
///
/// Passes the calling crate's `CARGO_MANIFEST_DIR` to [`FileLine::caller_in_crate`].
/// Relative paths are left as they are, so inside a workspace `wrap!(e)` and
/// [`wrap(e)`](wrap()) record the same file.
///
/// ```rust
/// use errline::wrap;
/// use std::io;
///
/// let (err, line) = (wrap!(io::Error::other("gone")), line!());
/// assert_eq!(err.to_string(), format!("gone {}:{}", file!(), line));
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr $(,)?) => {
        $crate::AnnotatedError::from_parts(
            $err,
            $crate::FileLine::caller_in_crate(::core::env!("CARGO_MANIFEST_DIR")),
        )
    };
}

/// Create an error from a format string, capturing the caller's location.
///
/// Takes the same arguments as `format!`. Literal messages are not allocated.
/// The path is trimmed the same way as [`wrap!`].
///
/// ```rust
/// use errline::errorf;
///
/// let err = errorf!("{} items", 3);
/// assert_eq!(errline::cause(&err).to_string(), "3 items");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::AnnotatedError::from_parts(
            $crate::Message::from_args(::core::format_args!($($arg)*)),
            $crate::FileLine::caller_in_crate(::core::env!("CARGO_MANIFEST_DIR")),
        )
    };
}
