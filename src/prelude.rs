//! Convenient re-exports for common usage.
//!
//! ```rust
//! use errline::prelude::*;
//!
//! fn read(path: &str) -> Result<String, AnnotatedError> {
//!     if path.is_empty() {
//!         return Err(errorf!("empty path"));
//!     }
//!     std::fs::read_to_string(path).wrap_err()
//! }
//!
//! assert!(read("").is_err());
//! ```

pub use crate::AnnotatedError;
pub use crate::ErrorExt;
pub use crate::ResultExt;
pub use crate::{cause, errorf, new, wrap};
