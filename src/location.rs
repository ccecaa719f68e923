//! Source locations attached to annotated errors.
//!
//! This module provides [`FileLine`] (the captured `file:line` pair), [`Frame`]
//! (raw frame metadata supplied by a host), and the two path trimmers:
//! [`trim_to_crate`] for locations captured by the macros, and [`trim_root`]
//! for host frames whose project root is unknown.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::panic::Location;

// ============================================================================
// FileLine - an immutable (relative path, line) pair
// ============================================================================

/// The `file:line` where an error was annotated.
///
/// Captured once when an [`AnnotatedError`](crate::AnnotatedError) is built and
/// never recomputed. The default value is the unknown location: an empty path
/// and line 0, which renders as `:0`.
///
/// ```rust
/// use errline::FileLine;
///
/// let here = FileLine::caller();
/// assert_eq!(here.file(), file!());
/// assert!(here.line() > 0);
///
/// assert_eq!(FileLine::default().to_string(), ":0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileLine {
    file: Cow<'static, str>,
    line: u32,
}

impl FileLine {
    /// The caller's location, with the path exactly as the compiler emitted it.
    ///
    /// Under Cargo this is already relative to the workspace root for
    /// workspace members (e.g. `src/db.rs`).
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// The caller's location, with absolute paths made relative to the crate's parent directory.
    ///
    /// Used by [`wrap!`](crate::wrap!) and [`errorf!`](crate::errorf!), which pass
    /// the calling crate's `env!("CARGO_MANIFEST_DIR")`. See [`trim_to_crate`].
    #[track_caller]
    #[inline]
    pub fn caller_in_crate(manifest_dir: &str) -> Self {
        let loc = Location::caller();
        Self {
            file: Cow::Borrowed(trim_to_crate(manifest_dir, loc.file())),
            line: loc.line(),
        }
    }

    /// Build from a `core::panic::Location` without trimming.
    #[inline]
    pub fn from_location(loc: &'static Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(loc.file()),
            line: loc.line(),
        }
    }

    /// Resolve host-provided frame metadata into a relative location.
    ///
    /// `None` means the host could not supply a frame (stack too shallow, frame
    /// info stripped, ...). That degrades to the unknown location instead of
    /// failing.
    ///
    /// ```rust
    /// use errline::{FileLine, Frame};
    ///
    /// let loc = FileLine::resolve(Some(Frame {
    ///     symbol: "pkg/sub.Type.Method",
    ///     file: "/home/user/src/pkg/sub/file.go",
    ///     line: 42,
    /// }));
    /// assert_eq!(loc.to_string(), "pkg/sub/file.go:42");
    ///
    /// assert!(FileLine::resolve(None).is_unknown());
    /// ```
    pub fn resolve(frame: Option<Frame<'_>>) -> Self {
        let Some(frame) = frame else {
            return Self::default();
        };
        Self {
            file: Cow::Owned(String::from(trim_root(frame.symbol, frame.file))),
            line: frame.line,
        }
    }

    /// The relative source path. Empty when the location is unknown.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line number. 0 when the location is unknown.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// True for the degraded location (`""`, line 0).
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0
    }
}

impl fmt::Display for FileLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl From<&'static Location<'static>> for FileLine {
    #[inline]
    fn from(loc: &'static Location<'static>) -> Self {
        Self::from_location(loc)
    }
}

// ============================================================================
// Frame - host-provided call-stack metadata
// ============================================================================

/// Raw metadata for one call-stack frame, as a host environment reports it.
///
/// `symbol` is the fully-qualified function or module name without the
/// project-root prefix; `file` is the absolute source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Qualified symbol, e.g. `pkg/sub.Type.Method` or `app::db::connect`.
    pub symbol: &'a str,
    /// Absolute source path as recorded at build time.
    pub file: &'a str,
    /// Line number within `file`.
    pub line: u32,
}

// ============================================================================
// Root trimming
// ============================================================================

/// Make an absolute `file` relative to the parent of `manifest_dir`.
///
/// The result starts with the crate's own directory name, so a crate root, a
/// submodule and a `mod.rs` file of the same crate all share one prefix
/// (`foo-1.0/src/lib.rs`, `foo-1.0/src/db.rs`, `foo-1.0/src/db/mod.rs`).
///
/// Relative paths are returned unmodified: they are what the compiler emits for
/// workspace members, and the function forms ([`wrap()`](crate::wrap)) report
/// them the same way. Absolute paths outside the crate's parent directory
/// (remapped sources) are also returned unmodified.
///
/// ```rust
/// use errline::trim_to_crate;
///
/// let dir = "/home/u/.cargo/registry/src/idx/foo-1.0";
/// assert_eq!(
///     trim_to_crate(dir, "/home/u/.cargo/registry/src/idx/foo-1.0/src/lib.rs"),
///     "foo-1.0/src/lib.rs",
/// );
/// assert_eq!(trim_to_crate(dir, "crates/foo/src/db.rs"), "crates/foo/src/db.rs");
/// ```
pub fn trim_to_crate<'f>(manifest_dir: &str, file: &'f str) -> &'f str {
    if !is_absolute(file) {
        return file;
    }
    let manifest_dir = manifest_dir.trim_end_matches(is_path_separator);
    let Some(cut) = manifest_dir.rfind(is_path_separator) else {
        return file;
    };
    match file.strip_prefix(&manifest_dir[..cut]) {
        Some(rest) if rest.starts_with(is_path_separator) => &rest[1..],
        _ => file,
    }
}

fn is_absolute(file: &str) -> bool {
    let b = file.as_bytes();
    match b {
        [b'/' | b'\\', ..] => true,
        [drive, b':', sep, ..] => drive.is_ascii_alphabetic() && (*sep == b'/' || *sep == b'\\'),
        _ => false,
    }
}

/// Strip the unknown project-root prefix from `file`, using `symbol` as a depth hint.
///
/// A qualified symbol names the package path relative to the project root, and
/// has one fewer separator than the desired `<package path>/<file name>`.
/// Counting back `separators(symbol) + 2` separators from the end of `file`
/// lands just before the first package segment; everything after it is kept.
///
/// Symbol separators are `/` (import paths) and `::` (Rust module paths). Path
/// separators are `/` and `\`. If `file` runs out of separators before the goal
/// is reached, it is returned unmodified.
///
/// ```rust
/// use errline::trim_root;
///
/// assert_eq!(
///     trim_root("pkg/sub.Type.Method", "/home/user/src/pkg/sub/file.go"),
///     "pkg/sub/file.go",
/// );
/// assert_eq!(trim_root("app::db", "/home/u/app/src/db.rs"), "app/src/db.rs");
/// assert_eq!(trim_root("a/b/c.F", "short/file.go"), "short/file.go");
/// ```
pub fn trim_root<'f>(symbol: &str, file: &'f str) -> &'f str {
    let goal = symbol_separators(symbol) + 2;
    let mut end = file.len();
    for _ in 0..goal {
        match file[..end].rfind(is_path_separator) {
            Some(i) => end = i,
            None => return file,
        }
    }
    // Both separators are one byte wide.
    &file[end + 1..]
}

fn symbol_separators(symbol: &str) -> usize {
    symbol.matches('/').count() + symbol.matches("::").count()
}

fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}
