//! Integration tests for rendered error output.

use errline::{AnnotatedError, FileLine, Frame, new, wrap};
use std::io;

fn here(line: u32) -> String {
    format!("{}:{}", file!(), line)
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_is_message_then_location() {
    let (err, line) = (new("boom"), line!());
    assert_eq!(err.to_string(), format!("boom {}", here(line)));
}

#[test]
fn display_keeps_underlying_message_verbatim() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied: /etc/shadow");
    let expected_prefix = format!("{} ", io_err);
    let err = wrap(io_err);
    assert!(
        err.to_string().starts_with(&expected_prefix),
        "message should be an unmodified prefix. Got: {}",
        err
    );
}

#[test]
fn display_of_double_wrap_repeats_inner_rendering() {
    let (inner, inner_line) = (new("boom"), line!());
    let (outer, outer_line) = (wrap(inner), line!());
    assert_eq!(
        outer.to_string(),
        format!("boom {} {}", here(inner_line), here(outer_line))
    );
}

#[test]
fn unknown_location_degrades_to_colon_zero() {
    let err = AnnotatedError::from_parts(io::Error::other("lost"), FileLine::resolve(None));
    assert_eq!(err.to_string(), "lost :0");
}

#[test]
fn empty_message_still_has_separator() {
    let (err, line) = (new(""), line!());
    assert_eq!(err.to_string(), format!(" {}", here(line)));
}

#[test]
fn resolved_frame_renders_relative_path() {
    let loc = FileLine::resolve(Some(Frame {
        symbol: "pkg/sub.Type.Method",
        file: "/home/user/src/pkg/sub/file.ext",
        line: 42,
    }));
    let err = AnnotatedError::from_parts(io::Error::other("boom"), loc);
    assert_eq!(err.to_string(), "boom pkg/sub/file.ext:42");
}

// ============================================================================
// Debug
// ============================================================================

#[test]
fn debug_output_has_error_header() {
    let err = new("boom");
    let output = format!("{:?}", err);
    assert!(
        output.starts_with("Error: boom\n"),
        "Should start with 'Error:' header. Got:\n{}",
        output
    );
}

#[test]
fn debug_output_has_one_line_per_annotation() {
    fn inner() -> AnnotatedError {
        new("boom")
    }
    fn middle() -> AnnotatedError {
        wrap(inner())
    }
    fn outer() -> AnnotatedError {
        wrap(middle())
    }

    let output = format!("{:?}", outer());
    let at_lines: Vec<_> = output.lines().filter(|l| l.starts_with("    at ")).collect();
    assert_eq!(at_lines.len(), 3, "Got:\n{}", output);
    assert!(at_lines.iter().all(|l| l.contains("output_format.rs:")));
}

#[test]
fn debug_output_shows_root_message_once() {
    let err = wrap(wrap(new("boom")));
    let output = format!("{:?}", err);
    assert_eq!(output.matches("boom").count(), 1, "Got:\n{}", output);
}
