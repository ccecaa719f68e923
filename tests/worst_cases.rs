//! Worst-case and boundary scenarios.

use errline::{AnnotatedError, FileLine, cause, new, root_cause, trim_root, wrap};
use static_assertions::assert_impl_all;
use std::sync::Arc;
use std::thread;

assert_impl_all!(AnnotatedError: Send, Sync, std::error::Error);
assert_impl_all!(FileLine: Send, Sync, Clone);

// ============================================================================
// Deep chains
// ============================================================================

#[test]
fn deep_chain_100_levels() {
    fn level(n: u32) -> AnnotatedError {
        if n == 0 { new("bottom") } else { wrap(level(n - 1)) }
    }

    let err = level(99);
    assert_eq!(err.depth(), 100);
    assert_eq!(err.chain().count(), 101);
    assert_eq!(root_cause(&err).to_string(), "bottom");
}

#[test]
fn cause_only_peels_one_level_of_deep_chain() {
    let err = wrap(wrap(wrap(new("bottom"))));
    let one = cause(&err);
    let one = one.downcast_ref::<AnnotatedError>().expect("still annotated");
    assert_eq!(one.depth(), 3);
}

// ============================================================================
// Hot loops
// ============================================================================

#[test]
fn hot_loop_all_errors() {
    fn process_item(i: usize) -> Result<(), AnnotatedError> {
        Err(errline::errorf!("item {} failed", i))
    }

    let errors: Vec<_> = (0..1000).filter_map(|i| process_item(i).err()).collect();
    assert_eq!(errors.len(), 1000);
    assert!(errors[999].to_string().starts_with("item 999 failed "));
}

// ============================================================================
// Path trimming boundaries
// ============================================================================

#[test]
fn trimming_never_panics_on_short_paths() {
    for file in ["", "/", "//", "a", "a/", "/a", "\\", "C:\\x"] {
        for symbol in ["", "a", "a/b/c.F", "x::y::z::w"] {
            let out = trim_root(symbol, file);
            assert!(file.ends_with(out), "{:?} / {:?} -> {:?}", symbol, file, out);
        }
    }
}

#[test]
fn fewer_segments_than_hint_are_kept() {
    assert_eq!(trim_root("a/b/c/d.F", "/x/y/z.go"), "/x/y/z.go");
}

#[test]
fn trailing_separator_yields_empty_tail() {
    assert_eq!(trim_root("p.F", "/root/p/"), "p/");
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn shared_across_threads() {
    let err = Arc::new(new("shared"));
    let expected = err.to_string();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = Arc::clone(&err);
            thread::spawn(move || err.to_string())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
