//! The plain root error created by [`new()`](crate::new) and [`errorf!`](crate::errorf!).

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// A root error that is nothing but a message.
///
/// Static messages are stored without allocation.
///
/// ```rust
/// use errline::Message;
///
/// let m = Message::new("disk full");
/// assert_eq!(m.to_string(), "disk full");
/// assert_eq!(m.as_str(), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Cow<'static, str>);

impl Message {
    /// Create a message error.
    #[inline]
    pub fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        Self(msg.into())
    }

    /// Render `args`, borrowing when they are a plain literal.
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        match args.as_str() {
            Some(s) => Self(Cow::Borrowed(s)),
            None => Self(Cow::Owned(alloc::fmt::format(args))),
        }
    }

    /// The message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::error::Error for Message {}

impl From<&'static str> for Message {
    #[inline]
    fn from(msg: &'static str) -> Self {
        Self(Cow::Borrowed(msg))
    }
}

impl From<String> for Message {
    #[inline]
    fn from(msg: String) -> Self {
        Self(Cow::Owned(msg))
    }
}
