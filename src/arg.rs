//! Capabilities of the values passed to a print-style logging call.
//!
//! Every argument handed to [`LokiLogger::print`](crate::LokiLogger::print)
//! implements [`LogArg`]. The trait carries two independent capabilities:
//!
//! - **text**: the argument renders its own textual form via
//!   [`LogArg::log_text`]. Scalars and strings use their conventional
//!   `Display` rendering.
//! - **labels**: the argument may contribute labels to the call via
//!   [`LogArg::log_labels`]. The default implementation contributes none.
//!
//! [`Labeled`] attaches labels to any argument, while [`Shown`] and
//! [`Debugged`] adapt arbitrary `Display`/`Debug` values.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Label set attached to a stream. Keys are unique and kept in sorted order.
pub type Labels = BTreeMap<String, String>;

/// A value that can take part in a print-style logging call.
pub trait LogArg {
    /// Textual form of the value as it appears in the log line.
    fn log_text(&self) -> Cow<'_, str>;

    /// Labels contributed by the value, if it produces any.
    fn log_labels(&self) -> Option<Labels> {
        None
    }
}

macro_rules! display_log_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LogArg for $ty {
                fn log_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_log_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl LogArg for str {
    fn log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl LogArg for String {
    fn log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl LogArg for Cow<'_, str> {
    fn log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

macro_rules! forward_log_arg {
    ($($wrapper:ident),*) => {
        $(
            impl<T: LogArg + ?Sized> LogArg for $wrapper<T> {
                fn log_text(&self) -> Cow<'_, str> {
                    (**self).log_text()
                }

                fn log_labels(&self) -> Option<Labels> {
                    (**self).log_labels()
                }
            }
        )*
    };
}

forward_log_arg!(Box, Arc, Rc);

impl<T: LogArg + ?Sized> LogArg for &T {
    fn log_text(&self) -> Cow<'_, str> {
        (**self).log_text()
    }

    fn log_labels(&self) -> Option<Labels> {
        (**self).log_labels()
    }
}

/// Wraps an argument and attaches labels to it.
///
/// Labels set on the wrapper are layered over any labels the inner value
/// already produces, so the wrapper wins on key collision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labeled<T> {
    value: T,
    labels: Labels,
}

impl<T> Labeled<T> {
    /// Wrap `value` with an empty label set.
    pub fn new(value: T) -> Self {
        Self {
            value,
            labels: Labels::new(),
        }
    }

    /// Wrap `value` with an existing label set.
    pub fn with_labels(value: T, labels: Labels) -> Self {
        Self { value, labels }
    }

    /// Add a single label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Borrow the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Borrow the labels attached by the wrapper.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl<T: LogArg> LogArg for Labeled<T> {
    fn log_text(&self) -> Cow<'_, str> {
        self.value.log_text()
    }

    fn log_labels(&self) -> Option<Labels> {
        let mut labels = self.value.log_labels().unwrap_or_default();
        labels.extend(
            self.labels
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        Some(labels)
    }
}

/// Renders any [`fmt::Display`] value with its default textual form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> LogArg for Shown<T> {
    fn log_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}

/// Renders any [`fmt::Debug`] value using its `{:?}` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debugged<T>(pub T);

impl<T: fmt::Debug> LogArg for Debugged<T> {
    fn log_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self.0))
    }
}
