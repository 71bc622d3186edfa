//! Per-tensor display configuration
//!
//! Every [`TensorStore`](crate::TensorStore) owns its own [`NumberFormat`].
//! Copies, slices and `from_existing` constructions clone it by value, so
//! changing the format of one tensor never affects another.

use std::fmt::{self, Display, Write};

/// Where padding goes when a formatted element is narrower than the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingPosition {
    /// Pad on the left (right-aligned numbers)
    BeforePrefix,
    /// Pad on the right (left-aligned numbers)
    #[default]
    AfterSuffix,
}

/// Element formatting settings used by display renderers
///
/// # Examples
///
/// ```
/// use tenplus_core::format::{NumberFormat, PaddingPosition};
///
/// let fmt = NumberFormat::default()
///     .with_width(6)
///     .with_precision(Some(2))
///     .with_padding(PaddingPosition::BeforePrefix);
///
/// assert_eq!(fmt.format_value(&1.23456), "  1.23");
/// assert_eq!(fmt.format_value(&1234567.0), "######");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormat {
    /// Column width of every element
    pub width: usize,
    /// Maximum fraction digits for floating point elements; `None` prints
    /// the value's own `Display` output
    pub precision: Option<usize>,
    /// Alignment inside the column
    pub padding: PaddingPosition,
    /// Character repeated across the column when a value does not fit
    pub overflow_char: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            width: 8,
            precision: Some(4),
            padding: PaddingPosition::AfterSuffix,
            overflow_char: '#',
        }
    }
}

impl NumberFormat {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_padding(mut self, padding: PaddingPosition) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_overflow_char(mut self, overflow_char: char) -> Self {
        self.overflow_char = overflow_char;
        self
    }

    /// Format `value` without padding.
    ///
    /// Precision only shortens floating point output; integer `Display`
    /// ignores it. Trailing fractional zeros are dropped so `2.5000`
    /// prints as `2.5`.
    pub fn format_bare<T: Display>(&self, value: &T) -> String {
        let mut out = String::new();
        let written = match self.precision {
            Some(precision) => write!(out, "{value:.precision$}"),
            None => write!(out, "{value}"),
        };
        debug_assert!(written.is_ok());

        if self.precision.is_some() && out.contains('.') && !out.contains(['e', 'E']) {
            let keep = out.trim_end_matches('0').trim_end_matches('.').len();
            out.truncate(keep);
        }
        out
    }

    /// Format `value` padded to exactly `width` characters, or the overflow
    /// marker when it does not fit.
    pub fn format_value<T: Display>(&self, value: &T) -> String {
        let bare = self.format_bare(value);
        let len = bare.chars().count();
        if len > self.width {
            return std::iter::repeat(self.overflow_char)
                .take(self.width)
                .collect();
        }
        let pad = " ".repeat(self.width - len);
        match self.padding {
            PaddingPosition::BeforePrefix => pad + &bare,
            PaddingPosition::AfterSuffix => bare + &pad,
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width={}", self.width)?;
        if let Some(precision) = self.precision {
            write!(f, ", precision={precision}")?;
        }
        Ok(())
    }
}
