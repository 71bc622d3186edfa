//! Per-dimension slice descriptors
//!
//! A [`SliceSpec`] is an ordered list of [`Selector`]s, one per dimension.
//! Each selector is either a single index or an inclusive range. Specs can be
//! built from Rust values or parsed from text:
//!
//! ```
//! use tenplus_core::slice::{Selector, SliceSpec};
//!
//! let parsed: SliceSpec = "0:1, 2".parse().unwrap();
//! let built = SliceSpec::from(vec![Selector::from(0..=1), Selector::from(2)]);
//! assert_eq!(parsed, built);
//! assert_eq!(parsed.to_string(), "0:1, 2");
//! ```

use crate::error::{IndexError, ShapeError, SliceParseError, TensorError};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Selection along one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single index, kept as a dimension of extent 1
    Single(usize),
    /// Inclusive range `low..=high`
    Range(usize, usize),
}

impl Selector {
    /// Inclusive bounds of this selector.
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            Selector::Single(i) => (i, i),
            Selector::Range(low, high) => (low, high),
        }
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Selector::Single(index)
    }
}

impl From<RangeInclusive<usize>> for Selector {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (low, high) = range.into_inner();
        Selector::Range(low, high)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Single(i) => write!(f, "{i}"),
            Selector::Range(low, high) => write!(f, "{low}:{high}"),
        }
    }
}

impl FromStr for Selector {
    type Err = SliceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_index = |item: &str| {
            item.trim()
                .parse::<usize>()
                .map_err(|_| SliceParseError::InvalidIndex {
                    item: item.trim().to_string(),
                })
        };

        match s.split_once(':') {
            None => Ok(Selector::Single(parse_index(s)?)),
            Some((low, high)) => {
                let (low, high) = (parse_index(low)?, parse_index(high)?);
                if low > high {
                    return Err(SliceParseError::InvertedRange { low, high });
                }
                Ok(Selector::Range(low, high))
            }
        }
    }
}

/// Ordered per-dimension selectors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SliceSpec {
    selectors: Vec<Selector>,
}

impl SliceSpec {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// True for the single-selector shortcut that addresses the flat
    /// linear range of a tensor instead of its coordinates.
    pub fn is_linear(&self) -> bool {
        self.selectors.len() == 1
    }

    /// Turn the selectors into concrete inclusive bounds against `shape`.
    ///
    /// Single indices become the degenerate range `[i, i]`.
    ///
    /// # Errors
    ///
    /// * [`ShapeError::RankMismatch`] if the spec rank differs from `shape`'s
    /// * [`ShapeError::InvertedRange`] if a range has `low > high`
    /// * [`IndexError::OutOfBounds`] if a bound lies outside its dimension
    pub fn resolve(&self, shape: &[usize]) -> Result<ResolvedBounds, TensorError> {
        if self.selectors.len() != shape.len() {
            return Err(ShapeError::RankMismatch {
                expected: shape.len(),
                got: self.selectors.len(),
            }
            .into());
        }

        let mut lower = Vec::with_capacity(shape.len());
        let mut upper = Vec::with_capacity(shape.len());
        for (dim, (selector, &size)) in self.selectors.iter().zip(shape).enumerate() {
            let (low, high) = selector.bounds();
            if low > high {
                return Err(ShapeError::InvertedRange { dim, low, high }.into());
            }
            if high >= size {
                return Err(IndexError::OutOfBounds {
                    dim,
                    index: high,
                    size,
                }
                .into());
            }
            lower.push(low);
            upper.push(high);
        }

        tracing::trace!(spec = %self, ?lower, ?upper, "resolved slice bounds");
        Ok(ResolvedBounds { lower, upper })
    }
}

impl From<Vec<Selector>> for SliceSpec {
    fn from(selectors: Vec<Selector>) -> Self {
        Self::new(selectors)
    }
}

impl From<Selector> for SliceSpec {
    fn from(selector: Selector) -> Self {
        Self::new(vec![selector])
    }
}

impl FromIterator<Selector> for SliceSpec {
    fn from_iter<I: IntoIterator<Item = Selector>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

impl FromStr for SliceSpec {
    type Err = SliceParseError;

    /// Parse `"i"`, `"low:high"` items separated by commas, optionally
    /// wrapped in `[` `]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Err(SliceParseError::Empty);
        }

        inner
            .split(',')
            .enumerate()
            .map(|(position, item)| {
                if item.trim().is_empty() {
                    Err(SliceParseError::EmptyItem { position })
                } else {
                    item.parse()
                }
            })
            .collect()
    }
}

/// Inclusive per-dimension bounds produced by [`SliceSpec::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBounds {
    pub lower: Vec<usize>,
    pub upper: Vec<usize>,
}

impl ResolvedBounds {
    /// Shape of the selected region: `high - low + 1` per dimension.
    pub fn extents(&self) -> Vec<usize> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&low, &high)| high - low + 1)
            .collect()
    }

    pub fn element_count(&self) -> usize {
        self.extents().iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_spec() {
        let spec: SliceSpec = "[ 0:1 , 2, 3:3 ]".parse().unwrap();
        assert_eq!(
            spec.selectors(),
            &[
                Selector::Range(0, 1),
                Selector::Single(2),
                Selector::Range(3, 3)
            ]
        );
        assert_eq!(spec.to_string(), "0:1, 2, 3:3");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SliceSpec>(), Err(SliceParseError::Empty));
        assert_eq!("[]".parse::<SliceSpec>(), Err(SliceParseError::Empty));
        assert_eq!(
            "1,,2".parse::<SliceSpec>(),
            Err(SliceParseError::EmptyItem { position: 1 })
        );
        assert_eq!(
            "1:x".parse::<SliceSpec>(),
            Err(SliceParseError::InvalidIndex {
                item: "x".to_string()
            })
        );
        assert_eq!(
            "-1".parse::<SliceSpec>(),
            Err(SliceParseError::InvalidIndex {
                item: "-1".to_string()
            })
        );
        assert_eq!(
            "3:1".parse::<SliceSpec>(),
            Err(SliceParseError::InvertedRange { low: 3, high: 1 })
        );
    }

    #[test]
    fn test_resolve_degenerate_single() {
        let spec = SliceSpec::from(vec![Selector::Single(1), Selector::from(0..=2)]);
        let bounds = spec.resolve(&[2, 3]).unwrap();
        assert_eq!(bounds.lower, vec![1, 0]);
        assert_eq!(bounds.upper, vec![1, 2]);
        assert_eq!(bounds.extents(), vec![1, 3]);
        assert_eq!(bounds.element_count(), 3);
    }

    #[test]
    fn test_resolve_errors() {
        let spec: SliceSpec = "0:1, 1:2".parse().unwrap();
        assert_eq!(
            spec.resolve(&[2, 3, 4]).unwrap_err(),
            TensorError::Shape(ShapeError::RankMismatch {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            spec.resolve(&[2, 2]).unwrap_err(),
            TensorError::Index(IndexError::OutOfBounds {
                dim: 1,
                index: 2,
                size: 2
            })
        );

        let inverted = SliceSpec::from(vec![Selector::Range(2, 1)]);
        assert!(inverted.resolve(&[4]).unwrap_err().is_shape());
    }
}
