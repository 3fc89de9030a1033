// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint classification: container width to a named size class.
//!
//! The class is recomputed from scratch on every run and never persisted. It is
//! meant for responsive presentation choices in the host (for example hiding a
//! secondary title); the overflow calculator itself relies on live measurement.

use core::fmt;

use crate::config::ConfigError;

/// Ordered size class of the bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breakpoint {
    /// Phones.
    S,
    /// Small tablets.
    M,
    /// Tablets and small desktops.
    L,
    /// Desktops.
    Xl,
    /// Wide desktops.
    Xxl,
}

impl Breakpoint {
    /// All classes, smallest first.
    pub const ALL: [Self; 5] = [Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    /// Short display name, as used in host style hooks.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper bounds for every class but the last, which is unbounded.
///
/// ```rust
/// use understory_action_bar::{Breakpoint, BreakpointTable};
///
/// let table = BreakpointTable::default();
/// assert_eq!(table.classify(599.0), Breakpoint::S);
/// assert_eq!(table.classify(600.0), Breakpoint::M);
/// assert_eq!(table.classify(5000.0), Breakpoint::Xxl);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointTable {
    bounds: [f64; 4],
}

impl BreakpointTable {
    /// Bounds for `S`, `M`, `L` and `XL`.
    pub const DEFAULT_BOUNDS: [f64; 4] = [599.0, 1023.0, 1439.0, 1919.0];

    /// Create a table from upper bounds for `S`, `M`, `L` and `XL`.
    ///
    /// Bounds must be finite and strictly ascending.
    pub fn new(bounds: [f64; 4]) -> Result<Self, ConfigError> {
        let table = Self { bounds };
        table.validate()?;
        Ok(table)
    }

    /// Check that the bounds are finite and strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ascending = self.bounds.windows(2).all(|w| w[0] < w[1]);
        if self.bounds.iter().all(|b| b.is_finite()) && ascending {
            Ok(())
        } else {
            Err(ConfigError::UnsortedBreakpoints)
        }
    }

    /// The configured upper bounds.
    pub const fn bounds(&self) -> [f64; 4] {
        self.bounds
    }

    /// Smallest class whose bound is at or above `width`.
    pub fn classify(&self, width: f64) -> Breakpoint {
        self.bounds
            .iter()
            .position(|&bound| width <= bound)
            .map_or(Breakpoint::Xxl, |i| Breakpoint::ALL[i])
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            bounds: Self::DEFAULT_BOUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let table = BreakpointTable::default();
        assert_eq!(table.classify(0.0), Breakpoint::S);
        assert_eq!(table.classify(599.0), Breakpoint::S);
        assert_eq!(table.classify(599.5), Breakpoint::M);
        assert_eq!(table.classify(1023.0), Breakpoint::M);
        assert_eq!(table.classify(1024.0), Breakpoint::L);
        assert_eq!(table.classify(1439.0), Breakpoint::L);
        assert_eq!(table.classify(1919.0), Breakpoint::Xl);
        assert_eq!(table.classify(1920.0), Breakpoint::Xxl);
    }

    #[test]
    fn classes_are_ordered() {
        assert!(Breakpoint::S < Breakpoint::M);
        assert!(Breakpoint::Xl < Breakpoint::Xxl);
        assert_eq!(Breakpoint::Xxl.as_str(), "XXL");
    }

    #[test]
    fn classification_is_monotonic() {
        let table = BreakpointTable::default();
        let mut last = Breakpoint::S;
        for w in (0..2500).step_by(7) {
            let class = table.classify(f64::from(w));
            assert!(class >= last, "class went down at width {w}");
            last = class;
        }
    }

    #[test]
    fn rejects_unsorted_or_non_finite_bounds() {
        assert_eq!(
            BreakpointTable::new([600.0, 500.0, 1400.0, 1900.0]),
            Err(ConfigError::UnsortedBreakpoints)
        );
        assert_eq!(
            BreakpointTable::new([600.0, 600.0, 1400.0, 1900.0]),
            Err(ConfigError::UnsortedBreakpoints)
        );
        assert_eq!(
            BreakpointTable::new([600.0, 900.0, f64::NAN, 1900.0]),
            Err(ConfigError::UnsortedBreakpoints)
        );
        let custom = BreakpointTable::new([300.0, 600.0, 900.0, 1200.0]).unwrap();
        assert_eq!(custom.classify(650.0), Breakpoint::L);
    }
}
