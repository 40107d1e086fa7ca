//! Ranges over an ordered point type with explicit endpoint bounds.
//!
//! An [`Interval`] is never empty: construction rejects inverted bounds, and
//! equal endpoints are only accepted as a closed-closed single point. All set
//! algebra in this crate reasons about intervals through their *cuts* — an
//! ordered representation of endpoint positions that makes overlap, adjacency,
//! and complement questions plain comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Whether an endpoint includes its boundary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Open,
    Closed,
}

/// Position of a cut relative to its value: `Before` sits immediately below
/// the value, `After` immediately above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum CutSide {
    Before,
    After,
}

/// A point in the space between and around values. Every interval endpoint
/// maps to exactly one cut; two intervals fuse in a union exactly when their
/// cut ranges overlap or share a cut.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Cut<T> {
    pub(crate) value: T,
    pub(crate) side: CutSide,
}

/// A non-empty range over `T` with independent lower and upper bound kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval<T> {
    lower: T,
    lower_bound: Bound,
    upper: T,
    upper_bound: Bound,
}

impl<T: Ord> Interval<T> {
    /// Build an interval, rejecting malformed bounds.
    ///
    /// `lower > upper` is always invalid. `lower == upper` is valid only when
    /// both bounds are closed (a degenerate single point); any open side would
    /// make the interval empty.
    pub fn new(lower: T, lower_bound: Bound, upper: T, upper_bound: Bound) -> Result<Self>
    where
        T: fmt::Debug,
    {
        if lower > upper {
            return Err(EngineError::InvalidInterval(format!(
                "lower bound {lower:?} is above upper bound {upper:?}"
            )));
        }
        if lower == upper && (lower_bound == Bound::Open || upper_bound == Bound::Open) {
            return Err(EngineError::InvalidInterval(format!(
                "equal endpoints at {lower:?} require closed bounds on both sides"
            )));
        }
        Ok(Self {
            lower,
            lower_bound,
            upper,
            upper_bound,
        })
    }

    pub fn open(lower: T, upper: T) -> Result<Self>
    where
        T: fmt::Debug,
    {
        Self::new(lower, Bound::Open, upper, Bound::Open)
    }

    pub fn closed(lower: T, upper: T) -> Result<Self>
    where
        T: fmt::Debug,
    {
        Self::new(lower, Bound::Closed, upper, Bound::Closed)
    }

    pub fn closed_open(lower: T, upper: T) -> Result<Self>
    where
        T: fmt::Debug,
    {
        Self::new(lower, Bound::Closed, upper, Bound::Open)
    }

    pub fn open_closed(lower: T, upper: T) -> Result<Self>
    where
        T: fmt::Debug,
    {
        Self::new(lower, Bound::Open, upper, Bound::Closed)
    }

    pub fn lower(&self) -> &T {
        &self.lower
    }

    pub fn upper(&self) -> &T {
        &self.upper
    }

    pub fn lower_bound(&self) -> Bound {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> Bound {
        self.upper_bound
    }

    pub fn contains(&self, point: &T) -> bool {
        let above_lower = match self.lower_bound {
            Bound::Closed => *point >= self.lower,
            Bound::Open => *point > self.lower,
        };
        let below_upper = match self.upper_bound {
            Bound::Closed => *point <= self.upper,
            Bound::Open => *point < self.upper,
        };
        above_lower && below_upper
    }
}

impl<T: Ord + Clone> Interval<T> {
    pub(crate) fn lower_cut(&self) -> Cut<T> {
        Cut {
            value: self.lower.clone(),
            side: match self.lower_bound {
                Bound::Closed => CutSide::Before,
                Bound::Open => CutSide::After,
            },
        }
    }

    pub(crate) fn upper_cut(&self) -> Cut<T> {
        Cut {
            value: self.upper.clone(),
            side: match self.upper_bound {
                Bound::Closed => CutSide::After,
                Bound::Open => CutSide::Before,
            },
        }
    }

    /// Rebuild an interval from a pair of cuts, or `None` when the cuts
    /// enclose no points.
    pub(crate) fn from_cuts(lower: Cut<T>, upper: Cut<T>) -> Option<Self> {
        if lower >= upper {
            return None;
        }
        let lower_bound = match lower.side {
            CutSide::Before => Bound::Closed,
            CutSide::After => Bound::Open,
        };
        let upper_bound = match upper.side {
            CutSide::Before => Bound::Open,
            CutSide::After => Bound::Closed,
        };
        Some(Self {
            lower: lower.value,
            lower_bound,
            upper: upper.value,
            upper_bound,
        })
    }
}
