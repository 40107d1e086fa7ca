//! Canonical sets of disjoint intervals and their algebra.
//!
//! A set is always held in canonical form: intervals sorted ascending, no two
//! overlapping, and no two touching with the shared point included on either
//! side. Two intervals that touch open-against-open stay separate — the touch
//! point belongs to neither, so fusing them would add it.

use serde::Serialize;

use crate::interval::{Cut, Interval};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    pub fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> IntervalSet<T> {
    pub fn of(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Build a canonical set from arbitrary intervals: sort by lower cut,
    /// then fuse every pair whose cut ranges overlap or share a cut.
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut cuts: Vec<(Cut<T>, Cut<T>)> = intervals
            .into_iter()
            .map(|interval| (interval.lower_cut(), interval.upper_cut()))
            .collect();
        cuts.sort();

        let mut fused: Vec<(Cut<T>, Cut<T>)> = Vec::with_capacity(cuts.len());
        for (lower, upper) in cuts {
            if let Some((_, last_upper)) = fused.last_mut() {
                if lower <= *last_upper {
                    if upper > *last_upper {
                        *last_upper = upper;
                    }
                    continue;
                }
            }
            fused.push((lower, upper));
        }

        Self {
            intervals: fused
                .into_iter()
                .filter_map(|(lower, upper)| Interval::from_cuts(lower, upper))
                .collect(),
        }
    }

    /// Merge two sets into one canonical set.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_intervals(
            self.intervals
                .iter()
                .cloned()
                .chain(other.intervals.iter().cloned()),
        )
    }

    /// Points present in both sets. At a shared boundary the result is closed
    /// only when both sides are closed there.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() && j < other.intervals.len() {
            let a = &self.intervals[i];
            let b = &other.intervals[j];
            let lower = a.lower_cut().max(b.lower_cut());
            let upper = a.upper_cut().min(b.upper_cut());
            if let Some(interval) = Interval::from_cuts(lower, upper) {
                out.push(interval);
            }
            // Advance whichever side ends first; both inputs are canonical,
            // so the output comes out sorted and disjoint as-is.
            if a.upper_cut() <= b.upper_cut() {
                i += 1;
            } else {
                j += 1;
            }
        }
        Self { intervals: out }
    }

    /// The gaps of this set within `universe`, with bound kinds flipped at
    /// every cut: a closed lower bound of a member produces an open upper
    /// bound of the gap it ends, and vice versa. The complement of an empty
    /// set is the universe itself.
    pub fn complement_within(&self, universe: &Interval<T>) -> Self {
        let clipped = self.restrict(universe);
        let mut out = Vec::new();
        let mut cursor = universe.lower_cut();
        for interval in &clipped.intervals {
            if let Some(gap) = Interval::from_cuts(cursor, interval.lower_cut()) {
                out.push(gap);
            }
            cursor = interval.upper_cut();
        }
        if let Some(gap) = Interval::from_cuts(cursor, universe.upper_cut()) {
            out.push(gap);
        }
        Self { intervals: out }
    }

    /// The portion of this set overlapping `bound`, bound kinds at the clip
    /// points taken from whichever side actually cuts.
    pub fn restrict(&self, bound: &Interval<T>) -> Self {
        self.intersection(&Self::of(bound.clone()))
    }
}

impl<T: Ord + Clone> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
