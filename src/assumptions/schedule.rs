//! Piecewise schedule resolution
//!
//! Two lookup shapes are used throughout the projections:
//! - Year-keyed schedules: entries are open-ended from `from_year` onward.
//!   Entries are sorted ascending and the last qualifying entry wins.
//! - Interval schedules (age ranges, income bands): entries are scanned in the
//!   order given and the first interval containing the query wins. No sorting
//!   happens, so caller order matters when intervals overlap.

/// Inclusivity of an interval's upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// `from <= q < to`
    Exclusive,
    /// `from <= q <= to`
    Inclusive,
}

impl UpperBound {
    /// Check whether `query` lies in `[from, to)` or `[from, to]`
    pub fn admits<K: PartialOrd>(self, from: K, to: K, query: K) -> bool {
        if query < from {
            return false;
        }
        match self {
            UpperBound::Exclusive => query < to,
            UpperBound::Inclusive => query <= to,
        }
    }
}

/// Upper bound used for personal and employer age ranges
pub const AGE_RANGE_UPPER: UpperBound = UpperBound::Exclusive;

/// Upper bound used for first-pillar payout bands
pub const PAYOUT_BAND_UPPER: UpperBound = UpperBound::Inclusive;

/// Upper bound used for first-pillar income override ranges
pub const INCOME_RANGE_UPPER: UpperBound = UpperBound::Inclusive;

/// An entry covering an interval of keys
pub trait Band {
    type Key: PartialOrd + Copy;

    /// Lower and upper bound of the interval
    fn bounds(&self) -> (Self::Key, Self::Key);
}

/// Return the first entry (in caller order) whose interval contains `query`
pub fn first_match<B: Band>(entries: &[B], query: B::Key, upper: UpperBound) -> Option<&B> {
    entries.iter().find(|entry| {
        let (from, to) = entry.bounds();
        upper.admits(from, to, query)
    })
}

/// An entry that applies from a given calendar year onward
pub trait YearKeyed {
    fn from_year(&self) -> i32;
    fn value(&self) -> f64;
}

/// Resolve the value applicable in `year`, or `None` if no entry has started yet
///
/// Entries are sorted ascending by `from_year` (stable, so for equal years the
/// later entry in caller order wins) and the last one with `from_year <= year`
/// is returned.
pub fn resolve_by_year_opt<E: YearKeyed>(entries: &[E], year: i32) -> Option<f64> {
    let mut sorted: Vec<&E> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.from_year());

    let mut applicable = None;
    for entry in sorted {
        if year >= entry.from_year() {
            applicable = Some(entry.value());
        }
    }
    applicable
}

/// Resolve the value applicable in `year`, falling back to `default`
pub fn resolve_by_year<E: YearKeyed>(entries: &[E], year: i32, default: f64) -> f64 {
    resolve_by_year_opt(entries, year).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(i32, f64);

    impl YearKeyed for Entry {
        fn from_year(&self) -> i32 { self.0 }
        fn value(&self) -> f64 { self.1 }
    }

    struct Ages(u32, u32, f64);

    impl Band for Ages {
        type Key = u32;
        fn bounds(&self) -> (u32, u32) { (self.0, self.1) }
    }

    #[test]
    fn test_year_schedule_last_qualifying_wins() {
        let entries = [Entry(2000, 100.0), Entry(2010, 200.0)];

        assert_eq!(resolve_by_year(&entries, 1999, 0.0), 0.0);
        assert_eq!(resolve_by_year(&entries, 2005, 0.0), 100.0);
        assert_eq!(resolve_by_year(&entries, 2010, 0.0), 200.0);
        assert_eq!(resolve_by_year(&entries, 2025, 0.0), 200.0);
    }

    #[test]
    fn test_year_schedule_sorts_before_scanning() {
        let entries = [Entry(2010, 200.0), Entry(2000, 100.0)];
        assert_eq!(resolve_by_year(&entries, 2005, 0.0), 100.0);
        assert_eq!(resolve_by_year(&entries, 2015, 0.0), 200.0);
    }

    #[test]
    fn test_year_schedule_equal_years_keep_caller_order() {
        let entries = [Entry(2000, 1.0), Entry(2000, 2.0)];
        assert_eq!(resolve_by_year(&entries, 2000, 0.0), 2.0);
    }

    #[test]
    fn test_year_schedule_empty_uses_default() {
        let entries: [Entry; 0] = [];
        assert_eq!(resolve_by_year(&entries, 2020, 100.0), 100.0);
        assert_eq!(resolve_by_year_opt(&entries, 2020), None);
    }

    #[test]
    fn test_upper_bound_inclusivity() {
        assert!(UpperBound::Exclusive.admits(18, 25, 18));
        assert!(!UpperBound::Exclusive.admits(18, 25, 25));
        assert!(UpperBound::Inclusive.admits(18, 25, 25));
        assert!(!UpperBound::Inclusive.admits(18, 25, 17));
    }

    #[test]
    fn test_first_match_respects_caller_order() {
        // Overlapping ranges: the first one listed wins
        let entries = [Ages(30, 50, 1.0), Ages(18, 65, 2.0)];

        assert_eq!(first_match(&entries, 40, UpperBound::Exclusive).map(|a| a.2), Some(1.0));
        assert_eq!(first_match(&entries, 20, UpperBound::Exclusive).map(|a| a.2), Some(2.0));
        assert!(first_match(&entries, 65, UpperBound::Exclusive).is_none());
        assert_eq!(first_match(&entries, 65, UpperBound::Inclusive).map(|a| a.2), Some(2.0));
    }
}
