//! Cost Splitting
//!
//! Even integer-cent split of one unit amount across the primary subscriber
//! and their roommates. Each roommate pays `floor(unit / people)`; the primary
//! absorbs the remainder so the shares always sum to the unit amount exactly.

use serde::{Deserialize, Serialize};

/// Result of splitting a unit amount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Original amount in the smallest currency unit
    pub unit_amount: i64,
    
    /// What each roommate pays
    pub share_amount: i64,
    
    /// What the primary subscriber pays (share plus remainder)
    pub primary_amount: i64,
    
    /// Number of active roommates
    pub roommates: usize,
}

impl Split {
    /// Split `unit_amount` evenly between the primary and `roommates`.
    ///
    /// Returns `None` unless `unit_amount` is positive.
    pub fn even(unit_amount: i64, roommates: usize) -> Option<Self> {
        if unit_amount <= 0 {
            return None;
        }

        let sharing = i64::try_from(roommates).ok()?;
        let people = sharing.checked_add(1)?;
        let share_amount = unit_amount / people;
        let primary_amount = unit_amount - share_amount * sharing;

        Some(Self {
            unit_amount,
            share_amount,
            primary_amount,
            roommates,
        })
    }

    pub const fn total_people(&self) -> usize {
        self.roommates + 1
    }

    /// Sum of every participant's share
    pub fn total(&self) -> i64 {
        let sharing = i64::try_from(self.roommates).unwrap_or(i64::MAX);
        self.primary_amount + self.share_amount * sharing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_way_split() {
        let split = Split::even(32999, 2).unwrap();
        assert_eq!(split.total_people(), 3);
        assert_eq!(split.share_amount, 10999);
        assert_eq!(split.primary_amount, 11001);
        assert_eq!(split.total(), 32999);
    }

    #[test]
    fn test_no_roommates() {
        let split = Split::even(24999, 0).unwrap();
        assert_eq!(split.primary_amount, 24999);
        assert_eq!(split.share_amount, 24999);
        assert_eq!(split.total(), 24999);
    }

    #[test]
    fn test_no_cent_lost_or_invented() {
        let amounts = [1, 2, 7, 99, 100, 24999, 29999, 32499, 32999, 37999, 40999, 1_000_003];
        for unit in amounts {
            for roommates in 0..=8 {
                let split = Split::even(unit, roommates).unwrap();
                let r = i64::try_from(roommates).unwrap();
                assert_eq!(split.share_amount, unit / (r + 1));
                assert_eq!(split.primary_amount, unit - split.share_amount * r);
                assert_eq!(split.primary_amount + split.share_amount * r, unit);
                assert!(split.primary_amount >= split.share_amount);
                assert!(split.primary_amount - split.share_amount <= r);
            }
        }
    }

    #[test]
    fn test_non_positive_amount() {
        assert_eq!(Split::even(0, 2), None);
        assert_eq!(Split::even(-500, 1), None);
    }
}
