use serde::Serialize;
use std::fmt;

/// A single proposition a bet can be placed on, with its fixed payout odds.
///
/// Two outcomes are the same proposition iff both name and odds match. The
/// same value may sit in many pockets ("Black" is a member of 18 bins), so
/// outcomes are cloned freely rather than owned by any one bin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Outcome {
    name: String,
    odds: u64,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: u64) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The N in an N:1 payout.
    pub fn odds(&self) -> u64 {
        self.odds
    }

    /// Profit on a winning wager of `amount`, excluding the returned stake.
    pub fn win_amount(&self, amount: u64) -> u64 {
        amount * self.odds
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_structural() {
        let a = Outcome::new("Red", 1);
        let b = Outcome::new("Red", 1);
        let c = Outcome::new("Black", 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn same_name_different_odds_are_distinct() {
        let red_even_money = Outcome::new("Red", 1);
        let red_special = Outcome::new("Red", 4);
        assert_ne!(red_even_money, red_special);

        let mut set = HashSet::new();
        set.insert(red_even_money);
        set.insert(red_special);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn hash_follows_equality() {
        let mut set = HashSet::new();
        set.insert(Outcome::new("Dozen 1", 2));
        set.insert(Outcome::new("Dozen 1", 2));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Outcome::new("Dozen 1", 2)));
    }

    #[test]
    fn display_format() {
        assert_eq!(Outcome::new("Red", 1).to_string(), "Red (1:1)");
        assert_eq!(Outcome::new("1-2-3", 11).to_string(), "1-2-3 (11:1)");
        assert_eq!(Outcome::new("00", 35).to_string(), "00 (35:1)");
    }

    #[test]
    fn win_amount_scales_by_odds() {
        assert_eq!(Outcome::new("Red", 1).win_amount(5), 5);
        assert_eq!(Outcome::new("0", 35).win_amount(5), 175);
        assert_eq!(Outcome::new("Five Bet", 6).win_amount(0), 0);
    }

    proptest! {
        #[test]
        fn win_amount_is_amount_times_odds(odds in 0u64..=35, amount in 0u64..=1_000_000) {
            let outcome = Outcome::new("any", odds);
            prop_assert_eq!(outcome.win_amount(amount), amount * odds);
        }

        #[test]
        fn equality_ignores_construction_identity(name in "[A-Za-z0-9 -]{1,12}", odds in 0u64..=35) {
            let a = Outcome::new(name.clone(), odds);
            let b = Outcome::new(name, odds);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn differing_names_never_compare_equal(odds in 0u64..=35) {
            let a = Outcome::new("Low", odds);
            let b = Outcome::new("High", odds);
            prop_assert_ne!(a, b);
        }
    }
}
