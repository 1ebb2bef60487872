//! Wheel construction.
//!
//! Populates all 38 pockets of a [`Wheel`] with the complete standard
//! outcome set by enumerating the betting layout: a 3-column by 12-row grid
//! holding 1..=36, with 0 and 00 off the grid.
//!
//! Bet categories and odds:
//! - Straight (35:1): every number, own pocket only
//! - Split (17:1): adjacent pairs, left-right within a row or up-down
//!   between rows
//! - Street (11:1): each row of three
//! - Corner (8:1): each 2x2 block
//! - Line (5:1): each pair of adjacent rows
//! - Dozen / Column (2:1)
//! - Even-money (1:1): Low/High, Even/Odd, Red/Black
//! - Five Bet (6:1): 0, 00, 1, 2, 3
//!
//! All generators are additive set unions, so their order never changes the
//! final bin contents.

use crate::wheel::{Wheel, DOUBLE_ZERO_BIN};
use wheelhouse_types::Outcome;

pub(crate) const STRAIGHT_ODDS: u64 = 35;
pub(crate) const SPLIT_ODDS: u64 = 17;
pub(crate) const STREET_ODDS: u64 = 11;
pub(crate) const CORNER_ODDS: u64 = 8;
pub(crate) const FIVE_BET_ODDS: u64 = 6;
pub(crate) const LINE_ODDS: u64 = 5;
pub(crate) const DOZEN_ODDS: u64 = 2;
pub(crate) const COLUMN_ODDS: u64 = 2;
pub(crate) const EVEN_MONEY_ODDS: u64 = 1;

/// Rows in the betting grid.
const ROWS: usize = 12;

/// Red pockets on an American wheel.
const RED_NUMBERS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

fn is_red(number: usize) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Hyphen-joined ascending number list, the naming scheme for every
/// multi-number grid bet ("1-2", "1-2-3", "1-2-4-5", ...).
fn grid_name(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Populates every pocket of a wheel with the canonical outcome set.
pub struct BinBuilder;

impl BinBuilder {
    /// Runs all nine category generators against `wheel`.
    pub fn build(wheel: &mut Wheel) {
        Self::straight_bets(wheel);
        Self::split_bets(wheel);
        Self::street_bets(wheel);
        Self::corner_bets(wheel);
        Self::line_bets(wheel);
        Self::dozen_bets(wheel);
        Self::column_bets(wheel);
        Self::even_money_bets(wheel);
        Self::five_bet(wheel);
    }

    /// One outcome per number, each in exactly its own pocket.
    fn straight_bets(wheel: &mut Wheel) {
        for number in 0..=36 {
            wheel.add_outcome(number, Outcome::new(number.to_string(), STRAIGHT_ODDS));
        }
        wheel.add_outcome(DOUBLE_ZERO_BIN, Outcome::new("00", STRAIGHT_ODDS));
    }

    /// Adjacent pairs: left-right within each row, then up-down between
    /// adjacent rows of the same column.
    fn split_bets(wheel: &mut Wheel) {
        for row in 0..ROWS {
            let first = 3 * row + 1;
            for offset in [0, 1] {
                let low = first + offset;
                Self::shared(wheel, &[low, low + 1], SPLIT_ODDS);
            }
        }
        for low in 1..=33 {
            Self::shared(wheel, &[low, low + 3], SPLIT_ODDS);
        }
    }

    /// Each row of three consecutive numbers.
    fn street_bets(wheel: &mut Wheel) {
        for row in 0..ROWS {
            let first = 3 * row + 1;
            Self::shared(wheel, &[first, first + 1, first + 2], STREET_ODDS);
        }
    }

    /// Each 2x2 block: both column offsets of every row boundary.
    fn corner_bets(wheel: &mut Wheel) {
        for row in 0..ROWS - 1 {
            for offset in [0, 1] {
                let top_left = 3 * row + offset + 1;
                Self::shared(
                    wheel,
                    &[top_left, top_left + 1, top_left + 3, top_left + 4],
                    CORNER_ODDS,
                );
            }
        }
    }

    /// The six numbers of each pair of adjacent rows.
    fn line_bets(wheel: &mut Wheel) {
        for row in 0..ROWS - 1 {
            let first = 3 * row + 1;
            let numbers: Vec<usize> = (first..first + 6).collect();
            Self::shared(wheel, &numbers, LINE_ODDS);
        }
    }

    /// "Dozen 1/2/3", twelve consecutive numbers each.
    fn dozen_bets(wheel: &mut Wheel) {
        for dozen in 0..3 {
            let outcome = Outcome::new(format!("Dozen {}", dozen + 1), DOZEN_ODDS);
            for number in (12 * dozen + 1)..=(12 * dozen + 12) {
                wheel.add_outcome(number, outcome.clone());
            }
        }
    }

    /// "Column 1/2/3", every third number starting at 1, 2, 3.
    fn column_bets(wheel: &mut Wheel) {
        for column in 0..3 {
            let outcome = Outcome::new(format!("Column {}", column + 1), COLUMN_ODDS);
            for row in 0..ROWS {
                wheel.add_outcome(3 * row + column + 1, outcome.clone());
            }
        }
    }

    /// Low/High, Even/Odd, Red/Black. Each of 1..=36 gets exactly one from
    /// each pair; 0 and 00 get none.
    fn even_money_bets(wheel: &mut Wheel) {
        let low = Outcome::new("Low", EVEN_MONEY_ODDS);
        let high = Outcome::new("High", EVEN_MONEY_ODDS);
        let even = Outcome::new("Even", EVEN_MONEY_ODDS);
        let odd = Outcome::new("Odd", EVEN_MONEY_ODDS);
        let red = Outcome::new("Red", EVEN_MONEY_ODDS);
        let black = Outcome::new("Black", EVEN_MONEY_ODDS);

        for number in 1..=36 {
            let reach = if number < 19 { &low } else { &high };
            let parity = if number % 2 == 0 { &even } else { &odd };
            let color = if is_red(number) { &red } else { &black };
            wheel.add_outcome(number, reach.clone());
            wheel.add_outcome(number, parity.clone());
            wheel.add_outcome(number, color.clone());
        }
    }

    /// The American top-line bet over 0, 00, 1, 2, 3.
    fn five_bet(wheel: &mut Wheel) {
        let outcome = Outcome::new("Five Bet", FIVE_BET_ODDS);
        for index in [0, DOUBLE_ZERO_BIN, 1, 2, 3] {
            wheel.add_outcome(index, outcome.clone());
        }
    }

    /// Places one shared outcome, named after its numbers, into every listed
    /// pocket.
    fn shared(wheel: &mut Wheel, numbers: &[usize], odds: u64) {
        let outcome = Outcome::new(grid_name(numbers), odds);
        for &number in numbers {
            wheel.add_outcome(number, outcome.clone());
        }
    }
}
