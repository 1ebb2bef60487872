use crate::selector::BinSelector;
use std::collections::HashMap;
use thiserror::Error;
use wheelhouse_types::{Bin, Outcome};

/// Pockets on an American wheel.
pub const BIN_COUNT: usize = 38;

/// Index of the "00" pocket; indices 0..=36 map to their own numbers.
pub const DOUBLE_ZERO_BIN: usize = 37;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("bin index out of range (index={index}, bins={BIN_COUNT})")]
    BinOutOfRange { index: usize },
    #[error("no outcome registered under {name:?}")]
    UnknownOutcome { name: String },
}

/// The 38 pockets of an American wheel, the name registry of every outcome
/// placed on it, and the selector that draws the winning pocket.
///
/// A wheel starts empty; [`crate::BinBuilder::build`] populates it once,
/// after which bins are only handed out by shared reference.
pub struct Wheel {
    bins: Vec<Bin>,
    registry: HashMap<String, Outcome>,
    selector: Box<dyn BinSelector>,
}

impl Wheel {
    pub fn new(selector: Box<dyn BinSelector>) -> Self {
        Self {
            bins: vec![Bin::new(); BIN_COUNT],
            registry: HashMap::new(),
            selector,
        }
    }

    /// Adds `outcome` to the pocket at `index` and records it in the name
    /// registry. The last writer for a given name wins; construction keeps
    /// category naming schemes disjoint so collisions never happen in
    /// practice.
    ///
    /// Panics if `index >= BIN_COUNT`; indices come from the builder, which
    /// only produces valid ones.
    pub fn add_outcome(&mut self, index: usize, outcome: Outcome) {
        self.bins[index].insert(outcome.clone());
        self.registry.insert(outcome.name().to_string(), outcome);
    }

    /// Draws one pocket uniformly at random.
    pub fn choose(&mut self) -> &Bin {
        let index = self.selector.pick(BIN_COUNT);
        &self.bins[index]
    }

    pub fn get(&self, index: usize) -> Result<&Bin, WheelError> {
        self.bins
            .get(index)
            .ok_or(WheelError::BinOutOfRange { index })
    }

    /// The canonical outcome registered under `name`.
    pub fn outcome(&self, name: &str) -> Result<&Outcome, WheelError> {
        self.registry
            .get(name)
            .ok_or_else(|| WheelError::UnknownOutcome {
                name: name.to_string(),
            })
    }

    /// Number of distinct outcome names registered so far.
    pub fn outcome_count(&self) -> usize {
        self.registry.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::FixedSelector;
    use crate::selector::ChaChaSelector;

    #[test]
    fn add_outcome_registers_and_places() {
        let mut wheel = Wheel::new(Box::new(FixedSelector::new(vec![0])));
        wheel.add_outcome(8, Outcome::new("test", 1));
        wheel.add_outcome(36, Outcome::new("other", 2));

        assert!(wheel.get(8).unwrap().contains(&Outcome::new("test", 1)));
        assert!(wheel.get(36).unwrap().contains(&Outcome::new("other", 2)));
        assert_eq!(wheel.outcome("test").unwrap(), &Outcome::new("test", 1));
        assert_eq!(wheel.outcome_count(), 2);
    }

    #[test]
    fn registry_last_writer_wins() {
        let mut wheel = Wheel::new(Box::new(FixedSelector::new(vec![0])));
        wheel.add_outcome(1, Outcome::new("test", 1));
        wheel.add_outcome(2, Outcome::new("test", 2));
        assert_eq!(wheel.outcome("test").unwrap().odds(), 2);
        // Both placements survive; only the registry entry was replaced.
        assert!(wheel.get(1).unwrap().contains(&Outcome::new("test", 1)));
        assert!(wheel.get(2).unwrap().contains(&Outcome::new("test", 2)));
    }

    #[test]
    fn get_rejects_out_of_range_index() {
        let wheel = Wheel::new(Box::new(FixedSelector::new(vec![0])));
        assert_eq!(
            wheel.get(BIN_COUNT),
            Err(WheelError::BinOutOfRange { index: BIN_COUNT })
        );
    }

    #[test]
    fn unknown_outcome_lookup_fails() {
        let wheel = Wheel::new(Box::new(FixedSelector::new(vec![0])));
        assert_eq!(
            wheel.outcome("Black"),
            Err(WheelError::UnknownOutcome {
                name: "Black".to_string()
            })
        );
    }

    #[test]
    fn choose_follows_the_selector() {
        let mut wheel = Wheel::new(Box::new(FixedSelector::new(vec![8, 36])));
        wheel.add_outcome(8, Outcome::new("test", 1));
        wheel.add_outcome(36, Outcome::new("test", 2));

        assert!(wheel.choose().contains(&Outcome::new("test", 1)));
        assert!(wheel.choose().contains(&Outcome::new("test", 2)));
    }

    #[test]
    fn seeded_wheels_draw_identical_sequences() {
        let mut a = Wheel::new(Box::new(ChaChaSelector::seeded(9)));
        let mut b = Wheel::new(Box::new(ChaChaSelector::seeded(9)));
        for n in 0..BIN_COUNT {
            a.add_outcome(n, Outcome::new(n.to_string(), 35));
            b.add_outcome(n, Outcome::new(n.to_string(), 35));
        }
        for _ in 0..32 {
            assert_eq!(a.choose(), b.choose());
        }
    }
}
