use crate::Outcome;
use std::collections::HashSet;

/// The set of outcomes that pay when one wheel pocket comes up.
///
/// Membership is structural: inserting an outcome equal to one already
/// present is a no-op beyond set-union semantics. Bins are mutated only while
/// the wheel is being built; afterwards the wheel hands them out by shared
/// reference only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bin {
    outcomes: HashSet<Outcome>,
}

impl Bin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `outcome` to the pocket. Construction-time only.
    pub fn insert(&mut self, outcome: Outcome) {
        self.outcomes.insert(outcome);
    }

    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    pub fn union(&self, other: &Bin) -> Bin {
        Bin {
            outcomes: self.outcomes.union(&other.outcomes).cloned().collect(),
        }
    }

    pub fn intersection(&self, other: &Bin) -> Bin {
        Bin {
            outcomes: self
                .outcomes
                .intersection(&other.outcomes)
                .cloned()
                .collect(),
        }
    }

    pub fn is_subset(&self, other: &Bin) -> bool {
        self.outcomes.is_subset(&other.outcomes)
    }

    pub fn is_superset(&self, other: &Bin) -> bool {
        self.outcomes.is_superset(&other.outcomes)
    }

    pub fn is_disjoint(&self, other: &Bin) -> bool {
        self.outcomes.is_disjoint(&other.outcomes)
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Bin {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a Outcome;
    type IntoIter = std::collections::hash_set::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
