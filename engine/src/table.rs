use std::fmt;
use thiserror::Error;
use wheelhouse_types::Bet;

/// Raised by [`Table::validate`] when the bets on the table break the house
/// rules. Placement itself never validates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("bet below table minimum (amount={amount}, minimum={minimum})")]
    BelowMinimum { amount: u64, minimum: u64 },
    #[error("table limit exceeded (total={total}, limit={limit})")]
    OverLimit { total: u64, limit: u64 },
}

/// Betting limits for one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Smallest stake accepted per bet.
    pub minimum: u64,
    /// Cap on the sum of all stakes on the table.
    pub limit: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            minimum: 5,
            limit: 500,
        }
    }
}

/// The ordered collection of bets currently riding on the table.
pub struct Table {
    config: TableConfig,
    bets: Vec<Bet>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            bets: Vec::new(),
        }
    }

    /// Appends `bet` without checking it; rule enforcement happens in
    /// [`Table::validate`].
    pub fn place_bet(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    /// Scans the table: every stake must meet the minimum, and the total
    /// staked must not exceed the limit. Fails on the first offending bet.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut total: u64 = 0;
        for bet in &self.bets {
            if bet.amount() < self.config.minimum {
                return Err(TableError::BelowMinimum {
                    amount: bet.amount(),
                    minimum: self.config.minimum,
                });
            }
            total = total.saturating_add(bet.amount());
        }
        if total > self.config.limit {
            return Err(TableError::OverLimit {
                total,
                limit: self.config.limit,
            });
        }
        Ok(())
    }

    /// Read-only view of the bets in placement order.
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    pub fn clear(&mut self) {
        self.bets.clear();
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    pub fn config(&self) -> TableConfig {
        self.config
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, bet) in self.bets.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{bet}")?;
        }
        write!(f, ")")
    }
}
