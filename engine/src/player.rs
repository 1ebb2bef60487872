use crate::table::Table;
use crate::wheel::{Wheel, WheelError};
use tracing::debug;
use wheelhouse_types::{Bet, Outcome};

/// A betting strategy driven by the game loop.
pub trait Player {
    /// Puts this round's bets on the table.
    fn place_bets(&mut self, table: &mut Table);

    /// Called once per winning bet after the spin.
    fn win(&mut self, bet: &Bet);

    /// Called once per losing bet after the spin.
    fn lose(&mut self, bet: &Bet);
}

/// Console line for a winning bet.
pub fn winner_line(bet: &Bet) -> String {
    format!(
        "{} on {} is a winner! You win ${}",
        bet.amount(),
        bet.outcome(),
        bet.win_amount()
    )
}

/// Console line for a losing bet.
pub fn loser_line(bet: &Bet) -> String {
    format!(
        "{} on {} is a loser. You lose ${}",
        bet.amount(),
        bet.outcome(),
        bet.lose_amount()
    )
}

/// Scripted strategy: the same stake on Black, every round.
#[derive(Debug)]
pub struct Passenger57 {
    black: Outcome,
    stake: u64,
    total_won: u64,
    total_lost: u64,
}

impl Passenger57 {
    pub const DEFAULT_STAKE: u64 = 5;

    /// Fetches the canonical Black outcome from the wheel registry, so the
    /// player bets on the exact value the builder placed in the bins.
    pub fn new(wheel: &Wheel) -> Result<Self, WheelError> {
        Self::with_stake(wheel, Self::DEFAULT_STAKE)
    }

    pub fn with_stake(wheel: &Wheel, stake: u64) -> Result<Self, WheelError> {
        let black = wheel.outcome("Black")?.clone();
        Ok(Self {
            black,
            stake,
            total_won: 0,
            total_lost: 0,
        })
    }

    /// Sum of full returns (stake plus profit) over all winning bets.
    pub fn total_won(&self) -> u64 {
        self.total_won
    }

    /// Sum of stakes forfeited over all losing bets.
    pub fn total_lost(&self) -> u64 {
        self.total_lost
    }
}

impl Player for Passenger57 {
    fn place_bets(&mut self, table: &mut Table) {
        let bet = Bet::new(self.stake, self.black.clone());
        debug!(%bet, "placing bet");
        table.place_bet(bet);
    }

    fn win(&mut self, bet: &Bet) {
        self.total_won = self.total_won.saturating_add(bet.win_amount());
    }

    fn lose(&mut self, bet: &Bet) {
        self.total_lost = self.total_lost.saturating_add(bet.lose_amount());
    }
}
