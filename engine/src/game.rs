use crate::player::Player;
use crate::table::{Table, TableError};
use crate::wheel::Wheel;
use tracing::debug;
use wheelhouse_types::Bet;

/// One resolved bet from a completed round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub bet: Bet,
    pub won: bool,
    /// Amount returned on a win (stake plus profit) or forfeited on a loss.
    pub payout: u64,
}

/// Single-table round loop: one wheel, one table, one player per cycle.
pub struct Game {
    wheel: Wheel,
    table: Table,
}

impl Game {
    pub fn new(wheel: Wheel, table: Table) -> Self {
        Self { wheel, table }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Runs one complete round: clears the table so the cycle stands alone,
    /// lets the player stake it, validates the table rules, draws a pocket,
    /// and resolves every bet by membership of its outcome in the drawn
    /// pocket's set.
    pub fn cycle(&mut self, player: &mut dyn Player) -> Result<Vec<Resolution>, TableError> {
        self.table.clear();
        player.place_bets(&mut self.table);
        self.table.validate()?;

        let winning = self.wheel.choose();
        debug!(bets = self.table.len(), "resolving round");

        let mut resolutions = Vec::with_capacity(self.table.len());
        for bet in self.table.bets() {
            let won = winning.contains(bet.outcome());
            let payout = if won {
                bet.win_amount()
            } else {
                bet.lose_amount()
            };
            if won {
                player.win(bet);
            } else {
                player.lose(bet);
            }
            resolutions.push(Resolution {
                bet: bet.clone(),
                won,
                payout,
            });
        }
        Ok(resolutions)
    }
}
