//! Wheelhouse game engine.
//!
//! This crate contains the deterministic game logic for a single American
//! roulette table: wheel construction, table rules, and the round loop.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside the engine.
//! - All randomness flows through the [`BinSelector`] injected into the
//!   wheel; seed it for reproducible rounds.
//! - The wheel and its bins are built once by [`BinBuilder`] and are
//!   read-only afterwards.
//!
//! The primary entrypoint is [`Game`].

pub mod builder;
pub mod game;
pub mod player;
pub mod selector;
pub mod table;
pub mod wheel;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use builder::BinBuilder;
pub use game::{Game, Resolution};
pub use player::{loser_line, winner_line, Passenger57, Player};
pub use selector::{BinSelector, ChaChaSelector};
pub use table::{Table, TableConfig, TableError};
pub use wheel::{Wheel, WheelError, BIN_COUNT, DOUBLE_ZERO_BIN};
