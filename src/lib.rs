//! Core engine for a single-player browser Blackjack game.
//!
//! The browser UI (DOM, pacing, win/loss storage, card images) lives in
//! JavaScript and drives this crate through its wasm-bindgen exports;
//! everything else is plain Rust and testable natively.

mod card;
mod deck;
mod game;
mod hand;
mod player;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use card::{Card, Suit};
pub use deck::{Deck, DrawError};
pub use game::{
    dealer_should_draw, resolve_outcome, Outcome, Phase, Round, RoundError, Tally,
};
pub use hand::{score, Hand, Score};
pub use player::Player;
