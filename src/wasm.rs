//! Exports for the JavaScript presentation layer.
//!
//! Round state crosses the boundary as a serde value and is handed back on
//! the next call, so the UI can pace its animations between draws without
//! the engine keeping any cross-call state.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::card::Card;
use crate::game::{Outcome, Phase, Round, Tally};
use crate::hand::Score;
use crate::player::Player;

fn default_player_name() -> String {
    "Player".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewRoundInput {
    #[serde(default = "default_player_name")]
    player_name: String,
    seed: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardView {
    label: &'static str,
    suit: &'static str,
    symbol: char,
    asset_code: String,
}

impl CardView {
    fn of(card: &Card) -> Self {
        CardView {
            label: card.display_label(),
            suit: card.suit().name(),
            symbol: card.suit().symbol(),
            asset_code: card.asset_code(),
        }
    }
}

/// What the UI renders after every call: display-ready hands and scores
/// plus the opaque `state` to pass back in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundView<'a> {
    state: &'a Round,
    player_name: &'a str,
    player_cards: Vec<CardView>,
    player_score: Score,
    dealer_cards: Vec<CardView>,
    dealer_score: Score,
    cards_remaining: usize,
    phase: Phase,
    outcome: Option<Outcome>,
}

fn card_views(player: &Player) -> Vec<CardView> {
    player.hand().cards().iter().map(CardView::of).collect()
}

fn to_view(round: &Round) -> Result<JsValue, JsValue> {
    let view = RoundView {
        state: round,
        player_name: round.player().name(),
        player_cards: card_views(round.player()),
        player_score: round.player().hand().score(),
        dealer_cards: card_views(round.dealer()),
        dealer_score: round.dealer().hand().score(),
        cards_remaining: round.cards_remaining(),
        phase: round.phase(),
        outcome: round.outcome(),
    };
    serde_wasm_bindgen::to_value(&view)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

fn round_from(state: &JsValue) -> Result<Round, JsValue> {
    serde_wasm_bindgen::from_value(state.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid round state: {err}")))
}

#[wasm_bindgen]
pub fn new_round(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: NewRoundInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let round = Round::begin(&input.player_name, input.seed)
        .map_err(|err| JsValue::from_str(&format!("Deal failed: {err}")))?;
    to_view(&round)
}

#[wasm_bindgen]
pub fn player_hit(state: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let mut round = round_from(state)?;
    round
        .hit()
        .map_err(|err| JsValue::from_str(&format!("Hit failed: {err}")))?;
    to_view(&round)
}

#[wasm_bindgen]
pub fn player_stand(state: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let mut round = round_from(state)?;
    round
        .stand()
        .map_err(|err| JsValue::from_str(&format!("Stand failed: {err}")))?;
    to_view(&round)
}

/// Fold a settled round into the cumulative tally and hand the updated
/// tally back for the persistence collaborator to store.
#[wasm_bindgen]
pub fn record_outcome(tally: &JsValue, state: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let mut tally: Tally = serde_wasm_bindgen::from_value(tally.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid tally: {err}")))?;
    let round = round_from(state)?;

    let outcome = round
        .outcome()
        .ok_or_else(|| JsValue::from_str("Round is not settled yet"))?;
    tally.record(outcome);

    serde_wasm_bindgen::to_value(&tally)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}
