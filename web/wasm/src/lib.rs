use serde::Serialize;
use setrs::{
    Card, DealOutcome, Game, GameOptions, MatchOutcome, Resolution, SelectOutcome,
    SelectionPhase, Slot,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        Game::new(GameOptions::default(), seed as u64)
            .map(|game| Self { game })
            .map_err(js_err)
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.game = Game::new(GameOptions::default(), seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn new_game(&mut self, initial_cards: u32) -> Result<(), JsValue> {
        self.game.new_game(initial_cards as usize).map_err(js_err)
    }

    pub fn select_card(&mut self, slot_index: u32) -> Result<String, JsValue> {
        self.game
            .select_card(slot_index as usize)
            .map(|outcome| select_outcome_to_str(outcome).to_owned())
            .map_err(js_err)
    }

    pub fn request_more_cards(&mut self) -> String {
        deal_outcome_to_str(self.game.request_more_cards()).to_owned()
    }

    pub fn clear_pending_removal(&mut self) -> u32 {
        self.game.clear_pending_removal() as u32
    }

    pub fn hint(&self) -> Option<Vec<u32>> {
        self.game
            .hint()
            .map(|slots| slots.iter().map(|&index| index as u32).collect())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let slots = self
            .game
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| JsSlot::from_slot(&self.game, index as u32, *slot))
            .collect();

        let snapshot = Snapshot {
            slots,
            phase: phase_to_str(self.game.phase()),
            score: self.game.score(),
            matches_found: self.game.matches_found(),
            cards_remaining: self.game.cards_remaining() as u32,
            complete: self.game.is_complete(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    slots: Vec<JsSlot>,
    phase: &'static str,
    score: i32,
    matches_found: u32,
    cards_remaining: u32,
    complete: bool,
}

#[derive(Serialize)]
struct JsCard {
    id: u8,
    shape: &'static str,
    count: u8,
    color: &'static str,
    shading: &'static str,
}

#[derive(Serialize)]
struct JsSlot {
    index: u32,
    card: Option<JsCard>,
    selected: bool,
    matched: bool,
    pending_removal: bool,
}

impl JsSlot {
    fn from_slot(game: &Game, index: u32, slot: Slot) -> Self {
        match slot {
            Slot::Occupied(card) => Self {
                index,
                card: Some(card_to_js(card)),
                selected: game.is_selected(card),
                matched: game.is_matched(card),
                pending_removal: false,
            },
            Slot::PendingRemoval(_) => Self {
                index,
                card: None,
                selected: false,
                matched: true,
                pending_removal: true,
            },
            Slot::Empty => Self {
                index,
                card: None,
                selected: false,
                matched: false,
                pending_removal: false,
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        id: card.id().0,
        shape: card.shape().name(),
        count: card.count(),
        color: card.color().name(),
        shading: card.shading().name(),
    }
}

fn phase_to_str(phase: SelectionPhase) -> &'static str {
    match phase {
        SelectionPhase::Idle => "Idle",
        SelectionPhase::Selecting(_) => "Selecting",
        SelectionPhase::AwaitingResolution(MatchOutcome::Match) => "Matched",
        SelectionPhase::AwaitingResolution(MatchOutcome::Mismatch) => "Mismatched",
    }
}

fn select_outcome_to_str(outcome: SelectOutcome) -> &'static str {
    match outcome {
        SelectOutcome::Selected => "Selected",
        SelectOutcome::Deselected => "Deselected",
        SelectOutcome::Matched => "Matched",
        SelectOutcome::Mismatched => "Mismatched",
        SelectOutcome::Resolved => "Resolved",
    }
}

fn deal_outcome_to_str(outcome: DealOutcome) -> &'static str {
    match outcome {
        DealOutcome::Resolved(Resolution::Removed) => "Removed",
        DealOutcome::Resolved(Resolution::Replaced { .. }) => "Replaced",
        DealOutcome::Resolved(Resolution::Cleared) => "Cleared",
        DealOutcome::Dealt(_) => "Dealt",
        DealOutcome::Nothing => "Nothing",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
