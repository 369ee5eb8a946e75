//! WASM bindings for yavalath-core
//!
//! Provides a JavaScript-friendly API for the game logic. The page owns
//! rendering and click handling; it builds its hexes from `layout()` and
//! forwards clicks to `submitMove`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{CellId, Game, GameConfig, GameError, MoveOutcome, Player, Verdict};

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game. `config` is optional: `{ firstPlayer, precedence }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(WasmGame {
            inner: Game::with_config(config),
        })
    }

    /// Submit a move.
    /// Returns `{ accepted, verdict, winner, line, error }`.
    #[wasm_bindgen(js_name = submitMove)]
    pub fn submit_move(&mut self, cell_id: u8) -> Result<JsValue, JsValue> {
        let reply = match self.inner.submit_move(CellId(cell_id)) {
            Ok(outcome) => MoveReply::from(outcome),
            Err(err) => MoveReply::rejected(&err),
        };
        Ok(serde_wasm_bindgen::to_value(&reply)?)
    }

    /// Player to move: "white" or "black"
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.inner.current_player().to_string()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Winner of a finished game ("white" / "black"), or undefined
    pub fn winner(&self) -> Option<String> {
        self.inner.winner().map(|p| p.to_string())
    }

    /// Session options as `{ firstPlayer, precedence }`
    pub fn config(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.config())?)
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Occupant of a cell: 0 (empty or unknown cell), 1 (white), 2 (black)
    pub fn occupant(&self, cell_id: u8) -> u8 {
        match self.inner.board().occupant_at(CellId(cell_id)) {
            Ok(Some(player)) => player as u8,
            _ => 0,
        }
    }

    /// Board rows as arrays of `cellId | null`; null slots are spacers
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<Vec<Option<u8>>> = self
            .inner
            .topology()
            .layout()
            .into_iter()
            .map(|row| row.into_iter().map(|slot| slot.map(|id| id.0)).collect())
            .collect();
        Ok(serde_wasm_bindgen::to_value(&rows)?)
    }
}

/// Serializable move result for JavaScript
#[derive(Serialize)]
struct MoveReply {
    accepted: bool,
    verdict: Verdict,
    winner: Option<Player>,
    line: Vec<u8>,
    error: Option<String>,
}

impl MoveReply {
    fn rejected(err: &GameError) -> MoveReply {
        MoveReply {
            accepted: false,
            verdict: Verdict::None,
            winner: None,
            line: Vec::new(),
            error: Some(err.to_string()),
        }
    }
}

impl From<MoveOutcome> for MoveReply {
    fn from(outcome: MoveOutcome) -> Self {
        MoveReply {
            accepted: true,
            verdict: outcome.verdict,
            winner: outcome.winner,
            line: outcome.line.iter().map(|id| id.0).collect(),
            error: None,
        }
    }
}
