//! JavaScript-facing handles.
//!
//! Rule rejections never throw: moves report `false`/`undefined` and log a
//! warning. Only serialisation and table misuse surface as `Err(JsValue)`.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::config::TableConfig;
use crate::console_warn;
use crate::error::MahjongError;
use crate::go::GoGame;
use crate::gomoku::{self, GomokuGame};
use crate::mahjong::{PacedTable, Table, Tile, can_win, tiles_from_codes};
use crate::types::Stone;
use crate::xiangqi::XiangqiGame;

fn snapshot<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(JsValue::from)
}

fn to_js_error(error: MahjongError) -> JsValue {
    console_warn!("mahjong: {error}");
    to_value(&error).unwrap_or_else(|serialize_err| JsValue::from_str(&serialize_err.to_string()))
}

fn stone_from_flag(is_black: bool) -> Stone {
    if is_black { Stone::Black } else { Stone::White }
}

#[wasm_bindgen]
pub struct XiangqiEngine {
    game: XiangqiGame,
}

#[wasm_bindgen]
impl XiangqiEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> XiangqiEngine {
        XiangqiEngine {
            game: XiangqiGame::new(),
        }
    }

    #[wasm_bindgen(js_name = "handleClick")]
    pub fn handle_click(&mut self, row: u8, col: u8) {
        self.game.handle_click(row, col);
    }

    #[wasm_bindgen(js_name = "resetGame")]
    pub fn reset_game(&mut self) {
        self.game.reset();
    }

    /// 0 = red, 1 = black.
    #[wasm_bindgen(getter, js_name = "currentPlayer")]
    pub fn current_player(&self) -> u8 {
        self.game.current_player().code()
    }

    #[wasm_bindgen(getter, js_name = "isGameOver")]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    #[wasm_bindgen(js_name = "legalDestinations")]
    pub fn legal_destinations(&self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        snapshot(&self.game.legal_destinations(row, col))
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        snapshot(&self.game.to_state())
    }
}

impl Default for XiangqiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct GoEngine {
    game: GoGame,
}

#[wasm_bindgen]
impl GoEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GoEngine {
        GoEngine { game: GoGame::new() }
    }

    #[wasm_bindgen(js_name = "isValidMove")]
    pub fn is_valid_move(&self, row: u8, col: u8) -> bool {
        self.game.is_valid_move(row, col)
    }

    #[wasm_bindgen(js_name = "processMove")]
    pub fn process_move(&mut self, row: u8, col: u8) -> bool {
        match self.game.process_move(row, col) {
            Ok(_) => true,
            Err(err) => {
                console_warn!("go: {err}");
                false
            }
        }
    }

    /// Liberties of the group at `(row, col)`, or `undefined` on an empty
    /// point.
    #[wasm_bindgen(js_name = "libertiesAt")]
    pub fn liberties_at(&self, row: u8, col: u8) -> Option<u32> {
        self.game
            .liberties_at(row, col)
            .and_then(|count| u32::try_from(count).ok())
    }

    /// Returns whether a move was taken back.
    #[wasm_bindgen(js_name = "undoMove")]
    pub fn undo_move(&mut self) -> bool {
        self.game.undo_move().is_some()
    }

    #[wasm_bindgen(js_name = "resetBoard")]
    pub fn reset_board(&mut self) {
        self.game.reset_board();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        snapshot(&self.game.to_state())
    }
}

impl Default for GoEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct GomokuEngine {
    game: GomokuGame,
}

#[wasm_bindgen]
impl GomokuEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GomokuEngine {
        GomokuEngine {
            game: GomokuGame::new(),
        }
    }

    /// Winner code (1 = black, 2 = white) when this move completes a line.
    pub fn place(&mut self, x: u8, y: u8) -> Option<u8> {
        match self.game.place(x, y) {
            Ok(winner) => winner.map(Stone::code),
            Err(err) => {
                console_warn!("gomoku: {err}");
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        snapshot(&self.game.to_state())
    }
}

impl Default for GomokuEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless line check over parallel arrays of played stones. `blacks[i]`
/// is non-zero for a black stone at `(xs[i], ys[i])`.
#[wasm_bindgen(js_name = "gomokuCheckWinner")]
pub fn gomoku_check_winner(
    xs: Vec<u8>,
    ys: Vec<u8>,
    blacks: Vec<u8>,
    x: u8,
    y: u8,
    is_black: bool,
) -> Option<u8> {
    let stones: Vec<Stone> = blacks
        .into_iter()
        .map(|black| stone_from_flag(black != 0))
        .collect();
    gomoku::check_winner_in(&xs, &ys, &stones, x, y, stone_from_flag(is_black)).map(Stone::code)
}

/// Unknown tile codes make the hand invalid.
#[wasm_bindgen(js_name = "mahjongCanWin")]
pub fn mahjong_can_win(tiles: Vec<u8>) -> bool {
    tiles_from_codes(&tiles).is_some_and(|hand| can_win(&hand))
}

#[wasm_bindgen]
pub struct MahjongEngine {
    table: PacedTable,
}

#[wasm_bindgen]
impl MahjongEngine {
    /// `config_json` is a partial [`TableConfig`]; missing fields use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<MahjongEngine, JsValue> {
        let config = match config_json {
            Some(json) => TableConfig::from_json(&json).map_err(|err| {
                console_warn!("mahjong: {err}");
                JsValue::from_str(&err.to_string())
            })?,
            None => TableConfig::default(),
        };
        Ok(MahjongEngine {
            table: PacedTable::new(Table::new(config)),
        })
    }

    /// Performs the next automatic step immediately.
    pub fn advance(&mut self) -> Result<JsValue, JsValue> {
        let event = self.table.advance().map_err(to_js_error)?;
        snapshot(&event)
    }

    /// Performs the next automatic step if its delay has elapsed; resolves
    /// to `undefined` otherwise.
    pub fn poll(&mut self) -> Result<JsValue, JsValue> {
        let event = self.table.poll().map_err(to_js_error)?;
        snapshot(&event)
    }

    /// Milliseconds until the next automatic step is due, or `undefined`
    /// while the table waits on the human seat.
    #[wasm_bindgen(js_name = "pendingDelayMs")]
    pub fn pending_delay_ms(&self) -> Option<f64> {
        self.table
            .pending_delay()
            .map(|delay| delay.as_millis() as f64)
    }

    pub fn discard(&mut self, tile: u8) -> Result<JsValue, JsValue> {
        let tile = Tile::new(tile).ok_or_else(|| to_js_error(MahjongError::TileNotInHand { tile }))?;
        let event = self.table.discard(tile).map_err(to_js_error)?;
        snapshot(&event)
    }

    #[wasm_bindgen(js_name = "claimPong")]
    pub fn claim_pong(&mut self) -> Result<JsValue, JsValue> {
        let event = self.table.claim_pong().map_err(to_js_error)?;
        snapshot(&event)
    }

    #[wasm_bindgen(js_name = "claimKong")]
    pub fn claim_kong(&mut self) -> Result<JsValue, JsValue> {
        let event = self.table.claim_kong().map_err(to_js_error)?;
        snapshot(&event)
    }

    #[wasm_bindgen(js_name = "passClaim")]
    pub fn pass_claim(&mut self) -> Result<JsValue, JsValue> {
        let event = self.table.pass_claim().map_err(to_js_error)?;
        snapshot(&event)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        snapshot(&self.table.table().to_state())
    }
}
