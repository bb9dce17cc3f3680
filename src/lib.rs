use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod go;
pub mod gomoku;
pub mod mahjong;
pub mod types;
pub mod xiangqi;

pub use bindings::{GoEngine, GomokuEngine, MahjongEngine, XiangqiEngine};
pub use config::TableConfig;
pub use error::{ConfigError, GoError, GomokuError, MahjongError, XiangqiError};

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
