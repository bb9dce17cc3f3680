#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use tabletop_rules::bindings::{gomoku_check_winner, mahjong_can_win};
use tabletop_rules::{GoEngine, GomokuEngine, MahjongEngine, XiangqiEngine, wasm_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn xiangqi_click_pair_moves_and_flips_turn() {
    let mut engine = XiangqiEngine::new();
    assert_eq!(engine.current_player(), 0);

    // Red soldier on column 0 steps across to row 4.
    engine.handle_click(3, 0);
    engine.handle_click(4, 0);

    assert_eq!(engine.current_player(), 1);
    assert!(!engine.is_game_over());
    let state = engine.state().unwrap();
    assert!(field(&state, "selected").is_null());

    engine.reset_game();
    assert_eq!(engine.current_player(), 0);
}

#[wasm_bindgen_test]
fn go_accepts_then_undoes_a_move() {
    let mut engine = GoEngine::new();

    assert!(engine.is_valid_move(3, 3));
    assert!(engine.process_move(3, 3));
    assert!(!engine.process_move(3, 3));
    assert!(!engine.is_valid_move(19, 0));

    let state = engine.state().unwrap();
    assert_eq!(field(&state, "move_count").as_f64(), Some(1.0));

    assert!(engine.undo_move());
    assert!(!engine.undo_move());
}

#[wasm_bindgen_test]
fn gomoku_engine_reports_the_winner_code() {
    let mut engine = GomokuEngine::new();
    for x in 0..4 {
        assert_eq!(engine.place(x, 0), None);
        assert_eq!(engine.place(x, 1), None);
    }

    assert_eq!(engine.place(4, 0), Some(1));
    assert_eq!(engine.place(4, 1), None);
}

#[wasm_bindgen_test]
fn free_gomoku_check_includes_the_new_stone() {
    let xs = vec![0, 1, 2, 3];
    let ys = vec![5, 5, 5, 5];
    let blacks = vec![0, 0, 0, 0];

    assert_eq!(gomoku_check_winner(xs.clone(), ys.clone(), blacks.clone(), 4, 5, false), Some(2));
    assert_eq!(gomoku_check_winner(xs.clone(), ys.clone(), blacks, 4, 5, true), None);
    assert_eq!(gomoku_check_winner(xs, ys, vec![0, 0, 0], 4, 5, false), None);
}

#[wasm_bindgen_test]
fn mahjong_can_win_rejects_unknown_codes() {
    assert!(mahjong_can_win(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 19, 19]));
    assert!(!mahjong_can_win(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 10, 10]));
}

#[wasm_bindgen_test]
fn mahjong_engine_deals_and_waits_for_the_dealer() {
    let mut engine = MahjongEngine::new(Some(r#"{"seed": 21}"#.to_string())).unwrap();
    let state = engine.state().unwrap();

    assert_eq!(field(&state, "wall_remaining").as_f64(), Some(83.0));
    assert!(engine.advance().is_err());
    assert_eq!(engine.pending_delay_ms(), None);
}

#[wasm_bindgen_test]
fn mahjong_engine_rejects_bad_config() {
    assert!(MahjongEngine::new(Some(r#"{"human_seat": 7}"#.to_string())).is_err());
}
