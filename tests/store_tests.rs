//! Store tests - JSON persistence of boards

use tile_merge::core::{Board, SimpleRng};
use tile_merge::store::{from_json, to_json, StoreError};
use tile_merge::types::Direction;

#[test]
fn test_played_board_roundtrip() {
    let mut board = Board::new(5, 9).unwrap();
    let mut rng = SimpleRng::new(8);
    for dir in Direction::ALL.iter().cycle().take(40) {
        board.spawn(1, &mut rng).unwrap();
        board.apply(*dir);
    }

    let json = to_json(&board).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.to_string(), board.to_string());
}

#[test]
fn test_document_shape() {
    let board = Board::from_rows(vec![vec![None, Some(2)], vec![Some(0), None]], 5).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&board).unwrap()).unwrap();

    assert_eq!(value["size"], 2);
    assert_eq!(value["max_level"], 5);
    assert_eq!(value["cells"], serde_json::json!([[null, 2], [0, null]]));
}

#[test]
fn test_malformed_json_is_reported() {
    assert!(matches!(from_json("{not json"), Err(StoreError::Json(_))));
}
