//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys, vim keys (hjkl) and WASD all move; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Move(Direction::Right)),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Move(Direction::Down)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Left), Some(GameAction::Move(Direction::Left)));
        assert_eq!(press(KeyCode::Right), Some(GameAction::Move(Direction::Right)));
        assert_eq!(press(KeyCode::Up), Some(GameAction::Move(Direction::Up)));
        assert_eq!(press(KeyCode::Down), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(press(KeyCode::Char('H')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(press(KeyCode::Char('d')), Some(GameAction::Move(Direction::Right)));
        assert_eq!(press(KeyCode::Char('k')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(press(KeyCode::Char('S')), Some(GameAction::Move(Direction::Down)));
        assert_eq!(press(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(press(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_every_move_binding() {
        let bindings = [
            (KeyCode::Left, "hHaA", Direction::Left),
            (KeyCode::Right, "lLdD", Direction::Right),
            (KeyCode::Up, "kKwW", Direction::Up),
            (KeyCode::Down, "jJsS", Direction::Down),
        ];
        for (arrow, letters, dir) in bindings {
            assert_eq!(press(arrow), Some(GameAction::Move(dir)));
            for c in letters.chars() {
                assert_eq!(press(KeyCode::Char(c)), Some(GameAction::Move(dir)), "key {}", c);
            }
        }
        assert_eq!(press(KeyCode::Char('R')), Some(GameAction::Restart));
    }

    #[test]
    fn test_control_chords_are_not_moves() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
