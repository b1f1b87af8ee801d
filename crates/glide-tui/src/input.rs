use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    /// Follow the nth link (1-based) of the nav bar or open menu
    FollowLink(usize),
    BackToTop,
    ToggleMenu,
    ToggleHelp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match app.mode {
        Mode::Help => {
            // Any key exits help
            return Action::ToggleHelp;
        }
        Mode::Menu => {
            if let KeyCode::Esc = key.code {
                return Action::ToggleMenu;
            }
        }
        Mode::Normal => {}
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,

        // Links
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::FollowLink(c as usize - '0' as usize)
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::BackToTop,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,

        (KeyCode::Char('?'), _) => Action::ToggleHelp,

        _ => Action::None,
    }
}
