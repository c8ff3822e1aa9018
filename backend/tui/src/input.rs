//! Keyboard Input Handler
//!
//! Processes crossterm events (Key, Char, Enter) and updates `AppState`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;

/// Handles a single synchronous keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Esc => {
            if state.panel_open {
                state.panel_open = false;
            } else {
                state.should_quit = true;
            }
        }
        KeyCode::Enter => {
            // The panel only opens for messages that actually carry sources.
            if state.selected_view().is_some_and(|v| !v.carousel.is_empty()) {
                state.panel_open = !state.panel_open;
            }
        }
        KeyCode::Up => state.select_previous(),
        KeyCode::Down => state.select_next(),
        KeyCode::Left | KeyCode::Char('p') => {
            if state.panel_open {
                if let Some(view) = state.selected_view_mut() {
                    if view.carousel.has_navigation() {
                        view.carousel.previous();
                    }
                }
            }
        }
        KeyCode::Right | KeyCode::Char('n') => {
            if state.panel_open {
                if let Some(view) = state.selected_view_mut() {
                    if view.carousel.has_navigation() {
                        view.carousel.next();
                    }
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railguide_core::{ChatMessage, CitationSource};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_sources(n: usize) -> AppState {
        let sources = (1..=n)
            .map(|i| CitationSource::new(format!("Source {i}")))
            .collect();
        let mut state = AppState::new();
        state.push_message(ChatMessage::assistant("answer").with_sources(sources));
        state
    }

    #[test]
    fn test_enter_toggles_panel() {
        let mut state = state_with_sources(2);
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert!(state.panel_open);
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert!(!state.panel_open);
    }

    #[test]
    fn test_enter_ignored_without_sources() {
        let mut state = AppState::new();
        state.push_message(ChatMessage::assistant("plain"));
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert!(!state.panel_open);
    }

    #[test]
    fn test_arrows_cycle_open_panel() {
        let mut state = state_with_sources(3);
        handle_key_event(key(KeyCode::Enter), &mut state);
        handle_key_event(key(KeyCode::Right), &mut state);
        assert_eq!(state.selected_view().unwrap().carousel.current_index(), 1);
        handle_key_event(key(KeyCode::Left), &mut state);
        handle_key_event(key(KeyCode::Left), &mut state);
        assert_eq!(state.selected_view().unwrap().carousel.current_index(), 2);
    }

    #[test]
    fn test_arrows_ignored_when_panel_closed() {
        let mut state = state_with_sources(3);
        handle_key_event(key(KeyCode::Right), &mut state);
        assert_eq!(state.selected_view().unwrap().carousel.current_index(), 0);
    }

    #[test]
    fn test_escape_closes_panel_before_quitting() {
        let mut state = state_with_sources(2);
        handle_key_event(key(KeyCode::Enter), &mut state);
        handle_key_event(key(KeyCode::Esc), &mut state);
        assert!(!state.panel_open);
        assert!(!state.should_quit);
        handle_key_event(key(KeyCode::Esc), &mut state);
        assert!(state.should_quit);
    }
}
