//! TUI Rendering
//!
//! Translates `AppState` into Ratatui `Widget`s and draws to the terminal frame.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::AppState;

/// Main draw loop function.
pub fn draw_ui(f: &mut Frame, state: &mut AppState) {
    let show_panel = state.panel_open
        && state
            .selected_view()
            .is_some_and(|v| !v.carousel.is_empty());

    let constraints = if show_panel {
        vec![Constraint::Min(3), Constraint::Length(12)]
    } else {
        vec![Constraint::Min(3)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.size());

    // Transcript pane
    let items: Vec<ListItem> = state
        .views
        .iter()
        .map(|view| ListItem::new(view.display_text()))
        .collect();
    let transcript = List::new(items)
        .block(Block::default().title("Conversation").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(transcript, chunks[0], &mut state.list_state);

    // Citation panel for the selected message
    if show_panel {
        if let Some(view) = state.selected_view() {
            let panel = Paragraph::new(view.carousel.panel_lines())
                .block(Block::default().title("Sources").borders(Borders::ALL));
            f.render_widget(panel, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use railguide_core::{ChatMessage, CitationSource};

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &mut AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn cited_message(n: usize) -> ChatMessage {
        let sources = (1..=n)
            .map(|i| CitationSource {
                title: format!("Source {i}"),
                url: Some(format!("https://docs.example.com/{i}")),
                description: None,
                quote: None,
            })
            .collect();
        ChatMessage::assistant("The maximum pipe diameter is 500 mm.").with_sources(sources)
    }

    #[test]
    fn test_marker_rendered_in_transcript() {
        let mut state = AppState::new();
        state.push_message(cited_message(3));
        let screen = draw(&mut state);
        assert!(screen.contains("[1,2,3]"));
        assert!(!screen.contains("Sources"));
    }

    #[test]
    fn test_no_marker_without_sources() {
        let mut state = AppState::new();
        state.push_message(ChatMessage::assistant("Plain answer."));
        state.panel_open = true;
        let screen = draw(&mut state);
        assert!(!screen.contains('['));
        assert!(!screen.contains("Sources"));
    }

    #[test]
    fn test_open_panel_shows_current_source_and_navigation() {
        let mut state = AppState::new();
        state.push_message(cited_message(3));
        state.panel_open = true;
        let screen = draw(&mut state);
        assert!(screen.contains("Sources"));
        assert!(screen.contains("Source 1"));
        assert!(!screen.contains("Source 2"));
        assert!(screen.contains("1 / 3"));
    }

    #[test]
    fn test_single_source_panel_has_no_navigation() {
        let mut state = AppState::new();
        state.push_message(cited_message(1));
        state.panel_open = true;
        let screen = draw(&mut state);
        assert!(screen.contains("Source 1"));
        assert!(!screen.contains("1 / 1"));
    }
}
