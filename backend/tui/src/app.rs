//! TUI App State
//!
//! Manages the top-level application state for the Ratatui terminal UI.

use ratatui::widgets::ListState;

use railguide_core::ChatMessage;

use crate::citations::SourceCarousel;

/// One transcript entry plus its widget-local citation state.
///
/// The carousel is constructed fresh when the view mounts; it is never shared
/// between views and does not survive a remount.
pub struct MessageView {
    pub message: ChatMessage,
    pub carousel: SourceCarousel,
}

impl MessageView {
    pub fn new(message: ChatMessage) -> Self {
        let carousel = SourceCarousel::new(message.sources.clone());
        Self { message, carousel }
    }

    /// The transcript line for this view: message text plus citation marker.
    pub fn display_text(&self) -> String {
        match self.carousel.marker() {
            Some(marker) => format!("{} {marker}", self.message.content),
            None => self.message.content.clone(),
        }
    }
}

pub struct AppState {
    pub views: Vec<MessageView>,
    pub list_state: ListState,
    pub panel_open: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            list_state: ListState::default(),
            panel_open: false,
            should_quit: false,
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.views.push(MessageView::new(message));
        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    pub fn selected_view(&self) -> Option<&MessageView> {
        self.views.get(self.list_state.selected()?)
    }

    pub fn selected_view_mut(&mut self) -> Option<&mut MessageView> {
        let index = self.list_state.selected()?;
        self.views.get_mut(index)
    }

    pub fn select_next(&mut self) {
        if self.views.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.views.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.views.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
