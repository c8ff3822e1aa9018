//! Terminal UI for the RailGuide assistant.
//!
//! Renders the conversation transcript and, for assistant messages that carry
//! citation sources, a numbered marker plus a carousel panel that pages
//! through the sources one at a time.

pub mod app;
pub mod citations;
pub mod input;
pub mod render;

pub use app::{AppState, MessageView};
pub use citations::SourceCarousel;
pub use input::handle_key_event;
pub use render::draw_ui;
