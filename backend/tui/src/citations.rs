//! Citation carousel state and panel content.
//!
//! Each rendered message owns exactly one carousel; its index is never shared
//! with another widget, even when two messages display the same sources.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use railguide_core::CitationSource;

/// Paging state over the citation sources attached to one message.
///
/// Index arithmetic is modulo the source count, so navigation wraps in both
/// directions. A fresh carousel always starts at the first source.
pub struct SourceCarousel {
    sources: Vec<CitationSource>,
    index: usize,
}

impl SourceCarousel {
    pub fn new(sources: Vec<CitationSource>) -> Self {
        Self { sources, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Navigation controls only appear once there is something to cycle.
    pub fn has_navigation(&self) -> bool {
        self.sources.len() > 1
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&CitationSource> {
        self.sources.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.sources.is_empty() {
            self.index = (self.index + 1) % self.sources.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.sources.is_empty() {
            self.index = (self.index + self.sources.len() - 1) % self.sources.len();
        }
    }

    /// Inline marker text, e.g. three sources → `[1,2,3]`.
    ///
    /// `None` when no sources are attached: citations are opt-in decoration,
    /// a message without them renders as plain text.
    pub fn marker(&self) -> Option<String> {
        if self.sources.is_empty() {
            return None;
        }
        let ordinals: Vec<String> = (1..=self.sources.len()).map(|i| i.to_string()).collect();
        Some(format!("[{}]", ordinals.join(",")))
    }

    /// `current / total` position text, only shown when cycling is possible.
    pub fn position(&self) -> Option<String> {
        self.has_navigation()
            .then(|| format!("{} / {}", self.index + 1, self.sources.len()))
    }

    /// Panel content for the source at the current index.
    pub fn panel_lines(&self) -> Vec<Line<'_>> {
        let Some(source) = self.current() else {
            return Vec::new();
        };

        let mut lines = Vec::new();

        let mut title_spans = vec![Span::styled(
            source.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if source.url.is_some() {
            title_spans.push(Span::styled(" ↗", Style::default().fg(Color::Blue)));
        }
        lines.push(Line::from(title_spans));

        if let Some(description) = &source.description {
            lines.push(Line::from(Span::styled(
                description.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        if let Some(quote) = &source.quote {
            lines.push(Line::default());
            for quote_line in quote.lines() {
                lines.push(Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        quote_line,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }
        }

        if let Some(url) = &source.url {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                url.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        if let Some(position) = self.position() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("◀ {position} ▶  (←/→ to cycle)"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }
}
