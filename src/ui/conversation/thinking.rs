use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::time::Instant;

/// "Ask-EKA is thinking..." line shown while a reply is pending
#[derive(Debug, Clone, Copy)]
pub struct ThinkingIndicator {
    started: Instant,
}

impl ThinkingIndicator {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    fn dots(&self) -> &'static str {
        match (self.started.elapsed().as_millis() / 300) % 4 {
            0 => ".",
            1 => "..",
            2 => "...",
            _ => "   ",
        }
    }
}

impl Default for ThinkingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ThinkingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let indicator = Line::from(vec![
            Span::styled("🤖 ", Style::default().fg(Color::Green)),
            Span::styled("Ask-EKA is thinking", Style::default().fg(Color::Green)),
            Span::styled(self.dots(), Style::default().fg(Color::Yellow)),
        ]);
        buf.set_line(area.x, area.y, &indicator, area.width);
    }
}
