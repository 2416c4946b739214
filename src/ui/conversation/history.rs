//! Conversation history display component

use crate::catalog;
use crate::events::{ConversationEntry, Sender};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Something shown in the history pane
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryItem {
    /// A copy of a conversation log entry
    Entry(ConversationEntry),
    /// Local output such as command results; never part of the conversation log
    Notice { text: String, kind: NoticeKind },
}

/// Conversation history display component
#[derive(Clone)]
pub struct ConversationHistory {
    items: VecDeque<HistoryItem>,
    max_items: usize,
    show_timestamps: bool,
    /// Lines scrolled up from the bottom
    scroll: usize,
}

impl ConversationHistory {
    pub fn new(max_items: usize, show_timestamps: bool) -> Self {
        Self {
            items: VecDeque::new(),
            max_items: max_items.max(1),
            show_timestamps,
            scroll: 0,
        }
    }

    fn push(&mut self, item: HistoryItem) {
        self.items.push_back(item);
        if self.items.len() > self.max_items {
            self.items.pop_front();
        }
        self.scroll_to_bottom();
    }

    /// Show a conversation entry
    pub fn push_entry(&mut self, entry: &ConversationEntry) {
        self.push(HistoryItem::Entry(entry.clone()));
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push(HistoryItem::Notice {
            text: text.into(),
            kind: NoticeKind::Info,
        });
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(HistoryItem::Notice {
            text: text.into(),
            kind: NoticeKind::Error,
        });
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = 0;
    }

    pub fn items(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All rendered lines for the given content width
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut all_lines = Vec::new();
        for item in &self.items {
            if !all_lines.is_empty() {
                all_lines.push(Line::from(""));
            }
            match item {
                HistoryItem::Entry(entry) => all_lines.extend(self.render_entry(entry, width)),
                HistoryItem::Notice { text, kind } => all_lines.extend(render_notice(text, *kind, width)),
            }
        }
        all_lines
    }

    fn render_entry(&self, entry: &ConversationEntry, width: usize) -> Vec<Line<'static>> {
        let sender = entry.sender();
        let mut header = format!("{} {}", sender.icon(), sender.display_name());
        if self.show_timestamps {
            header.push_str(&format!(" {}", entry.timestamp().format("%H:%M:%S")));
        }
        header.push(' ');
        header.push_str(&"─".repeat(20));

        let mut lines = vec![Line::from(Span::styled(
            header,
            Style::default().fg(Color::DarkGray),
        ))];

        let style = content_style(sender);
        for content_line in wrap_text(entry.text(), width.saturating_sub(2)) {
            lines.push(Line::from(vec![Span::raw("  "), Span::styled(content_line, style)]));
        }
        lines
    }
}

fn render_notice(text: &str, kind: NoticeKind, width: usize) -> Vec<Line<'static>> {
    let (icon, style) = match kind {
        NoticeKind::Info => ("ℹ️ ", Style::default().fg(Color::Yellow)),
        NoticeKind::Error => ("❌ ", Style::default().fg(Color::Red)),
    };

    wrap_text(text, width.saturating_sub(3))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { icon } else { "   " };
            Line::from(vec![Span::styled(prefix, style), Span::styled(line, style)])
        })
        .collect()
}

fn content_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Cyan),
        Sender::Bot => Style::default().fg(Color::Green),
    }
}

/// Wrap text to `width` columns, keeping the line breaks already in it
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in raw_line.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }
    lines
}

impl Widget for &ConversationHistory {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("💬 Conversation");

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines = if self.items.is_empty() {
            welcome_lines()
        } else {
            self.lines(inner_area.width as usize)
        };

        let height = inner_area.height as usize;
        let total = lines.len();
        let max_scroll = total.saturating_sub(height);
        let end = total - self.scroll.min(max_scroll);
        let start = end.saturating_sub(height);

        for (i, line) in lines[start..end].iter().enumerate() {
            buf.set_line(inner_area.x, inner_area.y + i as u16, line, inner_area.width);
        }
    }
}

fn welcome_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Meet Ask-EKA 🙏",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your AI companion for UPSC preparation.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for feature in catalog::FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", feature.title), Style::default().fg(Color::Cyan)),
            Span::styled(feature.description, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Type a question, or /samples for ideas and /help for commands.",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
