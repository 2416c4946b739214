use crate::catalog;
use crate::commands::{languages_text, samples_text, subjects_text, topics_text};
use crate::config::Config;
use crate::events::AppEvent;
use crate::responder::Responder;
use crate::session::ChatSession;
use crate::ui::conversation::composer::ConversationResult;
use crate::ui::conversation::{
    get_help_text, ConversationComposer, ConversationHistory, ParsedCommand, SlashCommand,
    ThinkingIndicator,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const SCROLL_STEP: usize = 5;

/// Actions that can be requested by the conversation manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationAction {
    None,
    Exit,
}

/// Manages the conversation flow and UI components
pub struct ConversationManager {
    session: ChatSession,
    responder: Responder,
    history: ConversationHistory,
    composer: ConversationComposer,
    thinking: Option<ThinkingIndicator>,
}

impl ConversationManager {
    pub fn new(config: &Config, responder: Responder) -> Self {
        Self::with_session(ChatSession::new(config), responder, config)
    }

    pub fn with_session(session: ChatSession, responder: Responder, config: &Config) -> Self {
        Self {
            session,
            responder,
            history: ConversationHistory::new(config.ui.max_messages, config.ui.show_timestamps),
            composer: ConversationComposer::new("Ask me anything about UPSC preparation..."),
            thinking: None,
        }
    }

    /// Give the composer focus
    pub fn start(&mut self) {
        self.composer.set_focus(true);
    }

    /// Send a question. The reply arrives later as an [`AppEvent::BotReply`].
    pub fn handle_input(&mut self, input: &str) {
        let reply = match self.session.submit(input) {
            Ok(reply) => reply,
            Err(e) => {
                self.history.push_error(e.to_string());
                return;
            }
        };

        if let Some(entry) = self.session.log().entries().last() {
            self.history.push_entry(entry);
        }
        if self.thinking.is_none() {
            self.thinking = Some(ThinkingIndicator::new());
        }
        self.responder.schedule(reply);
    }

    pub fn handle_event(&mut self, event: AppEvent) -> ConversationAction {
        match event {
            AppEvent::BotReply { reply } => {
                self.history.push_entry(self.session.deliver(reply));
                if !self.session.is_typing() {
                    self.thinking = None;
                }
            }
        }
        ConversationAction::None
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ConversationAction {
        if key.kind != KeyEventKind::Press {
            return ConversationAction::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ConversationAction::Exit;
            }
            KeyCode::PageUp => {
                self.history.scroll_up(SCROLL_STEP);
                return ConversationAction::None;
            }
            KeyCode::PageDown => {
                self.history.scroll_down(SCROLL_STEP);
                return ConversationAction::None;
            }
            _ => {}
        }

        match self.composer.handle_key(key) {
            ConversationResult::Submitted(input) => {
                self.handle_input(&input);
                ConversationAction::None
            }
            ConversationResult::Command(command) => self.handle_slash_command(command),
            ConversationResult::Cancel => ConversationAction::Exit,
            ConversationResult::None => ConversationAction::None,
        }
    }

    /// Whether a reply is still being "thought about"
    pub fn is_typing(&self) -> bool {
        self.session.is_typing()
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn composer(&self) -> &ConversationComposer {
        &self.composer
    }

    fn handle_slash_command(&mut self, command: ParsedCommand) -> ConversationAction {
        match command.command {
            SlashCommand::Help => self.history.push_info(get_help_text()),
            SlashCommand::Lang => match command.argument() {
                None => self
                    .history
                    .push_info(languages_text(self.session.language().code)),
                Some(code) => match self.session.set_language(code) {
                    Ok(lang) => self.history.push_info(format!(
                        "Language set to {} {}. Replies are still written in English.",
                        lang.flag, lang.label
                    )),
                    Err(e) => self.history.push_error(e.to_string()),
                },
            },
            SlashCommand::Samples => self.history.push_info(samples_text()),
            SlashCommand::Sample => match command.sample_number() {
                Some(n) => match self.session.sample(n) {
                    Ok(question) => self.composer.set_content(question),
                    Err(e) => self.history.push_error(e.to_string()),
                },
                None => self.history.push_error(format!(
                    "Usage: /sample <1-{}>",
                    catalog::SAMPLE_QUESTIONS.len()
                )),
            },
            SlashCommand::Topics => self.history.push_info(topics_text()),
            SlashCommand::Subjects => self.history.push_info(subjects_text()),
            SlashCommand::Bye => return ConversationAction::Exit,
        }
        ConversationAction::None
    }

    fn header_line(&self) -> Line<'static> {
        let lang = self.session.language();
        Line::from(vec![
            Span::styled(
                "🤖 Ask-EKA",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  AI assistant for UPSC preparation",
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  {} {}", lang.flag, lang.label),
                Style::default().fg(Color::Cyan),
            ),
        ])
    }
}

impl Widget for &ConversationManager {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(self.composer.desired_height()),
            ])
            .split(area);

        buf.set_line(chunks[0].x, chunks[0].y, &self.header_line(), chunks[0].width);
        self.history.render(chunks[1], buf);
        if let Some(thinking) = &self.thinking {
            thinking.render(chunks[2], buf);
        }
        self.composer.render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::ResponseSelector;
    use crate::ui::conversation::history::{HistoryItem, NoticeKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn manager() -> (ConversationManager, UnboundedReceiver<AppEvent>) {
        let config = Config::default();
        let (responder, rx) = Responder::new(Duration::ZERO);
        let session = ChatSession::with_parts(
            ResponseSelector::builtin(),
            StdRng::seed_from_u64(3),
            &catalog::LANGUAGES[0],
        );
        let mut manager = ConversationManager::with_session(session, responder, &config);
        manager.start();
        (manager, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(manager: &mut ConversationManager, text: &str) -> ConversationAction {
        for c in text.chars() {
            manager.handle_key(key(KeyCode::Char(c)));
        }
        manager.handle_key(key(KeyCode::Enter))
    }

    fn last_notice(manager: &ConversationManager) -> Option<(String, NoticeKind)> {
        manager.history().items().last().and_then(|item| match item {
            HistoryItem::Notice { text, kind } => Some((text.clone(), *kind)),
            HistoryItem::Entry(_) => None,
        })
    }

    #[tokio::test]
    async fn question_shows_thinking_until_reply() {
        let (mut manager, mut rx) = manager();

        type_text(&mut manager, "What is the monsoon?");
        assert!(manager.is_typing());
        assert!(manager.thinking.is_some());
        assert_eq!(manager.history().len(), 1);

        let event = rx.recv().await.unwrap();
        manager.handle_event(event);

        assert!(!manager.is_typing());
        assert!(manager.thinking.is_none());
        assert_eq!(manager.session().log().len(), 2);
        assert_eq!(manager.history().len(), 2);
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let (mut manager, _rx) = manager();
        manager.handle_input("   ");
        assert!(manager.session().log().is_empty());
        assert!(!manager.is_typing());
        assert!(matches!(last_notice(&manager), Some((_, NoticeKind::Error))));
    }

    #[test]
    fn lang_command_switches_language() {
        let (mut manager, _rx) = manager();
        type_text(&mut manager, "/lang hindi");
        assert_eq!(manager.session().language().code, "hindi");
        let (text, kind) = last_notice(&manager).unwrap();
        assert_eq!(kind, NoticeKind::Info);
        assert!(text.contains("हिंदी"));
    }

    #[test]
    fn unknown_language_is_reported() {
        let (mut manager, _rx) = manager();
        type_text(&mut manager, "/lang klingon");
        assert_eq!(manager.session().language().code, "english");
        assert!(matches!(last_notice(&manager), Some((_, NoticeKind::Error))));
    }

    #[test]
    fn sample_command_fills_composer() {
        let (mut manager, _rx) = manager();
        type_text(&mut manager, "/sample 2");
        assert_eq!(manager.composer().content(), catalog::SAMPLE_QUESTIONS[1]);
        assert!(manager.session().log().is_empty());
    }

    #[test]
    fn sample_out_of_range_is_an_error() {
        let (mut manager, _rx) = manager();
        type_text(&mut manager, "/sample 9");
        assert!(matches!(last_notice(&manager), Some((_, NoticeKind::Error))));
        assert_eq!(manager.composer().content(), "");
    }

    #[test]
    fn bye_and_ctrl_c_exit() {
        let (mut manager, _rx) = manager();
        assert_eq!(type_text(&mut manager, "/bye"), ConversationAction::Exit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(manager.handle_key(ctrl_c), ConversationAction::Exit);
    }

    #[test]
    fn renders_header_with_language() {
        let (manager, _rx) = manager();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        (&manager).render(area, &mut buf);

        let header: String = (0..80).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert!(header.contains("Ask-EKA"));
        assert!(header.contains("English"));
    }
}
