//! Chat state for one conversation: the log, the selected language and the
//! random source that picks among template alternatives.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{self, LanguageOption};
use crate::config::Config;
use crate::conversation::ConversationLog;
use crate::error::AskError;
use crate::events::{ConversationEntry, Sender};
use crate::selector::{ResponseSelector, Selection};

/// A reply chosen at submission time, waiting out the thinking delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Id of the user entry this answers
    pub in_reply_to: String,
    pub selection: Selection,
}

/// Chat state owned by the presentation layer.
///
/// Holds the conversation log, the selected language and the random source
/// for template choice. The selector it drives keeps no state of its own.
pub struct ChatSession {
    log: ConversationLog,
    selector: ResponseSelector<'static>,
    rng: StdRng,
    language: &'static LanguageOption,
    pending: usize,
}

impl ChatSession {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let language = catalog::language(&config.default_language)
            .unwrap_or(&catalog::LANGUAGES[0]);
        let selector = ResponseSelector::builtin().with_history_window(config.history_window);

        Self::with_parts(selector, rng, language)
    }

    pub fn with_parts(
        selector: ResponseSelector<'static>,
        rng: StdRng,
        language: &'static LanguageOption,
    ) -> Self {
        Self {
            log: ConversationLog::new(),
            selector,
            rng,
            language,
            pending: 0,
        }
    }

    /// Record a user message and choose the reply to it.
    ///
    /// Empty or whitespace-only input is refused and leaves the log untouched.
    /// The reply is computed against the history as it stood before this
    /// message; it is not added to the log until [`ChatSession::deliver`].
    pub fn submit(&mut self, input: &str) -> Result<PendingReply, AskError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(AskError::EmptyInput);
        }

        let window = self.log.last_n(self.selector.history_window());
        let selection = self.selector.select(text, window, &mut self.rng);
        let in_reply_to = self.log.append(Sender::User, text).id().to_string();
        self.pending += 1;

        tracing::debug!(
            entry = %in_reply_to,
            topic = ?selection.kind.topic(),
            "user message submitted"
        );

        Ok(PendingReply {
            in_reply_to,
            selection,
        })
    }

    /// Append a finished reply to the log
    pub fn deliver(&mut self, reply: PendingReply) -> &ConversationEntry {
        self.pending = self.pending.saturating_sub(1);
        tracing::debug!(in_reply_to = %reply.in_reply_to, "reply delivered");
        self.log.append(Sender::Bot, reply.selection.text)
    }

    /// Whether a reply is still "thinking"
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn language(&self) -> &'static LanguageOption {
        self.language
    }

    pub fn set_language(&mut self, code: &str) -> Result<&'static LanguageOption, AskError> {
        let language = catalog::language(code)?;
        self.language = language;
        tracing::info!(language = language.code, "language selected");
        Ok(language)
    }

    /// Sample question `n` (1-based), for the user to send or edit
    pub fn sample(&self, n: usize) -> Result<&'static str, AskError> {
        catalog::sample_question(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::TopicId;
    use crate::selector::{PatternClass, SelectionKind};

    fn session() -> ChatSession {
        ChatSession::with_parts(
            ResponseSelector::builtin(),
            StdRng::seed_from_u64(3),
            &catalog::LANGUAGES[0],
        )
    }

    #[test]
    fn empty_input_is_refused() {
        let mut chat = session();
        assert_eq!(chat.submit(""), Err(AskError::EmptyInput));
        assert_eq!(chat.submit("   \n\t"), Err(AskError::EmptyInput));
        assert!(chat.log().is_empty());
        assert!(!chat.is_typing());
    }

    #[test]
    fn submit_then_deliver_appends_in_order() {
        let mut chat = session();
        let reply = chat.submit("  Describe the monsoon system in India ").unwrap();
        assert!(chat.is_typing());
        assert_eq!(chat.log().len(), 1);
        assert_eq!(chat.log().entries()[0].text(), "Describe the monsoon system in India");
        assert_eq!(reply.in_reply_to, chat.log().entries()[0].id());

        chat.deliver(reply);
        assert!(!chat.is_typing());

        let senders: Vec<Sender> = chat.log().entries().iter().map(|e| e.sender()).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    }

    #[test]
    fn follow_up_uses_delivered_history() {
        let mut chat = session();
        let first = chat
            .submit("Explain the concept of federalism in Indian Constitution")
            .unwrap();
        chat.deliver(first);

        let second = chat.submit("tell me more").unwrap();
        assert!(matches!(
            second.selection.kind,
            SelectionKind::ConceptElaboration { topic: TopicId::Polity, concept: "federalism", .. }
        ));
    }

    #[test]
    fn follow_ups_only_see_the_recent_window() {
        let mut chat = ChatSession::with_parts(
            ResponseSelector::builtin().with_history_window(2),
            StdRng::seed_from_u64(3),
            &catalog::LANGUAGES[0],
        );
        let reply = chat.submit("Explain federalism").unwrap();
        chat.deliver(reply);
        let reply = chat.submit("hello").unwrap();
        chat.deliver(reply);

        let reply = chat.submit("tell me more").unwrap();
        assert_eq!(reply.selection.kind, SelectionKind::Pattern { class: PatternClass::Elaborate });
    }

    #[test]
    fn language_selection_does_not_change_replies() {
        let mut a = session();
        let mut b = session();
        b.set_language("hindi").unwrap();
        assert_eq!(b.language().code, "hindi");

        let ra = a.submit("What is the repo rate?").unwrap();
        let rb = b.submit("What is the repo rate?").unwrap();
        assert_eq!(ra.selection, rb.selection);
    }

    #[test]
    fn sample_lookup_is_one_based() {
        let chat = session();
        assert_eq!(chat.sample(3).unwrap(), "Describe the monsoon system in India");
        assert_eq!(chat.sample(0), Err(AskError::UnknownSample(0, 4)));
    }

    #[test]
    fn unknown_language_keeps_current() {
        let mut chat = session();
        assert!(chat.set_language("latin").is_err());
        assert_eq!(chat.language().code, "english");
    }
}
