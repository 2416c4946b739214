//! Contextual response selection.
//!
//! Scores every topic in the knowledge table against the user's input, then
//! picks a canned reply. Recent conversation is consulted only for follow-ups
//! ("tell me more") whose input names no topic of its own. Matching is plain
//! substring containment on lower-cased text: no tokenization, no stemming,
//! so a keyword can match inside a longer unrelated word.

use rand::Rng;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::events::ConversationEntry;
use crate::knowledge::{Concept, KnowledgeBase, TopicId, KNOWLEDGE};
use crate::templates;

/// Number of trailing log entries consulted for concept matches
pub const DEFAULT_HISTORY_WINDOW: usize = 3;

/// Weight of a concept phrase match relative to a keyword match
const CONCEPT_WEIGHT: u32 = 2;

/// Input shapes recognised when no topic scored, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PatternClass {
    Greeting,
    Elaborate,
    Example,
    Strategy,
    CurrentAffairs,
    Question,
}

impl PatternClass {
    fn needles(&self) -> &'static [&'static str] {
        match self {
            PatternClass::Greeting => &[
                "hello",
                "namaste",
                "good morning",
                "good afternoon",
                "good evening",
            ],
            PatternClass::Elaborate => &[
                "elaborate",
                "tell me more",
                "more detail",
                "explain further",
                "explain more",
                "go deeper",
                "expand on",
                "in detail",
            ],
            PatternClass::Example => &["example", "for instance", "illustrate"],
            PatternClass::Strategy => &[
                "strategy",
                "how to prepare",
                "how should i prepare",
                "study plan",
                "preparation",
                "timetable",
            ],
            PatternClass::CurrentAffairs => &["current affairs", "news", "latest", "recent", "today"],
            PatternClass::Question => &["?"],
        }
    }

    /// Whether lower-cased `input` belongs to this class.
    ///
    /// "hi" and "hey" are too short for substring matching and must stand as
    /// whole words; punctuation around them is fine.
    pub fn matches(&self, input: &str) -> bool {
        if *self == PatternClass::Greeting
            && input
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| matches!(word, "hi" | "hey"))
        {
            return true;
        }
        self.needles().iter().any(|needle| input.contains(needle))
    }

    /// First class in priority order that matches lower-cased `input`
    pub fn classify(input: &str) -> Option<PatternClass> {
        PatternClass::iter().find(|class| class.matches(input))
    }
}

/// Hard-coded words used to guess a subject for the fallback reply
const FALLBACK_GUESSES: &[(&str, &str)] = &[
    ("prelims", "Prelims"),
    ("mains", "Mains"),
    ("essay", "Essay Writing"),
    ("interview", "the Personality Test"),
    ("optional", "your Optional Subject"),
    ("upsc", "UPSC Preparation"),
    ("exam", "UPSC Preparation"),
];

const DEFAULT_GUESS: &str = "General Studies";

/// How the reply was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SelectionKind {
    /// A concept phrase matched; full explanation with analysis and strategy
    ConceptExplanation {
        topic: TopicId,
        concept: &'static str,
        score: u32,
    },
    /// A concept from earlier in the conversation, expanded on request
    ConceptElaboration {
        topic: TopicId,
        concept: &'static str,
        score: u32,
    },
    /// Topic keywords matched but no concept phrase
    TopicGuidance { topic: TopicId, score: u32 },
    /// No topic scored; the input matched a pattern class
    Pattern { class: PatternClass },
    /// Nothing matched
    Fallback { guess: &'static str },
}

impl SelectionKind {
    pub fn topic(&self) -> Option<TopicId> {
        match self {
            SelectionKind::ConceptExplanation { topic, .. }
            | SelectionKind::ConceptElaboration { topic, .. }
            | SelectionKind::TopicGuidance { topic, .. } => Some(*topic),
            SelectionKind::Pattern { .. } | SelectionKind::Fallback { .. } => None,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            SelectionKind::ConceptExplanation { score, .. }
            | SelectionKind::ConceptElaboration { score, .. }
            | SelectionKind::TopicGuidance { score, .. } => *score,
            SelectionKind::Pattern { .. } | SelectionKind::Fallback { .. } => 0,
        }
    }
}

/// Reply text plus its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub text: String,
    pub kind: SelectionKind,
}

/// A concept phrase found while scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptHit {
    pub concept: &'static Concept,
    /// Found in the input itself rather than only in recent history
    pub from_input: bool,
}

/// Score of one topic against an input and its context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicScore {
    pub topic: TopicId,
    pub keyword_hits: u32,
    pub concept_hits: u32,
    pub score: u32,
    pub concept: Option<ConceptHit>,
}

/// Stateless reply selector over a knowledge table
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector<'k> {
    knowledge: &'k KnowledgeBase,
    history_window: usize,
}

impl ResponseSelector<'static> {
    /// Selector over the built-in table
    pub fn builtin() -> Self {
        Self::new(&KNOWLEDGE)
    }
}

impl Default for ResponseSelector<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'k> ResponseSelector<'k> {
    pub fn new(knowledge: &'k KnowledgeBase) -> Self {
        Self {
            knowledge,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    pub fn with_history_window(mut self, history_window: usize) -> Self {
        self.history_window = history_window;
        self
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    /// Score every topic in table order.
    ///
    /// Both arguments must already be lower-cased. Keywords count once each
    /// when found in `input`; concept phrases count double when found in
    /// either `input` or `context`.
    pub fn score_topics(&self, input: &str, context: &str) -> Vec<TopicScore> {
        self.knowledge
            .entries()
            .iter()
            .map(|entry| {
                let keyword_hits = entry.keywords.iter().filter(|kw| input.contains(*kw)).count() as u32;

                let mut concept_hits = 0;
                let mut first_in_input = None;
                let mut first_in_context = None;
                for concept in entry.concepts {
                    let in_input = input.contains(concept.phrase);
                    let in_context = context.contains(concept.phrase);
                    if in_input || in_context {
                        concept_hits += 1;
                    }
                    if in_input && first_in_input.is_none() {
                        first_in_input = Some(concept);
                    }
                    if in_context && first_in_context.is_none() {
                        first_in_context = Some(concept);
                    }
                }

                let concept = match (first_in_input, first_in_context) {
                    (Some(concept), _) => Some(ConceptHit { concept, from_input: true }),
                    (None, Some(concept)) => Some(ConceptHit { concept, from_input: false }),
                    (None, None) => None,
                };

                TopicScore {
                    topic: entry.topic,
                    keyword_hits,
                    concept_hits,
                    score: keyword_hits + CONCEPT_WEIGHT * concept_hits,
                    concept,
                }
            })
            .collect()
    }

    /// Highest scoring topic, if any scored above zero.
    ///
    /// Single left-to-right pass with strict `>`: the first topic to reach the
    /// maximum keeps it, later topics with an equal score do not replace it.
    pub fn best_topic(&self, input: &str, context: &str) -> Option<TopicScore> {
        let mut best: Option<TopicScore> = None;
        for candidate in self.score_topics(input, context) {
            let best_score = best.map_or(0, |b| b.score);
            if candidate.score > best_score {
                best = Some(candidate);
            }
        }
        best
    }

    /// Pick a reply for `input` given the conversation so far.
    ///
    /// Only the last `history_window` entries of `history` are consulted, and
    /// only when `input` scores no topic by itself and asks to elaborate.
    /// `input` must not be empty or whitespace-only; callers reject that
    /// before getting here. Never fails.
    pub fn select<R: Rng + ?Sized>(
        &self,
        input: &str,
        history: &[ConversationEntry],
        rng: &mut R,
    ) -> Selection {
        let input = input.to_lowercase();
        let best = self.best_topic(&input, "").or_else(|| {
            PatternClass::Elaborate
                .matches(&input)
                .then(|| self.best_topic(&input, &self.context(history)))
                .flatten()
        });

        if let Some(best) = best {
            tracing::debug!(
                topic = %best.topic,
                score = best.score,
                keywords = best.keyword_hits,
                concepts = best.concept_hits,
                "topic matched"
            );
            return self.topic_reply(&input, best);
        }

        if let Some(class) = PatternClass::classify(&input) {
            tracing::debug!(class = %class, "pattern matched");
            let text = match class {
                PatternClass::Greeting => {
                    templates::greeting(rng.gen_range(0..templates::GREETINGS.len())).to_string()
                }
                PatternClass::Elaborate => templates::elaborate_generic().to_string(),
                PatternClass::Example => {
                    templates::example(rng.gen_range(0..templates::EXAMPLES.len())).to_string()
                }
                PatternClass::Strategy => templates::strategy().to_string(),
                PatternClass::CurrentAffairs => templates::current_affairs().to_string(),
                PatternClass::Question => templates::question().to_string(),
            };
            return Selection {
                text,
                kind: SelectionKind::Pattern { class },
            };
        }

        let guess = guess_subject(&input);
        tracing::debug!(guess, "no match, falling back");
        Selection {
            text: templates::fallback(guess),
            kind: SelectionKind::Fallback { guess },
        }
    }

    fn context(&self, history: &[ConversationEntry]) -> String {
        let start = history.len().saturating_sub(self.history_window);
        history[start..]
            .iter()
            .map(|entry| entry.text().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn topic_reply(&self, input: &str, best: TopicScore) -> Selection {
        let topic = best.topic;
        let score = best.score;

        match best.concept {
            Some(hit) if !hit.from_input && PatternClass::Elaborate.matches(input) => Selection {
                text: templates::concept_elaboration(topic, hit.concept),
                kind: SelectionKind::ConceptElaboration {
                    topic,
                    concept: hit.concept.phrase,
                    score,
                },
            },
            Some(hit) => Selection {
                text: templates::concept_detail(topic, hit.concept),
                kind: SelectionKind::ConceptExplanation {
                    topic,
                    concept: hit.concept.phrase,
                    score,
                },
            },
            None => {
                let text = match self.knowledge.get(topic) {
                    Some(entry) => templates::topic_guidance(entry),
                    None => templates::fallback(topic.display_name()),
                };
                Selection {
                    text,
                    kind: SelectionKind::TopicGuidance { topic, score },
                }
            }
        }
    }
}

/// Heuristic subject guess for the fallback reply
pub fn guess_subject(input: &str) -> &'static str {
    FALLBACK_GUESSES
        .iter()
        .find(|(needle, _)| input.contains(needle))
        .map(|(_, guess)| *guess)
        .unwrap_or(DEFAULT_GUESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationLog;
    use crate::events::Sender;
    use crate::knowledge::KnowledgeEntry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn monsoon_is_geography() {
        let selector = ResponseSelector::builtin();
        for input in [
            "Describe the monsoon system in India",
            "monsoon",
            "Why does the MONSOON fail some years?",
        ] {
            let selection = selector.select(input, &[], &mut rng());
            assert_eq!(selection.kind.topic(), Some(TopicId::Geography), "input: {input}");
            assert!(selection.kind.score() > 0);
        }
    }

    #[test]
    fn federalism_question_explains_concept() {
        let selection = ResponseSelector::builtin().select(
            "Explain the concept of federalism in Indian Constitution",
            &[],
            &mut rng(),
        );

        let polity = KNOWLEDGE.get(TopicId::Polity).unwrap();
        let federalism = polity.concept("federalism").unwrap();
        assert_eq!(
            selection.kind,
            SelectionKind::ConceptExplanation {
                topic: TopicId::Polity,
                concept: "federalism",
                score: 4,
            }
        );
        assert!(selection.text.contains(federalism.explanation));
    }

    #[test]
    fn economy_challenges_get_generic_guidance() {
        let selection = ResponseSelector::builtin().select(
            "What are the major challenges in Indian economy?",
            &[],
            &mut rng(),
        );

        assert_eq!(
            selection.kind,
            SelectionKind::TopicGuidance {
                topic: TopicId::Economy,
                score: 1,
            }
        );
        assert_eq!(selection.text, templates::topic_guidance(KNOWLEDGE.get(TopicId::Economy).unwrap()));
    }

    #[test]
    fn tell_me_more_elaborates_on_previous_concept() {
        let selector = ResponseSelector::builtin();
        let mut log = ConversationLog::new();
        let question = "Explain the concept of federalism in Indian Constitution";
        log.append(Sender::User, question);
        let first = selector.select(question, &[], &mut rng());
        log.append(Sender::Bot, first.text);

        let selection = selector.select("tell me more", log.entries(), &mut rng());
        match selection.kind {
            SelectionKind::ConceptElaboration { topic, concept, .. } => {
                assert_eq!(topic, TopicId::Polity);
                assert_eq!(concept, "federalism");
            }
            other => panic!("expected elaboration, got {other:?}"),
        }
        assert_ne!(selection.text, templates::elaborate_generic());
    }

    #[test]
    fn tell_me_more_without_history_is_generic() {
        let selection = ResponseSelector::builtin().select("tell me more", &[], &mut rng());
        assert_eq!(selection.kind, SelectionKind::Pattern { class: PatternClass::Elaborate });
        assert_eq!(selection.text, templates::elaborate_generic());
    }

    #[test]
    fn history_outside_window_is_ignored() {
        let selector = ResponseSelector::builtin();
        let mut log = ConversationLog::new();
        log.append(Sender::Bot, "federalism");
        log.append(Sender::User, "ok");
        log.append(Sender::Bot, "sure");
        log.append(Sender::User, "thanks");

        let selection = selector.select("tell me more", log.entries(), &mut rng());
        assert_eq!(selection.kind, SelectionKind::Pattern { class: PatternClass::Elaborate });
    }

    #[test]
    fn history_concepts_only_resolve_follow_ups() {
        let mut log = ConversationLog::new();
        log.append(Sender::Bot, "We talked about the repo rate earlier.");
        let selector = ResponseSelector::builtin();

        let selection = selector.select("hello", log.entries(), &mut rng());
        assert_eq!(selection.kind, SelectionKind::Pattern { class: PatternClass::Greeting });

        let selection = selector.select("elaborate please", log.entries(), &mut rng());
        assert_eq!(
            selection.kind,
            SelectionKind::ConceptElaboration {
                topic: TopicId::Economy,
                concept: "repo rate",
                score: 2,
            }
        );
    }

    #[test]
    fn input_topic_beats_concepts_in_history() {
        let mut log = ConversationLog::new();
        let federalism = "Explain the concept of federalism in Indian Constitution";
        log.append(Sender::User, federalism);
        let reply = ResponseSelector::builtin().select(federalism, &[], &mut rng());
        log.append(Sender::Bot, reply.text);

        let selection = ResponseSelector::builtin().select(
            "Describe the monsoon system in India",
            log.entries(),
            &mut rng(),
        );
        assert_eq!(selection.kind.topic(), Some(TopicId::Geography));
    }

    #[test]
    fn hello_is_a_known_greeting() {
        let selector = ResponseSelector::builtin();
        for seed in 0..16 {
            let selection = selector.select("hello", &[], &mut StdRng::seed_from_u64(seed));
            assert_eq!(selection.kind, SelectionKind::Pattern { class: PatternClass::Greeting });
            assert!(templates::GREETINGS.contains(&selection.text.as_str()));
        }
    }

    #[test]
    fn pinned_seed_is_deterministic() {
        let selector = ResponseSelector::builtin();
        let a = selector.select("hello", &[], &mut StdRng::seed_from_u64(42));
        let b = selector.select("hello", &[], &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn topic_replies_are_stable_across_calls() {
        let selector = ResponseSelector::builtin();
        let input = "Describe the monsoon system in India";
        let a = selector.select(input, &[], &mut StdRng::seed_from_u64(1));
        let b = selector.select(input, &[], &mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
    }

    #[test]
    fn first_topic_wins_ties() {
        static SHARED: &[&str] = &["shared"];
        let entry = |topic| KnowledgeEntry {
            topic,
            keywords: SHARED,
            concepts: &[],
            focus_areas: &[],
            sources: &[],
        };

        let kb = KnowledgeBase::new(vec![entry(TopicId::Economy), entry(TopicId::Polity)]);
        let best = ResponseSelector::new(&kb).best_topic("a shared word", "").unwrap();
        assert_eq!(best.topic, TopicId::Economy);

        let kb = KnowledgeBase::new(vec![entry(TopicId::Polity), entry(TopicId::Economy)]);
        let best = ResponseSelector::new(&kb).best_topic("a shared word", "").unwrap();
        assert_eq!(best.topic, TopicId::Polity);
    }

    #[test]
    fn pattern_classes_in_priority_order() {
        let selector = ResponseSelector::builtin();
        let class_of = |input: &str| match selector.select(input, &[], &mut rng()).kind {
            SelectionKind::Pattern { class } => Some(class),
            _ => None,
        };

        assert_eq!(class_of("hi"), Some(PatternClass::Greeting));
        assert_eq!(class_of("can you elaborate?"), Some(PatternClass::Elaborate));
        assert_eq!(class_of("give me an example"), Some(PatternClass::Example));
        assert_eq!(class_of("what strategy should I follow?"), Some(PatternClass::Strategy));
        assert_eq!(class_of("any news for me"), Some(PatternClass::CurrentAffairs));
        assert_eq!(class_of("who wrote it?"), Some(PatternClass::Question));
    }

    #[test]
    fn short_greetings_tolerate_punctuation() {
        for input in ["hi", "hi!", "hey, there", "hi. can we start", "ok hey"] {
            assert!(PatternClass::Greeting.matches(input), "input: {input}");
        }
        for input in ["which one", "they said", "chin up"] {
            assert!(!PatternClass::Greeting.matches(input), "input: {input}");
        }
    }

    #[test]
    fn fallback_guesses_subject() {
        let selector = ResponseSelector::builtin();
        let selection = selector.select("prelims cutoff", &[], &mut rng());
        assert_eq!(selection.kind, SelectionKind::Fallback { guess: "Prelims" });
        assert!(selection.text.contains("Prelims"));

        let selection = selector.select("xyz", &[], &mut rng());
        assert_eq!(selection.kind, SelectionKind::Fallback { guess: DEFAULT_GUESS });
    }

    #[test]
    fn substring_matching_is_not_word_bounded() {
        // "gst" sits inside "suggest"; accepted imprecision of substring matching
        let best = ResponseSelector::builtin().best_topic("please suggest", "").unwrap();
        assert_eq!(best.topic, TopicId::Economy);
    }

    #[test]
    fn selection_serializes_with_kind_tag() {
        let selection = ResponseSelector::builtin().select("monsoon", &[], &mut rng());
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["kind"]["kind"], "concept-explanation");
        assert_eq!(json["kind"]["topic"], "geography");
    }
}
