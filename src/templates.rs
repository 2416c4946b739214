//! Canned reply text. Every reply the assistant gives is assembled here.

use crate::knowledge::{Concept, KnowledgeEntry, TopicId};

pub const GREETINGS: [&str; 2] = [GREETING_WELCOME, GREETING_NAMASTE];

pub const EXAMPLES: [&str; 2] = [EXAMPLE_POLITY, EXAMPLE_ECONOMY];

/// Used when a concept has no dedicated analysis entry
pub const GENERIC_ANALYSIS: &str = "This concept is examined regularly in both Prelims and Mains. Connect it with recent developments and previous year questions to build a multi-dimensional answer.";

/// Used when a concept has no dedicated study strategy entry
pub const GENERIC_STRATEGY: &str = "Read the standard source first, make short notes in your own words, then practise two or three previous year questions on it.";

const GREETING_WELCOME: &str = r#"👋 **Hello! I'm Ask-EKA, your UPSC study companion.**

I can help you with:
• 📜 Polity, Economy, Geography and History
• 🌱 Environment, International Relations and Science & Technology
• ⚖️ Ethics case studies and CSAT practice

Ask me about any concept and I'll explain it with analysis and a study strategy."#;

const GREETING_NAMASTE: &str = r#"🙏 **Namaste! Ask-EKA here.**

Ready to make your preparation smarter. Try asking about:
• A provision of the Constitution
• A process in physical geography
• An indicator from the Economic Survey

What would you like to study today?"#;

const ELABORATE_GENERIC: &str = r#"🔎 **Happy to go deeper!**

Tell me which topic or concept you'd like me to expand on (for example a constitutional provision, an economic indicator or a landform) and I'll break it down with analysis and a study plan."#;

const EXAMPLE_POLITY: &str = r#"📝 **Here's an example:**

Federal features in practice: during the GST rollout, the Union and the States pooled their taxing powers in the GST Council, where the Centre holds one-third of the votes and the States two-thirds. Decisions need a three-fourths majority, so neither side can act alone.

Name a topic and I'll give you an example tailored to it."#;

const EXAMPLE_ECONOMY: &str = r#"📝 **Here's an example:**

When the RBI raises the repo rate, banks borrow at a higher cost and pass it on through higher lending rates. Credit demand slows, easing demand-pull inflation.

Name a topic and I'll give you an example tailored to it."#;

const STRATEGY: &str = r#"🎯 **UPSC Preparation Strategy**

1. **Foundation:** finish the NCERTs (Class VI-XII) for every GS subject.
2. **Standard books:** one source per subject, revised at least three times.
3. **Current affairs:** a daily newspaper plus a monthly compilation.
4. **Answer writing:** practise Mains answers from month three onwards.
5. **Tests:** attempt full-length Prelims mocks and analyse every mistake.

⏰ Keep a weekly timetable and protect one day for revision."#;

const CURRENT_AFFAIRS: &str = r#"📰 **Current Affairs Approach**

• Read one national newspaper daily and note only exam-relevant items.
• Follow PIB releases for government schemes and policy updates.
• Revise with a monthly compilation and link each item to a static topic.
• Use the Economic Survey and Budget for the economy section.

Tell me a news topic and I'll connect it to the syllabus."#;

const QUESTION: &str = r#"🤔 **Good question!**

I don't have a detailed note on that yet. Try rephrasing with a specific subject or concept, for example Polity, Economy, Geography, History, Environment, International Relations, Science & Technology, Ethics or CSAT, and I'll give you a structured answer."#;

/// Detailed reply for a matched (topic, concept) pair
pub fn concept_detail(topic: TopicId, concept: &Concept) -> String {
    format!(
        "📚 **{title}** ({topic})\n\n{explanation}\n\n🔍 **Analysis:**\n{analysis}\n\n🎯 **Study Strategy:**\n{strategy}\n\n💡 Ask for an example or say \"tell me more\" to go deeper.",
        title = title_case(concept.phrase),
        topic = topic.display_name(),
        explanation = concept.explanation,
        analysis = concept.analysis.unwrap_or(GENERIC_ANALYSIS),
        strategy = concept.strategy.unwrap_or(GENERIC_STRATEGY),
    )
}

/// Follow-up reply when the user asks to go deeper on a concept discussed earlier
pub fn concept_elaboration(topic: TopicId, concept: &Concept) -> String {
    format!(
        "🔎 **More on {title}** ({topic})\n\n{analysis}\n\n📌 **Key points to remember:**\n{explanation}\n\n🎯 **How to use this in the exam:**\n{strategy}",
        title = title_case(concept.phrase),
        topic = topic.display_name(),
        analysis = concept.analysis.unwrap_or(GENERIC_ANALYSIS),
        explanation = concept.explanation,
        strategy = concept.strategy.unwrap_or(GENERIC_STRATEGY),
    )
}

/// General guidance when a topic matched but no specific concept did
pub fn topic_guidance(entry: &KnowledgeEntry) -> String {
    let mut reply = format!(
        "📖 **{} Guidance**\n\nHere's how to approach this area:\n",
        entry.topic.display_name()
    );
    for area in entry.focus_areas {
        reply.push_str(&format!("• {area}\n"));
    }
    reply.push_str("\n📚 **Recommended sources:**\n");
    for source in entry.sources {
        reply.push_str(&format!("• {source}\n"));
    }
    reply.push_str("\n💡 Ask about a specific concept for a detailed explanation.");
    reply
}

/// Reply when nothing matched; `guess` is the heuristic subject guess
pub fn fallback(guess: &str) -> String {
    format!(
        "🤖 **Let me help you with {guess}.**\n\nI couldn't find a specific note for that question. You can:\n• Name a subject or concept you're studying\n• Ask for a preparation strategy\n• Ask for current affairs tips\n\nI'm here to make your UPSC journey easier!"
    )
}

pub fn greeting(index: usize) -> &'static str {
    GREETINGS[index % GREETINGS.len()]
}

pub fn example(index: usize) -> &'static str {
    EXAMPLES[index % EXAMPLES.len()]
}

pub fn elaborate_generic() -> &'static str {
    ELABORATE_GENERIC
}

pub fn strategy() -> &'static str {
    STRATEGY
}

pub fn current_affairs() -> &'static str {
    CURRENT_AFFAIRS
}

pub fn question() -> &'static str {
    QUESTION
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
