use anyhow::{Context, Result};

use crate::catalog;
use crate::config::Config;
use crate::knowledge::KNOWLEDGE;
use crate::session::ChatSession;

/// Answer a single question and print the reply
pub fn ask(config: &Config, question: &str, json: bool) -> Result<()> {
    println!("{}", answer(config, question, json)?);
    Ok(())
}

/// The reply text, or the whole selection as pretty JSON
pub fn answer(config: &Config, question: &str, json: bool) -> Result<String> {
    let mut session = ChatSession::new(config);
    let reply = session.submit(question)?;

    if json {
        serde_json::to_string_pretty(&reply.selection).context("Failed to serialize reply")
    } else {
        Ok(reply.selection.text)
    }
}

pub fn list_topics() -> Result<()> {
    print!("{}", topics_text());
    Ok(())
}

pub fn list_languages(config: &Config) -> Result<()> {
    print!("{}", languages_text(&config.default_language));
    Ok(())
}

pub fn list_subjects() -> Result<()> {
    print!("{}", subjects_text());
    Ok(())
}

/// Topics with their keywords and concept phrases
pub fn topics_text() -> String {
    let mut out = String::from("🧠 Topics Ask-EKA knows:\n");
    for entry in KNOWLEDGE.entries() {
        out.push_str(&format!("\n📘 {} ({})\n", entry.topic.display_name(), entry.topic.key()));
        out.push_str(&format!("   keywords: {}\n", entry.keywords.join(", ")));
        let concepts: Vec<&str> = entry.concepts.iter().map(|c| c.phrase).collect();
        out.push_str(&format!("   concepts: {}\n", concepts.join(", ")));
    }
    out
}

/// Language options, marking `current`
pub fn languages_text(current: &str) -> String {
    let mut out = String::from("🌐 Languages:\n");
    for lang in catalog::LANGUAGES {
        let marker = if lang.code == current { "  ✓" } else { "" };
        out.push_str(&format!("  {} {} ({}){}\n", lang.flag, lang.label, lang.code, marker));
    }
    out.push_str("Replies are currently written in English whichever language is selected.\n");
    out
}

pub fn subjects_text() -> String {
    let mut out = String::from("📚 UPSC subjects:\n");
    for subject in catalog::SUBJECTS {
        out.push_str(&format!("\n• {}: {}\n", subject.title, subject.description));
        out.push_str(&format!("  {}\n", subject.topics.join(" · ")));
    }
    out
}

pub fn samples_text() -> String {
    let mut out = String::from("💡 Try these sample questions (/sample <n> to use one):\n");
    for (i, question) in catalog::SAMPLE_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, question));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AskError;

    #[test]
    fn answer_rejects_blank_questions() {
        let err = answer(&Config::default(), "   ", false).unwrap_err();
        assert_eq!(err.downcast_ref::<AskError>(), Some(&AskError::EmptyInput));
    }

    #[test]
    fn answer_prints_reply_text() {
        let text = answer(&Config::default(), "Describe the monsoon system in India", false).unwrap();
        assert!(text.starts_with("📚 **Monsoon**"));
    }

    #[test]
    fn answer_json_carries_classification() {
        let out = answer(
            &Config::default(),
            "What are the major challenges in Indian economy?",
            true,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["kind"]["kind"], "topic-guidance");
        assert_eq!(json["kind"]["topic"], "economy");
        assert_eq!(json["kind"]["score"], 1);
        assert!(json["text"].as_str().unwrap().contains("Indian Economy Guidance"));
    }

    #[test]
    fn topics_text_lists_concepts() {
        let text = topics_text();
        assert!(text.contains("Indian Polity (polity)"));
        assert!(text.contains("federalism"));
        assert!(text.contains("csat"));
    }

    #[test]
    fn languages_text_marks_current() {
        let text = languages_text("tamil");
        assert!(text.contains("தமிழ் (tamil)  ✓"));
        assert!(!text.contains("(english)  ✓"));
    }

    #[test]
    fn samples_are_numbered_from_one() {
        let text = samples_text();
        assert!(text.contains("1. Explain the concept of federalism"));
        assert!(text.contains("4. Solve this CSAT reasoning problem"));
    }

    #[test]
    fn subjects_text_has_every_subject() {
        let text = subjects_text();
        for subject in catalog::SUBJECTS {
            assert!(text.contains(subject.title));
        }
    }
}
