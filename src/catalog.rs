//! Fixed presentation tables: languages, sample questions, assistant features
//! and the subject grid.

use serde::Serialize;

use crate::error::AskError;

/// A language the user can pick. Stored and shown only; replies stay in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
}

pub const LANGUAGES: &[LanguageOption] = &[
    LanguageOption { code: "english", label: "English", flag: "🇬🇧" },
    LanguageOption { code: "hindi", label: "हिंदी", flag: "🇮🇳" },
    LanguageOption { code: "telugu", label: "తెలుగు", flag: "🇮🇳" },
    LanguageOption { code: "tamil", label: "தமிழ்", flag: "🇮🇳" },
    LanguageOption { code: "kannada", label: "ಕನ್ನಡ", flag: "🇮🇳" },
    LanguageOption { code: "assamese", label: "অসমীয়া", flag: "🇮🇳" },
];

pub const DEFAULT_LANGUAGE: &str = "english";

pub const SAMPLE_QUESTIONS: &[&str] = &[
    "Explain the concept of federalism in Indian Constitution",
    "What are the major challenges in Indian economy?",
    "Describe the monsoon system in India",
    "Solve this CSAT reasoning problem",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Powered Explanations",
        description: "Get detailed explanations for complex UPSC topics with examples",
    },
    Feature {
        title: "Multi-Language Support",
        description: "Ask questions in 6 Indian languages for better understanding",
    },
    Feature {
        title: "Comprehensive Coverage",
        description: "Covers all UPSC subjects including prelims, mains, and CSAT",
    },
];

/// One card of the subject grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub topics: [&'static str; 4],
}

pub const SUBJECTS: &[Subject] = &[
    Subject {
        id: "polity",
        title: "Indian Polity",
        description: "Constitution, governance, political processes, and institutions",
        topics: ["Constitution", "Fundamental Rights", "Parliament", "Judiciary"],
    },
    Subject {
        id: "economy",
        title: "Economy",
        description: "Economic concepts, policies, and current economic affairs",
        topics: ["Microeconomics", "Macroeconomics", "Public Finance", "Economic Survey"],
    },
    Subject {
        id: "geography",
        title: "Geography",
        description: "Physical and human geography, world geography, and mapping",
        topics: ["Physical Geography", "Human Geography", "World Geography", "Mapping"],
    },
    Subject {
        id: "history",
        title: "History",
        description: "Ancient, medieval, and modern Indian history",
        topics: ["Ancient History", "Medieval History", "Modern History", "Art & Culture"],
    },
    Subject {
        id: "environment",
        title: "Environment",
        description: "Environmental science, ecology, and climate change",
        topics: ["Ecology", "Climate Change", "Biodiversity", "Environmental Laws"],
    },
    Subject {
        id: "international-relations",
        title: "International Relations",
        description: "Foreign policy, international organizations, and global affairs",
        topics: ["Foreign Policy", "International Organizations", "Global Issues", "Bilateral Relations"],
    },
    Subject {
        id: "science-technology",
        title: "Science & Technology",
        description: "Latest developments in science, technology, and innovation",
        topics: ["Space Technology", "Biotechnology", "IT & Communication", "Defence Technology"],
    },
    Subject {
        id: "ethics",
        title: "Ethics & Integrity",
        description: "Moral philosophy, case studies, and ethical dilemmas",
        topics: ["Moral Philosophy", "Case Studies", "Public Administration", "Ethical Dilemmas"],
    },
];

/// Look up a language by code (case-insensitive)
pub fn language(code: &str) -> Result<&'static LanguageOption, AskError> {
    let code = code.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .ok_or_else(|| AskError::UnknownLanguage(code, language_codes()))
}

pub fn language_codes() -> String {
    LANGUAGES.iter().map(|l| l.code).collect::<Vec<_>>().join(", ")
}

/// Sample question by 1-based position
pub fn sample_question(n: usize) -> Result<&'static str, AskError> {
    n.checked_sub(1)
        .and_then(|i| SAMPLE_QUESTIONS.get(i))
        .copied()
        .ok_or(AskError::UnknownSample(n, SAMPLE_QUESTIONS.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_lookup_ignores_case() {
        assert_eq!(language("Hindi").unwrap().label, "हिंदी");
        assert_eq!(language(" TAMIL ").unwrap().code, "tamil");
    }

    #[test]
    fn unknown_language_lists_codes() {
        let err = language("french").unwrap_err();
        assert!(matches!(err, AskError::UnknownLanguage(ref code, _) if code == "french"));
        assert!(err.to_string().contains("assamese"));
    }

    #[test]
    fn sample_questions_are_one_based() {
        assert_eq!(sample_question(1).unwrap(), SAMPLE_QUESTIONS[0]);
        assert_eq!(sample_question(4).unwrap(), "Solve this CSAT reasoning problem");
        assert_eq!(sample_question(0), Err(AskError::UnknownSample(0, 4)));
        assert_eq!(sample_question(5), Err(AskError::UnknownSample(5, 4)));
    }

    #[test]
    fn default_language_exists() {
        assert!(language(DEFAULT_LANGUAGE).is_ok());
        assert_eq!(SUBJECTS.len(), 8);
    }
}
