//! Irrelevant-input detection.
//!
//! Input that is nothing but small talk (greetings, thanks, "who are you",
//! "help", or blank) never reaches the LLM. Each pattern must match the
//! whole input; surrounding whitespace and trailing punctuation are tolerated.

use std::sync::LazyLock;

use regex::RegexSet;

/// Whole-string small-talk patterns, matched case-insensitively.
const IRRELEVANT_PATTERNS: &[&str] = &[
    // blank
    r"^\s*$",
    // greetings
    r"^\s*(hi|hello|hey|hiya|howdy|yo|greetings|good\s+(morning|afternoon|evening))(\s+there)?[\s!.,?]*$",
    // thanks / farewell
    r"^\s*(thanks|thank\s+you|thx|ty|cheers|bye|goodbye|see\s+you|see\s+ya|ok\s+thanks)(\s+(a\s+lot|so\s+much|very\s+much))?[\s!.,?]*$",
    // meta-questions about the assistant
    r"^\s*(who\s+are\s+you|what\s+are\s+you|what\s+can\s+you\s+do|what\s+do\s+you\s+do|how\s+are\s+you(\s+doing)?|how\s+do\s+you\s+work)[\s!.,?]*$",
    // bare help
    r"^\s*help(\s+me)?[\s!.,?]*$",
];

static IRRELEVANT_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    let case_insensitive: Vec<String> = IRRELEVANT_PATTERNS
        .iter()
        .map(|p| format!("(?i){p}"))
        .collect();
    RegexSet::new(case_insensitive).expect("irrelevant-input patterns are valid")
});

/// True when `text` carries no job or resume content at all.
pub fn is_irrelevant(text: &str) -> bool {
    IRRELEVANT_SET.is_match(text)
}
