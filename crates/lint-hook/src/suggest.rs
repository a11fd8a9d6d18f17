//! Keyword-driven fix suggestions.
//!
//! The mapping is a fixed, ordered table. Each entry pairs a lowercase
//! keyword with advice; the first entry whose keyword occurs anywhere in the
//! lowercased message wins, and an unmatched message falls back to generic
//! advice. There is no scoring and no message analysis beyond the substring
//! test.

/// Ordered keyword table. When a message contains several keywords the
/// earliest entry decides, so order is part of the contract.
const SUGGESTIONS: &[(&str, &str)] = &[
    ("syntaxerror", "Check for a missing ':' or unbalanced brackets."),
    ("nameerror", "A name is undeclared or misspelled."),
    ("indentation", "Check the indentation; use 4 spaces per level."),
    ("typeerror", "Check the types of the values passed to the call."),
];

const FALLBACK: &str = "Re-check the syntax and spelling near the reported line.";

/// Pick advice for a checker message.
///
/// Matching is case-insensitive and positional: the first table entry whose
/// keyword is contained in the message decides.
pub fn suggestion_for(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    SUGGESTIONS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, advice)| advice)
        .unwrap_or(FALLBACK)
}
