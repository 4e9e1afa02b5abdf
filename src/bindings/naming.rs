//! Identifier rewriting from SDK mixed case to snake case.

use regex::Regex;

/// A word is one letter followed by at least one lowercase letter.
const WORD_PATTERN: &str = r"[a-zA-Z][a-z]+";

/// Converts SDK-style identifiers such as `GetEncodeProfileGUIDCount` into
/// `get_encode_profile_guid_count`.
///
/// Characters that never form part of a word (digits, isolated capitals)
/// are dropped. An identifier with no words at all, such as `x`, is
/// lowercased as a whole instead.
pub struct NameTransformer {
    word: Regex,
}

impl Default for NameTransformer {
    fn default() -> Self {
        NameTransformer::new()
    }
}

impl NameTransformer {
    /// Create a new name transformer.
    pub fn new() -> Self {
        NameTransformer {
            word: Regex::new(WORD_PATTERN).expect("word pattern is valid"),
        }
    }

    /// Transform an identifier to snake case.
    pub fn transform(&self, raw: &str) -> String {
        // `GUID` would otherwise tokenize as nothing.
        let normalized = raw.replace("UID", "uid");

        let words: Vec<String> = self
            .word
            .find_iter(&normalized)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        if words.is_empty() {
            return normalized.to_lowercase();
        }

        words.join("_")
    }
}
