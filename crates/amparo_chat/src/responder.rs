//! The keyword responder: maps free-text input to a supportive reply.
//!
//! A plain substring matcher, not an NLP system. The only
//! non-determinism is the tie-break among a rule's candidate replies,
//! drawn from an injected seedable RNG so tests can pin outputs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::rules::RuleTable;

/// Emitted only if a reply list is somehow empty. The builtin table never
/// triggers it; the responder must still never return an empty string.
const FALLBACK_REPLY: &str = "Estou aqui para ouvir.";

pub struct Responder {
    table: RuleTable,
    rng: StdRng,
}

impl Responder {
    pub fn new(table: RuleTable) -> Self {
        Self {
            table,
            rng: StdRng::from_entropy(),
        }
    }

    /// Responder with a fixed seed, for deterministic tests.
    pub fn with_seed(table: RuleTable, seed: u64) -> Self {
        Self {
            table,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select a reply for the given user text.
    ///
    /// Lowercases the input, walks the rules in priority order and picks
    /// uniformly among the first matching rule's replies; with no match
    /// (including empty input) picks among the default replies. Always
    /// returns a non-empty string, never an error.
    pub fn respond(&mut self, user_text: &str) -> String {
        let lowered = user_text.to_lowercase();

        let replies = match self.table.find_match(&lowered) {
            Some(rule) => &rule.replies,
            None => &self.table.default_replies,
        };

        replies
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_REPLY)
            .to_string()
    }
}
