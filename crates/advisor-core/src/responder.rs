//! Decision-List Responder
//!
//! Maps a free-form utterance to a canned reply. Rules are evaluated
//! top-down against the case-folded text; the first rule with a keyword
//! contained in the utterance wins, otherwise the fallback reply is used.
//!
//! ```text
//! "Can you analyze my portfolio?"
//!        │ to_lowercase
//!        ▼
//!  ┌──────────────┐   no   ┌──────────────┐   no         ┌──────────┐
//!  │ rule 1 match?│──────▶│ rule 2 match?│── ... ──────▶│ fallback │
//!  └──────────────┘        └──────────────┘              └──────────┘
//!        │ yes
//!        ▼
//!   rule 1 response
//! ```
//!
//! The responder is stateless: it never sees earlier turns.

use serde::Serialize;

/// One guarded rule: fires when any keyword is a substring of the
/// normalized utterance. Keywords must be lowercase.
#[derive(Clone, Copy, Debug)]
pub struct IntentRule<I: 'static> {
    /// Intent reported when this rule fires
    pub intent: I,

    /// Lowercase substrings that trigger the rule
    pub keywords: &'static [&'static str],

    /// Reply text
    pub response: &'static str,
}

impl<I> IntentRule<I> {
    pub const fn new(
        intent: I,
        keywords: &'static [&'static str],
        response: &'static str,
    ) -> Self {
        Self { intent, keywords, response }
    }

    /// Check against an already normalized utterance
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Outcome of matching one utterance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reply<I> {
    pub intent: I,
    pub response: &'static str,
}

/// Ordered rule table plus fallback
#[derive(Clone, Copy, Debug)]
pub struct IntentResponder<I: 'static> {
    rules: &'static [IntentRule<I>],
    fallback: Reply<I>,
}

impl<I: Copy> IntentResponder<I> {
    /// Build a responder. Rule order is significant.
    pub const fn new(
        rules: &'static [IntentRule<I>],
        fallback_intent: I,
        fallback_response: &'static str,
    ) -> Self {
        Self {
            rules,
            fallback: Reply {
                intent: fallback_intent,
                response: fallback_response,
            },
        }
    }

    /// Case-fold an utterance for matching
    pub fn normalize(utterance: &str) -> String {
        utterance.to_lowercase()
    }

    /// Find the first firing rule, or the fallback
    pub fn classify(&self, utterance: &str) -> Reply<I> {
        let normalized = Self::normalize(utterance);
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map_or(self.fallback, |rule| Reply {
                intent: rule.intent,
                response: rule.response,
            })
    }

    /// Reply text for an utterance
    pub fn respond(&self, utterance: &str) -> &'static str {
        self.classify(utterance).response
    }

    pub fn rules(&self) -> &'static [IntentRule<I>] {
        self.rules
    }

    pub fn fallback(&self) -> Reply<I> {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
    enum Topic {
        Weather,
        Sport,
        Other,
    }

    static RULES: [IntentRule<Topic>; 2] = [
        IntentRule::new(Topic::Weather, &["rain", "sun"], "weather reply"),
        IntentRule::new(Topic::Sport, &["football", "sun"], "sport reply"),
    ];

    static RESPONDER: IntentResponder<Topic> =
        IntentResponder::new(&RULES, Topic::Other, "fallback reply");

    #[test]
    fn test_first_match_wins() {
        // "sun" appears in both rules; the earlier one takes it
        let reply = RESPONDER.classify("Sunday football");
        assert_eq!(reply.intent, Topic::Weather);
        assert_eq!(reply.response, "weather reply");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(RESPONDER.respond("FOOTBALL tonight"), "sport reply");
    }

    #[test]
    fn test_fallback() {
        let reply = RESPONDER.classify("nothing relevant");
        assert_eq!(reply, RESPONDER.fallback());
        assert_eq!(reply.intent, Topic::Other);
    }

    #[test]
    fn test_stateless() {
        assert_eq!(RESPONDER.respond("rain"), RESPONDER.respond("rain"));
        assert_eq!(RESPONDER.respond(""), "fallback reply");
    }
}
