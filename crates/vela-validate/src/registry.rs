//! Built-in pattern registry
//!
//! The closed table of known-bad learner-English surface patterns,
//! compiled once at first use. Severity `Error` marks phrasings a native
//! speaker would essentially never produce; `Warning` marks phrasings
//! that are grammatical but sound off in conversation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::pattern::{ForbiddenPattern, PatternSeverity};

fn error(name: &str, pattern: &str, description: &str) -> ForbiddenPattern {
    ForbiddenPattern::new(name, pattern, description).unwrap()
}

fn warning(name: &str, pattern: &str, description: &str) -> ForbiddenPattern {
    ForbiddenPattern::new(name, pattern, description)
        .unwrap()
        .with_severity(PatternSeverity::Warning)
}

lazy_static! {
    static ref BUILTIN: Vec<ForbiddenPattern> = vec![
        error(
            "overly-formal-apology",
            r"\bi am (?:so |very |terribly )?sorry (?:for|to) (?:bother|bothering|disturb|disturbing)(?: you)?\b",
            "Stiff full-sentence apology for a small interruption",
        )
        .with_suggestion("Sorry to bother you")
        .with_suggestion("Sorry to interrupt"),
        error(
            "textbook-greeting",
            r"\bhow do you do\b",
            "Greeting that survives in textbooks but not in speech",
        )
        .with_suggestion("How's it going?")
        .with_suggestion("How are you doing?"),
        error(
            "fine-thank-you",
            r"\bi'?m fine,? thank you\b",
            "Memorized classroom reply to \"how are you\"",
        )
        .with_suggestion("Pretty good, you?")
        .with_suggestion("Not bad, how about you?"),
        error(
            "please-kindly",
            r"\bplease kindly\b",
            "Doubled politeness marker",
        )
        .with_suggestion("Could you please")
        .with_suggestion("Would you mind"),
        error(
            "appointment-with-friend",
            r"\b(?:have|has|had|got) an? appointment with (?:my|a) friends?\b",
            "Appointment implies something formal or medical, not meeting friends",
        )
        .with_suggestion("I have plans with my friend")
        .with_suggestion("I'm meeting a friend"),
        error(
            "i-am-boring",
            r"\bi(?: am|'m| was) (?:so |very |really )?boring\b",
            "Boring describes the thing; bored describes the person",
        )
        .with_suggestion("I'm bored")
        .with_suggestion("I was so bored"),
        error(
            "teach-me-your",
            r"\bteach me your\b",
            "Teach is for skills; information is given or told",
        )
        .with_suggestion("Give me your")
        .with_suggestion("Tell me your"),
        warning(
            "my-hobby-is",
            r"\bmy hobby is\b",
            "Grammatical but almost never said aloud",
        )
        .with_suggestion("I'm really into")
        .with_suggestion("In my free time I"),
        warning(
            "so-so",
            r"\bso[- ]so\b",
            "Learner filler answer that sounds evasive",
        )
        .with_suggestion("It was okay")
        .with_suggestion("Not bad"),
        warning(
            "very-delicious",
            r"\bvery delicious\b",
            "Delicious is already strong; very stacks oddly on it",
        )
        .with_suggestion("really good")
        .with_suggestion("amazing"),
        warning(
            "play-with-friends",
            r"\b(?:play|played|playing) with (?:my|some) friends\b",
            "Adults hang out; children play",
        )
        .with_suggestion("hang out with my friends")
        .with_suggestion("hung out with some friends"),
        warning(
            "ceremonial-let-us",
            r"\blet us (?:go|start|begin|try|do|eat|meet|see)\b",
            "Uncontracted let us reads as ceremonial",
        )
        .with_suggestion("let's"),
        warning(
            "until-now",
            r"\buntil now\b",
            "Often a literal translation where so far is meant",
        )
        .with_suggestion("so far")
        .with_suggestion("up to now"),
        warning(
            "formal-request",
            r"\bi would like to request\b",
            "Heavy phrasing for an everyday ask",
        )
        .with_suggestion("Could I ask")
        .with_suggestion("I'd like to ask"),
    ];

    /// Informal contractions that mark natural spoken register
    static ref INFORMAL_CONTRACTION: Regex = Regex::new(
        r"(?i)\b(?:i'm|you're|we're|they're|it's|that's|there's|isn't|aren't|don't|doesn't|didn't|can't|won't|wouldn't|couldn't|shouldn't|i've|you've|we've|i'll|you'll|we'll|let's|gonna|wanna|gotta)\b",
    )
    .unwrap();

    /// Uncontracted pronoun-auxiliary sequences that mark written register
    static ref FORMAL_MARKER: Regex = Regex::new(
        r"(?i)\b(?:i am|it is|that is|there is|you are|we are|they are|i will|i would|i have|let us)\b",
    )
    .unwrap();

    static ref NEGATION: Regex = Regex::new(r"(?i)\bnot\b|n't\b").unwrap();
}

/// The built-in, ordered pattern table
pub fn builtin_patterns() -> &'static [ForbiddenPattern] {
    &BUILTIN
}

/// True when the expression uses a recognized informal contraction
pub fn has_informal_contraction(expression: &str) -> bool {
    INFORMAL_CONTRACTION.is_match(expression)
}

/// True when the expression carries an uncontracted formal marker
pub fn has_formal_marker(expression: &str) -> bool {
    FORMAL_MARKER.is_match(expression)
}

/// True when the expression contains any negation token
pub fn has_negation(expression: &str) -> bool {
    NEGATION.is_match(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_unique() {
        let patterns = builtin_patterns();
        for (i, a) in patterns.iter().enumerate() {
            for b in &patterns[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate pattern name {}", a.name);
            }
        }
    }

    #[test]
    fn test_overly_formal_apology_matches() {
        let pattern = builtin_patterns()
            .iter()
            .find(|p| p.name == "overly-formal-apology")
            .unwrap();

        assert!(pattern.matches("I am sorry for bothering you"));
        assert!(pattern.matches("I am terribly sorry to disturb you"));
        assert!(!pattern.matches("Sorry to bother you"));
        assert_eq!(pattern.severity, PatternSeverity::Error);
    }

    #[test]
    fn test_word_boundaries_block_substring_hits() {
        // "playing with my friends" should hit, "displaying" should not
        let pattern = builtin_patterns()
            .iter()
            .find(|p| p.name == "play-with-friends")
            .unwrap();

        assert!(pattern.matches("I was playing with my friends"));
        assert!(!pattern.matches("I was displaying with my friends a poster"));
    }

    #[test]
    fn test_register_detectors() {
        assert!(has_informal_contraction("I'm on my way"));
        assert!(!has_informal_contraction("I am on my way"));

        assert!(has_formal_marker("I am on my way"));
        assert!(!has_formal_marker("On my way"));

        assert!(has_negation("I am not sure"));
        assert!(has_negation("I can't make it"));
        assert!(!has_negation("I am sure"));
    }
}
