//! Phrase-cycling typewriter state machine.
//!
//! Types forward one character per tick, pauses at full length, deletes
//! backward to empty, then moves to the next phrase (wrapping) forever. Each
//! `tick` reports the text to display plus the delay until the next tick, so
//! the DOM layer is a dumb chained-timeout driver.

/// Delay per typed character.
pub const TYPE_MS: u32 = 100;
/// Delay per deleted character.
pub const DELETE_MS: u32 = 60;
/// Hold at full phrase length before deleting.
pub const PAUSE_MS: u32 = 2500;
/// Hold at empty before starting the next phrase.
pub const NEXT_PHRASE_MS: u32 = 400;
/// Delay before the very first tick.
pub const START_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advances one character in the current direction and schedules the
    /// next tick.
    pub fn tick(&mut self) -> TypewriterStep {
        let current: Vec<char> = self.phrases[self.phrase].chars().collect();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(current.len());
        }
        let text: String = current[..self.chars].iter().collect();

        let delay_ms = if !self.deleting && self.chars == current.len() {
            self.deleting = true;
            PAUSE_MS
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            NEXT_PHRASE_MS
        } else if self.deleting {
            DELETE_MS
        } else {
            TYPE_MS
        };

        TypewriterStep { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Typewriter {
        Typewriter::new(vec!["ab".into(), "xyz".into()])
    }

    #[test]
    fn types_pauses_deletes_and_wraps() {
        let mut tw = machine();

        assert_eq!(tw.tick(), TypewriterStep { text: "a".into(), delay_ms: TYPE_MS });
        // Full length: pause, then switch to deleting.
        assert_eq!(tw.tick(), TypewriterStep { text: "ab".into(), delay_ms: PAUSE_MS });
        assert_eq!(tw.tick(), TypewriterStep { text: "a".into(), delay_ms: DELETE_MS });
        // Empty: advance to the next phrase with the inter-phrase delay.
        assert_eq!(tw.tick(), TypewriterStep { text: "".into(), delay_ms: NEXT_PHRASE_MS });
        assert_eq!(tw.tick(), TypewriterStep { text: "x".into(), delay_ms: TYPE_MS });
    }

    #[test]
    fn wraps_back_to_the_first_phrase() {
        let mut tw = machine();
        // Two full cycles: 2 type-ish + 2 delete-ish ticks for "ab",
        // 3 + 3 for "xyz".
        for _ in 0..(2 + 2 + 3 + 3) {
            tw.tick();
        }
        assert_eq!(tw.tick().text, "a");
    }

    #[test]
    fn handles_multibyte_phrases_by_character() {
        let mut tw = Typewriter::new(vec!["Éé".into()]);
        assert_eq!(tw.tick().text, "É");
        assert_eq!(tw.tick().text, "Éé");
    }
}
