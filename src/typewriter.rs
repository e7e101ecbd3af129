//! Looping typewriter effect.
//!
//! Each [`Typewriter::tick`] yields the text to display and how long to wait
//! before the next tick. A phrase is typed one character at a time, held,
//! erased one character at a time, and followed by the next phrase, wrapping
//! around forever. Characters are Unicode scalar values, so multi-byte
//! glyphs such as emoji are never split.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::TypingConfig;

/// Text to show now and the delay before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    next_phrase_ms: u32,
}

impl Typewriter {
    #[must_use]
    pub fn new(config: &TypingConfig) -> Self {
        Self {
            phrases: config.phrases.clone(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            next_phrase_ms: config.next_phrase_ms,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance by one character. Returns `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<Step> {
        let phrase = self.phrases.get(self.phrase_index)?;
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        let delay_ms = if !self.deleting && self.char_index == len {
            self.deleting = true;
            self.hold_ms
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.next_phrase_ms
        } else if self.deleting {
            self.delete_ms
        } else {
            self.type_ms
        };

        Some(Step { text, delay_ms })
    }
}
