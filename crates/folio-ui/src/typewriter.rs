// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Typewriter headline.

Types a phrase one character at a time, holds it, deletes it, then moves on
to the next phrase, wrapping forever. Characters are Unicode scalar values,
so accented phrases never split a code point.
*/

pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const DWELL_MS: u32 = 2000;

pub const DEFAULT_PHRASES: [&str; 4] = [
    "Strategie di Marketing che Convertono",
    "Musica che Racconta Storie",
    "Creatività Senza Limiti",
    "Innovazione da Asti al Mondo",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Text to display and how long until the next step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Default for Typewriter {
    fn default() -> Self {
        // DEFAULT_PHRASES are all non-empty
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.chars().collect()).collect(),
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }
}

impl Typewriter {
    /// Empty phrases are dropped; `None` when nothing is left to type
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<char>>())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Advance one character
    pub fn tick(&mut self) -> TypewriterFrame {
        let len = self.phrases[self.phrase_index].len();
        let next_delay_ms = match self.phase {
            Phase::Typing => {
                self.char_index += 1;
                if self.char_index >= len {
                    self.phase = Phase::Deleting;
                    DWELL_MS
                } else {
                    TYPE_DELAY_MS
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::Typing;
                    TYPE_DELAY_MS
                } else {
                    DELETE_DELAY_MS
                }
            }
        };
        let text = self.phrases[self.phrase_index][..self.char_index]
            .iter()
            .collect();
        if self.char_index == 0 && self.phase == Phase::Typing {
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }
        TypewriterFrame { text, next_delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_holds_and_deletes() {
        let mut tw = Typewriter::new(["ab", "c"]).unwrap();

        assert_eq!(tw.tick(), TypewriterFrame { text: "a".into(), next_delay_ms: 100 });
        assert_eq!(tw.tick(), TypewriterFrame { text: "ab".into(), next_delay_ms: 2000 });
        assert_eq!(tw.tick(), TypewriterFrame { text: "a".into(), next_delay_ms: 50 });
        assert_eq!(tw.tick(), TypewriterFrame { text: "".into(), next_delay_ms: 100 });
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.tick(), TypewriterFrame { text: "c".into(), next_delay_ms: 2000 });
        assert_eq!(tw.tick(), TypewriterFrame { text: "".into(), next_delay_ms: 100 });
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_visits_default_phrases_in_order_and_wraps() {
        let mut tw = Typewriter::default();
        let mut completed = Vec::new();

        while completed.len() < 5 {
            let frame = tw.tick();
            if frame.next_delay_ms == DWELL_MS {
                completed.push(frame.text);
            }
        }

        assert_eq!(completed[0], DEFAULT_PHRASES[0]);
        assert_eq!(completed[1], DEFAULT_PHRASES[1]);
        assert_eq!(completed[2], DEFAULT_PHRASES[2]);
        assert_eq!(completed[3], DEFAULT_PHRASES[3]);
        assert_eq!(completed[4], DEFAULT_PHRASES[0]);
    }

    #[test]
    fn test_steps_by_unicode_scalar() {
        let mut tw = Typewriter::new(["àé"]).unwrap();
        assert_eq!(tw.tick().text, "à");
        assert_eq!(tw.tick().text, "àé");
    }

    #[test]
    fn test_no_phrases() {
        assert!(Typewriter::new(Vec::<String>::new()).is_none());
        assert!(Typewriter::new([""]).is_none());
    }
}
