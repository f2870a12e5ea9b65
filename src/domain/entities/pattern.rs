//! Guess evaluation - positional exact/present/absent marks

use std::fmt;

use crate::application::errors::GameError;

/// Mark for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Exact,
    /// Letter occurs somewhere else in the target
    Present,
    /// Letter does not occur in the target
    Absent,
}

impl Mark {
    pub fn as_emoji(&self) -> &'static str {
        match self {
            Mark::Exact => "🟩",
            Mark::Present => "🟨",
            Mark::Absent => "⬛",
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::Exact => 'O',
            Mark::Present => 'o',
            Mark::Absent => '.',
        }
    }
}

/// Per-position evaluation of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    letters: Vec<(char, Mark)>,
}

impl Pattern {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.letters.iter().map(|(_, mark)| *mark)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|(ch, _)| *ch)
    }

    /// True when every position is an exact match
    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty() && self.marks().all(|m| m == Mark::Exact)
    }

    /// Emoji row, e.g. `🟩🟨⬛⬛🟩`
    pub fn as_emoji(&self) -> String {
        self.marks().map(|m| m.as_emoji()).collect()
    }

    /// Guess letters spaced out above their emoji marks
    pub fn emoji_with_letters(&self) -> String {
        let letters: Vec<String> = self.letters().map(|c| c.to_string()).collect();
        let marks: Vec<&str> = self.marks().map(|m| m.as_emoji()).collect();
        format!("{}\n{}", letters.join(" "), marks.join(""))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for Pattern {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Evaluate `guess` against `target`.
///
/// Letters are compared case-insensitively. A letter that is not an exact
/// match scores [`Mark::Present`] whenever it occurs anywhere in the target,
/// no matter how many times it was guessed.
pub fn evaluate(guess: &str, target: &str) -> Result<Pattern, GameError> {
    let guess: Vec<char> = guess.to_uppercase().chars().collect();
    let target: Vec<char> = target.to_uppercase().chars().collect();

    if guess.len() != target.len() {
        return Err(GameError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let letters = guess
        .iter()
        .zip(target.iter())
        .map(|(&g, &t)| {
            let mark = if g == t {
                Mark::Exact
            } else if target.contains(&g) {
                Mark::Present
            } else {
                Mark::Absent
            };
            (g, mark)
        })
        .collect();

    Ok(Pattern { letters })
}
