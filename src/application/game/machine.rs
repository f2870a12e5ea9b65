//! Session state machine
//!
//! `step` is a pure function from `(event, session)` to `(session, reply)`.
//! The caller is responsible for loading the session, fetching the word of
//! the day for [`Event::Play`], and saving the returned session.

use chrono::NaiveDate;

use super::reply::Reply;
use crate::application::errors::GameError;
use crate::domain::entities::{evaluate, DailyWord, Session, WORD_LENGTH};

/// Something the player did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Help,
    /// Start a game with the already-fetched word of the day
    Play(DailyWord),
    Guess(String),
    Definition,
    Unknown(String),
}

/// Context the rules depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub today: NaiveDate,
    pub bypass_daily_limit: bool,
}

impl Rules {
    pub fn new(today: NaiveDate, bypass_daily_limit: bool) -> Self {
        Self {
            today,
            bypass_daily_limit,
        }
    }
}

/// Whether `/play` would start a game. Checked before fetching a word.
pub fn play_allowed(session: &Session, rules: &Rules) -> bool {
    session.can_play(rules.today, rules.bypass_daily_limit)
}

/// Apply one event to a session.
///
/// Only fails when an active session holds a target whose length differs
/// from a validated guess, which means the session was corrupted.
pub fn step(event: Event, mut session: Session, rules: &Rules) -> Result<(Session, Reply), GameError> {
    let reply = match event {
        Event::Start => Reply::Welcome,
        Event::Help => Reply::Help,
        Event::Unknown(name) => Reply::UnknownCommand(name),

        Event::Play(word) => {
            if !play_allowed(&session, rules) {
                Reply::AlreadyPlayed
            } else {
                session.start(&word, rules.today);
                Reply::GameStarted {
                    category: word.category,
                    difficulty: word.difficulty,
                }
            }
        }

        Event::Definition => {
            if !session.game_active {
                Reply::NoActiveGame
            } else if session.attempts.is_empty() {
                Reply::DefinitionLocked
            } else {
                Reply::Definition {
                    definition: session.definition.clone(),
                    hint: session.hint.clone(),
                }
            }
        }

        Event::Guess(text) => {
            if !session.game_active {
                return Ok((session, Reply::NoActiveGame));
            }

            let guess = text.trim().to_uppercase();
            let length = guess.chars().count();
            if length != WORD_LENGTH {
                return Ok((session, Reply::InvalidLength { length }));
            }

            let pattern = evaluate(&guess, &session.current_word)?;
            session.attempts.push(guess);

            if pattern.is_solved() {
                session.game_active = false;
                Reply::Won {
                    pattern,
                    attempts: session.attempt_count(),
                    word: session.current_word.clone(),
                }
            } else if session.is_out_of_attempts() {
                session.game_active = false;
                Reply::Lost {
                    pattern,
                    word: session.current_word.clone(),
                    definition: session.definition.clone(),
                }
            } else {
                Reply::Progress {
                    pattern,
                    attempt: session.attempt_count(),
                }
            }
        }
    };

    Ok((session, reply))
}
