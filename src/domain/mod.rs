//! Domain layer - Game rules with no transport or network code
//! 
//! This layer contains:
//! - Entities: Session, DailyWord, Pattern and the guess evaluator
//! - Traits: Abstractions for infrastructure (Bot, SessionStore, WordProvider, Clock)

pub mod entities;
pub mod traits;
