//! Application layer - Use cases and game flow
//! 
//! This layer contains:
//! - Game: The pure session state machine and its replies
//! - Services: Load session, fetch word, step, save
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and dispatching

pub mod errors;
pub mod game;
pub mod services;
pub mod messaging;
