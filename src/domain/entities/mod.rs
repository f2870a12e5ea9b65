//! Domain entities - Core game objects with no I/O

pub mod user;
pub mod message;
pub mod command;
pub mod word;
pub mod pattern;
pub mod session;

pub use user::User;
pub use message::{Message, Content};
pub use command::GameCommand;
pub use word::{DailyWord, WORD_LENGTH, MAX_ATTEMPTS};
pub use pattern::{evaluate, Mark, Pattern};
pub use session::Session;
