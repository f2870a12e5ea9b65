//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod store;
pub mod words;
pub mod clock;

pub use bot::{Bot, BotInfo};
pub use store::SessionStore;
pub use words::{WordGenerator, WordProvider};
pub use clock::{Clock, FixedClock, SystemClock};
