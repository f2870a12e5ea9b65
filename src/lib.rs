//! wordday-bot - a once-a-day five-letter word game for Telegram

pub mod domain;
pub mod application;
pub mod infrastructure;
