//! Game rules - pure session transitions and their replies

pub mod machine;
pub mod reply;

pub use machine::{play_allowed, step, Event, Rules};
pub use reply::Reply;
