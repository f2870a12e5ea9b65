//! Application services - Game orchestration

pub mod game_service;

pub use game_service::GameService;
