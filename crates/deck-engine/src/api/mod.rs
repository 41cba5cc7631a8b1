pub mod config;
pub mod deck;
pub mod presentation;
pub mod types;
