pub mod details;
pub mod effects;
pub mod styles;
