pub mod navigator;
pub mod time;
