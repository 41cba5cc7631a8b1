pub mod modal;
pub mod slide;
