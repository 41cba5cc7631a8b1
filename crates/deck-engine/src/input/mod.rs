pub mod event;
pub mod swipe;
