pub mod chat;
pub mod content;
pub mod predict;
pub mod usage;
