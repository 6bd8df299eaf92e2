pub mod notice;
pub mod state;
