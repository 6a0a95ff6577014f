// Module exports for models

pub mod activity;
pub mod session;
pub mod settings;
