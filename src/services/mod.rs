// Service module exports

pub mod activity;
pub mod database;
pub mod notification;
pub mod settings;
