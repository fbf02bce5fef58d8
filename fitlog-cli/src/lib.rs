// Library exports for the fitlog CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod storage;
pub mod ui;
