pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod navigation;
pub mod share;
pub mod shutdown;
pub mod strings;
pub mod ui;
