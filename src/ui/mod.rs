pub mod app;
pub mod bottom_bar;
pub mod chooser;
pub mod common;
pub mod events;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;
