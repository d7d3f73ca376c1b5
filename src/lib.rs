// Library root: re-exports all modules so integration tests can `use termflix::*`.

pub mod action;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod opener;
pub mod present;
pub mod theme;
pub mod tui;
pub mod ui;
