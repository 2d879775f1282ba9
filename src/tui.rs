//! Terminal front-end: a menu plus one scene per game.

pub mod app;
pub mod controller;
pub mod ui;
