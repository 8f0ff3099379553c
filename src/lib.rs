#![allow(clippy::cast_precision_loss)]

pub mod components;
pub mod constants;
pub mod logging;
pub mod models;
pub mod random;
pub mod simulation;
pub mod theme;

pub use components::app::App;
