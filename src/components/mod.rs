#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod control_panel;
pub mod yard_canvas;
