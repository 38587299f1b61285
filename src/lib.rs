//! lexlight: syntax highlighting for analyzer-annotated text.
//!
//! The [`annotation`] pipeline is pure; [`engine`] talks to the analyzer and
//! keeps session state; [`app`] and [`ui`] drive the terminal interface.

pub mod annotation;
pub mod app;
pub mod engine;
pub mod ui;
