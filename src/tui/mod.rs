//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a medical-themed interface for:
//! - Patient lab-value entry via bounded controls
//! - Prediction result display with class probabilities

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ClinicTheme;
