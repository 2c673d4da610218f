//! UI Module
//!
//! This module exports the UI components for the GPA calculator:
//!
//! - `app`: Application state, key handling and event loop
//! - `views`: Rendering functions for the course form
//!
//! The UI only renders `CourseListModel` state and forwards edits back to it.

mod app;
mod views;

pub use app::{run_app, App};
