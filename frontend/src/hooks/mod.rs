//! Custom Yew hooks for the frontend application.

mod use_input;

pub use use_input::use_input;
