//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `signup_form`: The signup form

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup;
