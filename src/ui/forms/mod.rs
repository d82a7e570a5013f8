//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `register_form`: User registration form

mod field_renderer;
mod register_form;

pub use register_form::draw_register;
