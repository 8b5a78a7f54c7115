//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `application_form`: The loan application form

mod application_form;
mod field_renderer;

pub use application_form::draw_application_form;
