//! CLI operation mode handlers.
//!
//! - [`review_form`]: Interactive TUI for answering and submitting a review

pub mod review_form;
