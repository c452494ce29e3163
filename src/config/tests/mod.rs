//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `loading`: Environment and CLI loading through ortho-config
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod validation;
