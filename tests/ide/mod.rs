//! IDE feature tests
//!
//! Tests for:
//! - Code completion inside formula lines
//! - Hover information on identifier parts

pub mod tests_completion;
pub mod tests_hover;
