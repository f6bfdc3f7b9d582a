//! API Routes
//!
//! Route handlers organized by functionality.

pub mod datasets;
pub mod figure;
pub mod health;
