//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod apply_consequences;
pub mod propagate;
pub mod rebase;
