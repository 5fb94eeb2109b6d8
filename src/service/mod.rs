//! Service Module
//!
//! Request handling logic shared by every transport: read-through caching of
//! single questions and invalidation after successful writes.

mod questions;

pub use questions::{Caller, QuestionService};
