//! QandA - question and answer API server
//!
//! CRUD endpoints for questions and answers, with single-question reads
//! served through a bounded LRU cache that is invalidated on every write.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use cache::QuestionCache;
pub use config::Config;
pub use service::QuestionService;
pub use tasks::spawn_cleanup_task;
