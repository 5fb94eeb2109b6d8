//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache cleanup: sweeps expired question cache entries when a TTL is set

mod cleanup;

pub use cleanup::spawn_cleanup_task;
