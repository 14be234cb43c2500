//! Head-section work: tag rendering, idempotent injection, and read-only
//! inspection.

pub mod audit;
pub mod document;
pub mod injector;
pub mod structured_data;
pub mod tags;

pub use injector::{update_project_head, HeadInjector, HeadUpdate};
