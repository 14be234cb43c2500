//! SEO profile synthesis, validation, and persistence.

pub mod answers;
pub mod builder;
pub mod model;
pub mod schema;
pub mod store;

pub use answers::SeoAnswers;
pub use model::SeoConfig;
