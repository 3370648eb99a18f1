//! Articles domain module.
//!
//! Business rules and wire projection for article records, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod article;
pub mod view;

pub use article::{Article, ArticleDraft, creation_rules};
pub use view::{ArticleView, transform_many, transform_one};
