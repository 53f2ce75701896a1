//! Presentational views for the personal site: the "select a post"
//! placeholder, the content card and the service description page.
//!
//! Every component is a pure function of its props. Routing, icons and
//! styling are resolved by the embedding app.

pub mod components;
pub mod content;
pub mod nav;

pub use components::{BackLink, ContentCard, EmptyStatePanel, StaticInfoPage};
pub use content::ContentItem;
pub use nav::NavTarget;
