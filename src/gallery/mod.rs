//! View layer: form and query state, the derived list, and HTML rendering.

pub mod card;
pub mod display;
pub mod page;
pub mod query;
pub mod view;

pub use card::render_card;
pub use display::{displayed_nfts, DisplayMemo};
pub use page::render_page;
pub use query::QueryState;
pub use view::{trigger_shared, FetchTarget, FormState, Gallery, SharedGallery};
