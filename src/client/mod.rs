//! # Client Components
//!
//! Session-side logic for the search page, kept independent of any rendering
//! engine. Keystrokes, sentinel visibility ratios and scroll offsets arrive
//! as plain method calls, so every behavior here is unit-testable.
//!
//! ## Flow
//!
//! - Keystrokes feed [`search_bar::SearchBar`], which emits the query after
//!   500ms of inactivity
//! - [`page::PageController`] runs the search through the proxy and lands in
//!   one of results/empty/error
//! - [`loader::ResultListLoader`] materializes object records in batches of
//!   10 as the sentinel nears the viewport
//! - Clicking an item with images opens [`viewer::ImageViewer`], which pins
//!   page scroll until it is dropped
pub mod api;
pub mod loader;
pub mod page;
pub mod search_bar;
pub mod viewer;

pub use api::{ApiClient, ArtObject, CollectionApi, FetchError, SearchResult};
pub use loader::ResultListLoader;
pub use page::{PageController, PageState};
pub use search_bar::SearchBar;
pub use viewer::{ImageViewer, ScrollHost, ScrollLock};
