//! Browser binding for SelectSearch.
//!
//! Bridges the headless widget to a real `<select>` element: the element is
//! the option source, the document is the node tree for outside clicks, and
//! the overlay is plain HTML generated by [`markup`].

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod handle;

// Cross-platform modules
pub mod markup;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomSource, DomTree};
#[cfg(target_arch = "wasm32")]
pub use handle::SelectSearchHandle;
pub use markup::{escape_html, item_html, list_html};
