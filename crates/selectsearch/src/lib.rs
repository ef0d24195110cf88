//! SelectSearch: a searchable, filterable dropdown for native `<select>`
//! elements.
//!
//! The widget core is headless and lives in [`widgets`]; [`browser`] binds
//! it to the DOM when compiled for `wasm32`.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { SelectSearchHandle } from './selectsearch.js';
//!
//! async function main() {
//!     await init();
//!     const select = new SelectSearchHandle('#country', { min_length: 1 });
//!     select.open();
//! }
//! ```
//!
//! # Rust Usage
//!
//! ```
//! use selectsearch::widgets::{Config, MemorySource, RawOption, SelectSearch, SelectedValue};
//!
//! let source = MemorySource::single(vec![
//!     RawOption::empty("-- choose --"),
//!     RawOption::new("a", "Apple"),
//!     RawOption::new("b", "Banana"),
//! ]);
//! let mut select = SelectSearch::new(source, Config::default());
//! select.open();
//! select.set_query("ban");
//! assert_eq!(select.rendered().values(), vec!["b"]);
//!
//! select.click_item(0);
//! assert_eq!(select.value(), SelectedValue::Single("b".to_string()));
//! assert!(!select.is_open());
//! ```

pub use selectsearch_core::*;
pub use selectsearch_widgets as widgets;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::SelectSearchHandle;
