//! wxsnips - Weather Forecast Snippet Manager
//!
//! Maintains an ordered collection of short weather-forecast snippets
//! ("snips") in a single JSON document and renders one randomly chosen snip
//! as an HTML fragment for embedding in a page.
//!
//! The collection is the unit of every read and write: each operation loads
//! the whole document, mutates it in memory, and rewrites it. Identity is
//! positional; deleting a snip shifts every later index down by one. There is
//! no locking, so concurrent writers race and the last write wins.

pub mod auth;
pub mod cli;
pub mod models;
pub mod render;
pub mod sanitize;
