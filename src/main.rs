//! wxsnips - Weather Forecast Snippet Manager
//!
//! A command-line tool for maintaining a collection of short weather-forecast
//! snippets ("snips") stored in a single JSON document, and for rendering one
//! randomly chosen snip as an HTML fragment for embedding in a page.
//!
//! wxsnips provides site operators with:
//! - Management of the snip collection (add, edit, delete, list)
//! - Uniform random selection of a snip on every render
//! - Escaped HTML output with a safe-HTML subset for prefix/suffix markup

use env_logger::{Builder, Env};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    wxsnips::cli::execute_cli(&args)
}
