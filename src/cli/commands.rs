use crate::models::SnipStore;
use crate::render::{RenderOptions, SnipRenderer};
use crate::sanitize::sanitize_plain_text;
use colored::Colorize;
use std::error::Error;

/// Lists the whole snip collection with its total count
pub fn list_snips() -> Result<(), Box<dyn Error>> {
    let store = SnipStore::open_default()?;
    let snips = store.list();

    println!("{}  {}", "┃".bright_magenta(), "WEATHER SNIPS".bold());
    println!(
        "{}  Total Snips: {}",
        "┃".bright_magenta(),
        snips.len().to_string().bright_yellow()
    );

    if snips.is_empty() {
        println!(
            "{}  No snips found. Add your first snip with: wxsnips add <TEXT>",
            "┃".bright_magenta()
        );
        return Ok(());
    }

    println!("{}", "─".repeat(60).bright_magenta());

    for (index, snip) in snips.iter().enumerate() {
        println!(
            "{}  {}. {}",
            "┃".bright_magenta(),
            index.to_string().bright_yellow(),
            snip.bright_white()
        );
    }

    Ok(())
}

/// Appends a new snip to the collection
pub fn add_snip(text: &str) -> Result<(), Box<dyn Error>> {
    let text = sanitize_plain_text(text);
    if text.trim().is_empty() {
        println!(
            "{}  Error: Snip text is empty after sanitization",
            "┃".bright_magenta()
        );
        return Ok(());
    }

    let store = SnipStore::open_default()?;

    if store.add(text) {
        println!(
            "{}  {}",
            "┃".bright_magenta(),
            "Snip saved successfully!".bright_green()
        );
    } else {
        println!(
            "{}  {}",
            "┃".bright_magenta(),
            "Error saving snip. Please check file permissions.".bright_red()
        );
    }

    Ok(())
}

/// Replaces the snip at the given index
///
/// An out-of-range index is not an error here: the store leaves the
/// collection untouched and still reports whether the write went through.
pub fn edit_snip(index_arg: &str, text: &str) -> Result<(), Box<dyn Error>> {
    let Some(index) = parse_index(index_arg) else {
        return Ok(());
    };

    let text = sanitize_plain_text(text);
    if text.trim().is_empty() {
        println!(
            "{}  Error: Snip text is empty after sanitization",
            "┃".bright_magenta()
        );
        return Ok(());
    }

    let store = SnipStore::open_default()?;

    if store.update(index, text) {
        println!(
            "{}  {}",
            "┃".bright_magenta(),
            "Snip saved successfully!".bright_green()
        );
    } else {
        println!(
            "{}  {}",
            "┃".bright_magenta(),
            "Error saving snip. Please check file permissions.".bright_red()
        );
    }

    Ok(())
}

/// Removes the snip at the given index
pub fn delete_snip(index_arg: &str) -> Result<(), Box<dyn Error>> {
    let Some(index) = parse_index(index_arg) else {
        return Ok(());
    };

    let store = SnipStore::open_default()?;

    if store.delete(index) {
        println!(
            "{}  {}",
            "┃".bright_magenta(),
            "Snip deleted successfully!".bright_green()
        );
    } else {
        println!(
            "{}  {}",
            "┃".bright_magenta(),
            "Error deleting snip. Check the index and file permissions.".bright_red()
        );
    }

    Ok(())
}

/// Renders one random snip as an HTML fragment on stdout
pub fn render_snip(args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut options = RenderOptions::default();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let Some(value) = iter.next() else {
            println!(
                "{}  Error: Missing value for {}",
                "┃".bright_magenta(),
                flag
            );
            return Ok(());
        };

        match flag.as_str() {
            "--wrapper" => options.wrapper = value.clone(),
            "--class" => options.class = value.clone(),
            "--style" => options.style = value.clone(),
            "--prefix" => options.prefix = value.clone(),
            "--suffix" => options.suffix = value.clone(),
            _ => {
                println!("{}  Unknown option: {}", "┃".bright_magenta(), flag);
                return Ok(());
            }
        }
    }

    let store = SnipStore::open_default()?;
    let renderer = SnipRenderer::new(store);

    // The fragment is meant for embedding, so it goes out unadorned.
    println!("{}", renderer.render(&options));

    Ok(())
}

/// Prints the resolved snip document location
pub fn show_path() -> Result<(), Box<dyn Error>> {
    let store = SnipStore::open_default()?;
    println!("{}", store.path().display());
    Ok(())
}

/// Parses a 0-based snip index, rejecting negative or non-numeric input
fn parse_index(arg: &str) -> Option<usize> {
    match arg.parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => {
            println!(
                "{}  Error: '{}' is not a valid snip index",
                "┃".bright_magenta(),
                arg
            );
            None
        }
    }
}
