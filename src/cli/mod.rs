//! CLI Module for wxsnips
//! This module provides the management surface for the snip collection,
//! allowing an administrator to list, add, edit, delete, and render snips
//! directly from the terminal.

pub mod commands;

use crate::auth::{AdminAccess, LocalAdmin};
use colored::Colorize;
use std::error::Error;

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        // No arguments provided, show help
        print_help();
        return Ok(());
    }

    let gate = LocalAdmin;

    match args[0].as_str() {
        "list" | "ls" => {
            commands::list_snips()?;
        }
        "add" => {
            if args.len() < 2 {
                println!("{}  Error: Missing snip text", "┃".bright_magenta());
                println!("{}  Usage: wxsnips add <TEXT>", "┃".bright_magenta());
                return Ok(());
            }

            if !authorized(&gate) {
                return Ok(());
            }

            commands::add_snip(&args[1..].join(" "))?;
        }
        "edit" => {
            if args.len() < 3 {
                println!(
                    "{}  Error: Missing snip index or text",
                    "┃".bright_magenta()
                );
                println!(
                    "{}  Usage: wxsnips edit <INDEX> <TEXT>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            if !authorized(&gate) {
                return Ok(());
            }

            commands::edit_snip(&args[1], &args[2..].join(" "))?;
        }
        "delete" | "rm" => {
            if args.len() < 2 {
                println!("{}  Error: Missing snip index", "┃".bright_magenta());
                println!("{}  Usage: wxsnips delete <INDEX>", "┃".bright_magenta());
                return Ok(());
            }

            if !authorized(&gate) {
                return Ok(());
            }

            commands::delete_snip(&args[1])?;
        }
        "render" => {
            commands::render_snip(&args[1..])?;
        }
        "path" => {
            commands::show_path()?;
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

/// Checks the admin gate before a management command reaches the store
fn authorized(gate: &dyn AdminAccess) -> bool {
    if gate.is_authorized_admin() {
        return true;
    }

    println!(
        "{}  Unauthorized: admin access required",
        "┃".bright_magenta()
    );
    false
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "WXSNIPS - WEATHER SNIP MANAGER".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  wxsnips [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "list, ls".bright_white(),
        "List all snips with their indices"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "add <TEXT>".bright_white(),
        "Append a new snip to the collection"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "edit <INDEX> <TEXT>".bright_white(),
        "Replace the snip at the given index"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "delete, rm <INDEX>".bright_white(),
        "Remove the snip at the given index"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "render [OPTIONS]".bright_white(),
        "Print one random snip as an HTML fragment"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "path".bright_white(),
        "Print the snip document location"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "help".bright_white(),
        "Display this help message"
    );

    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "RENDER OPTIONS:".bright_yellow()
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "--wrapper <TAG>".bright_white(),
        "Wrapping tag name (default: p)"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "--class <CLASS>".bright_white(),
        "CSS class attribute for the wrapper"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "--style <STYLE>".bright_white(),
        "Inline style attribute for the wrapper"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "--prefix <HTML>".bright_white(),
        "Markup inserted before the snip text"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "--suffix <HTML>".bright_white(),
        "Markup inserted after the snip text"
    );
}
