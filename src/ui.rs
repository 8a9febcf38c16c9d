//! Interactive menu surface.
//!
//! All prompting, coloring, and output formatting lives here; the catalog
//! and store stay presentation-free. The loop solicits one choice at a
//! time, runs it to completion (including the persistence write), and only
//! then re-presents the menu.

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::library::{Book, Catalog, SearchField};
use crate::store::Store;

/// Run the menu loop until the user chooses to exit.
///
/// Loads the catalog once at startup and saves it one final time on exit.
/// Write failures propagate; everything else is reported inline and the
/// loop continues.
pub fn run(store: &Store) -> Result<()> {
    let mut catalog = store.load()?;

    loop {
        print_menu();
        let choice = prompt("Enter your choice: ".yellow())?;

        match choice.as_str() {
            "1" => add_book(&mut catalog, store)?,
            "2" => remove_book(&mut catalog, store)?,
            "3" => search_books(&catalog)?,
            "4" => display_books(&catalog),
            "5" => display_statistics(&catalog),
            "6" => {
                store.save(&catalog)?;
                println!("{}", "\nLibrary saved. Goodbye!".green());
                return Ok(());
            }
            _ => println!(
                "{}",
                "Invalid choice. Please enter a number from 1-6.".red()
            ),
        }
    }
}

fn print_menu() {
    println!("{}", "\nPersonal Library Manager".magenta());
    println!("{}", "1. Add a book".cyan());
    println!("{}", "2. Remove a book".cyan());
    println!("{}", "3. Search for a book".cyan());
    println!("{}", "4. Display all books".cyan());
    println!("{}", "5. Display statistics".cyan());
    println!("{}", "6. Exit".cyan());
}

/// Print a label, then read and trim one line from stdin
fn prompt(label: impl Display) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

fn add_book(catalog: &mut Catalog, store: &Store) -> Result<()> {
    let title = prompt("Enter the book title: ".blue())?;
    let author = prompt("Enter the author: ".blue())?;
    let year = prompt("Enter the publication year: ".blue())?;
    let genre = prompt("Enter the genre: ".blue())?;
    let read = prompt("Have you read this book? (yes/no): ".blue())?.to_lowercase() == "yes";

    catalog.add(Book::new(title, author, year, genre, read), store)?;
    println!("{}", "Book added successfully!".green());
    Ok(())
}

fn remove_book(catalog: &mut Catalog, store: &Store) -> Result<()> {
    let title = prompt("Enter the title of the book to remove: ".red())?;

    match catalog.remove(&title, store)? {
        Some(book) => println!(
            "{}",
            format!("'{}' removed successfully!", book.title).green()
        ),
        None => println!("{}", "Book not found.".red()),
    }
    Ok(())
}

fn search_books(catalog: &Catalog) -> Result<()> {
    println!("{}", "\nSearch by:".yellow());
    println!("1. Title");
    println!("2. Author");
    let choice = prompt("Enter your choice (1 or 2): ".yellow())?;

    let field: SearchField = match choice.parse() {
        Ok(field) => field,
        Err(_) => {
            // Usage error, back to the main menu
            println!("{}", "Invalid choice.".red());
            return Ok(());
        }
    };

    let query = match field {
        SearchField::Title => prompt("Enter the title: ".blue())?,
        SearchField::Author => prompt("Enter the author: ".blue())?,
    };

    let results = catalog.search(field, &query);
    if results.is_empty() {
        println!("{}", "No matching books found.".red());
    } else {
        println!("{}", "\nMatching Books:".green());
        for book in results {
            println!("- {}", format_book(book));
        }
    }
    Ok(())
}

fn display_books(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("{}", "Your library is empty.".red());
        return;
    }

    println!("{}", "\nYour Library:".magenta());
    for (position, book) in catalog.list() {
        println!("{position}. {}", format_book(book));
    }
}

fn display_statistics(catalog: &Catalog) {
    match catalog.statistics() {
        Some(stats) => {
            println!("{}", "\nLibrary Statistics:".cyan());
            println!("Total books: {}", stats.total);
            println!("Percentage read: {:.1}%", stats.percent_read);
        }
        None => println!("{}", "No books in library.".red()),
    }
}

fn format_book(book: &Book) -> String {
    let status = if book.read { "Read" } else { "Unread" };
    format!(
        "{} by {} ({}) - {} - {}",
        book.title, book.author, book.year, book.genre, status
    )
}
