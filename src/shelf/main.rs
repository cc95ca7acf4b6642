use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::{CmdMessage, CmdResult, MessageLevel, ShelfApi};
use shelf::error::Result;
use shelf::model::{Book, Status};
use shelf::store::fs::CsvStore;
use shelf::store::Row;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = catalog_path(&cli);
    let mut api = ShelfApi::new(CsvStore::open(path)?);

    let result = match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            status,
        }) => api.add_book(build_book(title, author, year, &status)?)?,
        Some(Commands::List) | None => api.list_books()?,
        Some(Commands::Get { id }) => api.get_book(id)?,
        Some(Commands::Search { field, value }) => api.search_books(&field, &value)?,
        Some(Commands::Update {
            id,
            title,
            author,
            year,
            status,
        }) => api.update_book(id, build_book(title, author, year, &status)?)?,
        Some(Commands::Status { id, status }) => api.set_status(id, Status::from_str(&status)?)?,
        Some(Commands::Remove { id }) => api.remove_book(id)?,
    };

    render(&result);
    Ok(())
}

fn catalog_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.file {
        return path.clone();
    }
    let proj_dirs =
        ProjectDirs::from("com", "shelf", "shelf").expect("Could not determine data dir");
    proj_dirs.data_dir().join("books.csv")
}

fn build_book(title: String, author: String, year: i32, status: &str) -> Result<Book> {
    Book::with_status(title, author, year, Status::from_str(status)?)
}

fn render(result: &CmdResult) {
    print_rows(&result.rows);
    print_messages(&result.messages);
}

fn print_rows(rows: &[Row]) {
    for row in rows {
        println!(
            "| {} | {} | {} | {} | {} |",
            row.id.bold(),
            row.title,
            row.author,
            row.year,
            status_colored(&row.status)
        );
    }
}

fn status_colored(status: &str) -> ColoredString {
    match status {
        "in-stock" => status.green(),
        "given" => status.yellow(),
        other => other.normal(),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for msg in messages {
        match msg.level {
            MessageLevel::Info => println!("{}", msg.content),
            MessageLevel::Success => println!("{}", msg.content.green()),
            MessageLevel::Warning => println!("{}", msg.content.yellow()),
            MessageLevel::Error => eprintln!("{}", msg.content.red()),
        }
    }
}
