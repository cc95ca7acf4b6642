use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "A file-backed book catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to operate on (defaults to the platform data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        year: i32,

        /// Circulation status (in-stock, given)
        #[arg(short, long, default_value = "in-stock")]
        status: String,
    },

    /// List every book
    #[command(alias = "ls")]
    List,

    /// Show one book by id
    Get { id: u32 },

    /// Search one field for a substring (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Field to search: title, author, year or status
        field: String,
        value: String,
    },

    /// Replace a book's fields, keeping its id
    Update {
        id: u32,
        title: String,
        author: String,
        year: i32,

        /// Circulation status (in-stock, given)
        #[arg(short, long, default_value = "in-stock")]
        status: String,
    },

    /// Change only the circulation status
    Status {
        id: u32,
        /// New status (in-stock, given)
        status: String,
    },

    /// Remove a book permanently
    #[command(aliases = ["rm", "delete"])]
    Remove { id: u32 },
}
