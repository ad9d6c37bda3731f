use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

use crate::models::MenuCatalog;

#[derive(Parser, Debug)]
#[command(name = "takeout-order")]
#[command(about = "Order from a take-out menu and print an itemized receipt")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load the menu from a JSON file ({"Category": {"Item": price}})
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,

    /// Built-in menu to use when no menu file is given
    #[arg(short, long, global = true, default_value = "default")]
    pub catalog: BuiltinCatalog,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Take an order interactively (the default)
    Order,
    /// Print the numbered menu and exit
    Menu,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BuiltinCatalog {
    Default,
    Dessert,
}

impl BuiltinCatalog {
    pub fn catalog(self) -> MenuCatalog {
        match self {
            BuiltinCatalog::Default => MenuCatalog::takeout(),
            BuiltinCatalog::Dessert => MenuCatalog::dessert(),
        }
    }
}

impl fmt::Display for BuiltinCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinCatalog::Default => write!(f, "default"),
            BuiltinCatalog::Dessert => write!(f, "dessert"),
        }
    }
}
