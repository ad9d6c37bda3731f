use anyhow::{Context, Result};
use console::{style, Emoji};
use tracing::{error, info};

use crate::{
    cli::args::{BuiltinCatalog, Commands},
    models::MenuCatalog,
    services::{Console, OrderSession, SessionOutcome},
    utils::{
        formatting::{format_itemized_receipt, format_menu, format_receipt_footer, format_receipt_heading},
        Config,
    },
};

static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");

pub struct CliApp {
    catalog: MenuCatalog,
}

impl CliApp {
    /// Pick the menu: a configured JSON file if there is one, else a built-in.
    pub fn new(config: &Config, builtin: BuiltinCatalog) -> Result<Self> {
        let catalog = match &config.menu_file {
            Some(path) => MenuCatalog::from_json_file(path).map_err(|e| {
                eprintln!("{} Could not load menu: {}", CROSS, style(&e).red());
                error!("Failed to load menu from {}: {}", path.display(), e);
                e
            })?,
            None => builtin.catalog(),
        };

        info!(
            "Menu ready: {} items ({})",
            catalog.len(),
            config
                .menu_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("built-in {}", builtin))
        );

        Ok(Self { catalog })
    }

    pub fn from_catalog(catalog: MenuCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn run<C: Console>(&self, command: Commands, console: &mut C) -> Result<()> {
        match command {
            Commands::Order => self.handle_order(console).map(|_| ()),
            Commands::Menu => self.handle_menu(console),
        }
    }

    /// Take an order, then print what is being prepared and the receipt.
    pub fn handle_order<C: Console>(&self, console: &mut C) -> Result<SessionOutcome> {
        let session = OrderSession::new(&self.catalog);
        let outcome = session
            .run(console)
            .context("Ordering session failed")?;

        print_receipt(console, &outcome).context("Failed to print receipt")?;
        Ok(outcome)
    }

    fn handle_menu<C: Console>(&self, console: &mut C) -> Result<()> {
        console
            .say(&format_menu(&self.catalog.flatten()))
            .context("Failed to print menu")?;
        Ok(())
    }
}

pub fn print_receipt<C: Console>(console: &mut C, outcome: &SessionOutcome) -> std::io::Result<()> {
    console.say("This is what we are preparing for you.\n")?;
    console.say(&format_receipt_heading())?;
    for line in format_itemized_receipt(&outcome.order) {
        console.say(&line)?;
    }
    console.say(&format_receipt_footer(outcome.total))
}
