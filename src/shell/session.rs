//! Interactive session
//!
//! Menu loop over a store, reading from any `BufRead` and writing to any
//! `Write`, so the binary can hand it stdin/stdout and tests a `Cursor`.

use std::io::{BufRead, Write};

use crate::error::{Result, StockError};
use crate::record::Record;
use crate::store::{LoadReport, Store};

use super::input::{parse_confirmation, parse_non_negative};
use super::menu::{MenuChoice, MENU};
use super::render::{
    highest_report, inventory_table, lowest_report, search_report, INVALID_ENTRY, MISSING_FILE,
    NO_STOCK,
};

/// Drives one interactive session over a store
pub struct Shell<R, W> {
    /// The inventory being managed
    store: Store,

    /// Console input (line oriented)
    input: R,

    /// Console output
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new session
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Tell the user what the startup load ran into
    pub fn report_load(&mut self, report: &LoadReport) -> Result<()> {
        if report.unavailable.is_some() {
            writeln!(self.output, "{}", MISSING_FILE)?;
        }
        for skipped in &report.skipped {
            writeln!(self.output, "Warning: {}", skipped)?;
        }
        Ok(())
    }

    /// Run the menu loop until quit or end of input
    ///
    /// Only output failures end the loop early. Anything left unsaved is
    /// written before returning.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                tracing::debug!("End of input, leaving shell");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "{}", INVALID_ENTRY)?;
                continue;
            };

            tracing::trace!("Menu choice: {:?}", choice);
            if choice == MenuChoice::Quit {
                break;
            }
            self.execute(choice)?;
        }

        if self.store.is_dirty() {
            self.persist()?;
        }
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Execute a single menu command
    ///
    /// Commands that change the store are followed by a save.
    pub fn execute(&mut self, choice: MenuChoice) -> Result<()> {
        self.dispatch(choice)?;
        if choice.mutates() && self.store.is_dirty() {
            self.persist()?;
        }
        Ok(())
    }

    /// Borrow the store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consume the session and return the store
    pub fn into_store(self) -> Store {
        self.store
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::ListAll => {
                let table = inventory_table(&self.store, false);
                writeln!(self.output, "{}", table)?;
                Ok(())
            }
            MenuChoice::ListWithValue => {
                let table = inventory_table(&self.store, true);
                writeln!(self.output, "{}", table)?;
                Ok(())
            }
            MenuChoice::Search => self.search(),
            MenuChoice::RestockLowest => self.restock_lowest(),
            MenuChoice::HighestQuantity => {
                let report = highest_report(&self.store);
                writeln!(self.output, "{}", report)?;
                Ok(())
            }
            MenuChoice::Quit => Ok(()),
        }
    }

    /// Capture a new shoe and append it
    fn add_item(&mut self) -> Result<()> {
        let Some(country) = self.prompt("Please enter the country of the shoe: ")? else {
            return Ok(());
        };
        let Some(code) = self.prompt("Please enter the code of the shoe: ")? else {
            return Ok(());
        };
        let Some(product) = self.prompt("Please enter the name of the shoe: ")? else {
            return Ok(());
        };
        let Some(cost) = self.prompt_count(
            "Please enter the cost of the shoe to the nearest whole number (e.g. 23): ",
        )?
        else {
            return Ok(());
        };
        let Some(quantity) =
            self.prompt_count("Please enter the quantity of stock of the shoe (e.g. 55): ")?
        else {
            return Ok(());
        };

        self.store
            .add(Record::new(country, code, product, cost, quantity));
        writeln!(self.output, "You have successfully added an item to inventory!")?;
        Ok(())
    }

    /// Look a shoe up by code
    fn search(&mut self) -> Result<()> {
        let Some(code) = self.prompt(
            "Please enter the code of shoe you want to search for (case-sensitive): ",
        )?
        else {
            return Ok(());
        };

        let report = search_report(&self.store, &code);
        writeln!(self.output, "{}", report)?;
        Ok(())
    }

    /// Show the lowest-quantity shoe and restock it after confirmation
    fn restock_lowest(&mut self) -> Result<()> {
        let Some(index) = self.store.lowest_quantity() else {
            writeln!(self.output, "{}", NO_STOCK)?;
            return Ok(());
        };

        let report = lowest_report(&self.store);
        writeln!(self.output, "{}", report)?;

        let Some(answer) =
            self.prompt("Please enter 'Yes' to restock or 'No' to not restock: ")?
        else {
            return Ok(());
        };
        if !parse_confirmation(&answer) {
            writeln!(self.output, "The shoe has not been restocked")?;
            return Ok(());
        }

        let Some(amount) = self.prompt_count(
            "Please enter the quantity of shoe you would like to restock (e.g. 55): ",
        )?
        else {
            return Ok(());
        };

        let restocked = self.store.restock(index, amount).map(|_| ());
        match restocked {
            Ok(()) => {
                writeln!(self.output, "The shoe has been successfully restocked!")?;
            }
            Err(e) => {
                tracing::warn!("Restock failed: {}", e);
                writeln!(self.output, "The shoe has not been restocked: {}", e)?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Save the store, reporting a failure instead of propagating it
    ///
    /// On failure the store stays dirty and the next mutation retries.
    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save() {
            tracing::error!("Failed to save {}: {}", self.store.path().display(), e);
            writeln!(self.output, "Could not save inventory: {}", e)?;
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a non-negative whole number is entered
    fn prompt_count(&mut self, message: &str) -> Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse_non_negative(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(StockError::InvalidInput(reason)) => writeln!(self.output, "{}", reason)?,
                Err(e) => return Err(e),
            }
        }
    }
}
