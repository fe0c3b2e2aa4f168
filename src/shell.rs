//! Interactive menu over a registry.
//!
//! The shell only prompts, reads lines and reports results. Every change goes
//! through [`Registry`], and saving is left to the caller once [`Shell::run`]
//! hands the registry back.

use std::io::{self, BufRead, Write};

use crate::inventory;
use crate::registry::{Registry, RegistryError};

const BANNER: &str = "Welcome to the Boat Management System";
const MENU: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
const ADD_PROMPT: &str = "Please enter the boat data in CSV format                 : ";
const NAME_PROMPT: &str = "Please enter the boat name                               : ";
const AMOUNT_PROMPT: &str = "Please enter the amount to be paid                       : ";
const NO_SUCH_BOAT: &str = "No boat with that name";
const FAREWELL: &str = "Exiting the Boat Management System";

pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends, then return the registry.
    pub fn run(mut self) -> io::Result<Registry> {
        writeln!(self.output, "{}", BANNER)?;
        writeln!(self.output, "{}", "-".repeat(BANNER.len()))?;

        loop {
            self.prompt(&format!("\n{}", MENU))?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let option = line.chars().next().unwrap_or(' ');
            match option.to_ascii_lowercase() {
                'i' => self.inventory()?,
                'a' => self.add()?,
                'r' => self.remove()?,
                'p' => self.payment()?,
                'm' => self.registry.charge_monthly_fees(),
                'x' => break,
                _ => writeln!(self.output, "Invalid option {}", option)?,
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(self.registry)
    }

    fn inventory(&mut self) -> io::Result<()> {
        self.output
            .write_all(inventory::render_inventory(&self.registry).as_bytes())
    }

    fn add(&mut self) -> io::Result<()> {
        self.prompt(ADD_PROMPT)?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        match self.registry.add_line(&line) {
            Ok(_) => Ok(()),
            Err(RegistryError::AtCapacity(capacity)) => writeln!(
                self.output,
                "The marina is full, no room for more than {} boats",
                capacity
            ),
            Err(RegistryError::Rejected(rejection)) => {
                writeln!(self.output, "Invalid boat data: {}", rejection)
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        self.prompt(NAME_PROMPT)?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        if self.registry.remove(&name).is_none() {
            writeln!(self.output, "{}", NO_SUCH_BOAT)?;
        }
        Ok(())
    }

    fn payment(&mut self) -> io::Result<()> {
        self.prompt(NAME_PROMPT)?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        if self.registry.find_by_name(&name).is_none() {
            return writeln!(self.output, "{}", NO_SUCH_BOAT);
        }

        self.prompt(AMOUNT_PROMPT)?;
        let Some(text) = self.read_line()? else {
            return Ok(());
        };
        let Some(amount) = parse_amount(&text) else {
            return writeln!(self.output, "Invalid amount");
        };

        match self.registry.apply_payment(&name, amount) {
            Ok(_) => Ok(()),
            Err(RegistryError::ExceedsOwed { owed }) => writeln!(
                self.output,
                "That is more than the amount owed, ${:.2}",
                owed
            ),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}
