//! In-memory registry of every boat at the marina.
//!
//! The registry keeps boats in insertion (or file) order. That order is what
//! gets persisted; listings use [`Registry::ordered_view`] instead, which sorts
//! a view without touching storage.

use std::cmp::Ordering;
use std::io::BufRead;

use thiserror::Error;

use crate::codec::{self, ParseRejection};
use crate::models::Boat;

/// The most boats the marina can hold.
pub const MAX_BOATS: usize = 120;

/// Negative outcomes of registry operations.
///
/// None of these are fatal. Each one leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("the marina is full ({0} boats)")]
    AtCapacity(usize),

    #[error("invalid boat data: {0}")]
    Rejected(#[from] ParseRejection),

    #[error("no boat named {0:?}")]
    NotFound(String),

    #[error("that is more than the amount owed, ${owed:.2}")]
    ExceedsOwed { owed: f64 },
}

/// Counts gathered while loading a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Lines that did not parse, blank lines included.
    pub skipped: usize,
    /// Reading stopped at capacity with input left over.
    pub truncated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    boats: Vec<Boat>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            boats: Vec::with_capacity(MAX_BOATS),
        }
    }

    /// Build a registry from data file lines, skipping any that do not parse.
    ///
    /// Reading stops as soon as the registry is full. Only I/O failures are
    /// returned as errors; a source with no valid lines is an empty registry.
    pub fn load<R: BufRead>(reader: R) -> std::io::Result<(Self, LoadReport)> {
        let mut registry = Self::new();
        let mut report = LoadReport::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            if registry.is_full() {
                report.truncated = true;
                tracing::warn!(capacity = MAX_BOATS, "registry full, ignoring remaining lines");
                break;
            }

            let line = line?;
            let parsed = std::str::from_utf8(&line)
                .map_err(|_| ParseRejection::InvalidEncoding)
                .and_then(codec::parse_line);

            match parsed {
                Ok(boat) => {
                    registry.boats.push(boat);
                    report.loaded += 1;
                }
                Err(rejection) => {
                    report.skipped += 1;
                    tracing::debug!(line = index + 1, %rejection, "skipping line");
                }
            }
        }

        Ok((registry, report))
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.boats.len() >= MAX_BOATS
    }

    pub fn capacity(&self) -> usize {
        MAX_BOATS
    }

    /// Boats in storage order.
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boat> {
        self.boats.iter()
    }

    /// Position of the first boat whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.boats.iter().position(|boat| boat.name_matches(name))
    }

    pub fn get(&self, name: &str) -> Option<&Boat> {
        self.find_by_name(name).map(|index| &self.boats[index])
    }

    /// All boats sorted by name, ignoring ASCII case.
    ///
    /// The sort is stable, so boats with equal names keep their storage order.
    pub fn ordered_view(&self) -> Vec<&Boat> {
        let mut view: Vec<&Boat> = self.boats.iter().collect();
        view.sort_by(|a, b| compare_names(&a.name, &b.name));
        view
    }

    // ============================================================
    // Mutations
    // ============================================================

    pub fn add(&mut self, boat: Boat) -> Result<(), RegistryError> {
        if self.is_full() {
            return Err(RegistryError::AtCapacity(MAX_BOATS));
        }
        self.boats.push(boat);
        Ok(())
    }

    /// Parse a data file line and append the boat it describes.
    pub fn add_line(&mut self, line: &str) -> Result<&Boat, RegistryError> {
        if self.is_full() {
            return Err(RegistryError::AtCapacity(MAX_BOATS));
        }
        let boat = codec::parse_line(line)?;
        tracing::debug!(name = %boat.name, kind = boat.kind().as_str(), "adding boat");
        self.boats.push(boat);
        Ok(&self.boats[self.boats.len() - 1])
    }

    /// Remove the first boat with a matching name, keeping the others in order.
    pub fn remove(&mut self, name: &str) -> Option<Boat> {
        let index = self.find_by_name(name)?;
        let boat = self.boats.remove(index);
        tracing::debug!(name = %boat.name, "removed boat");
        Some(boat)
    }

    /// Apply a payment to the first boat with a matching name.
    ///
    /// Returns the new balance. A payment larger than the balance is refused
    /// and the balance is left as it was.
    pub fn apply_payment(&mut self, name: &str, amount: f64) -> Result<f64, RegistryError> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        let boat = &mut self.boats[index];

        if amount.is_nan() || amount > boat.amount_owed {
            return Err(RegistryError::ExceedsOwed {
                owed: boat.amount_owed,
            });
        }

        boat.amount_owed -= amount;
        Ok(boat.amount_owed)
    }

    /// Add one month of fees to every boat, based on its length and location.
    pub fn charge_monthly_fees(&mut self) {
        let mut total = 0.0;
        for boat in &mut self.boats {
            let fee = boat.monthly_fee();
            boat.amount_owed += fee;
            total += fee;
        }
        tracing::info!(boats = self.boats.len(), total, "charged monthly fees");
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Boat;
    type IntoIter = std::slice::Iter<'a, Boat>;

    fn into_iter(self) -> Self::IntoIter {
        self.boats.iter()
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|byte| byte.to_ascii_lowercase());
    let b = b.bytes().map(|byte| byte.to_ascii_lowercase());
    a.cmp(b)
}
