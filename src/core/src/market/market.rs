use crate::club::athlete::Athlete;
use crate::club::item::Item;
use crate::generator::{Generator, GeneratorError};
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// Trading rules were never defined for the market. Kept as an explicit
    /// error so callers cannot mistake it for a successful no-op.
    #[error("market operation `{operation}` is not specified")]
    NotSpecified { operation: &'static str },
}

/// Weekly market pools and the purchase log for the current week.
#[derive(Debug, Default)]
pub struct Market {
    purchasable_athletes: Vec<Athlete>,
    purchasable_items: Vec<Item>,
    starter_athletes: Vec<Athlete>,
    weekly_purchased_athletes: Vec<Athlete>,
    weekly_purchased_items: Vec<Item>,
}

impl Market {
    pub fn new() -> Self {
        Market::default()
    }

    pub fn buy(&mut self) -> Result<(), MarketError> {
        Err(MarketError::NotSpecified { operation: "buy" })
    }

    pub fn sell(&mut self) -> Result<(), MarketError> {
        Err(MarketError::NotSpecified { operation: "sell" })
    }

    /// Replaces the athlete pool with a fresh batch. On error the old pool
    /// stays in place.
    pub fn set_purchasable_athletes(&mut self, generator: &mut Generator) -> Result<(), GeneratorError> {
        self.purchasable_athletes = generator.generate_weekly_athletes()?;

        debug!(
            "market athletes: {}",
            self.purchasable_athletes
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        );

        Ok(())
    }

    pub fn set_purchasable_items(&mut self, generator: &mut Generator) -> Result<(), GeneratorError> {
        self.purchasable_items = generator.generate_weekly_items()?;

        debug!(
            "market items: {}",
            self.purchasable_items
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        );

        Ok(())
    }

    pub fn set_starter_athletes(&mut self, generator: &mut Generator) -> Result<(), GeneratorError> {
        self.starter_athletes = generator.generate_starter_athletes()?;
        Ok(())
    }

    /// Overwrites the starter candidate with the same id as `athlete`, so the
    /// pool always shows the current stats of a rostered starter.
    pub(crate) fn update_starter(&mut self, athlete: &Athlete) -> bool {
        match self.starter_athletes.iter_mut().find(|a| a.id() == athlete.id()) {
            Some(slot) => {
                *slot = athlete.clone();
                true
            }
            None => false,
        }
    }

    pub fn purchasable_athletes(&self) -> &[Athlete] {
        &self.purchasable_athletes
    }

    pub fn purchasable_items(&self) -> &[Item] {
        &self.purchasable_items
    }

    pub fn starter_athletes(&self) -> &[Athlete] {
        &self.starter_athletes
    }

    pub fn weekly_purchased_athletes(&self) -> &[Athlete] {
        &self.weekly_purchased_athletes
    }

    pub fn weekly_purchased_items(&self) -> &[Item] {
        &self.weekly_purchased_items
    }

    pub fn add_weekly_purchased_athlete(&mut self, athlete: Athlete) {
        self.weekly_purchased_athletes.push(athlete);
    }

    pub fn add_weekly_purchased_item(&mut self, item: Item) {
        self.weekly_purchased_items.push(item);
    }

    pub fn clear_weekly_purchases(&mut self) {
        info!(
            "clearing weekly purchases: {} athletes, {} items",
            self.weekly_purchased_athletes.len(),
            self.weekly_purchased_items.len()
        );

        self.weekly_purchased_athletes.clear();
        self.weekly_purchased_items.clear();
    }
}
