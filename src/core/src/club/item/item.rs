use crate::club::athlete::{Athlete, StatType};
use crate::shared::CurrencyValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Price charged per point of stat increase.
pub const ITEM_UNIT_PRICE: u32 = 100;

/// A consumable that raises one stat of an athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    stat: StatType,
    increase: u16,
    price: CurrencyValue,
}

impl Item {
    pub fn new(name: String, stat: StatType, increase: u16) -> Self {
        Item {
            name,
            stat,
            increase,
            price: CurrencyValue::usd(increase as u32 * ITEM_UNIT_PRICE),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stat(&self) -> StatType {
        self.stat
    }

    pub fn increase(&self) -> u16 {
        self.increase
    }

    pub fn price(&self) -> CurrencyValue {
        self.price
    }

    /// Applies the item and uses it up. Returns the athlete's new stat value.
    pub fn apply(self, athlete: &mut Athlete) -> u16 {
        let value = athlete.increase_stat(self.stat, self.increase);

        debug!(
            "item applied: {} +{} {} -> {} ({})",
            self.name, self.increase, self.stat, athlete.name(), value
        );

        value
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} (+{} {}) {}", self.name, self.increase, self.stat, self.price)
    }
}
