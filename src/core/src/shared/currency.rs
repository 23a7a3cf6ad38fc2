use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyValue {
    pub amount: u32,
    pub currency: Currency,
}

impl CurrencyValue {
    pub fn new(amount: u32, currency: Currency) -> Self {
        CurrencyValue { amount, currency }
    }

    pub fn usd(amount: u32) -> Self {
        CurrencyValue::new(amount, Currency::Usd)
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.currency {
            Currency::Usd => write!(f, "${}", self.amount),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
}
