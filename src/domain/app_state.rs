use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::entities::{CalculatorInput, PriceRecord, RefiningQuote};
use super::profit::{quote, QuoteError};

/// Which price column a table edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceField {
    SellMin,
    SellMax,
    BuyMin,
    BuyMax,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Form values of the last submitted calculation.
    pub input: CalculatorInput,
    /// Rows of the latest fetch, including any edits made in the price table.
    pub prices: Vec<PriceRecord>,
    pub fetched_at: Option<SystemTime>,
    pub from_cache: bool,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.input = persisted.input;
    }

    /// Commits `input` together with the rows fetched for its recipe. The
    /// input only changes here so that `quote` never pairs a recipe with rows
    /// fetched for a different one.
    pub fn load_prices(
        &mut self,
        input: CalculatorInput,
        prices: Vec<PriceRecord>,
        fetched_at: SystemTime,
        from_cache: bool,
    ) {
        self.input = input;
        self.prices = prices;
        self.fetched_at = Some(fetched_at);
        self.from_cache = from_cache;
        self.last_error = None;
    }

    /// Overwrites a single price cell. Returns false when `row` is out of range.
    pub fn edit_price(&mut self, row: usize, field: PriceField, value: u64) -> bool {
        let Some(record) = self.prices.get_mut(row) else {
            return false;
        };
        match field {
            PriceField::SellMin => record.sell_price_min = value,
            PriceField::SellMax => record.sell_price_max = value,
            PriceField::BuyMin => record.buy_price_min = value,
            PriceField::BuyMax => record.buy_price_max = value,
        }
        true
    }

    /// Quote for the current input against the current (possibly edited)
    /// prices. `None` until prices have been loaded.
    pub fn quote(&self) -> Option<Result<RefiningQuote, QuoteError>> {
        self.fetched_at?;
        Some(quote(&self.input, &self.prices))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub input: CalculatorInput,
}
