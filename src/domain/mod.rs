//! Domain logic for refining valuation lives here.

pub mod app_state;
pub mod entities;
pub mod profit;
pub mod resource_code;
pub mod selection;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, PriceField};
#[allow(unused_imports)]
pub use entities::{
    CalculatorInput, ItemKind, PriceRecord, ProfitEstimate, RefiningQuote, ENCHANTMENT_CHOICES,
    ROYAL_CITIES, TIER_CHOICES,
};
#[allow(unused_imports)]
pub use profit::{compute_profit, quote, CalculationError, QuoteError};
#[allow(unused_imports)]
pub use resource_code::{build_identifier, RefiningRecipe};
#[allow(unused_imports)]
pub use selection::{select_best_product_prices, select_cheapest_resource, SelectionError};
