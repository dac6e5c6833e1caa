use std::fmt;

use serde::{Deserialize, Serialize};

/// Cities queried on every price request.
pub const ROYAL_CITIES: [&str; 5] = ["Bridgewatch", "Lymhurst", "Martlock", "Thetford", "Fortsterling"];

/// Tiers offered in the calculator form.
pub const TIER_CHOICES: [u8; 5] = [4, 5, 6, 7, 8];

/// Enchantment levels offered in the calculator form.
pub const ENCHANTMENT_CHOICES: [u8; 4] = [0, 1, 2, 3];

/// One market observation for one item in one city, as returned by the
/// Albion Online Data price endpoint.
///
/// Prices are zero when the market has no active orders of that kind. Dates
/// keep the API's raw text; see [`PriceRecord::sell_updated_at`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub item_id: String,
    pub city: String,
    #[serde(default)]
    pub quality: u8,
    #[serde(default)]
    pub sell_price_min: u64,
    #[serde(default)]
    pub sell_price_min_date: String,
    #[serde(default)]
    pub sell_price_max: u64,
    #[serde(default)]
    pub sell_price_max_date: String,
    #[serde(default)]
    pub buy_price_min: u64,
    #[serde(default)]
    pub buy_price_min_date: String,
    #[serde(default)]
    pub buy_price_max: u64,
    #[serde(default)]
    pub buy_price_max_date: String,
}

impl PriceRecord {
    /// Timestamp of the cheapest sell order, if the API reported a real one.
    pub fn sell_updated_at(&self) -> Option<time::PrimitiveDateTime> {
        parse_api_timestamp(&self.sell_price_min_date)
    }

    /// Timestamp of the highest buy order, if the API reported a real one.
    pub fn buy_updated_at(&self) -> Option<time::PrimitiveDateTime> {
        parse_api_timestamp(&self.buy_price_max_date)
    }
}

/// The API uses `0001-01-01T00:00:00` for "never seen".
fn parse_api_timestamp(raw: &str) -> Option<time::PrimitiveDateTime> {
    let format = time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let parsed = time::PrimitiveDateTime::parse(raw, &format).ok()?;
    (parsed.year() > 1).then_some(parsed)
}

/// Refined goods the calculator knows how to price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    #[default]
    Planks,
    Stoneblock,
    Metalbar,
    Leather,
    Cloth,
}

impl ItemKind {
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Planks,
        ItemKind::Stoneblock,
        ItemKind::Metalbar,
        ItemKind::Leather,
        ItemKind::Cloth,
    ];

    /// Base name used in API identifiers.
    pub fn code(&self) -> &'static str {
        match self {
            ItemKind::Planks => "PLANKS",
            ItemKind::Stoneblock => "STONEBLOCK",
            ItemKind::Metalbar => "METALBAR",
            ItemKind::Leather => "LEATHER",
            ItemKind::Cloth => "CLOTH",
        }
    }

    /// Base name of the gathered resource this item is refined from.
    pub fn raw_resource(&self) -> &'static str {
        match self {
            ItemKind::Planks => "WOOD",
            ItemKind::Stoneblock => "STONE",
            ItemKind::Metalbar => "ORE",
            ItemKind::Leather => "HIDE",
            ItemKind::Cloth => "FIBER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Planks => "Planks",
            ItemKind::Stoneblock => "Stone Blocks",
            ItemKind::Metalbar => "Metal Bars",
            ItemKind::Leather => "Leather",
            ItemKind::Cloth => "Cloth",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything the user entered in the calculator form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub item: ItemKind,
    pub tier: u8,
    pub enchantment: u8,
    /// Percentage of resource cost returned without focus.
    pub return_rate: f64,
    /// Percentage of resource cost returned when refining with focus.
    pub return_rate_focus: f64,
    /// Market station fee per 100 nutrition.
    pub fee: u32,
    pub units: u32,
    #[serde(default)]
    pub with_focus: bool,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            item: ItemKind::Planks,
            tier: 4,
            enchantment: 0,
            return_rate: 36.7,
            return_rate_focus: 53.9,
            fee: 0,
            units: 1,
            with_focus: false,
        }
    }
}

/// Profit for each execution strategy, plus the intermediate costs shown
/// alongside them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfitEstimate {
    pub sell_without_focus: f64,
    pub sell_with_focus: f64,
    pub buy_without_focus: f64,
    pub buy_with_focus: f64,
    pub resource_cost: f64,
    pub nutrition_cost: f64,
    pub fee_per_unit: f64,
}

impl ProfitEstimate {
    pub fn sell_order(&self, with_focus: bool) -> f64 {
        if with_focus {
            self.sell_with_focus
        } else {
            self.sell_without_focus
        }
    }

    pub fn buy_order(&self, with_focus: bool) -> f64 {
        if with_focus {
            self.buy_with_focus
        } else {
            self.buy_without_focus
        }
    }
}

/// The selected price points for one recipe and the profit derived from them.
#[derive(Clone, Debug, PartialEq)]
pub struct RefiningQuote {
    pub raw: PriceRecord,
    pub crafted: PriceRecord,
    pub sell_order: PriceRecord,
    pub buy_order: PriceRecord,
    pub estimate: ProfitEstimate,
}
