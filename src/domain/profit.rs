//! Refining profit model.

use thiserror::Error;

use super::entities::{CalculatorInput, PriceRecord, ProfitEstimate, RefiningQuote};
use super::resource_code::RefiningRecipe;
use super::selection::{select_best_product_prices, select_cheapest_resource, SelectionError};

/// Raw resources consumed per refined unit, indexed by tier.
pub const TIER_RAW_REQUIREMENTS: [u32; 9] = [0, 0, 1, 2, 2, 3, 4, 5, 5];

/// Item value, indexed by `tier + enchantment - 1`.
pub const TIER_ITEM_VALUE: [u32; 11] = [0, 0, 0, 16, 32, 64, 128, 256, 512, 1024, 2048];

/// Nutrition consumed per point of item value.
pub const NUTRITION_FACTOR: f64 = 0.1125;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("index {index} is outside the {table} table")]
    TierOutOfRange { index: usize, table: &'static str },
    #[error("tier {tier} with enchantment {enchantment} has no item value")]
    NoItemValue { tier: u8, enchantment: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

fn lookup(table: &[u32], index: usize, name: &'static str) -> Result<f64, CalculationError> {
    table
        .get(index)
        .map(|value| f64::from(*value))
        .ok_or(CalculationError::TierOutOfRange { index, table: name })
}

pub fn compute_profit(
    input: &CalculatorInput,
    raw: &PriceRecord,
    crafted: &PriceRecord,
    sell_order: &PriceRecord,
    buy_order: &PriceRecord,
) -> Result<ProfitEstimate, CalculationError> {
    let tier = usize::from(input.tier);
    let value_index = (tier + usize::from(input.enchantment))
        .checked_sub(1)
        .ok_or(CalculationError::NoItemValue {
            tier: input.tier,
            enchantment: input.enchantment,
        })?;

    let item_value = lookup(&TIER_ITEM_VALUE, value_index, "TIER_ITEM_VALUE")?;
    let raw_requirement = lookup(&TIER_RAW_REQUIREMENTS, tier, "TIER_RAW_REQUIREMENTS")?;

    let nutrition_cost = item_value * NUTRITION_FACTOR;
    let fee_per_unit = (f64::from(input.fee) / 100.0) * nutrition_cost;
    let resource_cost = raw.buy_price_max as f64 * raw_requirement + crafted.buy_price_max as f64;
    let units = f64::from(input.units);

    let profit = |order_price: u64, return_rate: f64| {
        ((order_price as f64 - resource_cost - fee_per_unit) + (resource_cost / 100.0 * return_rate))
            * units
    };

    Ok(ProfitEstimate {
        sell_without_focus: profit(sell_order.sell_price_min, input.return_rate),
        sell_with_focus: profit(sell_order.sell_price_min, input.return_rate_focus),
        buy_without_focus: profit(buy_order.buy_price_max, input.return_rate),
        buy_with_focus: profit(buy_order.buy_price_max, input.return_rate_focus),
        resource_cost,
        nutrition_cost,
        fee_per_unit,
    })
}

/// Selects the relevant price points for `input` out of `prices` and prices
/// the recipe.
pub fn quote(input: &CalculatorInput, prices: &[PriceRecord]) -> Result<RefiningQuote, QuoteError> {
    let recipe = RefiningRecipe::for_item(input.item, input.tier, input.enchantment);

    let raw = select_cheapest_resource(&recipe.raw, prices)?;
    let crafted = select_cheapest_resource(&recipe.crafted, prices)?;
    let (sell_order, buy_order) = select_best_product_prices(&recipe.product, prices)?;
    let estimate = compute_profit(input, raw, crafted, sell_order, buy_order)?;

    Ok(RefiningQuote {
        raw: raw.clone(),
        crafted: crafted.clone(),
        sell_order: sell_order.clone(),
        buy_order: buy_order.clone(),
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemKind;

    fn record(item_id: &str, city: &str, sell_min: u64, buy_max: u64) -> PriceRecord {
        PriceRecord {
            item_id: item_id.to_string(),
            city: city.to_string(),
            quality: 1,
            sell_price_min: sell_min,
            sell_price_min_date: String::new(),
            sell_price_max: 0,
            sell_price_max_date: String::new(),
            buy_price_min: 0,
            buy_price_min_date: String::new(),
            buy_price_max: buy_max,
            buy_price_max_date: String::new(),
        }
    }

    fn planks_input() -> CalculatorInput {
        CalculatorInput {
            item: ItemKind::Planks,
            tier: 5,
            enchantment: 0,
            ..CalculatorInput::default()
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn zero_return_rate_and_fee_reduce_to_margin_times_units() {
        let input = CalculatorInput {
            return_rate: 0.0,
            return_rate_focus: 0.0,
            fee: 0,
            units: 10,
            ..planks_input()
        };
        let raw = record("T5_WOOD", "Lymhurst", 0, 50);
        let crafted = record("T4_PLANKS", "Martlock", 0, 40);
        let sell = record("T5_PLANKS", "Thetford", 300, 0);
        let buy = record("T5_PLANKS", "Bridgewatch", 0, 250);

        let estimate = compute_profit(&input, &raw, &crafted, &sell, &buy).unwrap();
        let resource_cost = 50.0 * 3.0 + 40.0;
        assert_close(estimate.resource_cost, resource_cost);
        assert_close(estimate.sell_without_focus, (300.0 - resource_cost) * 10.0);
        assert_close(estimate.sell_with_focus, (300.0 - resource_cost) * 10.0);
        assert_close(estimate.buy_without_focus, (250.0 - resource_cost) * 10.0);
    }

    #[test]
    fn tier_five_planks_costs() {
        let input = CalculatorInput {
            fee: 200,
            units: 2,
            ..planks_input()
        };
        let raw = record("T5_WOOD", "Lymhurst", 0, 100);
        let crafted = record("T4_PLANKS", "Martlock", 0, 60);
        let sell = record("T5_PLANKS", "Thetford", 500, 0);
        let buy = record("T5_PLANKS", "Bridgewatch", 0, 420);

        let estimate = compute_profit(&input, &raw, &crafted, &sell, &buy).unwrap();
        // T5 with no enchantment reads TIER_ITEM_VALUE[4] = 32.
        assert_close(estimate.nutrition_cost, 3.6);
        assert_close(estimate.fee_per_unit, 7.2);
        assert_close(estimate.resource_cost, 360.0);

        let refund = 360.0 / 100.0 * 36.7;
        let refund_focus = 360.0 / 100.0 * 53.9;
        assert_close(estimate.sell_without_focus, (500.0 - 360.0 - 7.2 + refund) * 2.0);
        assert_close(estimate.sell_with_focus, (500.0 - 360.0 - 7.2 + refund_focus) * 2.0);
        assert_close(estimate.buy_without_focus, (420.0 - 360.0 - 7.2 + refund) * 2.0);
        assert_close(estimate.buy_with_focus, (420.0 - 360.0 - 7.2 + refund_focus) * 2.0);
        assert_close(estimate.sell_order(true), estimate.sell_with_focus);
        assert_close(estimate.buy_order(false), estimate.buy_without_focus);
    }

    #[test]
    fn enchantment_shifts_item_value_index() {
        let input = CalculatorInput {
            tier: 8,
            enchantment: 3,
            ..planks_input()
        };
        let zero = record("X", "A", 0, 0);
        let estimate = compute_profit(&input, &zero, &zero, &zero, &zero).unwrap();
        assert_close(estimate.nutrition_cost, 2048.0 * NUTRITION_FACTOR);
    }

    #[test]
    fn tables_outside_range_are_errors() {
        let zero = record("X", "A", 0, 0);

        let too_high = CalculatorInput {
            tier: 9,
            enchantment: 3,
            ..planks_input()
        };
        assert_eq!(
            compute_profit(&too_high, &zero, &zero, &zero, &zero),
            Err(CalculationError::TierOutOfRange {
                index: 11,
                table: "TIER_ITEM_VALUE"
            })
        );

        let raw_table = CalculatorInput {
            tier: 9,
            enchantment: 0,
            ..planks_input()
        };
        assert_eq!(
            compute_profit(&raw_table, &zero, &zero, &zero, &zero),
            Err(CalculationError::TierOutOfRange {
                index: 9,
                table: "TIER_RAW_REQUIREMENTS"
            })
        );

        let tier_zero = CalculatorInput {
            tier: 0,
            enchantment: 0,
            ..planks_input()
        };
        assert_eq!(
            compute_profit(&tier_zero, &zero, &zero, &zero, &zero),
            Err(CalculationError::NoItemValue {
                tier: 0,
                enchantment: 0
            })
        );
    }

    #[test]
    fn quote_selects_then_prices() {
        let prices = vec![
            record("T5_WOOD", "Lymhurst", 0, 110),
            record("T5_WOOD", "Thetford", 0, 90),
            record("T4_PLANKS", "Martlock", 0, 45),
            record("T5_PLANKS", "Bridgewatch", 480, 300),
            record("T5_PLANKS", "Fort Sterling", 450, 330),
        ];

        let quote = quote(&planks_input(), &prices).unwrap();
        assert_eq!(quote.raw.city, "Thetford");
        assert_eq!(quote.crafted.city, "Martlock");
        assert_eq!(quote.sell_order.city, "Bridgewatch");
        assert_eq!(quote.buy_order.city, "Fort Sterling");
        assert_close(quote.estimate.resource_cost, 90.0 * 3.0 + 45.0);
    }

    #[test]
    fn quote_reports_missing_ingredient() {
        let prices = vec![record("T5_WOOD", "Lymhurst", 0, 110)];
        assert_eq!(
            quote(&planks_input(), &prices).unwrap_err(),
            QuoteError::Selection(SelectionError::NoRecords {
                item_id: "T4_PLANKS".to_string()
            })
        );
    }
}
