use thiserror::Error;

use super::entities::PriceRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no price records for {item_id}")]
    NoRecords { item_id: String },
}

/// Record with the lowest `buy_price_max` for `resource_id`.
///
/// Ties go to the earliest record in `prices`.
pub fn select_cheapest_resource<'a>(
    resource_id: &str,
    prices: &'a [PriceRecord],
) -> Result<&'a PriceRecord, SelectionError> {
    first_by(resource_id, prices, |candidate, best| {
        candidate.buy_price_max < best.buy_price_max
    })
}

/// Records with the highest `sell_price_min` and the highest `buy_price_max`
/// for `product_id`, chosen independently.
///
/// Ties go to the earliest record in `prices`.
pub fn select_best_product_prices<'a>(
    product_id: &str,
    prices: &'a [PriceRecord],
) -> Result<(&'a PriceRecord, &'a PriceRecord), SelectionError> {
    let sell = first_by(product_id, prices, |candidate, best| {
        candidate.sell_price_min > best.sell_price_min
    })?;
    let buy = first_by(product_id, prices, |candidate, best| {
        candidate.buy_price_max > best.buy_price_max
    })?;
    Ok((sell, buy))
}

fn first_by<'a, F>(
    item_id: &str,
    prices: &'a [PriceRecord],
    better: F,
) -> Result<&'a PriceRecord, SelectionError>
where
    F: Fn(&PriceRecord, &PriceRecord) -> bool,
{
    prices
        .iter()
        .filter(|record| record.item_id == item_id)
        .fold(None, |best: Option<&PriceRecord>, candidate| match best {
            Some(current) if !better(candidate, current) => Some(current),
            _ => Some(candidate),
        })
        .ok_or_else(|| SelectionError::NoRecords {
            item_id: item_id.to_string(),
        })
}
