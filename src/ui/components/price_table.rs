use std::time::Duration;

use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::domain::{PriceField, PriceRecord, RefiningQuote};
use crate::infra::cache::age_string;

#[derive(Clone, PartialEq)]
pub struct PriceRow {
    /// Position in the fetched list; edits are addressed by it.
    pub index: usize,
    pub item_id: String,
    pub city: String,
    pub sell_price_min: u64,
    pub sell_price_max: u64,
    pub buy_price_min: u64,
    pub buy_price_max: u64,
    pub updated_label: String,
    pub badges: Vec<&'static str>,
}

/// Table rows in fetch order, tagged with the role each record plays in
/// `quote`.
pub fn build_rows(prices: &[PriceRecord], quote: Option<&RefiningQuote>) -> Vec<PriceRow> {
    let now = OffsetDateTime::now_utc();
    prices
        .iter()
        .enumerate()
        .map(|(index, record)| PriceRow {
            index,
            item_id: record.item_id.clone(),
            city: record.city.clone(),
            sell_price_min: record.sell_price_min,
            sell_price_max: record.sell_price_max,
            buy_price_min: record.buy_price_min,
            buy_price_max: record.buy_price_max,
            updated_label: updated_label(record, now),
            badges: quote.map(|q| badges_for(record, q)).unwrap_or_default(),
        })
        .collect()
}

fn badges_for(record: &PriceRecord, quote: &RefiningQuote) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if record == &quote.raw || record == &quote.crafted {
        badges.push("Cheapest");
    }
    if record == &quote.sell_order {
        badges.push("Best Sell");
    }
    if record == &quote.buy_order {
        badges.push("Best Buy");
    }
    badges
}

fn updated_label(record: &PriceRecord, now: OffsetDateTime) -> String {
    let latest = match (record.sell_updated_at(), record.buy_updated_at()) {
        (Some(sell), Some(buy)) => Some(sell.max(buy)),
        (sell, buy) => sell.or(buy),
    };
    match latest {
        Some(at) => {
            let secs = (now - at.assume_utc()).whole_seconds().max(0) as u64;
            format!("{} ago", age_string(Duration::from_secs(secs)))
        }
        None => "—".to_string(),
    }
}

/// Accepts whole, non-negative silver amounts; thousands separators are
/// tolerated.
pub fn parse_price_cell(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
    cleaned.parse::<u64>().ok()
}

#[component]
pub fn PriceTable(rows: Vec<PriceRow>, on_edit: EventHandler<(usize, PriceField, u64)>) -> Element {
    let count = rows.len();

    rsx! {
        details {
            class: "panel price-table",
            summary {
                class: "price-table-header",
                span { "Latest prices" }
                span { class: "muted", "{count} rows" }
            }
            if rows.is_empty() {
                p { class: "muted", "No price data available yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Item" }
                            th { "City" }
                            th { class: "num", "Sell Order (Min)" }
                            th { class: "num", "Sell Order (Max)" }
                            th { class: "num", "Buy Order (Min)" }
                            th { class: "num", "Buy Order (Max)" }
                            th { "Updated" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.index}",
                                td {
                                    span { "{row.item_id}" }
                                    for badge in row.badges.iter() {
                                        span { class: "badge", "{badge}" }
                                    }
                                }
                                td { "{row.city}" }
                                PriceCell { row: row.index, field: PriceField::SellMin, value: row.sell_price_min, on_edit }
                                PriceCell { row: row.index, field: PriceField::SellMax, value: row.sell_price_max, on_edit }
                                PriceCell { row: row.index, field: PriceField::BuyMin, value: row.buy_price_min, on_edit }
                                PriceCell { row: row.index, field: PriceField::BuyMax, value: row.buy_price_max, on_edit }
                                td { class: "muted", "{row.updated_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PriceCell(
    row: usize,
    field: PriceField,
    value: u64,
    on_edit: EventHandler<(usize, PriceField, u64)>,
) -> Element {
    rsx! {
        td {
            class: "num",
            input {
                class: "cell-input",
                r#type: "number",
                min: "0",
                step: "1",
                value: "{value}",
                onchange: move |evt: FormEvent| {
                    if let Some(parsed) = parse_price_cell(&evt.value()) {
                        on_edit.call((row, field, parsed));
                    }
                },
            }
        }
    }
}
