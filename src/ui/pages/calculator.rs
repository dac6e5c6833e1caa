use dioxus::prelude::*;

use crate::{
    app::{fetch_prices, persist_user_input},
    domain::{
        AppState, CalculatorInput, ItemKind, PriceField, RefiningQuote, ENCHANTMENT_CHOICES,
        TIER_CHOICES,
    },
    infra::albion::AlbionClient,
    ui::{
        components::{
            kpi_card::KpiCard,
            price_table::{build_rows, PriceTable},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::format::silver,
};

/// Raw form values, as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    pub item: String,
    pub tier: String,
    pub enchantment: String,
    pub return_rate: String,
    pub return_rate_focus: String,
    pub fee: String,
    pub units: String,
    pub with_focus: bool,
}

impl From<&CalculatorInput> for FormValues {
    fn from(input: &CalculatorInput) -> Self {
        Self {
            item: input.item.code().to_string(),
            tier: input.tier.to_string(),
            enchantment: input.enchantment.to_string(),
            return_rate: input.return_rate.to_string(),
            return_rate_focus: input.return_rate_focus.to_string(),
            fee: input.fee.to_string(),
            units: input.units.to_string(),
            with_focus: input.with_focus,
        }
    }
}

pub fn parse_form(values: &FormValues) -> Result<CalculatorInput, String> {
    let item = ItemKind::from_code(values.item.trim())
        .ok_or_else(|| format!("Unknown item {:?}.", values.item))?;
    let tier = values
        .tier
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|tier| TIER_CHOICES.contains(tier))
        .ok_or("Tier must be between 4 and 8.")?;
    let enchantment = values
        .enchantment
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|level| ENCHANTMENT_CHOICES.contains(level))
        .ok_or("Enchantment must be between 0 and 3.")?;
    let return_rate = parse_rate(&values.return_rate, "Return rate")?;
    let return_rate_focus = parse_rate(&values.return_rate_focus, "Focus return rate")?;
    let fee = values
        .fee
        .trim()
        .parse::<u32>()
        .map_err(|_| "Market fee must be a whole number of at least 0.".to_string())?;
    let units = values
        .units
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|units| *units >= 1)
        .ok_or("Units must be a whole number of at least 1.")?;

    Ok(CalculatorInput {
        item,
        tier,
        enchantment,
        return_rate,
        return_rate_focus,
        fee,
        units,
        with_focus: values.with_focus,
    })
}

fn parse_rate(raw: &str, label: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("{label} must be a number."))
}

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<AlbionClient>();

    let mut form = use_signal(|| state.with(|st| FormValues::from(&st.input)));

    let (input, prices, loading, last_error, from_cache, quote) = state.with(|st| {
        (
            st.input.clone(),
            st.prices.clone(),
            st.loading,
            st.last_error.clone(),
            st.from_cache,
            st.quote(),
        )
    });
    let quote_ok = quote.as_ref().and_then(|result| result.as_ref().ok());
    let quote_error = quote
        .as_ref()
        .and_then(|result| result.as_ref().err())
        .map(|err| err.to_string());
    let rows = build_rows(&prices, quote_ok);
    let tiles = quote_ok.map(|q| metric_tiles(q, input.with_focus));
    let breakdown = quote_ok.map(|q| {
        format!(
            "Resource cost {} · nutrition {:.1} · fee per unit {:.1}",
            silver(q.estimate.resource_cost),
            q.estimate.nutrition_cost,
            q.estimate.fee_per_unit
        )
    });

    let submit = {
        let client = client.clone();
        move |force_refresh: bool| {
            let parsed = parse_form(&form());
            let input = match parsed {
                Ok(input) => input,
                Err(message) => {
                    push_toast(toasts, ToastKind::Warning, message);
                    return;
                }
            };

            let mut state = state;
            state.with_mut(|st| st.loading = true);
            persist_user_input(&input);

            let client = client.clone();
            spawn(async move {
                if force_refresh {
                    client.clear_cache().await;
                }
                fetch_prices(client, state, toasts, input).await;
            });
        }
    };
    let on_submit = {
        let submit = submit.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            submit(false);
        }
    };
    let on_refresh = move |_: MouseEvent| submit(true);

    let on_edit = move |(row, field, value): (usize, PriceField, u64)| {
        let mut state = state;
        state.with_mut(|st| {
            st.edit_price(row, field, value);
        });
    };

    rsx! {
        div { class: "page",
            form {
                class: "{theme::PANEL} calculator-form",
                onsubmit: on_submit,
                div { class: "form-grid",
                    label { class: "{theme::LABEL}", "Return rate"
                        input {
                            class: "{theme::INPUT}", r#type: "number", step: "0.1",
                            value: "{form().return_rate}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.return_rate = evt.value()),
                        }
                    }
                    label { class: "{theme::LABEL}", "Return rate with focus"
                        input {
                            class: "{theme::INPUT}", r#type: "number", step: "0.1",
                            value: "{form().return_rate_focus}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.return_rate_focus = evt.value()),
                        }
                    }
                    label { class: "{theme::LABEL}", "Market station fee"
                        input {
                            class: "{theme::INPUT}", r#type: "number", min: "0", step: "1",
                            value: "{form().fee}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.fee = evt.value()),
                        }
                    }
                    label { class: "{theme::LABEL}", "Units"
                        input {
                            class: "{theme::INPUT}", r#type: "number", min: "1", step: "1",
                            value: "{form().units}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.units = evt.value()),
                        }
                    }
                    label { class: "{theme::LABEL}", "Item"
                        select {
                            class: "{theme::INPUT}",
                            value: "{form().item}",
                            onchange: move |evt: FormEvent| form.with_mut(|f| f.item = evt.value()),
                            for kind in ItemKind::ALL {
                                option { value: "{kind.code()}", selected: form().item == kind.code(), "{kind.label()}" }
                            }
                        }
                    }
                    label { class: "{theme::LABEL}", "Tier"
                        select {
                            class: "{theme::INPUT}",
                            value: "{form().tier}",
                            onchange: move |evt: FormEvent| form.with_mut(|f| f.tier = evt.value()),
                            for tier in TIER_CHOICES {
                                option { value: "{tier}", selected: form().tier == tier.to_string(), "T{tier}" }
                            }
                        }
                    }
                    label { class: "{theme::LABEL}", "Enchantment"
                        select {
                            class: "{theme::INPUT}",
                            value: "{form().enchantment}",
                            onchange: move |evt: FormEvent| form.with_mut(|f| f.enchantment = evt.value()),
                            for level in ENCHANTMENT_CHOICES {
                                option { value: "{level}", selected: form().enchantment == level.to_string(), ".{level}" }
                            }
                        }
                    }
                    label { class: "{theme::LABEL} checkbox",
                        input {
                            r#type: "checkbox",
                            checked: form().with_focus,
                            onchange: move |evt: FormEvent| form.with_mut(|f| f.with_focus = evt.checked()),
                        }
                        "With focus"
                    }
                }
                div { class: "form-actions",
                    button { class: "{theme::BTN_PRIMARY}", r#type: "submit", disabled: loading, "Calculate" }
                    button {
                        class: "{theme::BTN_SECONDARY}",
                        r#type: "button",
                        disabled: loading,
                        onclick: on_refresh,
                        "Refresh prices"
                    }
                    if loading {
                        span { class: "muted", "Loading prices…" }
                    } else if from_cache {
                        span { class: "muted", "Using cached prices" }
                    }
                }
            }

            if let Some(message) = last_error {
                div { class: "error-card", "Failed to load prices: {message}" }
            }
            if let Some(message) = quote_error {
                div { class: "error-card", "Cannot price this recipe: {message}" }
            }

            if let Some(tiles) = tiles {
                div { class: "metric-grid",
                    for tile in tiles {
                        KpiCard {
                            title: tile.title,
                            value: tile.value,
                            caption: tile.caption,
                            delta: tile.delta,
                        }
                    }
                }
            }
            if let Some(breakdown) = breakdown {
                p { class: "muted breakdown", "{breakdown}" }
            }

            PriceTable { rows, on_edit }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricTile {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub delta: Option<f64>,
}

/// The four headline tiles: both ingredients, then buy- and sell-order
/// product prices with the profit they yield.
pub fn metric_tiles(quote: &RefiningQuote, with_focus: bool) -> Vec<MetricTile> {
    let focus_suffix = if with_focus { " (with focus)" } else { "" };
    vec![
        MetricTile {
            title: quote.raw.item_id.clone(),
            value: silver(quote.raw.buy_price_max as f64),
            caption: quote.raw.city.clone(),
            delta: None,
        },
        MetricTile {
            title: quote.crafted.item_id.clone(),
            value: silver(quote.crafted.buy_price_max as f64),
            caption: quote.crafted.city.clone(),
            delta: None,
        },
        MetricTile {
            title: format!("Buy order price{focus_suffix}"),
            value: silver(quote.buy_order.buy_price_max as f64),
            caption: quote.buy_order.city.clone(),
            delta: Some(quote.estimate.buy_order(with_focus)),
        },
        MetricTile {
            title: format!("Sell order price{focus_suffix}"),
            value: silver(quote.sell_order.sell_price_min as f64),
            caption: quote.sell_order.city.clone(),
            delta: Some(quote.estimate.sell_order(with_focus)),
        },
    ]
}
