use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::format::signed_silver;

/// One metric tile: a headline price, where it was found and, for product
/// tiles, the profit it yields.
#[component]
pub fn KpiCard(title: String, value: String, caption: String, delta: Option<f64>) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} metric-tile",
            h3 { class: "metric-title", "{title}" }
            p { class: "metric-value", "{value}" }
            if let Some(delta) = delta {
                p {
                    class: "{theme::delta_class(delta)}",
                    "{signed_silver(delta)}"
                }
            }
            p { class: "metric-caption", "{caption}" }
        }
    }
}
