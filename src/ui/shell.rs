use dioxus::prelude::*;

use crate::domain::ROYAL_CITIES;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let cities = ROYAL_CITIES.join(" · ");
    let version = version_label();

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                h1 { "{APP_NAME}" }
                p { class: "muted", "Live order prices from {cities}" }
            }
            main { class: "shell-main",
                {children}
            }
            footer { class: "shell-footer muted",
                "Prices from the Albion Online Data Project · {version}"
            }
        }
    }
}
