use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info, warn};

use crate::{
    domain::{AppState, CalculatorInput, PersistedState, RefiningRecipe},
    infra::{albion::AlbionClient, cache::CacheStatus},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::CalculatorPage,
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Shell { CalculatorPage {} }
        Toast {}
    }
}

pub fn persist_user_input(input: &CalculatorInput) {
    let snapshot = PersistedState {
        input: input.clone(),
    };
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!("failed to persist calculator input: {err}");
    }
}

/// Fetches prices for `input`'s recipe and stores them in `state` together
/// with `input`. The quote itself is derived from state on render. On failure
/// the previously committed input and rows stay in place.
pub async fn fetch_prices(
    client: AlbionClient,
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    input: CalculatorInput,
) {
    let recipe = RefiningRecipe::for_item(input.item, input.tier, input.enchantment);
    let identifiers = recipe.identifiers();
    info!(items = %identifiers.join(","), "calculating refining profit");

    match client.get_prices(&identifiers).await {
        Ok(payload) => {
            let from_cache = payload.status == CacheStatus::Cached;
            let rows = payload.data.len();
            state.with_mut(|st| {
                st.load_prices(input, payload.data, payload.fetched_at, from_cache);
                st.loading = false;
            });

            if rows == 0 {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "The price API returned no rows for this recipe.",
                );
            } else if from_cache {
                push_toast(toasts, ToastKind::Info, "Prices served from this session's cache.");
            }

            if let Some(Err(err)) = state.with(|st| st.quote()) {
                warn!("cannot price recipe: {err}");
                push_toast(toasts, ToastKind::Error, format!("Cannot price recipe: {err}"));
            }
        }
        Err(err) => {
            error!("price request failed: {err}");
            state.with_mut(|st| {
                st.loading = false;
                st.last_error = Some(err.to_string());
            });
            push_toast(toasts, ToastKind::Error, format!("Failed to load prices: {err}"));
        }
    }
}
