//! Spaces Page
//!
//! Listing of all governance spaces, with a debounced search filter.

use leptos::*;

use crate::api;
use crate::components::loading::CardGridSkeleton;
use crate::components::SpaceCard;
use crate::hooks::{use_debounced, DEFAULT_DEBOUNCE_MS};
use crate::state::global::GlobalState;

/// All-spaces listing page
#[component]
pub fn Spaces() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let spaces_signal = state.spaces;
    let loading = state.loading;

    // Search box; filtering waits for the user to stop typing
    let (search, set_search) = create_signal(String::new());
    let debounced_search = use_debounced(search.into(), DEFAULT_DEBOUNCE_MS);

    // Fetch spaces on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        state.loading.set(true);
        spawn_local(async move {
            match api::fetch_spaces().await {
                Ok(spaces) => {
                    state.spaces.set(spaces);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    });

    let filtered = move || {
        let needle = debounced_search.get().to_lowercase();
        spaces_signal
            .get()
            .into_iter()
            .filter(|space| {
                needle.is_empty()
                    || space.id.to_lowercase().contains(&needle)
                    || space
                        .name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Spaces"</h1>
                    <p class="text-gray-400 mt-1">"Governance communities running on Nance"</p>
                </div>

                <input
                    type="text"
                    placeholder="Search spaces..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    class="w-64 bg-gray-800 rounded-lg px-4 py-2 border border-gray-700
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Space grid
            {move || {
                if loading.get() {
                    view! { <CardGridSkeleton /> }.into_view()
                } else {
                    let spaces = filtered();
                    if spaces.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"No spaces match."</p>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {spaces
                                    .into_iter()
                                    .map(|space| view! { <SpaceCard space=space /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}
