//! Space Card Component
//!
//! Card for one governance space in the listing.

use leptos::*;

use crate::api::Space;
use crate::format::network_label;

/// Card displaying a single governance space
#[component]
pub fn SpaceCard(space: Space) -> impl IntoView {
    let name = space.name.clone().unwrap_or_else(|| space.id.clone());
    let about = space.about.clone().unwrap_or_default();
    let network = network_label(space.network.as_deref());
    let followers = space.followers_count.unwrap_or(0);
    let snapshot_url = format!("https://snapshot.org/#/{}", space.id);

    view! {
        <a
            href=snapshot_url
            target="_blank"
            class="block bg-gray-800 rounded-xl p-6 hover:bg-gray-750 border border-gray-700
                   hover:border-primary-500 transition-colors"
        >
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-lg font-semibold truncate">{name}</h3>
                <span class="text-xs bg-gray-700 rounded-full px-2 py-1 text-gray-300">
                    {network}
                </span>
            </div>

            <p class="text-sm text-gray-400 line-clamp-2 mb-4">{about}</p>

            <div class="flex items-center justify-between text-sm text-gray-500">
                <span class="font-mono">{space.id.clone()}</span>
                <span>{followers} " followers"</span>
            </div>
        </a>
    }
}
