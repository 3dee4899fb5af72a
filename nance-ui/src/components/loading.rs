//! Loading Component
//!
//! Skeleton states shown while data loads.

use leptos::*;

/// Skeleton loader for the space grid
#[component]
pub fn CardGridSkeleton(
    #[prop(default = 6)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-xl p-6">
                    <div class="h-5 bg-gray-700 rounded w-1/2 mb-4" />
                    <div class="h-4 bg-gray-700 rounded w-full mb-2" />
                    <div class="h-4 bg-gray-700 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
