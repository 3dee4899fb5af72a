//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Landing, Settings, Spaces};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header with the wallet button
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/spaces" view=Spaces />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>
                    "Nance - governance, automated · cycle "
                    {crate::format::current_cycle()}
                </span>
                <a
                    href="https://snapshot.org"
                    target="_blank"
                    class="hover:text-white transition-colors"
                >
                    "Powered by Snapshot"
                </a>
            </div>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-24">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-gray-400 mb-8">"This page does not exist."</p>
            <A href="/" class="text-primary-400 hover:text-primary-300">
                "Back to the landing page"
            </A>
        </div>
    }
}
