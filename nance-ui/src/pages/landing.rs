//! Landing Page
//!
//! Marketing page: hero, feature highlights and a call to action.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="space-y-16">
            <Hero />
            <Features />
            <CallToAction />
        </div>
    }
}

/// Hero section
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="text-center py-16">
            <h1 class="text-5xl font-bold mb-6">
                "Governance, " <span class="text-primary-400">"automated"</span>
            </h1>
            <p class="text-xl text-gray-400 max-w-2xl mx-auto mb-8">
                "Nance runs your DAO's proposal lifecycle on a fixed cadence: \
                 drafts in Discord, votes on Snapshot, execution on schedule."
            </p>
            <div class="flex items-center justify-center space-x-4">
                <A
                    href="/spaces"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Browse spaces"
                </A>
                <a
                    href="https://docs.nance.app"
                    target="_blank"
                    class="px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Read the docs"
                </a>
            </div>
        </section>
    }
}

/// Feature highlights
#[component]
fn Features() -> impl IntoView {
    let features = [
        (
            "🗓️",
            "Fixed cycles",
            "Proposals move through 14-day governance cycles, every cycle, without a coordinator.",
        ),
        (
            "💬",
            "Discord native",
            "Drafts, temperature checks and reminders happen where your community already is.",
        ),
        (
            "🗳️",
            "Snapshot votes",
            "Queued proposals go to your Snapshot space automatically when the cycle flips.",
        ),
    ];

    view! {
        <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
            {features
                .into_iter()
                .map(|(icon, title, text)| view! {
                    <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                        <span class="text-3xl">{icon}</span>
                        <h3 class="text-lg font-semibold mt-4 mb-2">{title}</h3>
                        <p class="text-sm text-gray-400">{text}</p>
                    </div>
                })
                .collect_view()}
        </section>
    }
}

/// Bottom call to action
#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="text-center bg-gray-800 rounded-xl py-12 px-6">
            <h2 class="text-2xl font-bold mb-3">"Ready to put your governance on rails?"</h2>
            <p class="text-gray-400 mb-6">
                "Connect your wallet and reach out; setup takes one cycle."
            </p>
            <A
                href="/settings"
                class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                       font-medium transition-colors"
            >
                "Get in touch"
            </A>
        </section>
    }
}
