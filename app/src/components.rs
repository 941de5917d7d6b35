use leptos::{ev, prelude::*};

use crate::catalog::{Icon, NavigationEntry};
use crate::icons::Glyph;
use crate::{links, site};

/// Column count follows the viewport only, never the number of cards.
pub const GRID_CLASS: &str =
    "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto";

#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0" aria-hidden="true">
            <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-purple-500/20 rounded-full blur-3xl animate-pulse"></div>
            <div class="absolute top-3/4 right-1/4 w-96 h-96 bg-blue-500/20 rounded-full blur-3xl animate-pulse [animation-delay:1s]"></div>
            <div class="absolute bottom-1/4 left-1/3 w-80 h-80 bg-pink-500/20 rounded-full blur-3xl animate-pulse [animation-delay:2s]"></div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="text-center mb-16">
            <div class="inline-flex items-center justify-center w-20 h-20 bg-white/10 backdrop-blur-md rounded-full border border-white/20 mb-6">
                <Glyph icon=Icon::Heart class="w-8 h-8 text-pink-400" />
            </div>
            <h1 class="text-4xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-white via-blue-200 to-purple-200 bg-clip-text text-transparent">
                {site::TITLE}
            </h1>
            <p class="text-xl text-gray-300 max-w-2xl mx-auto">{site::TAGLINE}</p>
        </header>
    }
}

#[component]
pub fn CardGrid(entries: &'static [NavigationEntry]) -> impl IntoView {
    view! {
        <div class=GRID_CLASS>
            {entries
                .iter()
                .enumerate()
                .map(|(position, entry)| view! { <Card entry=entry position=position /> })
                .collect_view()}
        </div>
    }
}

/// One clickable card. Click, Enter and Space all go through [`links::Activation`].
#[component]
pub fn Card(entry: &'static NavigationEntry, position: usize) -> impl IntoView {
    let tint = format!(
        "absolute inset-0 bg-gradient-to-r {} {} opacity-0 group-hover:opacity-10 group-focus:opacity-10 rounded-2xl transition-opacity duration-300",
        entry.accent.start, entry.accent.end,
    );
    let badge = format!(
        "inline-flex items-center justify-center w-12 h-12 bg-gradient-to-r {} {} rounded-lg mb-4 group-hover:scale-110 group-focus:scale-110 transition-transform duration-300",
        entry.accent.start, entry.accent.end,
    );
    let activation = links::Activation::new(entry);
    let on_click = activation.clone();

    view! {
        <div
            class="nav-card group relative cursor-pointer rounded-2xl focus:outline-none"
            role="link"
            tabindex="0"
            aria-label=entry.title
            data-position=position.to_string()
            on:click=move |_| on_click.click()
            on:keydown=move |event: ev::KeyboardEvent| {
                if activation.key(&event.key()) {
                    event.prevent_default();
                }
            }
        >
            <div class="relative p-6 bg-white/10 backdrop-blur-md rounded-2xl border border-white/20 hover:border-white/40 group-focus:border-white/40 transition-all duration-300 hover:scale-105 group-focus:scale-105 hover:shadow-2xl hover:shadow-purple-500/25">
                <div class=tint></div>
                <div class="relative z-10">
                    <div class=badge>
                        <Glyph icon=entry.icon class="w-6 h-6 text-white" />
                    </div>
                    <h3 class="text-xl font-semibold text-white mb-2 group-hover:text-blue-200 transition-colors duration-300">
                        {entry.title}
                    </h3>
                    <p class="text-gray-400 text-sm mb-4 group-hover:text-gray-300 transition-colors duration-300">
                        {entry.description}
                    </p>
                    <div class="flex items-center text-gray-500 group-hover:text-blue-400 transition-colors duration-300">
                        <Glyph icon=Icon::ExternalLink class="w-4 h-4 mr-1" />
                        <span class="text-sm">"Open link"</span>
                    </div>
                </div>
                <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-transparent via-white/5 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center mt-16">
            <div class="inline-flex items-center justify-center px-6 py-3 bg-white/10 backdrop-blur-md rounded-full border border-white/20">
                <span class="text-gray-300 text-sm">
                    "Made with "
                    <Glyph icon=Icon::Heart class="w-4 h-4 text-pink-400 inline mx-1" />
                    " by " {site::OWNER}
                </span>
            </div>
        </footer>
    }
}
