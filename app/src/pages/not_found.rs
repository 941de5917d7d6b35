use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <main class="min-h-screen flex items-center justify-center bg-slate-900 text-gray-300">
            <p>
                "Page not found. " <a class="text-blue-400 underline" href="/">"Back to the links"</a>
            </p>
        </main>
    }
}
