use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::CATALOG;
use crate::components::{Backdrop, CardGrid, Footer, Hero};

/// The navigation page: every entry of [`CATALOG`] as a card, in order.
#[component]
pub fn Index() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 relative overflow-hidden">
            <Backdrop />
            <main class="relative z-10 container mx-auto px-4 py-12">
                <Hero />
                <CardGrid entries=CATALOG.entries() />
                <Footer />
            </main>
        </div>
    }
}

/// Route view for `/`: no page title of its own, the document title is the
/// site title.
#[component]
pub fn Page() -> impl IntoView {
    view! {
        <Title text="" />
        <Index />
    }
}
