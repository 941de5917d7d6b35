pub mod catalog;
pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod icons;
pub mod links;
pub mod pages;
pub mod site;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=site::LANGUAGE>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/linkhub.css"/>
        <Title formatter=site::document_title/>
        <Meta name="description" content=site::DESCRIPTION/>

        <Router>
            <Routes fallback=pages::not_found::Index>
                <Route path=StaticSegment("") view=pages::home::Page/>
            </Routes>
        </Router>
    }
}
