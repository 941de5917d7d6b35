use leptos::prelude::LeptosOptions;

use crate::catalog::Catalog;

#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub catalog: &'static Catalog,
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
