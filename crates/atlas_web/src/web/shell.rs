use leptos::prelude::*;

use webapi_atlas::views::{Route, SITE_TITLE};
use webapi_atlas::Registry;

use crate::ui_model::Theme;

#[component]
pub(super) fn Topbar(
    registry: StoredValue<Registry>,
    route: RwSignal<Route>,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let nav: Vec<(&'static str, &'static str)> =
        registry.with_value(|r| r.all().iter().map(|c| (c.id, c.name)).collect());

    view! {
        <header class="app-header">
            <div class="app-header-left">
                <h1 class="brand">
                    <a href=Route::Landing.href()>{SITE_TITLE}</a>
                </h1>
            </div>
            <nav class="category-nav">
                {nav
                    .into_iter()
                    .map(|(id, name)| {
                        let target = Route::Category(id.to_string());
                        let href = target.href();
                        view! {
                            <a
                                href=href
                                class=move || {
                                    if route.get() == target { "nav-item active" } else { "nav-item" }
                                }
                            >
                                {name}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="app-header-right">
                <button
                    class="btn sm ghost"
                    title=move || format!("主題：{}", theme.get().label())
                    on:click=move |_| set_theme.set(theme.get().toggle())
                >
                    {move || theme.get().icon()}" "{move || theme.get().label()}
                </button>
            </div>
        </header>
    }
}

#[component]
pub(super) fn ErrorBanner(
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <div class="error-banner-row">
                    <div class="error-banner-title">"無法開啟示範"</div>
                    <button class="btn sm" on:click=move |_| set_error.set(None)>
                        "關閉"
                    </button>
                </div>
                <div class="error-banner-body">{move || error.get().unwrap_or_default()}</div>
            </div>
        </Show>
    }
}
