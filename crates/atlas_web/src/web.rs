use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use webapi_atlas::views::Route;
use webapi_atlas::{ActiveDemo, DemoId, DemoLauncher, Presenter, Registry};

use crate::ui_model::PersistedSettings;

mod demos;
mod overlay;
mod pages;
mod resolver;
mod shell;
mod storage;

use overlay::DemoOverlay;
use pages::{CategoryView, LandingView};
use resolver::WebDemoResolver;
use shell::{ErrorBanner, Topbar};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Mirror a message to the browser console; `tracing` has no subscriber here.
pub(crate) fn console_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn set_hash(hash: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.location().set_hash(hash);
    }
}

#[component]
fn App() -> impl IntoView {
    let registry = StoredValue::new(Registry::builtin());

    let settings = storage::load_settings();
    let (theme, set_theme) = signal(settings.theme);

    // Restore the last page only when the URL does not already name one.
    let initial_hash = current_hash();
    if initial_hash.is_empty() && !settings.last_route.is_empty() {
        set_hash(&settings.last_route);
    }
    let route = RwSignal::new(Route::parse_or_landing(&current_hash()));

    let on_hash_change = Closure::wrap(Box::new(move || {
        route.set(Route::parse_or_landing(&current_hash()));
    }) as Box<dyn FnMut()>);
    if let Some(w) = web_sys::window() {
        if w
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
            .is_err()
        {
            console_warn("hashchange listener could not be installed");
        }
    }
    on_hash_change.forget();

    Effect::new(move |_| {
        let t = theme.get();
        storage::apply_theme_to_document(t);
        storage::save_settings(&PersistedSettings {
            theme: t,
            last_route: route.get().href(),
        });
    });

    // The single demo slot. The presenter is the only writer of `active`.
    let active = RwSignal::new(None::<ActiveDemo>);
    let presenter = Presenter::new();
    presenter.register_sink(move |demo| active.set(demo));
    let launcher = StoredValue::new(DemoLauncher::new(presenter, WebDemoResolver));

    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let open_demo = Callback::new(move |demo: DemoId| {
        set_load_error.set(None);
        let pending = launcher.with_value(|l| l.open(demo));
        spawn_local(async move {
            if let Err(e) = pending.await {
                let msg = format!("{}：{e}", demo.title());
                console_warn(&msg);
                set_load_error.set(Some(msg));
            }
        });
    });

    let _esc = window_event_listener(leptos::ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            if let Some(demo) = active.get_untracked() {
                demo.close();
            }
        }
    });

    view! {
        <div class="app">
            <Topbar
                registry=registry
                route=route
                theme=theme
                set_theme=set_theme
            />
            <main class="content">
                <ErrorBanner error=load_error set_error=set_load_error />
                {move || match route.get() {
                    Route::Landing => {
                        view! { <LandingView registry=registry open_demo=open_demo /> }.into_any()
                    }
                    Route::Category(id) => {
                        view! { <CategoryView registry=registry category_id=id open_demo=open_demo /> }
                            .into_any()
                    }
                }}
            </main>
            <DemoOverlay active=active />
        </div>
    }
}
