use leptos::prelude::*;

use webapi_atlas::ActiveDemo;

use super::demos;

/// Renders whatever the presenter currently holds. Closing goes back through
/// the demo's own close handle, so the presenter stays the only writer of the slot.
#[component]
pub(super) fn DemoOverlay(active: RwSignal<Option<ActiveDemo>>) -> impl IntoView {
    move || {
        active.get().map(|demo| {
            let close_backdrop = demo.on_close();
            let close_button = demo.on_close();
            let body = demos::mount(demo.widget.id, demo.open, demo.on_close());

            view! {
                <div class="overlay-backdrop" on:click=move |_| close_backdrop.close()>
                    <div
                        class="overlay"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <header class="overlay-header">
                            <h2>{demo.widget.title}</h2>
                            <button
                                class="icon-btn"
                                title="關閉"
                                on:click=move |_| close_button.close()
                            >
                                "×"
                            </button>
                        </header>
                        <div class="overlay-body">{body}</div>
                    </div>
                </div>
            }
        })
    }
}
