use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use webapi_atlas::loader::ResolveFuture;
use webapi_atlas::{DemoId, DemoLoadError, DemoResolver, DemoWidget};

use crate::ui_model::{requirement, Scope};

/// Resolves demos in the browser.
///
/// Resolution yields to the event loop first so the click handler that asked
/// for the demo returns before anything mounts, then checks that the browser
/// exposes the capability the widget drives.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct WebDemoResolver;

impl DemoResolver for WebDemoResolver {
    fn resolve(&self, demo: DemoId) -> ResolveFuture {
        Box::pin(async move {
            JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
                .await
                .map_err(|_| DemoLoadError::Failed {
                    demo,
                    reason: "microtask rejected".to_string(),
                })?;

            let req = requirement(demo);
            if !has_global(req.scope, req.property) {
                return Err(DemoLoadError::Unsupported {
                    demo,
                    api: req.display,
                });
            }
            Ok(DemoWidget::new(demo))
        })
    }
}

fn has_global(scope: Scope, property: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let target: JsValue = match scope {
        Scope::Window => window.into(),
        Scope::Navigator => window.navigator().into(),
        Scope::Document => match window.document() {
            Some(doc) => doc.into(),
            None => return false,
        },
    };
    js_sys::Reflect::has(&target, &JsValue::from_str(property)).unwrap_or(false)
}
