//! Per-entry demo actions: resolve a widget asynchronously, then hand it to the
//! presenter.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::model::{ApiEntry, DemoId};
use crate::presenter::{ActiveDemo, DemoWidget, Presenter};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DemoLoadError {
    #[error("no demo widget is registered for '{}'", .0.key())]
    Unknown(DemoId),

    #[error("this browser does not provide {api}")]
    Unsupported { demo: DemoId, api: &'static str },

    #[error("loading demo '{}' failed: {reason}", .demo.key())]
    Failed { demo: DemoId, reason: String },
}

impl DemoLoadError {
    pub fn demo(&self) -> DemoId {
        match self {
            DemoLoadError::Unknown(demo)
            | DemoLoadError::Unsupported { demo, .. }
            | DemoLoadError::Failed { demo, .. } => *demo,
        }
    }
}

/// Not `Send`: browser resolvers await JS promises.
pub type ResolveFuture = Pin<Box<dyn Future<Output = Result<DemoWidget, DemoLoadError>>>>;

/// Turns a demo id into a mountable widget. Resolution is the only suspension
/// point in the demo flow.
pub trait DemoResolver: Send + Sync {
    fn resolve(&self, demo: DemoId) -> ResolveFuture;
}

/// Resolves immediately from a fixed set of demos.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    available: Vec<DemoId>,
}

impl StaticResolver {
    pub fn all() -> Self {
        Self {
            available: DemoId::all().to_vec(),
        }
    }

    pub fn only(demos: &[DemoId]) -> Self {
        Self {
            available: demos.to_vec(),
        }
    }
}

impl DemoResolver for StaticResolver {
    fn resolve(&self, demo: DemoId) -> ResolveFuture {
        let result = if self.available.contains(&demo) {
            Ok(DemoWidget::new(demo))
        } else {
            Err(DemoLoadError::Unknown(demo))
        };
        Box::pin(std::future::ready(result))
    }
}

/// Binds demo actions to one presenter.
///
/// `open` is fire-and-forget from the UI's point of view: the returned future
/// can be spawned and dropped, or awaited to observe the outcome. There is no
/// cancellation; two opens in flight both resolve and the later `show` wins.
///
/// On failure the presenter slot is left as it was and the error is logged and
/// returned, so the caller can surface it.
#[derive(Clone)]
pub struct DemoLauncher {
    presenter: Presenter,
    resolver: Arc<dyn DemoResolver>,
}

impl std::fmt::Debug for DemoLauncher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoLauncher")
            .field("presenter", &self.presenter)
            .finish_non_exhaustive()
    }
}

impl DemoLauncher {
    pub fn new(presenter: Presenter, resolver: impl DemoResolver + 'static) -> Self {
        Self {
            presenter,
            resolver: Arc::new(resolver),
        }
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn open(
        &self,
        demo: DemoId,
    ) -> impl Future<Output = Result<ActiveDemo, DemoLoadError>> + 'static {
        let presenter = self.presenter.clone();
        let pending = self.resolver.resolve(demo);
        async move {
            match pending.await {
                Ok(widget) => {
                    let shown = presenter.show(widget);
                    tracing::info!(demo = demo.key(), "demo opened");
                    Ok(shown)
                }
                Err(e) => {
                    tracing::warn!(demo = demo.key(), error = %e, "demo failed to load");
                    Err(e)
                }
            }
        }
    }

    /// The entry's demo action, or `None` when the entry has no demo.
    pub fn open_entry(
        &self,
        entry: &ApiEntry,
    ) -> Option<impl Future<Output = Result<ActiveDemo, DemoLoadError>> + 'static> {
        entry.demo.id().map(|demo| self.open(demo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    struct Refusing;

    impl DemoResolver for Refusing {
        fn resolve(&self, demo: DemoId) -> ResolveFuture {
            Box::pin(async move {
                Err(DemoLoadError::Unsupported {
                    demo,
                    api: "navigator.vibrate",
                })
            })
        }
    }

    #[test]
    fn open_shows_an_open_widget() {
        let launcher = DemoLauncher::new(Presenter::new(), StaticResolver::all());
        let shown = pollster::block_on(launcher.open(DemoId::WebAudio)).unwrap();

        assert!(shown.open);
        assert_eq!(shown.widget.id, DemoId::WebAudio);
        assert_eq!(launcher.presenter().active(), Some(shown));
    }

    #[test]
    fn nothing_happens_until_the_action_is_driven() {
        let launcher = DemoLauncher::new(Presenter::new(), StaticResolver::all());
        let pending = launcher.open(DemoId::Canvas);
        assert!(!launcher.presenter().is_showing());
        pollster::block_on(pending).unwrap();
        assert!(launcher.presenter().is_showing());
    }

    #[test]
    fn later_resolution_wins_the_slot() {
        let launcher = DemoLauncher::new(Presenter::new(), StaticResolver::all());
        let first = launcher.open(DemoId::Canvas);
        let second = launcher.open(DemoId::WebAudio);

        // The second action resolves before the first one does.
        pollster::block_on(second).unwrap();
        pollster::block_on(first).unwrap();

        assert_eq!(
            launcher.presenter().active().map(|d| d.widget.id),
            Some(DemoId::Canvas)
        );
    }

    #[test]
    fn failure_leaves_the_slot_untouched() {
        let presenter = Presenter::new();
        presenter.show(DemoWidget::new(DemoId::Canvas));

        let launcher = DemoLauncher::new(presenter.clone(), Refusing);
        let err = pollster::block_on(launcher.open(DemoId::Vibration)).unwrap_err();

        assert_eq!(err.demo(), DemoId::Vibration);
        assert!(err.to_string().contains("navigator.vibrate"));
        assert_eq!(presenter.active().map(|d| d.widget.id), Some(DemoId::Canvas));
    }

    #[test]
    fn static_resolver_rejects_unlisted_demos() {
        let launcher = DemoLauncher::new(Presenter::new(), StaticResolver::only(&[DemoId::Canvas]));
        let err = pollster::block_on(launcher.open(DemoId::WebAudio)).unwrap_err();
        assert_eq!(err, DemoLoadError::Unknown(DemoId::WebAudio));
        assert!(!launcher.presenter().is_showing());
    }

    #[test]
    fn entries_without_demo_have_no_action() {
        let reg = Registry::builtin();
        let launcher = DemoLauncher::new(Presenter::new(), StaticResolver::all());

        let (_, fetch) = reg.find_entry("fetch").unwrap();
        assert!(launcher.open_entry(fetch).is_none());

        let (_, audio) = reg.find_entry("webAudio").unwrap();
        let action = launcher.open_entry(audio).unwrap();
        let shown = pollster::block_on(action).unwrap();
        shown.close();
        assert!(launcher.presenter().active().is_none());
    }
}
