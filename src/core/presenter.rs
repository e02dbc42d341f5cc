use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::model::DemoId;

/// A resolved demo implementation, ready to be mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoWidget {
    pub id: DemoId,
    pub title: &'static str,
}

impl DemoWidget {
    pub fn new(id: DemoId) -> Self {
        Self {
            id,
            title: id.title(),
        }
    }
}

/// Zero-argument close callback handed to a mounted widget.
#[derive(Clone)]
pub struct CloseHandle(Arc<dyn Fn() + Send + Sync>);

impl CloseHandle {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn close(&self) {
        (self.0)();
    }
}

impl fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseHandle")
    }
}

/// The widget currently occupying the presenter slot, configured as an open,
/// dismissible overlay.
#[derive(Debug, Clone)]
pub struct ActiveDemo {
    pub widget: DemoWidget,
    pub open: bool,
    /// Monotonic per presenter; lets a sink tell two shows of the same demo apart.
    pub serial: u64,
    on_close: CloseHandle,
}

impl ActiveDemo {
    pub fn close(&self) {
        self.on_close.close();
    }

    pub fn on_close(&self) -> CloseHandle {
        self.on_close.clone()
    }
}

impl PartialEq for ActiveDemo {
    fn eq(&self, other: &Self) -> bool {
        self.widget == other.widget && self.open == other.open && self.serial == other.serial
    }
}

pub type ShowFn = Arc<dyn Fn(Option<ActiveDemo>) + Send + Sync>;

#[derive(Default)]
struct Slot {
    sink: Option<ShowFn>,
    active: Option<ActiveDemo>,
    serial: u64,
    /// Notifications not yet handed to the sink, in the order the slot changed.
    pending: VecDeque<Option<ActiveDemo>>,
    /// Set while some caller is draining `pending`.
    delivering: bool,
}

impl Slot {
    /// Queue a notification; returns true if the caller must drain the queue.
    fn enqueue(&mut self, note: Option<ActiveDemo>) -> bool {
        self.pending.push_back(note);
        !std::mem::replace(&mut self.delivering, true)
    }
}

/// Single-slot broker between demo actions and whatever renders the overlay.
///
/// Design intent:
/// - One presenter per app, created by the top-level view and cloned into every
///   demo action. Clones share the slot.
/// - At most one demo is active. `show` replaces the current one without
///   closing it first. The sink receives notifications in the same order the
///   slot changed, so the last notification it sees always matches `active()`.
/// - The sink runs without the slot lock held and may call back into the
///   presenter. Changes made while a notification is being delivered, from a
///   sink or from another thread, are queued and delivered by the caller that
///   is already delivering, after the current sink call returns.
#[derive(Clone, Default)]
pub struct Presenter {
    slot: Arc<Mutex<Slot>>,
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.lock();
        f.debug_struct("Presenter")
            .field("active", &slot.active.as_ref().map(|a| a.widget.id))
            .field("has_sink", &slot.sink.is_some())
            .finish()
    }
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        lock_slot(&self.slot)
    }

    /// Install the receiver of show/hide notifications, replacing any previous one.
    pub fn register_sink(&self, sink: impl Fn(Option<ActiveDemo>) + Send + Sync + 'static) {
        self.lock().sink = Some(Arc::new(sink));
    }

    pub fn show(&self, widget: DemoWidget) -> ActiveDemo {
        let weak = Arc::downgrade(&self.slot);
        let (demo, replaced, drain) = {
            let mut slot = self.lock();
            slot.serial += 1;
            let demo = ActiveDemo {
                widget,
                open: true,
                serial: slot.serial,
                on_close: CloseHandle::new(move || clear_weak(&weak)),
            };
            let replaced = slot.active.replace(demo.clone()).map(|d| d.widget.id);
            let drain = slot.enqueue(Some(demo.clone()));
            (demo, replaced, drain)
        };

        tracing::debug!(demo = widget.id.key(), ?replaced, "presenter show");
        if drain {
            deliver(&self.slot);
        }
        demo
    }

    pub fn clear(&self) {
        clear_slot(&self.slot);
    }

    pub fn active(&self) -> Option<ActiveDemo> {
        self.lock().active.clone()
    }

    pub fn is_showing(&self) -> bool {
        self.lock().active.is_some()
    }
}

fn lock_slot(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    // Sinks never run under the lock, so a poisoned slot is still consistent.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn clear_weak(slot: &Weak<Mutex<Slot>>) {
    // Widgets can outlive the app during teardown; closing then is a no-op.
    if let Some(slot) = slot.upgrade() {
        clear_slot(&slot);
    }
}

fn clear_slot(slot: &Mutex<Slot>) {
    let (previous, drain) = {
        let mut slot = lock_slot(slot);
        let previous = slot.active.take();
        (previous, slot.enqueue(None))
    };
    tracing::debug!(previous = ?previous.as_ref().map(|d| d.widget.id), "presenter clear");
    if drain {
        deliver(slot);
    }
}

/// Hands queued notifications to the current sink one at a time until the
/// queue is empty. Only one caller drains at a time.
fn deliver(slot: &Mutex<Slot>) {
    let _reset = DeliveryReset(slot);
    loop {
        let (sink, note) = {
            let mut slot = lock_slot(slot);
            match slot.pending.pop_front() {
                Some(note) => (slot.sink.clone(), note),
                None => {
                    slot.delivering = false;
                    return;
                }
            }
        };
        if let Some(sink) = sink {
            sink(note);
        }
    }
}

/// Releases the delivery flag if a sink panics mid-drain, so later changes
/// are still delivered.
struct DeliveryReset<'a>(&'a Mutex<Slot>);

impl Drop for DeliveryReset<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            lock_slot(self.0).delivering = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    fn recording_sink(p: &Presenter) -> Arc<Mutex<Vec<Option<DemoId>>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink_log = Arc::clone(&log);
        p.register_sink(move |d| {
            sink_log.lock().unwrap().push(d.map(|d| d.widget.id));
        });
        log
    }

    #[test]
    fn starts_empty() {
        let p = Presenter::new();
        assert!(p.active().is_none());
        assert!(!p.is_showing());
    }

    #[test]
    fn last_show_wins() {
        let p = Presenter::new();
        let log = recording_sink(&p);

        p.show(DemoWidget::new(DemoId::Canvas));
        p.show(DemoWidget::new(DemoId::WebAudio));

        let active = p.active().unwrap();
        assert_eq!(active.widget.id, DemoId::WebAudio);
        assert!(active.open);
        assert_eq!(
            *log.lock().unwrap(),
            vec![Some(DemoId::Canvas), Some(DemoId::WebAudio)]
        );
    }

    #[test]
    fn show_then_clear_leaves_nothing() {
        let p = Presenter::new();
        let log = recording_sink(&p);

        p.show(DemoWidget::new(DemoId::Vibration));
        p.clear();

        assert!(p.active().is_none());
        assert_eq!(log.lock().unwrap().last(), Some(&None));
    }

    #[test]
    fn widget_close_callback_clears_the_slot() {
        let p = Presenter::new();
        let shown = p.show(DemoWidget::new(DemoId::Canvas));
        assert!(p.is_showing());

        shown.close();
        assert!(p.active().is_none());
    }

    #[test]
    fn show_without_sink_still_records_state() {
        let p = Presenter::new();
        p.show(DemoWidget::new(DemoId::LocalStorage));
        assert_eq!(p.active().map(|d| d.widget.id), Some(DemoId::LocalStorage));
    }

    #[test]
    fn registering_a_new_sink_replaces_the_old_one() {
        let p = Presenter::new();
        let first = recording_sink(&p);
        let second = recording_sink(&p);

        p.show(DemoWidget::new(DemoId::Canvas));

        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[test]
    fn clones_share_one_slot() {
        let p = Presenter::new();
        let q = p.clone();
        q.show(DemoWidget::new(DemoId::OnlineStatus));
        assert_eq!(p.active().map(|d| d.widget.id), Some(DemoId::OnlineStatus));
        p.clear();
        assert!(!q.is_showing());
    }

    #[test]
    fn sink_may_reenter_the_presenter() {
        let p = Presenter::new();
        let inner = p.clone();
        // Auto-dismiss: the sink closes every demo it is shown.
        p.register_sink(move |d| {
            if d.is_some() {
                inner.clear();
            }
        });

        p.show(DemoWidget::new(DemoId::Canvas));
        assert!(p.active().is_none());
    }

    /// A sink that parks on its first `Canvas` notification until released,
    /// recording everything it sees after that.
    fn parking_sink(
        p: &Presenter,
    ) -> (
        Arc<Mutex<Vec<Option<DemoId>>>>,
        mpsc::Receiver<()>,
        mpsc::Sender<()>,
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let entered_tx = Mutex::new(entered_tx);
        let release_rx = Mutex::new(release_rx);
        let sink_log = Arc::clone(&log);
        p.register_sink(move |d| {
            let id = d.map(|d| d.widget.id);
            if id == Some(DemoId::Canvas) {
                entered_tx.lock().unwrap().send(()).unwrap();
                release_rx.lock().unwrap().recv().unwrap();
            }
            sink_log.lock().unwrap().push(id);
        });
        (log, entered_rx, release_tx)
    }

    #[test]
    fn racing_shows_reach_the_sink_in_slot_order() {
        let p = Presenter::new();
        let (log, entered, release) = parking_sink(&p);

        let first = {
            let p = p.clone();
            thread::spawn(move || {
                p.show(DemoWidget::new(DemoId::Canvas));
            })
        };
        entered.recv().unwrap();

        // Lands on the slot while the sink is still busy with Canvas.
        p.show(DemoWidget::new(DemoId::WebAudio));
        assert_eq!(p.active().map(|d| d.widget.id), Some(DemoId::WebAudio));

        release.send(()).unwrap();
        first.join().unwrap();

        let seen = log.lock().unwrap().clone();
        assert_eq!(seen, vec![Some(DemoId::Canvas), Some(DemoId::WebAudio)]);
        assert_eq!(seen.last().copied().flatten(), p.active().map(|d| d.widget.id));
    }

    #[test]
    fn clear_racing_a_show_leaves_the_sink_empty() {
        let p = Presenter::new();
        let (log, entered, release) = parking_sink(&p);

        let first = {
            let p = p.clone();
            thread::spawn(move || {
                p.show(DemoWidget::new(DemoId::Canvas));
            })
        };
        entered.recv().unwrap();

        p.clear();
        assert!(p.active().is_none());

        release.send(()).unwrap();
        first.join().unwrap();

        assert_eq!(*log.lock().unwrap(), vec![Some(DemoId::Canvas), None]);
    }

    #[test]
    fn panicking_sink_does_not_stall_later_notifications() {
        let p = Presenter::new();
        p.register_sink(|_| panic!("sink failure"));
        let q = p.clone();
        assert!(thread::spawn(move || {
            q.show(DemoWidget::new(DemoId::Canvas));
        })
        .join()
        .is_err());

        let log = recording_sink(&p);
        p.show(DemoWidget::new(DemoId::WebAudio));
        assert_eq!(log.lock().unwrap().last(), Some(&Some(DemoId::WebAudio)));
    }

    #[test]
    fn serial_distinguishes_repeated_shows() {
        let p = Presenter::new();
        let a = p.show(DemoWidget::new(DemoId::Canvas));
        let b = p.show(DemoWidget::new(DemoId::Canvas));
        assert_ne!(a, b);
        assert!(b.serial > a.serial);
    }

    #[test]
    fn close_after_presenter_dropped_is_a_no_op() {
        let p = Presenter::new();
        let shown = p.show(DemoWidget::new(DemoId::Canvas));
        drop(p);
        shown.close();
    }
}
