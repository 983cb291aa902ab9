use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Shared handle to a single on-screen control.
///
/// The wiring layer creates one handle per control, keeps a clone for
/// rendering and hands further clones to the command wired to that control.
/// All clones see the same state, so a command flipping [`set_enabled`]
/// changes what the toolbar draws on the next frame. Handles are only ever
/// touched from the UI loop.
///
/// [`set_enabled`]: ComponentHandle::set_enabled
#[derive(Clone, Debug)]
pub struct ComponentHandle {
    id: usize,
    state: Arc<Mutex<ControlState>>,
}

#[derive(Debug)]
struct ControlState {
    label: String,
    enabled: bool,
    active: bool,
}

impl ComponentHandle {
    /// Creates the handle for a new control. Controls start disabled; the
    /// wiring layer enables them once their command has looked at the
    /// session.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: COUNTER.fetch_add(1, Ordering::Relaxed),
            state: Arc::new(Mutex::new(ControlState {
                label: label.into(),
                enabled: false,
                active: false,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap()
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> String {
        self.state().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.state().label = label.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state().enabled = enabled;
    }

    /// Whether the control should be drawn highlighted, e.g. a pressed-in
    /// play button while the trail is running.
    pub fn is_active(&self) -> bool {
        self.state().active
    }

    pub fn set_active(&self, active: bool) {
        self.state().active = active;
    }
}

/// Two handles are the same control exactly when they share an id.
impl PartialEq for ComponentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentHandle {}
