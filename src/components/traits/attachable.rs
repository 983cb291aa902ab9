use crate::components::handle::ComponentHandle;

/// This trait must be implemented by objects that need access to the
/// on-screen control(s) they end up wired to, so they can inspect or adjust
/// them later on (enable or disable them, change their label, read their
/// state).
///
/// The wiring layer calls [`add_component`] once the control exists and
/// before the control can first fire. Calling it again adds one more
/// association; earlier ones stay in place. What the object does with the
/// handle is entirely its own business.
///
/// [`add_component`]: Attachable::add_component
pub trait Attachable {
    /// Gives this object a handle to an associated control.
    fn add_component(&mut self, component: ComponentHandle);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Keeps only the most recently attached control.
    #[derive(Default)]
    struct FocusTracker {
        current: Option<ComponentHandle>,
    }

    impl Attachable for FocusTracker {
        fn add_component(&mut self, component: ComponentHandle) {
            self.current = Some(component);
        }
    }

    /// Records every control it is given, in order.
    #[derive(Default)]
    struct Roster {
        all: Vec<ComponentHandle>,
    }

    impl Attachable for Roster {
        fn add_component(&mut self, component: ComponentHandle) {
            self.all.push(component);
        }
    }

    /// Enables each control as soon as it arrives.
    struct Enabler;

    impl Attachable for Enabler {
        fn add_component(&mut self, component: ComponentHandle) {
            component.set_enabled(true);
        }
    }

    #[test]
    fn test_latest_attachment_replaces_earlier_one() {
        let w1 = ComponentHandle::new("w1");
        let w2 = ComponentHandle::new("w2");
        let mut tracker = FocusTracker::default();
        tracker.add_component(w1);
        tracker.add_component(w2.clone());
        assert_eq!(tracker.current, Some(w2));
    }

    #[test]
    fn test_attachments_accumulate() {
        let w1 = ComponentHandle::new("w1");
        let w2 = ComponentHandle::new("w2");
        let mut roster = Roster::default();
        roster.add_component(w1.clone());
        roster.add_component(w2.clone());
        roster.add_component(w1.clone());
        let ids: Vec<usize> = roster.all.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![w1.id(), w2.id(), w1.id()]);
    }

    #[test]
    fn test_attachment_may_touch_the_control_immediately() {
        let w = ComponentHandle::new("w");
        assert!(!w.is_enabled());
        Enabler.add_component(w.clone());
        assert!(w.is_enabled());
    }
}
