//! Window-level listeners the scene reacts to.

/// Event streams the app listens to while a window exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum Subscription {
    Resize,
    Pointer,
}

/// Which subscriptions are live. Events for inactive ones are dropped.
#[derive(Debug, Default)]
pub(super) struct Subscriptions {
    resize: bool,
    pointer: bool,
}

impl Subscriptions {
    pub(super) fn register_all(&mut self) {
        self.resize = true;
        self.pointer = true;
        tracing::debug!("resize and pointer subscriptions registered");
    }

    pub(super) fn unregister_all(&mut self) {
        if self.resize || self.pointer {
            tracing::debug!("resize and pointer subscriptions removed");
        }
        self.resize = false;
        self.pointer = false;
    }

    pub(super) fn is_active(&self, sub: Subscription) -> bool {
        match sub {
            Subscription::Resize => self.resize,
            Subscription::Pointer => self.pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive() {
        let subs = Subscriptions::default();
        assert!(!subs.is_active(Subscription::Resize));
        assert!(!subs.is_active(Subscription::Pointer));
    }

    #[test]
    fn register_then_unregister() {
        let mut subs = Subscriptions::default();
        subs.register_all();
        assert!(subs.is_active(Subscription::Resize));
        assert!(subs.is_active(Subscription::Pointer));
        subs.unregister_all();
        subs.unregister_all();
        assert!(!subs.is_active(Subscription::Resize));
        assert!(!subs.is_active(Subscription::Pointer));
    }
}
