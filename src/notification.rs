//! Listener lists fired by panels during their lifecycle
//!
//! Two flavours:
//! - [`Notification`]: fire-and-forget, used for after-show and after-close
//! - [`CancelableNotification`]: listeners may veto, used for before-close
//!
//! Veto aggregation is explicit: every listener runs, and the result is
//! [`Propagation::Veto`] if at least one of them vetoed.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::{DrawIndex, PanelId, PanelState};

/// Handle returned by `subscribe`, used to remove a listener again
///
/// Unique across all notifications, so a panel can look a listener up
/// without knowing which list it was added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

static NEXT_LISTENER: AtomicU64 = AtomicU64::new(0);

impl ListenerId {
    fn next() -> Self {
        ListenerId(NEXT_LISTENER.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a cancelable listener wants to happen next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the operation proceed
    #[default]
    Continue,
    /// Cancel the operation
    Veto,
}

impl Propagation {
    pub fn is_veto(self) -> bool {
        self == Propagation::Veto
    }

    /// Combine two results: any veto wins
    pub fn and(self, other: Propagation) -> Propagation {
        if self.is_veto() || other.is_veto() {
            Propagation::Veto
        } else {
            Propagation::Continue
        }
    }
}

impl From<bool> for Propagation {
    /// `true` means "continue", `false` means "veto"
    fn from(proceed: bool) -> Self {
        if proceed {
            Propagation::Continue
        } else {
            Propagation::Veto
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Fired before a panel is closed or hidden
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeforeClose {
    pub id: PanelId,
    /// `true` when the panel will be destroyed, `false` when only hidden
    pub destroy: bool,
}

/// Fired after a panel has been shown and the stack rearranged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterShow {
    pub id: PanelId,
    pub draw_index: DrawIndex,
    pub state: PanelState,
}

/// Fired after a close completed (including teardown by `close_all`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterClose {
    pub id: PanelId,
    pub destroyed: bool,
}

// ============================================================================
// Listener lists
// ============================================================================

type Listener<E> = Box<dyn FnMut(&E)>;
type CancelableListener<E> = Box<dyn FnMut(&E) -> Propagation>;

/// A plain listener list
pub struct Notification<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Notification<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Call every listener in subscription order
    pub fn fire(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Notification<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A listener list whose listeners can veto the pending operation
pub struct CancelableNotification<E> {
    listeners: Vec<(ListenerId, CancelableListener<E>)>,
}

impl<E> CancelableNotification<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&E) -> Propagation + 'static) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Call every listener and AND their results together
    ///
    /// All listeners run even after one has vetoed, so each sees the event.
    /// An empty list never vetoes.
    pub fn fire(&mut self, event: &E) -> Propagation {
        self.listeners
            .iter_mut()
            .fold(Propagation::Continue, |acc, (_, listener)| {
                acc.and(listener(event))
            })
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for CancelableNotification<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for CancelableNotification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelableNotification")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event() -> BeforeClose {
        BeforeClose {
            id: PanelId::new("a"),
            destroy: true,
        }
    }

    #[test]
    fn test_empty_cancelable_never_vetoes() {
        let mut notification = CancelableNotification::<BeforeClose>::new();
        assert_eq!(notification.fire(&event()), Propagation::Continue);
    }

    #[test]
    fn test_single_veto_wins() {
        let mut notification = CancelableNotification::new();
        notification.subscribe(|_: &BeforeClose| Propagation::Continue);
        notification.subscribe(|_: &BeforeClose| Propagation::Veto);
        notification.subscribe(|_: &BeforeClose| Propagation::Continue);

        assert!(notification.fire(&event()).is_veto());
    }

    #[test]
    fn test_all_listeners_run_after_veto() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut notification = CancelableNotification::new();

        let log = calls.clone();
        notification.subscribe(move |_: &BeforeClose| {
            log.borrow_mut().push("first");
            Propagation::Veto
        });
        let log = calls.clone();
        notification.subscribe(move |_: &BeforeClose| {
            log.borrow_mut().push("second");
            Propagation::Continue
        });

        notification.fire(&event());
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_removes_veto() {
        let mut notification = CancelableNotification::new();
        let id = notification.subscribe(|_: &BeforeClose| false.into());

        assert!(notification.fire(&event()).is_veto());
        assert!(notification.unsubscribe(id));
        assert!(!notification.unsubscribe(id));
        assert_eq!(notification.fire(&event()), Propagation::Continue);
    }

    #[test]
    fn test_plain_notification_fires_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notification = Notification::new();

        for tag in 0..3 {
            let seen = seen.clone();
            notification.subscribe(move |e: &AfterClose| {
                seen.borrow_mut().push((tag, e.destroyed));
            });
        }

        notification.fire(&AfterClose {
            id: PanelId::new("a"),
            destroyed: false,
        });
        assert_eq!(*seen.borrow(), vec![(0, false), (1, false), (2, false)]);
        assert_eq!(notification.len(), 3);
    }
}
