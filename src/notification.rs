//! Non-fatal diagnostics for degenerate vector operations.
//!
//! Some operations have a defined result in a degenerate case but still
//! deserve a diagnostic: normalizing the zero vector is a no-op, and the
//! heading of a 3D vector is the heading of its xy projection. These are
//! reported as [`Notification`] items instead of errors.
//!
//! The library never prints. A caller that wants to see the diagnostics
//! runs the code inside [`collect`], which installs a collection for the
//! current thread and hands it back afterwards:
//!
//! ```
//! use vecta::{notification, Vector};
//!
//! let (_, notes) = notification::collect(|| {
//!     let mut v = Vector::new(0.0, 0.0);
//!     v.normalize();
//! });
//! assert_eq!(notes.len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Operation is not meaningful for these operands and fell back to a
    /// reduced form (e.g. heading of a 3D vector).
    NotSupported,
    /// Degenerate input; the operation left the vector unchanged.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single diagnostic produced by a vector operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Notifications gathered while a [`collect`] scope was active.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

thread_local! {
    // Stack of active scopes; the innermost one receives notifications.
    static ACTIVE: RefCell<Vec<NotificationCollection>> = const { RefCell::new(Vec::new()) };
}

/// Record a notification in the innermost active [`collect`] scope of the
/// current thread. Outside any scope the notification is dropped.
pub fn notify(notification_type: NotificationType, message: impl Into<String>) {
    ACTIVE.with(|active| {
        if let Some(current) = active.borrow_mut().last_mut() {
            current.notify(notification_type, message);
        }
    });
}

/// Run `f` and return its result along with every notification it raised
/// on this thread. Scopes nest; an inner scope captures its own
/// notifications and they do not reach the outer one.
pub fn collect<T>(f: impl FnOnce() -> T) -> (T, NotificationCollection) {
    ACTIVE.with(|active| active.borrow_mut().push(NotificationCollection::new()));
    let guard = ScopeGuard;
    let value = f();
    let collected = guard.finish();
    (value, collected)
}

/// Pops the scope pushed by [`collect`], also when `f` unwinds.
struct ScopeGuard;

impl ScopeGuard {
    fn finish(self) -> NotificationCollection {
        let collected = ACTIVE.with(|active| active.borrow_mut().pop()).unwrap_or_default();
        std::mem::forget(self);
        collected
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE.with(|active| {
            active.borrow_mut().pop();
        });
    }
}
