//! The UI collaborators a form screen reports to: toasts and routing.

use std::sync::Arc;

/// Visual style of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    /// Creates a toast with no description.
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description and returns self for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Shows toast notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Moves the application to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate(&self, route: &str) {
        (**self).navigate(route)
    }
}
