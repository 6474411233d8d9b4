//! ProfileSource trait for abstracting where persona resources come from.
//!
//! Defined in twin-core so the prompt service can read resources without
//! depending on any specific loader. The filesystem loader lives in
//! twin-infra and produces a `ProfileSnapshot`, which implements this trait.

use std::sync::Arc;

use twin_types::profile::{Identity, ProfileSnapshot};

/// Read accessors for the four persona resources.
///
/// Each accessor returns `None` when the resource is absent. Implementations
/// must be cheap and side-effect free: they are called on every prompt build.
pub trait ProfileSource: Send + Sync {
    /// Identity facts (full name, preferred name, extra facts).
    fn identity(&self) -> Option<&Identity>;

    /// Background summary notes.
    fn summary(&self) -> Option<&str>;

    /// Flattened LinkedIn profile text.
    fn linkedin(&self) -> Option<&str>;

    /// Communication style notes.
    fn style(&self) -> Option<&str>;
}

impl ProfileSource for ProfileSnapshot {
    fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn linkedin(&self) -> Option<&str> {
        self.linkedin.as_deref()
    }

    fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

impl<T: ProfileSource + ?Sized> ProfileSource for Arc<T> {
    fn identity(&self) -> Option<&Identity> {
        (**self).identity()
    }

    fn summary(&self) -> Option<&str> {
        (**self).summary()
    }

    fn linkedin(&self) -> Option<&str> {
        (**self).linkedin()
    }

    fn style(&self) -> Option<&str> {
        (**self).style()
    }
}

impl<T: ProfileSource + ?Sized> ProfileSource for &T {
    fn identity(&self) -> Option<&Identity> {
        (**self).identity()
    }

    fn summary(&self) -> Option<&str> {
        (**self).summary()
    }

    fn linkedin(&self) -> Option<&str> {
        (**self).linkedin()
    }

    fn style(&self) -> Option<&str> {
        (**self).style()
    }
}
