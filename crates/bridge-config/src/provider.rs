//! Read providers for host payloads
//!
//! The resolver never stores host payloads itself. It asks its providers for
//! the current value on every resolve, so a host that reconfigures mid-session
//! is picked up by the next read.

use std::sync::{Arc, PoisonError, RwLock};

/// Source of the current value of a host payload.
///
/// `None` means the host has not supplied the payload yet.
///
/// Any `Fn() -> Option<T>` closure is a provider:
///
/// ```
/// use bridge_config::{ClientInfo, HostProvider};
///
/// let provider = || Some(ClientInfo { name: "vscode".into(), ..Default::default() });
/// assert_eq!(provider.current().unwrap().name, "vscode");
/// ```
pub trait HostProvider<T>: Send + Sync {
    fn current(&self) -> Option<T>;
}

impl<T, F> HostProvider<T> for F
where
    F: Fn() -> Option<T> + Send + Sync,
{
    fn current(&self) -> Option<T> {
        self()
    }
}

/// A shared slot the transport writes and the resolver reads.
///
/// Clones share the same slot, so one handle can be given to the resolver
/// while another is kept for publishing new payloads.
///
/// ```
/// use bridge_config::{HostProvider, HostValue};
///
/// let slot = HostValue::empty();
/// let reader = slot.clone();
/// assert_eq!(reader.current(), None::<String>);
///
/// slot.set("configured".to_string());
/// assert_eq!(reader.current().as_deref(), Some("configured"));
/// ```
#[derive(Debug)]
pub struct HostValue<T> {
    slot: Arc<RwLock<Option<T>>>,
}

impl<T> HostValue<T> {
    pub fn new(initial: Option<T>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Publish a new payload, replacing the previous one
    pub fn set(&self, value: T) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    /// Forget the current payload
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<T> Clone for HostValue<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for HostValue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> HostProvider<T> for HostValue<T>
where
    T: Clone + Send + Sync,
{
    fn current(&self) -> Option<T> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
