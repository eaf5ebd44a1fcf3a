//! Key-value persistence used by the layout engine and theme cascade.
//!
//! A [`PersistenceGateway`] stores one opaque payload per namespace with
//! last-writer-wins semantics. The typed helpers [`load_json`] and
//! [`save_json`] layer JSON on top; a payload that no longer parses is
//! treated as absent rather than as an error.

mod memory;

pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::StoreError;

/// Namespace holding `{theme, custom_presets}`.
pub const THEME_NAMESPACE: &str = "hestia_theme";
/// Namespace holding the `apps` tile array.
pub const APPS_NAMESPACE: &str = "hestia_apps";

/// Durable key-value store keyed by namespace.
pub trait PersistenceGateway {
    /// Previously saved payload, or `None` if the namespace was never written.
    fn load_raw(&self, namespace: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the payload for `namespace`.
    fn save_raw(&mut self, namespace: &str, payload: &str) -> Result<(), StoreError>;
}

/// Load and deserialize a namespace. Corrupt payloads come back as `None`.
pub fn load_json<T, S>(store: &S, namespace: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: PersistenceGateway + ?Sized,
{
    let Some(raw) = store.load_raw(namespace)? else {
        debug!(namespace, "nothing stored");
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(namespace, "ignoring corrupt stored payload: {e}");
            Ok(None)
        }
    }
}

/// Serialize `value` and overwrite the namespace.
pub fn save_json<T, S>(store: &mut S, namespace: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: PersistenceGateway + ?Sized,
{
    let payload = serde_json::to_string(value).map_err(|e| StoreError::Serialize {
        namespace: namespace.to_string(),
        reason: e.to_string(),
    })?;
    store.save_raw(namespace, &payload)?;
    debug!(namespace, bytes = payload.len(), "saved");
    Ok(())
}
