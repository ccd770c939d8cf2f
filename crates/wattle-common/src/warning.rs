//! Layout warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning once per node
//! or once per relayout. Used by the flex engine to report ignored
//! properties and known layout limitations.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Global set of warnings we've already reported (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// The set survives a panic in another thread; it only ever holds strings.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a quirk or limitation (reported once per unique message)
///
/// # Example
/// ```
/// use wattle_common::warning::warn_once;
///
/// warn_once("Flex", "flexBasis ignored on a node without a parent");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_report = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_report {
        log::warn!(target: "wattle", "[{component}] {message}");
    }
}

/// Whether a warning with this component and message has been reported
/// since the last [`clear_warnings`].
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before laying out an unrelated tree)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
