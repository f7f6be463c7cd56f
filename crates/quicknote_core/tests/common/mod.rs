//! Shared in-memory doubles for store and session tests.
#![allow(dead_code)]

use quicknote_core::{MediumError, StorageMedium, UserNotifier};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MediumState {
    entries: HashMap<String, String>,
    get_calls: Vec<String>,
    set_calls: Vec<(String, String)>,
    remove_calls: Vec<String>,
    fail_writes: bool,
    fail_reads: bool,
    quota_keys: Vec<String>,
    broken_keys: Vec<String>,
}

/// Medium double that records every call.
///
/// Clones share one underlying state, so a test can keep a handle after the
/// session takes ownership of the other clone.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMedium {
    state: Rc<RefCell<MediumState>>,
}

impl ScriptedMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// A medium whose writes all fail; the probe reports it unavailable.
    pub fn unavailable() -> Self {
        let medium = Self::default();
        medium.state.borrow_mut().fail_writes = true;
        medium
    }

    /// A medium that rejects writes to `key` with a quota failure.
    pub fn quota_on(key: &str) -> Self {
        let medium = Self::default();
        medium.state.borrow_mut().quota_keys.push(key.to_string());
        medium
    }

    /// A medium that rejects writes to `key` with a backend failure while
    /// probe writes keep succeeding.
    pub fn broken_on(key: &str) -> Self {
        let medium = Self::default();
        medium.state.borrow_mut().broken_keys.push(key.to_string());
        medium
    }

    /// Makes every subsequent read fail with a backend error.
    pub fn fail_reads(&self) {
        self.state.borrow_mut().fail_reads = true;
    }

    /// Seeds a stored entry directly, bypassing call recording.
    pub fn seed(&self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
    }

    /// Number of `get` calls issued for `key`.
    pub fn reads_of(&self, key: &str) -> usize {
        self.state
            .borrow()
            .get_calls
            .iter()
            .filter(|k| *k == key)
            .count()
    }

    /// Values written under `key`, in write order (including rejected writes).
    pub fn writes_of(&self, key: &str) -> Vec<String> {
        self.state
            .borrow()
            .set_calls
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Currently stored value under `key`.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().entries.get(key).cloned()
    }
}

impl StorageMedium for ScriptedMedium {
    fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        let mut state = self.state.borrow_mut();
        state.get_calls.push(key.to_string());
        if state.fail_reads {
            return Err(MediumError::Backend("scripted read failure".to_string()));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MediumError> {
        let mut state = self.state.borrow_mut();
        state.set_calls.push((key.to_string(), value.to_string()));
        if state.fail_writes {
            return Err(MediumError::Backend("scripted write failure".to_string()));
        }
        if state.quota_keys.iter().any(|k| k == key) {
            return Err(MediumError::QuotaExceeded);
        }
        if state.broken_keys.iter().any(|k| k == key) {
            return Err(MediumError::Backend("scripted write failure".to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), MediumError> {
        let mut state = self.state.borrow_mut();
        state.remove_calls.push(key.to_string());
        if state.fail_writes {
            return Err(MediumError::Backend("scripted write failure".to_string()));
        }
        state.entries.remove(key);
        Ok(())
    }
}

/// Notifier double that records alerts; clones share the record.
#[derive(Debug, Clone, Default)]
pub struct CapturingNotifier {
    alerts: Rc<RefCell<Vec<String>>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl UserNotifier for CapturingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
