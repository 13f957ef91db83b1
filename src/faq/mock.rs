//! In-memory FAQ store for tests and examples.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::store::{FaqEntry, FaqStore, FaqStoreError};

/// In-memory [`FaqStore`] that records unanswered questions and can be
/// switched into a failing mode to exercise error paths.
#[derive(Default)]
pub struct InMemoryFaqStore {
    entries: Mutex<Vec<FaqEntry>>,
    unanswered: Mutex<Vec<String>>,
    fail_load: AtomicBool,
    fail_record: AtomicBool,
}

impl InMemoryFaqStore {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Default::default()
        }
    }

    /// Convenience constructor from `(question, answer)` pairs, assigning
    /// sequential ids and sort orders.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .enumerate()
            .map(|(i, (question, answer))| FaqEntry {
                id: i as i64 + 1,
                question: question.to_string(),
                answer: answer.to_string(),
                is_active: true,
                sort_order: i as i64,
            })
            .collect();
        Self::new(entries)
    }

    /// Replaces the stored entries (visible on the next `load_active`).
    pub fn set_entries(&self, entries: Vec<FaqEntry>) {
        *self.entries.lock() = entries;
    }

    /// Makes `load_active` fail until cleared.
    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    /// Makes `record_unanswered` fail until cleared.
    pub fn set_fail_record(&self, fail: bool) {
        self.fail_record.store(fail, Ordering::SeqCst);
    }

    /// Questions recorded as unanswered, in arrival order.
    pub fn unanswered(&self) -> Vec<String> {
        self.unanswered.lock().clone()
    }
}

impl FaqStore for InMemoryFaqStore {
    fn load_active(&self) -> Result<Vec<FaqEntry>, FaqStoreError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(FaqStoreError::Unavailable {
                reason: "simulated outage".to_string(),
            });
        }

        let mut active: Vec<FaqEntry> = self
            .entries
            .lock()
            .iter()
            .filter(|e| e.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|e| (e.sort_order, e.id));
        Ok(active)
    }

    fn record_unanswered(&self, question: &str) -> Result<(), FaqStoreError> {
        if self.fail_record.load(Ordering::SeqCst) {
            return Err(FaqStoreError::QueryFailed {
                reason: "simulated insert failure".to_string(),
            });
        }

        self.unanswered.lock().push(question.to_string());
        Ok(())
    }
}
