//! Engine-wide invariants: how many subtrees are mid-scan, how many tasks
//! are queued or executing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ScanCounters {
    active_scan_count: Arc<AtomicU32>,
    task_count: Arc<AtomicU32>,
}

impl ScanCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_scan_start(&self) {
        self.active_scan_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn active_scan_end(&self) {
        self.active_scan_count.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn task_queued(&self) {
        self.task_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn task_done(&self) {
        self.task_count.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn active_scan_count(&self) -> u32 {
        self.active_scan_count.load(Ordering::SeqCst)
    }

    pub fn task_count(&self) -> u32 {
        self.task_count.load(Ordering::SeqCst)
    }

    /// Whether the next timed tick may be scheduled: no subtree is mid-walk
    /// and no task from a previous tick is still in flight.
    pub fn idle(&self) -> bool {
        self.active_scan_count() == 0 && self.task_count() == 0
    }
}
