//! Timed autoscan: walks a subtree on a fixed interval and diffs mtimes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::Sender;
use tokio::time::interval;
use tracing::{info, warn};

use crate::counters::ScanCounters;
use crate::error::ScanError;
use crate::model::{AutoscanDirectory, ScanTask};

/// Drives one `AutoscanDirectory` with `scan_mode == Timed`.
///
/// Runs until `tasks` is dropped. Ticks are quantized to one second; an
/// interval of e.g. 30s simply skips 29 out of every 30 ticks.
pub struct TimedScanner {
    dir: AutoscanDirectory,
    tasks: Sender<ScanTask>,
    counters: ScanCounters,
    last_seen: HashMap<PathBuf, i64>,
}

impl TimedScanner {
    pub fn new(dir: AutoscanDirectory, tasks: Sender<ScanTask>, counters: ScanCounters) -> Self {
        Self { dir, tasks, counters, last_seen: HashMap::new() }
    }

    pub async fn run(mut self) {
        let mut ticker = interval(Duration::from_secs(1));
        let mut elapsed = 0u64;
        loop {
            ticker.tick().await;
            elapsed += 1;
            if elapsed < self.dir.interval_secs {
                continue;
            }
            if !self.counters.idle() {
                warn!("autoscan tick for {:?} skipped, previous scan still draining", self.dir.location);
                continue;
            }
            elapsed = 0;
            self.scan_once().await;
        }
    }

    async fn scan_once(&mut self) {
        self.counters.active_scan_start();
        let now = now_millis();
        self.dir.last_mod_current_scan.store(now, Ordering::Relaxed);

        let mut seen = HashMap::new();
        if let Err(e) = self.walk(&self.dir.location.clone(), &mut seen).await {
            self.dir.retry_count.fetch_add(1, Ordering::Relaxed);
            warn!("autoscan walk of {:?} failed: {}", self.dir.location, e);
        } else {
            self.dir.retry_count.store(0, Ordering::Relaxed);
        }

        for (path, _) in self.last_seen.iter() {
            if !seen.contains_key(path) {
                self.counters.task_queued();
                if self.tasks.send(ScanTask::Remove { path: path.clone() }).await.is_err() {
                    self.counters.task_done();
                    self.counters.active_scan_end();
                    return;
                }
                self.counters.task_done();
            }
        }

        let max_mtime = seen.values().copied().max().unwrap_or(0);
        self.last_seen = seen;
        self.dir.last_mod_previous_scan.store(max_mtime, Ordering::Relaxed);
        self.counters.active_scan_end();
    }

    fn walk<'a>(
        &'a self,
        dir: &'a Path,
        seen: &'a mut HashMap<PathBuf, i64>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), ScanError>> + Send + 'a>> {
        Box::pin(async move {
            let mut entries = tokio::fs::read_dir(dir).await.map_err(|source| ScanError::ReadDir {
                path: dir.display().to_string(),
                source,
            })?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|source| ScanError::ReadDir { path: dir.display().to_string(), source })?
            {
                let path = entry.path();
                let name = entry.file_name();
                if !self.dir.hidden && name.to_string_lossy().starts_with('.') {
                    continue;
                }

                let metadata = match entry.metadata().await {
                    Ok(m) => m,
                    Err(e) => {
                        warn!("autoscan could not stat {:?}: {}", path, e);
                        continue;
                    }
                };

                if metadata.is_symlink() && !self.dir.follow_symlinks {
                    continue;
                }

                if metadata.is_dir() {
                    if self.dir.recursive {
                        self.walk(&path, seen).await?;
                    }
                    continue;
                }

                let mtime = metadata
                    .modified()
                    .ok()
                    .and_then(|m| m.duration_since(std::time::UNIX_EPOCH).ok())
                    .map(|d| d.as_millis() as i64)
                    .unwrap_or(0);

                seen.insert(path.clone(), mtime);

                let previous = self.last_seen.get(&path).copied();
                if previous != Some(mtime) {
                    self.counters.task_queued();
                    if self.tasks.send(ScanTask::AddOrUpdate { path: path.clone() }).await.is_err() {
                        self.counters.task_done();
                        return Err(ScanError::ChannelClosed);
                    }
                    self.counters.task_done();
                }
            }

            info!("autoscan walked {:?}, {} entries seen", dir, seen.len());
            Ok(())
        })
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
