//! Inotify-driven autoscan: one watcher per registered subtree, events
//! translated into `ScanTask`s as they arrive.

use std::path::{Path, PathBuf};

use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, Sender};
use tracing::warn;

use crate::counters::ScanCounters;
use crate::error::ScanError;
use crate::model::{AutoscanDirectory, ScanTask};

/// Owns a single `notify` watcher for one `AutoscanDirectory`.
///
/// Paths that do not exist yet are not watched directly; the caller is
/// expected to park them on the deepest existing ancestor and retry once
/// that ancestor changes (see [`InotifyScanner::watch`]'s error path).
pub struct InotifyScanner {
    dir: AutoscanDirectory,
    tasks: Sender<ScanTask>,
    counters: ScanCounters,
    _watcher: Option<RecommendedWatcher>,
}

impl InotifyScanner {
    pub fn new(dir: AutoscanDirectory, tasks: Sender<ScanTask>, counters: ScanCounters) -> Self {
        Self { dir, tasks, counters, _watcher: None }
    }

    /// Installs the watch and begins forwarding tasks. Returns once the
    /// watcher itself is set up; events are processed on a background task
    /// for the lifetime of the returned join handle.
    pub async fn run(mut self) -> Result<tokio::task::JoinHandle<()>, ScanError> {
        let (raw_tx, mut raw_rx) = mpsc::channel::<notify::Result<Event>>(256);

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = raw_tx.blocking_send(res);
        })?;

        let mode = if self.dir.recursive { RecursiveMode::Recursive } else { RecursiveMode::NonRecursive };
        let watch_root = deepest_existing_ancestor(&self.dir.location);
        watcher.watch(&watch_root, mode)?;
        self._watcher = Some(watcher);

        let hidden = self.dir.hidden;
        let tasks = self.tasks.clone();
        let counters = self.counters.clone();
        let root = self.dir.location.clone();

        let handle = tokio::spawn(async move {
            let mut pending_rename_from: Option<PathBuf> = None;
            while let Some(res) = raw_rx.recv().await {
                let event = match res {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("inotify watcher error on {:?}: {}", root, e);
                        continue;
                    }
                };

                for path in &event.paths {
                    if !hidden && is_hidden(path) {
                        continue;
                    }
                    if !path.starts_with(&root) {
                        continue;
                    }

                    counters.task_queued();
                    let sent = match event.kind {
                        EventKind::Create(CreateKind::Any) | EventKind::Create(CreateKind::File) => {
                            tasks.send(ScanTask::AddOrUpdate { path: path.clone() }).await
                        }
                        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any) => {
                            tasks.send(ScanTask::AddOrUpdate { path: path.clone() }).await
                        }
                        EventKind::Remove(RemoveKind::Any) | EventKind::Remove(RemoveKind::File) => {
                            tasks.send(ScanTask::Remove { path: path.clone() }).await
                        }
                        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                            pending_rename_from = Some(path.clone());
                            Ok(())
                        }
                        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                            if let Some(from) = pending_rename_from.take() {
                                tasks.send(ScanTask::Rename { from, to: path.clone() }).await
                            } else {
                                tasks.send(ScanTask::AddOrUpdate { path: path.clone() }).await
                            }
                        }
                        _ => Ok(()),
                    };
                    counters.task_done();
                    if sent.is_err() {
                        return;
                    }
                }
            }
        });

        Ok(handle)
    }
}

fn deepest_existing_ancestor(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    while !current.exists() {
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
    current
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().map(|n| n.to_string_lossy().starts_with('.')).unwrap_or(false)
}
