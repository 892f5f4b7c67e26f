use std::fs;
use std::time::Duration;

use avsscan::model::{AutoscanDirectory, ScanMode, ScanTask};
use avsscan::timed::TimedScanner;
use avsscan::ScanCounters;

/// S8 — start with N files, run a timed scan, wait for the queue to drain:
/// the catalog sees exactly N add tasks and `lastModPreviousScan` tracks the
/// newest mtime observed. Touching one file produces exactly one more task.
#[tokio::test]
async fn timed_scan_reports_exactly_n_then_one_update() {
    let tmp = tempfile::tempdir().unwrap();
    for i in 0..5 {
        fs::write(tmp.path().join(format!("track{i}.flac")), b"data").unwrap();
    }

    let dir = AutoscanDirectory::new(tmp.path(), ScanMode::Timed, 1);
    let counters = ScanCounters::new();
    let (tx, mut rx) = tokio::sync::mpsc::channel(64);
    let scanner = TimedScanner::new(dir.clone(), tx, counters.clone());

    tokio::spawn(scanner.run());

    let mut tasks = Vec::new();
    for _ in 0..5 {
        let task = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await.unwrap().unwrap();
        tasks.push(task);
    }
    assert_eq!(tasks.len(), 5);
    assert!(tasks.iter().all(|t| matches!(t, ScanTask::AddOrUpdate { .. })));

    tokio::time::timeout(Duration::from_millis(500), async {
        while !counters.idle() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    // Touch one file; the next tick should queue exactly one update.
    tokio::time::sleep(Duration::from_millis(1100)).await;
    fs::write(tmp.path().join("track0.flac"), b"updated data, longer").unwrap();

    let next = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await.unwrap().unwrap();
    assert!(matches!(next, ScanTask::AddOrUpdate { .. }));

    let extra = tokio::time::timeout(Duration::from_millis(300), rx.recv()).await;
    assert!(extra.is_err(), "expected no further tasks from the untouched files");
}
