use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};

const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches a catalog file for changes.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by writing a new file and renaming it over the old one are
/// still noticed.
pub struct CatalogWatcher {
    target: PathBuf,
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<DebounceEventResult>,
}

impl CatalogWatcher {
    /// Start watching `path`. `wake` runs on the watcher thread after every
    /// batch of changes, e.g. to request a repaint.
    pub fn new(path: &Path, wake: impl Fn() + Send + 'static) -> Result<Self> {
        let target = path
            .canonicalize()
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, move |res: DebounceEventResult| {
            let _ = tx.send(res);
            wake();
        })
        .context("Failed to start file watcher")?;
        debouncer
            .watcher()
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;

        tracing::info!("watching {}", target.display());
        Ok(Self {
            target,
            _debouncer: debouncer,
            rx,
        })
    }

    /// Drain pending notifications. True if the catalog file changed.
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    changed |= events.iter().any(|e| e.path == self.target);
                }
                Err(e) => tracing::warn!("file watcher error: {e}"),
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let result = CatalogWatcher::new(Path::new("/nonexistent/catalog.yaml"), || {});
        assert!(result.is_err());
    }
}
