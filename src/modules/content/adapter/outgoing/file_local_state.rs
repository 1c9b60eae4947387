use std::path::PathBuf;

use tracing::warn;

use crate::content::application::ports::outgoing::LocalStateStore;

/// Keyed string store persisted as one file per key under a state directory.
/// Best-effort: I/O failures are logged and swallowed, matching the local
/// tier's contract (a lost mirror only costs a fallthrough on next startup).
pub struct FileLocalStateStore {
    dir: PathBuf,
}

impl FileLocalStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants, but keep the filename safe anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl LocalStateStore for FileLocalStateStore {
    fn read(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("local state read failed for {key}: {e}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!("local state dir creation failed: {e}");
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            warn!("local state write failed for {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("local state remove failed for {key}: {e}"),
        }
    }
}
