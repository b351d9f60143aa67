//! Where the demo keeps its config and logs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;

const CONFIG_FILE: &str = "tree.json";
const LATEST_LOG: &str = "latest.log";
const KEPT_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "arbor", "arbor-demo")
}

/// Cache directory; logs live here.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// `tree.json` in the platform config directory.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log in the cache directory.
pub fn rotate_logs() {
    if let Some(dir) = cache_dir() {
        rotate_logs_in(&dir, KEPT_LOGS);
    }
}

/// Rename `latest.log` in `dir` to a timestamped name, then delete the
/// oldest archives beyond `keep`. Returns the number of archives deleted.
///
/// Failures are skipped; rotation never stops the demo from starting.
pub fn rotate_logs_in(dir: &Path, keep: usize) -> usize {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
        let archived = dir.join(format!("{stamp}.log"));
        if let Err(err) = fs::rename(&latest, &archived) {
            debug!("Could not archive {}: {}", latest.display(), err);
        }
    }

    let mut archives = match archived_logs(dir) {
        Ok(archives) => archives,
        Err(err) => {
            debug!("Could not list {}: {}", dir.display(), err);
            return 0;
        }
    };
    if archives.len() <= keep {
        return 0;
    }

    // Timestamped names sort oldest first.
    archives.sort();
    let excess = archives.len() - keep;
    archives
        .iter()
        .take(excess)
        .filter(|path| fs::remove_file(path).is_ok())
        .count()
}

fn archived_logs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path.extension().is_some_and(|ext| ext == "log")
            && path.file_name().is_some_and(|name| name != LATEST_LOG);
        if is_archive {
            logs.push(path);
        }
    }
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"log").unwrap();
    }

    #[test]
    fn latest_log_is_archived() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), LATEST_LOG);

        assert_eq!(rotate_logs_in(dir.path(), 5), 0);
        assert!(!dir.path().join(LATEST_LOG).exists());
        assert_eq!(archived_logs(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn oldest_archives_beyond_keep_are_removed() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["20240101_000000.log", "20240102_000000.log", "20240103_000000.log"] {
            touch(dir.path(), name);
        }
        touch(dir.path(), "notes.txt");

        assert_eq!(rotate_logs_in(dir.path(), 2), 1);
        assert!(!dir.path().join("20240101_000000.log").exists());
        assert!(dir.path().join("20240103_000000.log").exists());
        assert!(dir.path().join("notes.txt").exists());
    }
}
