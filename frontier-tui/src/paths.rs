//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "frontier";
const APPLICATION: &str = "frontier";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;
const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding catalogs.
///
/// - Linux: `$XDG_DATA_HOME/frontier` or `~/.local/share/frontier`
/// - macOS: `~/Library/Application Support/dev.frontier.frontier`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/frontier` or `~/.cache/frontier`
/// - macOS: `~/Library/Caches/dev.frontier.frontier`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Catalog used when none is given on the command line.
pub fn default_catalog() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("catalog.json"))
}

/// Prepare the log directory for a new session and return the path of
/// the fresh log file.
///
/// The previous `latest.log` is archived under a timestamped name and the
/// archive is pruned to the newest `MAX_OLD_LOGS` files.
pub fn start_log() -> Option<PathBuf> {
    let dir = cache_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        if let Err(e) = fs::rename(&latest, dir.join(format!("{}.log", stamp))) {
            eprintln!("Could not archive {}: {}", latest.display(), e);
        }
    }

    prune_logs(&dir, MAX_OLD_LOGS);
    Some(latest)
}

/// Delete archived logs in `dir` beyond the newest `keep`.
fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<(Option<SystemTime>, PathBuf)> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .map(|path| (fs::metadata(&path).and_then(|m| m.modified()).ok(), path))
        .collect();

    // Newest first
    archived.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in archived.into_iter().skip(keep) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_prune_logs_keeps_newest() {
        let dir = std::env::temp_dir().join(format!("frontier-prune-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let base = SystemTime::now() - Duration::from_secs(100);
        for i in 0..4u64 {
            let path = dir.join(format!("old{}.log", i));
            let file = fs::File::create(&path).unwrap();
            file.set_modified(base + Duration::from_secs(i)).unwrap();
        }
        fs::write(dir.join(LATEST_LOG), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        prune_logs(&dir, 2);

        let mut left: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, vec!["latest.log", "notes.txt", "old2.log", "old3.log"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
