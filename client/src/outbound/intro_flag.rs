//! File-backed intro flag store.
//!
//! The flag lives in a single file inside the client data directory. All file
//! access goes through a capability-scoped [`Dir`], and writes replace the
//! file atomically so a crash never leaves a half-written flag.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::ports::{IntroFlagStore, IntroFlagStoreError};

/// Name of the flag file inside the data directory.
pub const INTRO_FLAG_FILE: &str = "intro-seen";
const SEEN_MARKER: &str = "true";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persists the intro flag as a file under the data directory.
#[derive(Debug)]
pub struct FileIntroFlagStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileIntroFlagStore {
    /// Open (creating if needed) `data_dir` and store the flag there.
    pub fn open(data_dir: &Utf8Path) -> Result<Self, IntroFlagStoreError> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(data_dir, ambient_authority()))
            .map(|dir| Self {
                dir,
                root: data_dir.to_path_buf(),
            })
            .map_err(|err| IntroFlagStoreError::read(format!("{data_dir}: {err}")))
    }

    /// Full path of the flag file, for diagnostics.
    pub fn flag_path(&self) -> Utf8PathBuf {
        self.root.join(INTRO_FLAG_FILE)
    }

    fn write_error(&self, err: &io::Error) -> IntroFlagStoreError {
        IntroFlagStoreError::write(format!("{}: {err}", self.flag_path()))
    }
}

impl IntroFlagStore for FileIntroFlagStore {
    fn has_seen_intro(&self) -> Result<bool, IntroFlagStoreError> {
        match self.dir.read_to_string(INTRO_FLAG_FILE) {
            Ok(contents) => Ok(contents.trim() == SEEN_MARKER),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(IntroFlagStoreError::read(format!(
                "{}: {err}",
                self.flag_path()
            ))),
        }
    }

    fn mark_intro_seen(&self) -> Result<(), IntroFlagStoreError> {
        replace_file(&self.dir, INTRO_FLAG_FILE, SEEN_MARKER).map_err(|err| self.write_error(&err))?;
        debug!(path = %self.flag_path(), "intro flag written");
        Ok(())
    }
}

/// Write `contents` to `file_name` via a hidden sibling temp file and rename.
fn replace_file(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id());

    if let Err(err) = write_temp(dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    if let Err(err) = rename_over(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    // Directory sync is best effort.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn rename_over(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    // Rename does not replace an existing target on Windows.
    match dir.remove_file(to) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(from, dir, to)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    dir.rename(from, dir, to)
}
