//! Writing note exports to disk

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::client::ExportFile;
use crate::shared::error::ClientResult;
use crate::shared::note::NoteId;

/// File name for an export: the server's suggestion, else the note title
/// with spaces turned into underscores, else `note-<id>.txt`.
pub fn export_file_name(file: &ExportFile, title: &str, id: NoteId) -> String {
    let candidate = file
        .filename
        .clone()
        .or_else(|| {
            let title = title.trim();
            (!title.is_empty()).then(|| format!("{}.txt", title.replace(' ', "_")))
        })
        .map(|name| sanitize(&name))
        .filter(|name| !name.is_empty() && name != "." && name != "..");

    candidate.unwrap_or_else(|| format!("note-{}.txt", id))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Candidate `n` for `name` in `dir`: `name` itself, then `stem (1).ext`,
/// `stem (2).ext`, ...
fn numbered_path(dir: &Path, name: &str, n: u32) -> PathBuf {
    if n == 0 {
        return dir.join(name);
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => dir.join(format!("{} ({}).{}", stem, n, ext)),
        _ => dir.join(format!("{} ({})", name, n)),
    }
}

/// Create the first candidate path that does not exist yet. Creation is
/// exclusive, so a file that appears concurrently is skipped, not clobbered.
async fn create_unused(dir: &Path, name: &str) -> io::Result<(PathBuf, File)> {
    let mut n = 0;
    loop {
        let path = numbered_path(dir, name, n);
        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e),
        }
    }
}

/// Write `file` into `dir`, creating the directory if needed. Never
/// overwrites an existing file.
pub async fn write_export(dir: &Path, file: &ExportFile, title: &str, id: NoteId) -> ClientResult<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let (path, mut out) = create_unused(dir, &export_file_name(file, title, id)).await?;
    out.write_all(&file.body).await?;
    out.flush().await?;
    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}
