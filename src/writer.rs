//! Output artifact writing and size-bounded splitting.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::sanitize::sanitize_filename;
use crate::utils::format_bytes;

/// Default split threshold: 99 MiB, chosen to stay under common hosting
/// limits on single-file size.
pub const DEFAULT_SPLIT_THRESHOLD: u64 = 99 * 1024 * 1024;

/// One output file, possibly one part of a split category.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: u64,
    pub lines: usize,
}

/// Write a category's entries to `<slug>.txt` under `dir`, splitting into
/// `<slug>_part<N>.txt` parts when the file exceeds `threshold` bytes.
///
/// Entries are newline-joined with no trailing newline. When a split
/// happens, parts preserve line order, their concatenation reproduces the
/// unsplit file byte-for-byte, and the original is removed. Filesystem
/// failures here are fatal for the category and propagate.
pub fn write_category(
    dir: &Path,
    name: &str,
    entries: &BTreeSet<String>,
    threshold: u64,
) -> Result<Vec<Artifact>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let slug = sanitize_filename(name);
    let path = dir.join(format!("{slug}.txt"));

    write_joined(&path, entries)?;

    let bytes = fs::metadata(&path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    if bytes <= threshold {
        return Ok(vec![Artifact {
            path,
            bytes,
            lines: entries.len(),
        }]);
    }

    info!(
        "Splitting {} ({})",
        path.display(),
        format_bytes(bytes)
    );
    split_file(dir, &slug, &path, threshold)
}

fn write_joined(path: &Path, entries: &BTreeSet<String>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        out.write_all(entry.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Stream `path` line by line into numbered parts of at most `threshold`
/// bytes, then delete the original.
///
/// Byte accounting uses each line's encoded length including its newline. A
/// single line larger than the threshold gets a part of its own; empty parts
/// are never produced.
fn split_file(dir: &Path, slug: &str, path: &Path, threshold: u64) -> Result<Vec<Artifact>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut artifacts = Vec::new();
    let mut part_num = 1u32;
    let mut buf = String::new();
    let mut buf_lines = 0usize;
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if n == 0 {
            break;
        }
        if !buf.is_empty() && (buf.len() + line.len()) as u64 > threshold {
            artifacts.push(flush_part(dir, slug, part_num, &buf, buf_lines)?);
            part_num += 1;
            buf.clear();
            buf_lines = 0;
        }
        buf.push_str(&line);
        buf_lines += 1;
    }

    if !buf.is_empty() {
        artifacts.push(flush_part(dir, slug, part_num, &buf, buf_lines)?);
    }

    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    info!("Removed original file: {}", path.display());

    Ok(artifacts)
}

fn flush_part(dir: &Path, slug: &str, num: u32, buf: &str, lines: usize) -> Result<Artifact> {
    let path = dir.join(format!("{slug}_part{num}.txt"));
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created {} ({})", path.display(), format_bytes(buf.len() as u64));
    Ok(Artifact {
        path,
        bytes: buf.len() as u64,
        lines,
    })
}
