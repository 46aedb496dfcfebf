//! Content digest computation over ordered file sets.
//!
//! Digests are MD5 over the concatenated byte contents of the input files,
//! rendered as lowercase hex. MD5 here is part of the published table
//! format, not a security boundary: a digest is only useful if it matches
//! the values catalogued remotely.

use crate::error::{HashMapError, Result};
use std::path::{Path, PathBuf};

/// Compute the digest of an ordered file set.
///
/// Files are read in the caller-given order and fed into one MD5 stream,
/// equivalent to hashing the concatenation of their contents. The result
/// is order-sensitive: the same file set in a different order yields a
/// different digest, so callers that need reproducible digests must impose
/// a stable ordering (see [`compute_digest_sorted`]).
///
/// Returns [`HashMapError::EmptyFileSet`] for an empty input and
/// [`HashMapError::Io`] if any file is missing or unreadable at read time.
pub async fn compute_digest(paths: &[PathBuf]) -> Result<String> {
    if paths.is_empty() {
        return Err(HashMapError::EmptyFileSet);
    }

    let mut context = md5::Context::new();
    for path in paths {
        let bytes = tokio::fs::read(path).await?;
        context.consume(&bytes);
    }
    Ok(format!("{:x}", context.compute()))
}

/// Compute a digest with lexicographic path ordering applied first.
///
/// Same file set, same contents, same digest, regardless of how the caller
/// collected the paths.
pub async fn compute_digest_sorted(paths: &[PathBuf]) -> Result<String> {
    let mut sorted = paths.to_vec();
    sort_paths_lexicographic(&mut sorted);
    compute_digest(&sorted).await
}

/// Stable ordering for digest input paths.
pub fn sort_paths_lexicographic(paths: &mut [PathBuf]) {
    paths.sort();
}

/// Digest of a single file.
pub async fn compute_file_digest(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(format!("{:x}", md5::compute(&bytes)))
}
