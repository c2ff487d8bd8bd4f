//! Word list scanning

use super::scanner::Scanner;
use super::{Outcome, SearchContext, SearchMode, SearchResult, SearchStrategy};
use crate::error::IoError;
use crate::hashing::{HashAlgorithm, TargetDigest};
use log::warn;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Lazily reads one candidate per line from a word list
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Invalid UTF-8 byte sequences
/// are dropped and surrounding whitespace is trimmed from each candidate.
/// After the first read error the iterator is fused.
#[derive(Debug)]
pub struct DictionaryCandidates {
    reader: BufReader<File>,
    path: PathBuf,
    buffer: Vec<u8>,
    pending: VecDeque<String>,
    failed: bool,
}

impl DictionaryCandidates {
    /// Open a word list for reading
    pub fn open(path: &Path) -> Result<Self, IoError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => IoError::permission_denied(path, e),
            _ => IoError::from_std(e).with_path(path),
        })?;

        Ok(Self {
            reader: BufReader::new(file),
            path: path.to_path_buf(),
            buffer: Vec::new(),
            pending: VecDeque::new(),
            failed: false,
        })
    }
}

impl Iterator for DictionaryCandidates {
    type Item = Result<String, IoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(candidate) = self.pending.pop_front() {
            return Some(Ok(candidate));
        }
        if self.failed {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                self.pending.extend(split_lines(&self.buffer));
                self.pending.pop_front().map(Ok)
            }
            Err(e) => {
                self.failed = true;
                Some(Err(IoError::from_std(e).with_path(&self.path)))
            }
        }
    }
}

/// Break one `\n`-terminated chunk into candidates
///
/// A chunk yields one candidate per `\r`-separated piece; the `\r` of a
/// trailing `\r\n` ends the line rather than starting a new one.
fn split_lines(raw: &[u8]) -> impl Iterator<Item = String> + '_ {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    raw.split(|&byte| byte == b'\r').map(decode_line)
}

/// Keep only the valid UTF-8 pieces, then trim surrounding whitespace
fn decode_line(raw: &[u8]) -> String {
    let decoded: String = raw.utf8_chunks().map(|chunk| chunk.valid()).collect();
    decoded.trim().to_string()
}

/// Dictionary search strategy
#[derive(Debug, Clone)]
pub struct DictionarySearch {
    path: Option<PathBuf>,
}

impl DictionarySearch {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A dictionary search with no word list; always ends in a read error
    pub fn without_path() -> Self {
        Self { path: None }
    }
}

impl SearchStrategy for DictionarySearch {
    fn mode(&self) -> SearchMode {
        SearchMode::Dictionary
    }

    fn search(
        &self,
        target: &TargetDigest,
        algorithm: HashAlgorithm,
        context: &SearchContext,
    ) -> SearchResult {
        let read_error =
            || SearchResult::immediate(Outcome::DictionaryReadError, algorithm, SearchMode::Dictionary);

        let Some(path) = &self.path else {
            warn!("Dictionary search requested without a word list");
            return read_error();
        };

        let candidates = match DictionaryCandidates::open(path) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Cannot open dictionary: {e}");
                return read_error();
            }
        };

        let mut scanner = Scanner::new(target, algorithm, SearchMode::Dictionary, context, None);
        for candidate in candidates {
            let candidate = match candidate {
                Ok(candidate) => candidate,
                Err(e) => {
                    warn!("Dictionary read failed mid-scan: {e}");
                    return read_error();
                }
            };
            if let ControlFlow::Break(outcome) = scanner.offer(&candidate, None) {
                return scanner.finish(outcome);
            }
        }

        scanner.finish(Outcome::NotFound)
    }
}
