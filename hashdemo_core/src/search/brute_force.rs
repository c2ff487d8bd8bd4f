//! Exhaustive enumeration over a fixed alphabet

use super::scanner::Scanner;
use super::{Outcome, SearchContext, SearchMode, SearchResult, SearchStrategy};
use crate::error::ValidationError;
use crate::hashing::{HashAlgorithm, TargetDigest};
use log::trace;
use std::collections::HashSet;
use std::ops::ControlFlow;

/// Lowercase ASCII letters followed by digits
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Longest candidate tried by default
pub const DEFAULT_MAX_LENGTH: usize = 6;

/// Hard upper bound on the configurable length
pub const MAX_LENGTH_CEILING: usize = 8;

/// Alphabet and length bound for brute-force enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceConfig {
    alphabet: Vec<char>,
    max_length: usize,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl BruteForceConfig {
    /// Build a configuration, rejecting empty or repeating alphabets and
    /// lengths outside `1..=MAX_LENGTH_CEILING`
    pub fn new(alphabet: &str, max_length: usize) -> Result<Self, ValidationError> {
        if alphabet.is_empty() {
            return Err(ValidationError::invalid_configuration(
                "alphabet must not be empty",
            ));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = alphabet.chars().find(|c| !seen.insert(*c)) {
            return Err(ValidationError::invalid_configuration(&format!(
                "alphabet contains '{duplicate}' more than once"
            )));
        }

        if !(1..=MAX_LENGTH_CEILING).contains(&max_length) {
            return Err(ValidationError::invalid_configuration(&format!(
                "max_length must be between 1 and {MAX_LENGTH_CEILING}, got {max_length}"
            )));
        }

        Ok(Self {
            alphabet: alphabet.chars().collect(),
            max_length,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of candidates over all lengths, saturating at `u64::MAX`
    pub fn search_space(&self) -> u64 {
        let base = self.alphabet.len() as u64;
        (1..=self.max_length as u32)
            .map(|length| base.saturating_pow(length))
            .fold(0u64, u64::saturating_add)
    }

    /// Lazily enumerate every candidate in search order
    pub fn candidates(&self) -> BruteForceCandidates {
        BruteForceCandidates::new(self.alphabet.clone(), self.max_length)
    }
}

/// Odometer over the alphabet: shorter candidates first, and within a length
/// the last position varies fastest in alphabet order
#[derive(Debug, Clone)]
pub struct BruteForceCandidates {
    alphabet: Vec<char>,
    max_length: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl BruteForceCandidates {
    pub fn new(alphabet: Vec<char>, max_length: usize) -> Self {
        let exhausted = alphabet.is_empty() || max_length == 0;
        Self {
            alphabet,
            max_length,
            indices: vec![0],
            exhausted,
        }
    }

    /// Length of the candidate the next call to `next` returns
    pub fn current_length(&self) -> usize {
        self.indices.len()
    }

    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.alphabet.len() {
                return;
            }
            self.indices[position] = 0;
        }

        // Every position wrapped: move to the next length
        if self.indices.len() == self.max_length {
            self.exhausted = true;
        } else {
            self.indices.push(0);
            trace!("Brute force advancing to length {}", self.indices.len());
        }
    }
}

impl Iterator for BruteForceCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let candidate = self.indices.iter().map(|&i| self.alphabet[i]).collect();
        self.advance();
        Some(candidate)
    }
}

/// Brute-force search strategy
#[derive(Debug, Clone, Default)]
pub struct BruteForceSearch {
    config: BruteForceConfig,
}

impl BruteForceSearch {
    pub fn new(config: BruteForceConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for BruteForceSearch {
    fn mode(&self) -> SearchMode {
        SearchMode::BruteForce
    }

    fn search(
        &self,
        target: &TargetDigest,
        algorithm: HashAlgorithm,
        context: &SearchContext,
    ) -> SearchResult {
        let mut scanner = Scanner::new(
            target,
            algorithm,
            SearchMode::BruteForce,
            context,
            Some(self.config.search_space()),
        );

        let mut candidates = self.config.candidates();
        loop {
            let length = candidates.current_length();
            let Some(candidate) = candidates.next() else {
                break;
            };
            if let ControlFlow::Break(outcome) = scanner.offer(&candidate, Some(length)) {
                return scanner.finish(outcome);
            }
        }

        scanner.finish(Outcome::SearchSpaceExceeded)
    }
}
