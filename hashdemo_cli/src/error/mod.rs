use colored::*;
use hashdemo_core::Outcome;
use std::error::Error as StdError;
use std::fmt;

/// CLI-specific error type with semantic exit codes
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Additional context information
    context: Vec<(String, String)>,

    /// Suggestions for recovery
    pub suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    Misuse,
    Filesystem,
    Unavailable,
}

/// Semantic exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Password recovered, or a non-search command succeeded
    Success = 0,
    /// Search ended without a match, or an internal failure
    GeneralError = 1,
    Misuse = 2,
    FilesystemError = 4,
    AlgorithmUnavailable = 5,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&Outcome> for ExitCode {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Found(_) => ExitCode::Success,
            Outcome::NotFound | Outcome::SearchSpaceExceeded | Outcome::Cancelled => {
                ExitCode::GeneralError
            }
            Outcome::DictionaryReadError => ExitCode::FilesystemError,
            Outcome::AlgorithmUnavailable => ExitCode::AlgorithmUnavailable,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Extension trait for adding context to errors
pub trait ErrorContext {
    fn with_context(self, key: &str, value: &str) -> Self;
    fn with_suggestion(self, suggestion: &str) -> Self;
    fn with_source(self, source: Box<dyn StdError + Send + Sync>) -> Self;
}

impl CliError {
    fn new(message: &str, category: ErrorCategory) -> Self {
        Self {
            message: message.to_string(),
            category,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self::new(message, ErrorCategory::General)
    }

    /// Create a command misuse error
    pub fn misuse(message: &str) -> Self {
        Self::new(message, ErrorCategory::Misuse)
            .with_suggestion("Run 'hashdemo --help' for usage information")
    }

    /// Create a misuse error for a name that is not one of `known`,
    /// suggesting the closest match
    pub fn unknown_name(kind: &str, given: &str, known: &[&str]) -> Self {
        let mut error = Self::misuse(&format!("Unknown {kind}: {given}"));

        if let Some(closest) = known
            .iter()
            .map(|candidate| (levenshtein_distance(given, candidate), candidate))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate)
        {
            error
                .suggestions
                .insert(0, format!("Did you mean '{closest}'?"));
        }

        error
    }

    /// Create a filesystem error
    pub fn filesystem(message: &str) -> Self {
        let mut error = Self::new(message, ErrorCategory::Filesystem);

        if message.contains("not found") {
            error
                .suggestions
                .push("Check that the word list exists".to_string());
        } else if message.contains("permission") || message.contains("denied") {
            error.suggestions.push("Check file permissions".to_string());
        }

        error
    }

    /// Create an error for a digest algorithm missing from this build
    pub fn unavailable(message: &str) -> Self {
        Self::new(message, ErrorCategory::Unavailable)
            .with_suggestion("Rebuild with the matching cargo feature enabled")
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General => ExitCode::GeneralError,
            ErrorCategory::Misuse => ExitCode::Misuse,
            ErrorCategory::Filesystem => ExitCode::FilesystemError,
            ErrorCategory::Unavailable => ExitCode::AlgorithmUnavailable,
        }
    }

    fn prefix(&self) -> &'static str {
        match self.category {
            ErrorCategory::General => "Error",
            ErrorCategory::Misuse => "Usage Error",
            ErrorCategory::Filesystem => "File Error",
            ErrorCategory::Unavailable => "Unavailable",
        }
    }

    /// Format the error for user display
    pub fn format_for_user(&self, debug: bool) -> String {
        let mut output = String::new();

        let prefix = match self.category {
            ErrorCategory::Misuse => self.prefix().yellow(),
            _ => self.prefix().red(),
        };
        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if !self.context.is_empty() {
            output.push_str("\nContext:\n");
            for (key, value) in &self.context {
                output.push_str(&format!("  {}: {}\n", key.bold(), value));
            }
        }

        // Error chain in debug mode
        if debug && let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prefix(), self.message)?;

        for (key, value) in &self.context {
            write!(f, " ({key}: {value})")?;
        }

        Ok(())
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl ErrorContext for CliError {
    fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestions.push(suggestion.to_string());
        self
    }

    fn with_source(mut self, source: Box<dyn StdError + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }
}

/// Convert anyhow errors to CLI errors
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line
        Self::general(&format!("{error:#}"))
    }
}

/// Map core library errors onto exit code categories
impl From<hashdemo_core::Error> for CliError {
    fn from(error: hashdemo_core::Error) -> Self {
        use hashdemo_core::Error;

        let message = error.to_string();
        let cli_error = match &error {
            Error::Validation(_) => Self::misuse(&message),
            Error::Io(_) => Self::filesystem(&message),
            Error::Hash(_) => Self::unavailable(&message),
            Error::SearchInProgress | Error::WorkerLost => Self::general(&message),
        };
        cli_error.with_source(Box::new(error))
    }
}

/// Simple Levenshtein distance for name suggestions
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();
    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for (i, row) in matrix.iter_mut().enumerate().take(len1 + 1) {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate().take(len2 + 1) {
        *cell = j;
    }

    for (i, c1) in s1_chars.iter().enumerate() {
        let i1 = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let j1 = j + 1;
            let cost = if c1 == c2 { 0 } else { 1 };
            matrix[i1][j1] = std::cmp::min(
                std::cmp::min(matrix[i][j1] + 1, matrix[i1][j] + 1),
                matrix[i][j] + cost,
            );
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashdemo_core::error::ValidationError;

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(
            ExitCode::from(&Outcome::Found("abc".to_string())),
            ExitCode::Success
        );
        assert_eq!(ExitCode::from(&Outcome::NotFound).code(), 1);
        assert_eq!(ExitCode::from(&Outcome::SearchSpaceExceeded).code(), 1);
        assert_eq!(ExitCode::from(&Outcome::Cancelled).code(), 1);
        assert_eq!(ExitCode::from(&Outcome::DictionaryReadError).code(), 4);
        assert_eq!(ExitCode::from(&Outcome::AlgorithmUnavailable).code(), 5);
    }

    #[test]
    fn test_unknown_name_suggests_closest() {
        let error = CliError::unknown_name(
            "configuration key",
            "search.max_lenght",
            &["search.max_length", "search.alphabet"],
        );

        assert_eq!(error.exit_code(), ExitCode::Misuse);
        assert_eq!(error.suggestions[0], "Did you mean 'search.max_length'?");
    }

    #[test]
    fn test_unknown_name_without_close_match() {
        let error = CliError::unknown_name("configuration key", "zzz", &["search.alphabet"]);
        assert!(!error.suggestions.iter().any(|s| s.starts_with("Did you mean")));
    }

    #[test]
    fn test_core_validation_error_is_misuse() {
        let core = hashdemo_core::Error::from(ValidationError::missing_field("hash"));
        let error = CliError::from(core);

        assert_eq!(error.exit_code(), ExitCode::Misuse);
        assert!(error.to_string().starts_with("Usage Error"));
    }

    #[test]
    fn test_format_for_user_includes_context_and_suggestions() {
        let error = CliError::misuse("Dictionary mode needs a word list")
            .with_context("mode", "dictionary");
        let formatted = error.format_for_user(false);

        assert!(formatted.contains("Dictionary mode needs a word list"));
        assert!(formatted.contains("mode"));
        assert!(formatted.contains("hashdemo --help"));
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("md5", "md5"), 0);
        assert_eq!(levenshtein_distance("sha", "sha1"), 1);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }
}
