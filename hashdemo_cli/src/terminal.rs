//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdout};

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners may allocate a TTY without anyone watching it
    if is_ci_environment() {
        return false;
    }

    env::var("DEBIAN_FRONTEND").unwrap_or_default() != "noninteractive"
}

/// Check if the terminal supports ANSI escape codes for colors and progress bars
pub fn supports_ansi() -> bool {
    if !is_interactive() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    #[cfg(windows)]
    {
        term != "dumb"
    }

    #[cfg(not(windows))]
    {
        !(term == "dumb" || term.is_empty())
    }
}

/// Check if stderr is connected to a terminal (for progress display)
pub fn stderr_is_terminal() -> bool {
    stderr().is_terminal()
}

/// Whether colored output should be used given the configured preference
///
/// Honors the `NO_COLOR` convention.
pub fn use_color(color_enabled: bool) -> bool {
    color_enabled && env::var_os("NO_COLOR").is_none() && supports_ansi()
}

fn is_ci_environment() -> bool {
    const CI_VARS: &[&str] = &[
        "CI",
        "CONTINUOUS_INTEGRATION",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "BUILDKITE",
        "TF_BUILD",
    ];

    CI_VARS.iter().any(|var| env::var_os(var).is_some())
}

/// Determine if progress bars should be shown by default
///
/// Progress goes to stderr, so both streams must be terminals with ANSI support.
pub fn should_show_progress_by_default() -> bool {
    is_interactive() && stderr_is_terminal() && supports_ansi()
}
