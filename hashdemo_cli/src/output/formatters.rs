use super::OutputFormatter;
use crate::progress::format_count;
use anyhow::Result;
use colored::*;
use hashdemo_core::{HashAlgorithm, Outcome, SearchResult};
use serde_json::{Map, Value, json};

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_result(&self, result: &SearchResult) -> Result<String> {
        let label = match &result.outcome {
            Outcome::Found(password) => self.colorize(password, |s| s.green().bold()),
            Outcome::DictionaryReadError | Outcome::AlgorithmUnavailable => {
                self.colorize(result.outcome.label(), |s| s.red())
            }
            other => self.colorize(other.label(), |s| s.yellow()),
        };

        let mut output = String::new();
        output.push_str(&format!("Result: {label}\n"));
        output.push_str(&format!(
            "Time Taken: {:.2} seconds\n",
            result.elapsed_seconds()
        ));
        output.push_str(&format!(
            "Candidates Tried: {}\n",
            format_count(result.candidates_tried)
        ));
        if result.hash_failures > 0 {
            output.push_str(&format!(
                "Hash Failures: {}\n",
                format_count(result.hash_failures)
            ));
        }

        Ok(output)
    }

    fn format_digests(
        &self,
        _plaintext: &str,
        digests: &[(HashAlgorithm, String)],
    ) -> Result<String> {
        let mut output = String::new();
        for (algorithm, digest) in digests {
            let algo_str = self.colorize(&algorithm.to_string(), |s| s.yellow());
            let digest_str = self.colorize(digest, |s| s.cyan());
            output.push_str(&format!("{algo_str}: {digest_str}\n"));
        }
        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render(&self, value: &Value) -> Result<String> {
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &SearchResult) -> Result<String> {
        let mut value = serde_json::to_value(result)?;
        if let Value::Object(object) = &mut value {
            object.insert("label".to_string(), json!(result.outcome.label()));
        }
        self.render(&value)
    }

    fn format_digests(
        &self,
        plaintext: &str,
        digests: &[(HashAlgorithm, String)],
    ) -> Result<String> {
        let digests: Map<String, Value> = digests
            .iter()
            .map(|(algorithm, digest)| (algorithm.id().to_string(), json!(digest)))
            .collect();

        self.render(&json!({
            "plaintext": plaintext,
            "digests": digests,
        }))
    }
}
