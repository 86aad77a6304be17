use regex::{RegexSet, RegexSetBuilder};

use crate::safety::defaults::default_blocklist;

/// Checks candidate stty command strings against a set of blocked patterns.
pub struct CommandFilter {
    patterns: RegexSet,
    pattern_sources: Vec<String>,
    pattern_reasons: Vec<String>,
}

/// Information about a blocked command.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BlockedCommand {
    pub blocked: bool,
    pub pattern: String,
    pub reason: String,
    pub command: String,
}

impl BlockedCommand {
    /// Serialize to a single JSON object string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"blocked\":true,\"command\":{:?}}}", self.command)
        })
    }
}

impl CommandFilter {
    /// Create a new filter from a list of (pattern, reason) tuples.
    /// All patterns match case-insensitively; the RegexSet is compiled once
    /// for efficient multi-pattern matching.
    pub fn new(patterns: &[(String, String)]) -> Result<Self, regex::Error> {
        let (regexes, reasons): (Vec<_>, Vec<_>) = patterns.iter().cloned().unzip();
        let set = RegexSetBuilder::new(&regexes).case_insensitive(true).build()?;
        Ok(Self {
            patterns: set,
            pattern_sources: regexes,
            pattern_reasons: reasons,
        })
    }

    /// Build a filter over the default stty blocklist.
    pub fn from_defaults() -> Result<Self, regex::Error> {
        Self::new(&default_blocklist())
    }

    /// Check if a command is blocked. Returns Some(BlockedCommand) if any
    /// pattern matches (the first match is reported), None if allowed.
    pub fn check(&self, command: &str) -> Option<BlockedCommand> {
        let matches: Vec<_> = self.patterns.matches(command).into_iter().collect();
        if matches.is_empty() {
            None
        } else {
            Some(BlockedCommand {
                blocked: true,
                pattern: self.pattern_sources[matches[0]].clone(),
                reason: self.pattern_reasons[matches[0]].clone(),
                command: command.to_string(),
            })
        }
    }
}
