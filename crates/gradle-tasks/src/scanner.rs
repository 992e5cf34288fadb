//! Line scanner for Gradle task declarations.
//!
//! Recognizes one-line declarations of the form `task <name>(...)` in
//! `build.gradle` files. This is plain text scanning, not Groovy parsing:
//! a declaration whose `(` lands on a later line is not recognized.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Matches the `task ` keyword at the start of a trimmed line, ASCII case-insensitively.
static RE_TASK_KEYWORD: OnceLock<Regex> = OnceLock::new();

fn re_task_keyword() -> &'static Regex {
    RE_TASK_KEYWORD.get_or_init(|| Regex::new(r"(?i-u)^task ").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `(` follows the task name on the same line.
    MissingParen,
    /// Nothing but whitespace between the keyword and `(`.
    EmptyName,
}

/// A line that starts with the `task` keyword but declares no target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 0-based line number.
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Target names in first-seen order, without duplicates.
    pub targets: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

/// Extracts task target names from the text of one Gradle file.
pub fn extract_targets(content: &str) -> Vec<String> {
    scan_targets(content).targets
}

/// Like [`extract_targets`], also reporting keyword lines that were skipped.
///
/// Only newline-terminated lines are scanned; text after the last `\n` is
/// ignored.
pub fn scan_targets(content: &str) -> ScanReport {
    let mut report = ScanReport::default();
    let mut seen: HashSet<&str> = HashSet::new();

    let lines = content
        .split_inclusive('\n')
        .enumerate()
        .filter_map(|(idx, raw)| raw.strip_suffix('\n').map(|line| (idx, line)));

    for (line_idx, raw) in lines {
        let line = raw.trim();
        if line.is_empty() || !re_task_keyword().is_match(line) {
            continue;
        }

        // The keyword match guarantees a space.
        let Some(space) = line.find(' ') else {
            continue;
        };
        let name_start = space + 1;

        let Some(paren) = line[name_start..].find('(') else {
            tracing::trace!("line {}: task declaration without '('", line_idx);
            report.skipped.push(SkippedLine {
                line: line_idx,
                reason: SkipReason::MissingParen,
            });
            continue;
        };

        let name = line[name_start..name_start + paren].trim();
        if name.is_empty() {
            tracing::trace!("line {}: task declaration without a name", line_idx);
            report.skipped.push(SkippedLine {
                line: line_idx,
                reason: SkipReason::EmptyName,
            });
            continue;
        }

        tracing::trace!("found target '{}' on line {}", name, line_idx);
        if seen.insert(name) {
            report.targets.push(name.to_string());
        }
    }

    report
}
