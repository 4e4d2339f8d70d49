// src/extract/engine.rs
// The two rule-evaluation strategies: first-match-wins pattern lists for
// single-valued fields, collect-all vocabulary scans for tag fields.
// Keep them separate; unifying them would change multi-valued output.

use std::collections::BTreeSet;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::core::sanitize::normalize_ws;

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("rule table pattern must compile")
}

/// One ordered pattern in a single-valued field's rule list.
/// The extracted value is capture group 1, or `group1 - group2` when the
/// pattern captures a range pair, or the whole match if nothing is captured.
pub struct PatternRule {
    pub name: &'static str,
    re: Regex,
}

impl PatternRule {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self { name, re: compile(pattern) }
    }

    pub fn find(&self, text: &str) -> Option<String> {
        let caps = self.re.captures(text)?;
        let value = match (caps.get(1), caps.get(2)) {
            (Some(a), Some(b)) => {
                format!("{} - {}", normalize_ws(a.as_str()), normalize_ws(b.as_str()))
            }
            (Some(a), None) => normalize_ws(a.as_str()),
            _ => normalize_ws(caps.get(0)?.as_str()),
        };
        (!value.is_empty()).then_some(value)
    }
}

/// Run an ordered rule list; the first rule that matches wins.
/// List order is the priority order.
pub fn first_match(rules: &[PatternRule], text: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        let value = rule.find(text)?;
        debug!("rule {} matched: {value:?}", rule.name);
        Some(value)
    })
}

/// One controlled-vocabulary label with the phrase patterns that imply it.
pub struct TagRule {
    pub label: &'static str,
    patterns: Vec<Regex>,
}

impl TagRule {
    pub fn new(label: &'static str, patterns: &[&str]) -> Self {
        Self { label, patterns: patterns.iter().map(|p| compile(p)).collect() }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// Collect every vocabulary label whose patterns occur in the text.
/// No negation handling: a keyword in an unrelated context still tags.
pub fn collect_tags(rules: &[TagRule], text: &str) -> BTreeSet<String> {
    rules
        .iter()
        .filter(|rule| rule.matches(text))
        .map(|rule| s!(rule.label))
        .collect()
}

pub fn compile_markers(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

/// Text after the earliest start marker, up to the earliest end marker in
/// what follows (or end of input). None when no start marker matches or the
/// section is empty.
pub fn slice_between_markers(text: &str, starts: &[Regex], ends: &[Regex]) -> Option<String> {
    let start = starts
        .iter()
        .filter_map(|re| re.find(text))
        .min_by_key(|m| m.start())?;

    let tail = &text[start.end()..];
    let end_pos = ends
        .iter()
        .filter_map(|re| re.find(tail))
        .map(|m| m.start())
        .min()
        .unwrap_or(tail.len());

    let section = normalize_ws(&tail[..end_pos]);
    (!section.is_empty()).then_some(section)
}
