//! Anchor slugs for TOC links.
//!
//! Native slugs are the engine's own, injection-safe anchors. External slugs
//! reproduce what another renderer generates for the same heading, through
//! the [`ExternalSlugger`] capability.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::AnchorDialect;
use crate::markdown::toc::sanitize::strip_zero_width;

lazy_static! {
    // Two or more consecutive dots
    static ref DOT_RUN: Regex = Regex::new(r"\.{2,}").unwrap();

    // Keycap sequences first so their base character goes with them
    static ref EMOJI: Regex = Regex::new(
        r"[#*0-9]\x{FE0F}?\x{20E3}|\p{Extended_Pictographic}|[\x{FE0E}\x{FE0F}\x{200D}]"
    ).unwrap();

    // Everything GitHub drops: anything but letters, marks, numbers,
    // connector punctuation, space and hyphen
    static ref GITHUB_DISALLOWED: Regex = Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc} \-]").unwrap();
}

/// Which slug algorithm a link uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugMode {
    Native,
    External,
}

/// Capability computing another platform's heading anchor.
///
/// `repetition` is 0 for the first heading producing a given slug and
/// counts up for later duplicates.
pub trait ExternalSlugger: Send + Sync {
    fn slug(&self, text: &str, repetition: usize) -> String;
}

/// GitHub-compatible anchors
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubSlugger;

impl ExternalSlugger for GithubSlugger {
    fn slug(&self, text: &str, repetition: usize) -> String {
        let lowered: String = text.trim().to_lowercase().nfc().collect();
        let without_emoji = EMOJI.replace_all(&lowered, "");
        let visible = strip_zero_width(&without_emoji);
        let kept = GITHUB_DISALLOWED.replace_all(&visible, "");
        let mut slug = kept.replace(' ', "-");

        if repetition > 0 {
            slug.push_str(&format!("-{}", repetition));
        }

        urlencoding::encode(&slug).into_owned()
    }
}

/// Jekyll/kramdown style anchors: transliterated ASCII, hyphen separated
#[derive(Debug, Clone, Copy, Default)]
pub struct JekyllSlugger;

impl ExternalSlugger for JekyllSlugger {
    fn slug(&self, text: &str, repetition: usize) -> String {
        let base = slug::slugify(strip_zero_width(text));
        if repetition > 0 {
            format!("{}-{}", base, repetition)
        } else {
            base
        }
    }
}

/// The built-in slugger for a configured dialect
pub fn slugger_for(dialect: AnchorDialect) -> &'static dyn ExternalSlugger {
    match dialect {
        AnchorDialect::Github => &GithubSlugger,
        AnchorDialect::Jekyll => &JekyllSlugger,
    }
}

/// Safe same-document anchor for `text`.
///
/// NFC-normalizes, drops zero-width characters, runs of dots and path
/// separators, then percent-encodes everything outside the URI unreserved set.
pub fn native_slug(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    let visible = strip_zero_width(&normalized);
    let without_dots = DOT_RUN.replace_all(&visible, "");
    let without_separators: String = without_dots
        .chars()
        .filter(|c| *c != '/' && *c != '\\')
        .collect();

    // Dropping a separator can join dots that were apart ("./.")
    let flattened = DOT_RUN.replace_all(&without_separators, "");
    urlencoding::encode(&flattened).into_owned()
}

/// Slug `text` in the given mode; external slugs carry no duplicate suffix
pub fn slugify(text: &str, mode: SlugMode, external: &dyn ExternalSlugger) -> String {
    match mode {
        SlugMode::Native => native_slug(text),
        SlugMode::External => external.slug(text, 0),
    }
}

/// Per-build anchor state: the mode in effect and the duplicate counters
/// for external slugs.
pub struct AnchorGenerator<'a> {
    mode: SlugMode,
    external: &'a dyn ExternalSlugger,
    occurrences: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl<'a> AnchorGenerator<'a> {
    pub fn new(mode: SlugMode, external: &'a dyn ExternalSlugger) -> Self {
        Self {
            mode,
            external,
            occurrences: HashMap::new(),
            emitted: HashSet::new(),
        }
    }

    /// Anchor for the next heading of the build
    pub fn next_anchor(&mut self, text: &str) -> String {
        match self.mode {
            SlugMode::Native => native_slug(text),
            SlugMode::External => self.next_external(text),
        }
    }

    fn next_external(&mut self, text: &str) -> String {
        let base = self.external.slug(text, 0);
        let mut repetition = self.occurrences.get(&base).copied().unwrap_or(0);
        let mut candidate = if repetition == 0 {
            base.clone()
        } else {
            self.external.slug(text, repetition)
        };

        // A literal "intro-1" heading may already own the suffixed slug
        while self.emitted.contains(&candidate) {
            repetition += 1;
            candidate = self.external.slug(text, repetition);
        }

        self.occurrences.insert(base, repetition + 1);
        self.emitted.insert(candidate.clone());
        candidate
    }
}
