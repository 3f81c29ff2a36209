//! Source preprocessing before pattern matching.
//!
//! Strips comments and non-code markup regions while preserving line
//! structure, so line-anchored patterns behave the same on the
//! stripped text. The strip is textual and context-free; a comment
//! marker inside a string literal is an accepted limitation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// How a file's text is cleaned before matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocess {
    /// Strip C-like block and line comments
    Code,
    /// Strip template/style element bodies, then C-like comments
    Markup,
    /// No stripping; hash-comment formats rely on line-anchored
    /// patterns never matching commented lines
    Plain,
}

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid block comment pattern"));

// The character before `//` must not be a colon, so `https://` inside
// literals survives the strip.
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(^|[^:\n])//[^\n]*").expect("invalid line comment pattern"));

static TEMPLATE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<template\b[^>]*>.*?</template>").expect("invalid template pattern")
});

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").expect("invalid style pattern"));

/// Clean source text for matching according to the language's mode.
pub fn preprocess(source: &str, mode: Preprocess) -> String {
    match mode {
        Preprocess::Code => strip_comments(source),
        Preprocess::Markup => strip_comments(&strip_markup_blocks(source)),
        Preprocess::Plain => source.to_string(),
    }
}

/// Strip `/* */` and `//` comments, keeping the newlines of removed
/// regions.
pub fn strip_comments(source: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(source, blank_keeping_newlines);
    LINE_COMMENT.replace_all(&without_blocks, "$1").into_owned()
}

/// Remove `<template>` and `<style>` element bodies from markup-hybrid
/// source, keeping newlines.
pub fn strip_markup_blocks(source: &str) -> String {
    let without_templates = TEMPLATE_BLOCK.replace_all(source, blank_keeping_newlines);
    STYLE_BLOCK
        .replace_all(&without_templates, blank_keeping_newlines)
        .into_owned()
}

fn blank_keeping_newlines(caps: &Captures) -> String {
    "\n".repeat(caps[0].matches('\n').count())
}
