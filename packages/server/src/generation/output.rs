//! Normalisation of raw model output.
//!
//! After normalisation a TITLE is one bare line and INTRODUCTION/BODY carry
//! exactly one container div; BODY never contains `<h1>`.

use super::SectionKind;

/// Normalise model output for a fixed blog section.
pub fn normalize_section(kind: SectionKind, raw: &str) -> String {
    let text = strip_code_fences(raw);
    match kind {
        SectionKind::Title => normalize_title(text),
        SectionKind::Introduction => ensure_container(text, "introduction"),
        SectionKind::Body => ensure_container(&demote_top_level_headings(text), "body"),
    }
}

/// Remove a surrounding markdown code fence (```` ```html ... ``` ````), if any.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`html`, `css`, ...) on the opening line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => return text,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn normalize_title(text: &str) -> String {
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();
    let line = strip_heading_marker(line);
    line.trim_matches(|c| matches!(c, '"' | '\'' | '\u{201c}' | '\u{201d}'))
        .trim()
        .to_string()
}

/// Drop a markdown ATX heading marker (`# `, `## `). A `#` that is part of
/// the title itself, as in `#1 Tip`, is kept.
fn strip_heading_marker(line: &str) -> &str {
    let rest = line.trim_start_matches('#');
    if rest.len() < line.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        line
    }
}

fn ensure_container(text: &str, class: &str) -> String {
    let marker = format!("<div class=\"{class}\">");
    if text.contains(&marker) {
        text.to_string()
    } else {
        format!("{marker}\n{text}\n</div>")
    }
}

fn demote_top_level_headings(text: &str) -> String {
    text.replace("<h1", "<h2")
        .replace("<H1", "<h2")
        .replace("</h1>", "</h2>")
        .replace("</H1>", "</h2>")
}
