//! Line wrapping and the armor envelope.
//!
//! The armored form wraps the flat symbol string between a header and a
//! footer line of boundary markers carrying a descriptor:
//!
//! ```text
//! 🟦🟦🟦🟦🟦🟦🟦🧧🟩🟦🟦🟦🟦🟦🟦🟦
//! <wrapped body lines>
//! 🟦🟦🟦🟦🟦🟦🟦🧧🟥🟦🟦🟦🟦🟦🟦🟦
//! ```
//!
//! Parsing is opportunistic: input that does not match the envelope shape
//! is treated as a bare body.

use crate::alphabet::{Alphabet, ArmorSymbols};

/// Inserts a line break after every `cols` symbols, never after the final
/// symbol. A column count of zero leaves the string untouched; callers
/// disable wrapping before reaching this point.
pub fn wrap(flat: &str, cols: usize) -> String {
    if cols == 0 {
        return flat.to_string();
    }

    let mut out = String::with_capacity(flat.len() + flat.len() / (cols * 4) + 1);
    for (i, c) in flat.chars().enumerate() {
        if i > 0 && i % cols == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}

/// Wraps a flat symbol string in an armor envelope at `cols` columns.
///
/// The descriptor defaults to the alphabet's built-in descriptor and is
/// truncated to `cols / 2 - 2` symbols. Header and footer content are each
/// centered in a line of `cols` boundary markers; content longer than the
/// line gets no markers and simply overflows.
pub fn armor(flat: &str, descriptor: Option<&str>, cols: usize, alphabet: &Alphabet) -> String {
    let symbols = alphabet.armor();

    let max_descriptor = (cols / 2).saturating_sub(2);
    let descriptor: String = descriptor
        .unwrap_or(&symbols.descriptor)
        .chars()
        .take(max_descriptor)
        .collect();

    let header = boundary_line(&descriptor, symbols.begin, symbols.marker, cols);
    let footer = boundary_line(&descriptor, symbols.end, symbols.marker, cols);

    format!("{header}\n{}\n{footer}", wrap(flat, cols))
}

/// Centers `descriptor` plus an edge symbol inside a run of `cols` markers:
/// floor padding on the left, ceil padding on the right.
fn boundary_line(descriptor: &str, edge: char, marker: char, cols: usize) -> String {
    let content_len = descriptor.chars().count() + 1;
    let pad = cols.saturating_sub(content_len);
    let left = pad / 2;
    let right = pad - left;

    let mut line = String::with_capacity((cols.max(content_len) + 1) * 4);
    for _ in 0..left {
        line.push(marker);
    }
    line.push_str(descriptor);
    line.push(edge);
    for _ in 0..right {
        line.push(marker);
    }
    line
}

/// Extracts the body of an armor envelope, or falls back to the whole
/// input when no envelope is recognized. Line breaks are removed either
/// way; the result is the flat ordered symbol sequence.
pub fn dearmor(input: &str, alphabet: &Alphabet) -> Vec<char> {
    let chars: Vec<char> = input.chars().collect();
    let body = parse_envelope(&chars, alphabet.armor()).unwrap_or(chars.as_slice());
    body.iter().copied().filter(|&c| c != '\n').collect()
}

/// Structural envelope parser.
///
/// Recognizes a leading marker run of length k, a single-line descriptor
/// closed by the begin symbol and another k-marker run, a body, and a
/// footer repeating the k-marker run, the identical descriptor and the end
/// symbol. One extra marker is tolerated at each envelope boundary, which
/// is how odd content widths come out of the centering above. No regex
/// engine is involved; back-references make this cheaper by hand.
fn parse_envelope<'a>(chars: &'a [char], symbols: &ArmorSymbols) -> Option<&'a [char]> {
    let marker = symbols.marker;

    // Header: maximal leading marker run, then the descriptor up to the
    // first begin symbol whose tail matches the run again.
    let run = chars.iter().take_while(|&&c| c == marker).count();

    let mut at = run;
    let (descriptor, body_start) = loop {
        match chars.get(at) {
            None | Some('\n') => return None,
            Some(&c) if c == symbols.begin => {
                if let Some(next) = match_run_to_newline(chars, at + 1, marker, run) {
                    break (&chars[run..at], next);
                }
                at += 1;
            }
            Some(_) => at += 1,
        }
    };

    // Footer, parsed from the end: k or k+1 trailing markers, the end
    // symbol, the descriptor, then k markers.
    let mut end = chars.len();
    let tail = chars.iter().rev().take_while(|&&c| c == marker).count();
    if tail != run && tail != run + 1 {
        return None;
    }
    end -= tail;

    if end == 0 || chars[end - 1] != symbols.end {
        return None;
    }
    end -= 1;

    if end < descriptor.len() + run || &chars[end - descriptor.len()..end] != descriptor {
        return None;
    }
    end -= descriptor.len();

    if chars[end - run..end].iter().any(|&c| c != marker) {
        return None;
    }
    end -= run;

    if body_start > end {
        return None;
    }
    Some(&chars[body_start..end])
}

/// Matches `run` markers, at most one extra marker, then a line break.
/// Returns the index just past the line break.
fn match_run_to_newline(chars: &[char], mut at: usize, marker: char, run: usize) -> Option<usize> {
    for _ in 0..run {
        if chars.get(at) != Some(&marker) {
            return None;
        }
        at += 1;
    }
    if chars.get(at) == Some(&marker) && chars.get(at + 1) == Some(&'\n') {
        at += 1;
    }
    if chars.get(at) == Some(&'\n') {
        Some(at + 1)
    } else {
        None
    }
}
