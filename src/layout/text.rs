//! Label wrapping with an average-glyph-width budget.

/// How many characters fit in `width_px`, never less than one.
pub fn max_chars(width_px: f64, glyph_width: f64) -> usize {
    let n = (width_px / glyph_width).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Greedy word wrap. Words are only split when a single word is longer
/// than `max_chars` on its own.
pub fn wrap_label(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len <= max_chars {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        // Oversized word: hard-split, keep the tail open for the next word.
        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(max_chars).peekable();
        while let Some(chunk) = chunks.next() {
            let piece: String = chunk.iter().collect();
            if chunks.peek().is_some() {
                lines.push(piece);
            } else {
                current_len = chunk.len();
                current = piece;
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Baseline of the first of `lines` lines so the block sits centered on
/// `center_y`, nudged down by `nudge` to account for glyph ascent.
pub fn first_baseline(center_y: f64, lines: usize, line_height: f64, nudge: f64) -> f64 {
    let extra = lines.saturating_sub(1) as f64;
    center_y + nudge - extra * line_height / 2.0
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_text.rs"]
mod tests;
