/// Center `text` in a field of `width` chars. Input at or over the target
/// width is hard-truncated to exactly `width`, never expanded. Widths are
/// counted in chars, not bytes.
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let gap = width - len;
    let left = gap / 2;
    let right = gap - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Wrap `text` to lines of at most `width` chars, breaking on whitespace.
/// A single word longer than `width` is hard-truncated to `width`. Text
/// already within the width is returned as a single untouched line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        if current.is_empty() {
            if word_len > width {
                lines.push(word.chars().take(width).collect());
            } else {
                current.push_str(word);
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_len > width {
                lines.push(word.chars().take(width).collect());
            } else {
                current.push_str(word);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Uppercase the first char and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Replace every non-ASCII-alphanumeric char with `_`, for safe file names.
pub fn sanitize_file_stem(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
