//! Plain-text layout helpers shared by the screens.

/// Number of characters in `s`.
pub(crate) fn width_of(s: &str) -> usize {
    s.chars().count()
}

/// Cut `s` to at most `width` characters, marking the cut with `~`.
pub(crate) fn truncate(s: &str, width: usize) -> String {
    if width_of(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('~');
    out
}

/// Center `s` in a field of `width` characters, truncating if needed.
pub(crate) fn center(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let gap = width - width_of(&s);
    let left = gap / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(gap - left))
}

/// Pad `s` with spaces on the right to `width` characters.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let len = width_of(s);
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if width_of(&current) + 1 + width_of(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A title underlined with `rule`.
pub(crate) fn heading(title: &str, rule: char) -> String {
    format!(
        "{title}\n{}\n",
        rule.to_string().repeat(width_of(title).max(1))
    )
}
