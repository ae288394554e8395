// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Header cells: sheets pad labels and sometimes wrap them over two lines.
pub fn clean_header(s: &str) -> String {
    normalize_ws(s.trim_start_matches('\u{feff}'))
}

/// Data cells: trimmed, inner spacing untouched.
pub fn clean_cell(s: &str) -> String {
    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_collapses() {
        assert_eq!(clean_header("  學校\n名稱 "), "學校 名稱");
        assert_eq!(clean_header("\u{feff}學年度"), "學年度");
    }

    #[test]
    fn cell_keeps_inner_spacing() {
        assert_eq!(clean_cell("  國文 前標  "), "國文 前標");
    }
}
