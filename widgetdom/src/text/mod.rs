use unicode_width::UnicodeWidthStr;

/// Display width of the widest line.
pub fn display_width(s: &str) -> usize {
    s.lines().map(|line| line.width()).max().unwrap_or(0)
}

pub fn line_count(s: &str) -> usize {
    s.lines().count().max(1)
}
