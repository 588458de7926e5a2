/// Characters escaped with a backslash when they appear as literal runs.
pub const META_CHARS: [char; 15] = [
    '{', '}', '[', ']', '(', ')', '\\', '/', '+', '?', '$', '*', '^', '|', '.',
];

#[inline]
pub fn is_meta(c: char) -> bool {
    META_CHARS.contains(&c)
}

pub fn push_literal(out: &mut String, c: char) {
    if is_meta(c) {
        out.push('\\');
    }
    out.push(c);
}
