mod compiled;
mod error;
mod escape;

pub use compiled::InferredPattern;
pub use error::{RenderError, RenderResult};
pub use escape::{META_CHARS, is_meta};

use regex::{Regex, RegexBuilder};

use crate::shape::{ClassSymbol, RunToken, Shape};

/// Compiled-program budget; long exact runs such as `\d{20000,20000}` must still compile.
pub const REGEX_SIZE_LIMIT: usize = 256 * (1 << 20);

#[tracing::instrument(level = "trace", skip(shape), fields(shape = %shape))]
pub fn render(shape: &Shape) -> String {
    let mut out = String::with_capacity(shape.len() * 8);
    for token in shape.tokens() {
        push_token(&mut out, token);
    }
    out
}

fn push_token(out: &mut String, token: &RunToken) {
    match token.symbol() {
        ClassSymbol::Digit => out.push_str(r"\d"),
        ClassSymbol::LowerLetter => out.push_str("[a-z]"),
        ClassSymbol::UpperLetter => out.push_str("[A-Z]"),
        ClassSymbol::Literal(c) => escape::push_literal(out, c),
    }
    if !token.is_singleton() {
        out.push_str(&format!("{{{},{}}}", token.min(), token.max()));
    }
}

/// Compiles a rendered pattern for full-string matching.
///
/// Unicode mode is off so `\d` means ASCII digits only, matching the classifier.
/// Non-ASCII literals still match as themselves.
pub fn compile(source: &str) -> RenderResult<Regex> {
    let anchored = format!("^(?:{})$", source);
    RegexBuilder::new(&anchored)
        .unicode(false)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|err| RenderError::Compile {
            pattern: source.to_string(),
            error: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::build_shape;

    #[test]
    fn renders_classes_and_quantifiers() {
        assert_eq!(render(&build_shape("abc123")), r"[a-z]{3,3}\d{3,3}");
        assert_eq!(render(&build_shape("Item-7")), r"[A-Z][a-z]{3,3}-\d");
    }

    #[test]
    fn escapes_literal_runs_before_quantifier() {
        assert_eq!(render(&build_shape("a..b")), r"[a-z]\.{2,2}[a-z]");
        assert_eq!(render(&build_shape("(x)")), r"\([a-z]\)");
    }

    #[test]
    fn empty_shape_compiles_to_empty_match() {
        let regex = compile(&render(&build_shape(""))).expect("compiles");
        assert!(regex.is_match(""));
        assert!(!regex.is_match("a"));
    }

    #[test]
    fn compiled_pattern_is_full_match_only() {
        let regex = compile(r"[a-z]{2,3}").expect("compiles");
        assert!(regex.is_match("ab"));
        assert!(!regex.is_match("abcd"));
        assert!(!regex.is_match("1ab"));
    }

    #[test]
    fn every_meta_char_compiles_and_matches_itself() {
        for c in META_CHARS {
            let s = format!("{c}{c}");
            let regex = compile(&render(&build_shape(&s))).expect("escaped pattern compiles");
            assert!(regex.is_match(&s), "pattern for {s:?} should match it");
        }
    }

    #[test]
    fn digit_class_is_ascii_only() {
        let regex = compile(&render(&build_shape("12"))).expect("compiles");
        assert!(regex.is_match("34"));
        assert!(!regex.is_match("٣٤"));
    }

    #[test]
    fn non_ascii_literals_match_themselves() {
        for s in ["é", "٣", "ééx", "héllo wörld"] {
            let regex = compile(&render(&build_shape(s))).expect("compiles");
            assert!(regex.is_match(s), "pattern for {s:?} should match it");
        }
    }

    #[test]
    fn long_runs_stay_within_size_limit() {
        let items = [
            "7".repeat(20_000),
            "q".repeat(20_000),
            "Z".repeat(5_000),
            "-".repeat(5_000),
        ];
        for item in items {
            let regex = compile(&render(&build_shape(&item))).expect("long run compiles");
            assert!(regex.is_match(&item));
        }
    }

    #[test]
    fn compile_reports_invalid_source() {
        let err = compile("[a-").expect_err("unterminated class");
        assert!(matches!(err, RenderError::Compile { .. }));
    }
}
