use super::{ClassSymbol, RunToken, Shape, classify};

/// Scans `item` once, collapsing each maximal run of same-class characters into one token.
#[tracing::instrument(level = "trace", skip(item), fields(len = item.len() as u64))]
pub fn build_shape(item: &str) -> Shape {
    let mut shape = Shape::new();
    let mut current: Option<(ClassSymbol, usize)> = None;

    for c in item.chars() {
        let symbol = classify(c);
        current = match current {
            Some((run_symbol, run_len)) if run_symbol == symbol => Some((run_symbol, run_len + 1)),
            Some((run_symbol, run_len)) => {
                shape.push(RunToken::exact(run_symbol, run_len));
                Some((symbol, 1))
            }
            None => Some((symbol, 1)),
        };
    }

    if let Some((run_symbol, run_len)) = current {
        shape.push(RunToken::exact(run_symbol, run_len));
    }

    shape
}
