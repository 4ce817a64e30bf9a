use std::collections::BTreeMap;

use hilex::{Category, WithSpan};

use crate::Scanned;

/// the token stream as one json document, file identity alongside
pub fn json(scanned: &Scanned) -> Result<String, serde_json::Error> {
    let value = serde_json::json!({
        "file": scanned.source.file_name(),
        "lexicon": scanned.lexicon.name(),
        "tokens": scanned.tokens,
    });
    serde_json::to_string(&value)
}

/// per category counts, plus where the first error token sits
pub fn summary(scanned: &Scanned) -> String {
    let mut counts = BTreeMap::new();
    for token in &scanned.tokens {
        *counts.entry(token.category).or_insert(0usize) += 1;
    }

    let mut out = format!(
        "{}: {}, {} tokens\n",
        scanned.source.file_name(),
        scanned.lexicon.name(),
        scanned.tokens.len()
    );
    for (category, count) in &counts {
        out.push_str(&format!("  {:<16} {count}\n", category.name()));
    }

    let first_error = scanned
        .tokens
        .iter()
        .find(|token| token.is(Category::Error));
    if let Some(token) = first_error {
        let (line, column) = scanned.source.locate(token.get_span().start);
        out.push_str(&format!("  first error at {line}:{column}\n"));
    }

    out
}
