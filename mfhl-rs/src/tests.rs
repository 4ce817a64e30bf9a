use hilex::{Category, Source, Token};
use mf_lex::registry;

use crate::{output, scan_source, Scanned};

fn scan(lexer: &str, file_name: &str, src: &str) -> Scanned {
    let lexicon = registry::by_name(lexer).unwrap();
    scan_source(lexicon, Source::new(file_name, src))
}

// the comment lines matter: a plain text run only ends at a special
// character, so each drawing statement has to start right after one
const FIGURE_SRC: &str = "\
% a tiny figure
draw a -- b;
% and its arrow
drawarrow a .. b;
fill fullcircle scaled 2cm;
";

const PAPER_SRC: &str = "\\usepackage[T1]{fontenc} % encoding\n$x^2$\n";

#[test]
fn metafun_end_to_end() {
    let scanned = scan("metafun", "figure.mp", FIGURE_SRC);

    let keywords: Vec<_> = scanned
        .tokens
        .iter()
        .filter(|token| token.is(Category::Keyword))
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(keywords, ["draw", "drawarrow"]);

    let rebuilt: String = scanned
        .tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(rebuilt, scanned.source.text());
}

#[test]
fn tex_end_to_end() {
    let scanned = scan("latex", "paper.tex", PAPER_SRC);

    assert_eq!(scanned.lexicon.name(), "TeX");
    assert!(scanned.tokens[0].is(Category::Keyword));
    assert_eq!(&*scanned.tokens[0], "\\usepackage");
    assert!(scanned.tokens[1].is(Category::NameAttribute));
    assert_eq!(&*scanned.tokens[1], "[T1]");

    let comments = scanned
        .tokens
        .iter()
        .filter(|token| token.is(Category::Comment))
        .count();
    assert_eq!(comments, 1);
}

#[test]
fn serde_round_trip() {
    let scanned = scan("metafun", "figure.mp", FIGURE_SRC);

    let str1 = serde_json::to_string(&scanned.tokens).unwrap();
    let tokens1: Vec<Token> = serde_json::from_str(&str1).unwrap();
    let str2 = serde_json::to_string(&tokens1).unwrap();
    let tokens2: Vec<Token> = serde_json::from_str(&str2).unwrap();

    assert_eq!(str1, str2);
    assert_eq!(scanned.tokens, tokens2);
}

#[test]
fn json_carries_the_identity() {
    let scanned = scan("metafun", "figure.mp", FIGURE_SRC);
    let json = output::json(&scanned).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["file"], "figure.mp");
    assert_eq!(value["lexicon"], "MetaFun");
    assert_eq!(value["tokens"][0]["category"], "Comment");
}

#[test]
fn summary_counts_categories() {
    let scanned = scan("metafun", "figure.mp", FIGURE_SRC);
    let summary = output::summary(&scanned);

    assert!(summary.starts_with("figure.mp: MetaFun, "));
    assert!(summary.contains("Keyword"));
    assert!(summary.contains("Comment"));
    assert!(!summary.contains("first error"));
}

#[test]
fn summary_points_at_the_first_error() {
    // a backslash before a line break matches nothing inside math
    let scanned = scan("tex", "broken.tex", "$x\\\n$");
    let summary = output::summary(&scanned);

    assert!(summary.contains("Error"));
    assert!(summary.contains("first error at 1:3"));
}

#[test]
fn trace_records_the_scan() {
    let scanned = scan("metafun", "figure.mp", "draw a;\n");
    assert!(scanned.trace.contains("root: Keyword@0..4"));
}
