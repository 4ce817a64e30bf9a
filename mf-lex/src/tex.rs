use hilex::{Category, Lexicon, Rule};

/// rules shared by the plain text state and the math states
fn general_rules() -> Vec<Rule> {
    vec![
        Rule::token(r"%.*?\n", Category::Comment),
        Rule::token(r"[{}]", Category::NameBuiltin),
        Rule::token(r"[&_^]", Category::NameBuiltin),
    ]
}

/// the shared tail of both math states
fn math_rules() -> Vec<Rule> {
    let mut rules = vec![Rule::token(r"\\([a-zA-Z]+|.)", Category::NameVariable)];
    rules.extend(general_rules());
    rules.extend([
        Rule::token("[0-9]+", Category::Number),
        Rule::token(r"[-=!+*/()\[\]]", Category::Operator),
        Rule::token(r"[^=!+*/()\[\]\\$%&_^{}0-9]+", Category::NameBuiltin),
    ]);
    rules
}

/// the TeX lexicon: commands with their options, comments, and both ways
/// into math mode
pub fn lexicon() -> Lexicon {
    let mut root = vec![
        Rule::push(r"\\\[", Category::StringBacktick, "displaymath"),
        Rule::push(r"\\\(", Category::String, "inlinemath"),
        Rule::push(r"\$\$", Category::StringBacktick, "displaymath"),
        Rule::push(r"\$", Category::String, "inlinemath"),
        Rule::push(r"\\([a-zA-Z]+|.)", Category::Keyword, "command"),
        Rule::token(r"\\$", Category::Keyword),
    ];
    root.extend(general_rules());
    root.push(Rule::token(r"[^\\$%&_^{}]+", Category::Text));

    let mut inlinemath = vec![
        Rule::pop(r"\\\)", Category::String),
        Rule::pop(r"\$", Category::String),
    ];
    inlinemath.extend(math_rules());

    let mut displaymath = vec![
        Rule::pop(r"\\\]", Category::StringBacktick),
        Rule::pop(r"\$\$", Category::StringBacktick),
        Rule::token(r"\$", Category::NameBuiltin),
    ];
    displaymath.extend(math_rules());

    let command = vec![
        Rule::token(r"\[.*?\]", Category::NameAttribute),
        Rule::token(r"\*", Category::Keyword),
        Rule::default_pop(),
    ];

    Lexicon::new("TeX")
        .alias("tex")
        .alias("latex")
        .extension("tex")
        .extension("aux")
        .extension("toc")
        .state(Lexicon::ROOT, root)
        .state("inlinemath", inlinemath)
        .state("displaymath", displaymath)
        .state("command", command)
        .finish()
}
