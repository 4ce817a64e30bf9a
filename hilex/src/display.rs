use colored::Colorize;

use crate::{Category, Token};

/// paint a token stream back into a terminal string
///
/// plain text stays plain, so the concatenated output still reads as the
/// source itself
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(paint).collect()
}

fn paint(token: &Token) -> String {
    let text = token.text.as_str();
    match token.category {
        Category::Text => text.to_string(),
        Category::Comment => text.bright_black().to_string(),
        Category::Keyword => text.yellow().bold().to_string(),
        Category::NameBuiltin => text.cyan().to_string(),
        Category::NameVariable => text.blue().to_string(),
        Category::NameAttribute => text.green().to_string(),
        Category::String => text.magenta().to_string(),
        Category::StringBacktick => text.magenta().bold().to_string(),
        Category::Number => text.bright_blue().to_string(),
        Category::Operator => text.bold().to_string(),
        Category::Error => text.red().underline().to_string(),
    }
}
