use hilex::{Category, Lexicon, Rule};

use crate::tex;

hilex::keywords! {
    /// the two drawing statements picked out of plain text
    keywords Drawing {
        "draw" -> Draw,
        "drawarrow" -> DrawArrow,
    }
}

/// the MetaPost/MetaFun lexicon: the TeX tables with the drawing keywords
/// in front of them
///
/// everything the keyword rule does not take scans exactly as TeX would
pub fn lexicon() -> Lexicon {
    tex::lexicon()
        .based_on("MetaFun")
        .alias("metafun")
        .alias("metapost")
        .extension("mp")
        .extension("mpxl")
        .prepend(Lexicon::ROOT, Rule::words(Drawing::ALL, Category::Keyword))
        .finish()
}
