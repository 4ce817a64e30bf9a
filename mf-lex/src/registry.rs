use std::path::Path;

use hilex::{lazy_static::lazy_static, Lexicon};

lazy_static! {
    static ref LEXICONS: Vec<Lexicon> = {
        #[allow(unused_mut)]
        let mut lexicons: Vec<Lexicon> = vec![];
        #[cfg(feature = "tex")]
        lexicons.push(crate::tex::lexicon());
        #[cfg(feature = "metafun")]
        lexicons.push(crate::metafun::lexicon());

        // lookups ignore case, so registration must be unambiguous under
        // it. a lexicon may shadow itself, `TeX` also goes by `tex`
        let mut seen = std::collections::HashMap::new();
        for lexicon in &lexicons {
            let names = std::iter::once(lexicon.name()).chain(lexicon.aliases().iter().copied());
            for name in names {
                if let Some(previous) = seen.insert(name.to_ascii_lowercase(), lexicon.name()) {
                    if previous != lexicon.name() {
                        panic!(
                            "conflicting: both `{previous}` and `{}` answer to `{name}`",
                            lexicon.name()
                        );
                    }
                }
            }
        }

        lexicons
    };
}

/// every compiled in lexicon, in registration order
pub fn all() -> &'static [Lexicon] {
    &LEXICONS
}

/// find a lexicon by its name or one of its aliases, ignoring case
pub fn by_name(name: &str) -> Option<&'static Lexicon> {
    all().iter().find(|lexicon| {
        lexicon.name().eq_ignore_ascii_case(name)
            || lexicon
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// find the lexicon claiming a file extension, given without the dot
pub fn for_extension(extension: &str) -> Option<&'static Lexicon> {
    all().iter().find(|lexicon| {
        lexicon
            .extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    })
}

/// find the lexicon for a path by its extension
pub fn for_path(path: &Path) -> Option<&'static Lexicon> {
    let extension = path.extension()?.to_str()?;
    for_extension(extension)
}
