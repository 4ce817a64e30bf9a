mod lexicon;
mod macros;
mod rule;
mod scanner;
mod source;
mod span;
mod token;

#[cfg(feature = "color")]
mod display;

pub use self::{lexicon::*, rule::*, scanner::*, source::*, span::*, token::*};

#[cfg(feature = "color")]
pub use self::display::*;

pub use lazy_static;
