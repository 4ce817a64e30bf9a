pub mod registry;

#[cfg(feature = "metafun")]
pub mod metafun;
#[cfg(feature = "tex")]
pub mod tex;
