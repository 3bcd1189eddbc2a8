//! Theme repository implementations

mod json;
#[cfg(test)]
mod memory;

pub use json::{JsonThemeRepository, THEME_MANIFEST};
#[cfg(test)]
pub use memory::MemoryThemeRepository;
