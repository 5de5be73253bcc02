//! Pure helper utilities. No side effects.

pub mod slug;

pub use slug::slugify;
