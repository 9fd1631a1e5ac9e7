pub mod length_hint;
pub mod persistence;
