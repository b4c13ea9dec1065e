pub mod athlete;
pub mod document;
pub mod sponsor;
