pub mod formatting;
pub mod style;
pub mod test_mode;
