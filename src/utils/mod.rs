pub mod format;

pub use format::{fixed, money, plural, thousands, Report};
