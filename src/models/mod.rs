pub mod bar;

pub use bar::{Bar, DailySeries};
