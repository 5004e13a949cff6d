pub mod classes;

pub use classes::*;
