// Utils compartidos

pub mod constants;
pub mod datetime;

pub use constants::*;
pub use datetime::*;
