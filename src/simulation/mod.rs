pub mod pool;
pub use pool::*;

pub mod progress;
pub use progress::*;

pub mod report;
pub use report::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;

pub mod trial;
pub use trial::*;

pub mod worker;
pub use worker::*;

#[cfg(test)]
mod tests;
