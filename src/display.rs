//! Time and seek formatting for the transport bar.

mod time;

pub use time::*;

#[cfg(test)]
mod tests;
