pub mod convert;
pub mod io;
pub mod rules;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::*;
pub use io::*;
pub use rules::*;
