pub mod errors;
pub use errors::AlgebraError;

pub mod math;
pub use math::*;

pub mod utils;
pub use utils::*;

#[cfg(test)]
mod tests;
