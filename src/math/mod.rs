mod field;
pub use field::FieldElement;

mod matrix;
pub use matrix::Matrix;

pub mod axioms;
pub mod roots;
