//! Command implementations.

pub mod interpret;
pub mod kappa;
pub mod matrix;

pub use self::interpret::execute_interpret;
pub use self::kappa::execute_kappa;
pub use self::matrix::execute_matrix;
