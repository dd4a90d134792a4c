pub mod boundary;
pub mod country;

pub use boundary::{BoundaryRow, BoundaryTable};
pub use country::CountryCode;
