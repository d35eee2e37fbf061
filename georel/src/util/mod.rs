/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod lon;

#[doc(inline)]
pub use lon::normalize_lon_deg;
