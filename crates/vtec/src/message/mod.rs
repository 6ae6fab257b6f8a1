//! P-VTEC decoding and representation

mod action;
mod error;
mod office;
mod phenomenon;
mod significance;
mod vtec;

pub use action::{Action, ProductClass};
pub use error::{Field, Registry, UnknownReferenceErr, VtecDecodeErr};
pub use office::Office;
pub use phenomenon::Phenomenon;
pub use significance::SignificanceLevel;
pub use vtec::Vtec;
