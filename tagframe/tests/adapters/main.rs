#![allow(missing_docs)]

mod indices;
mod pictures;
mod round_trip;
pub(crate) mod util;
