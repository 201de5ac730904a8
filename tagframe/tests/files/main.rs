#![allow(missing_docs)]

mod flac;
mod mpeg;
mod resource;
mod unknown;
pub(crate) mod util;
