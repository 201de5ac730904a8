//! ASF (Windows Media) attributes
//!
//! The native tag library does not handle ASF, so this is a self-contained model of an ASF
//! attribute list: the content description and extended content description objects flattened
//! into a single list of typed [`AsfAttribute`]s.
//!
//! ## Pictures
//!
//! Pictures are stored in `WM/Picture` attributes, see [`decode_picture`] for the layout.

mod attribute;
mod picture;
mod tag;

pub use attribute::{AsfAttribute, AsfValue, format_guid, parse_guid};
pub use picture::{decode_picture, encode_picture};
pub use tag::AsfTag;

/// The name of picture attributes
pub const PICTURE_ATTRIBUTE: &str = "WM/Picture";
