//! A format-agnostic frame model for reading and editing audio tags.
//!
//! Every tag format stores its metadata differently: ID3v2 has typed frames with multiple fields,
//! Vorbis Comments and APE have key/value pairs, MP4 has typed atoms and ASF has typed attributes.
//! tagframe presents all of them as a flat list of [`Frame`](frame::Frame)s. A frame has a
//! [`FrameType`](frame::FrameType), a name, a value and an optional list of fields, and can be read,
//! changed and written back without knowing which format it came from.
//!
//! The native tags themselves are parsed and written by [`lofty`].
//!
//! # Examples
//!
//! ## Editing a tag in memory
//!
//! ```rust
//! use lofty::ogg::VorbisComments;
//! use tagframe::adapter::{NativeTag, TagAdapter};
//! use tagframe::config::TagOptions;
//! use tagframe::frame::{Frame, FrameType};
//!
//! let options = TagOptions::default();
//! let mut adapter = TagAdapter::new(NativeTag::Vorbis(VorbisComments::default()));
//!
//! let mut title = Frame::new(FrameType::Title, "Foo title");
//! assert!(adapter.add_frame(&mut title, &options));
//!
//! let frames = adapter.frames(&options);
//! assert_eq!(frames.value(FrameType::Title), Some("Foo title"));
//! ```
//!
//! ## Editing a file
//!
//! See [`TaggedFile`](file::TaggedFile), and [`ResourceManager`](resource::ResourceManager) for
//! handling many files at once.
//!
//! # Format notes
//!
//! * ID3v1 fields have fixed lengths. Values that do not fit are clipped, and the clipped fields are
//!   reported through [`TruncationFlags`](adapter::TruncationFlags).
//! * ID3v2 tags are always written as ID3v2.4.
//! * ASF tags are supported in memory only, there is no ASF file support.

pub mod adapter;
pub mod asf;
pub mod config;
pub mod error;
pub mod file;
pub mod frame;
pub mod genre;
pub(crate) mod macros;
pub mod picture;
pub mod resource;
pub mod text_encoding;
pub mod track_data;
mod util;

pub use crate::text_encoding::TextEncoding;
