//! Various configuration options to control tagframe

mod resource_options;
mod tag_options;

pub use resource_options::ResourceOptions;
pub use tag_options::{CommentField, TagOptions};
