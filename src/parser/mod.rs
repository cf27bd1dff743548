//! Block decoding and tree construction.

mod builder;
mod decode;
mod options;
mod table;

pub use builder::TreeBuilder;
pub use decode::{decode_block, decode_blocks};
pub use options::{BuildOptions, ErrorMode, ListContainer};
