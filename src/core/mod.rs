pub mod builder;
pub mod coerce;
pub mod decode;
pub mod encode;
pub mod feed;
pub mod link;
pub mod metadata;
pub mod normalize;
pub mod reader;
pub mod shape;

pub use crate::domain::ports::{ConfigProvider, FeedSource, Storage};
pub use crate::utils::error::Result;
pub use decode::{DecodeOptions, Decoder};
pub use encode::{encode, encode_pretty, to_value, DisplayList};
pub use feed::{decode, decode_publication, decode_publication_with, decode_with};
pub use reader::{parse_file, parse_url, FeedReader};
