//! OPDS2 目錄 feed 的寬鬆解碼與標準化輸出
//!
//! 可能是字串、物件或陣列的欄位由 [`decode`] 統一轉成型別化模型，
//! 再由 [`encode`] 以標準格式輸出。

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FileSource, HttpSource, LocalStorage};
pub use self::core::{
    decode, decode_publication, decode_publication_with, decode_with, encode, encode_pretty,
    parse_file, parse_url, to_value, DecodeOptions, Decoder, DisplayList, FeedReader,
};
pub use domain::{
    BelongsTo, Collection, Contributor, Facet, Feed, Group, IndirectAcquisition, LanguageText,
    Link, Metadata, OneOrMany, Price, Properties, Publication, PublicationMetadata, Role, Subject,
    Timestamp,
};
pub use utils::error::{FeedError, Result};
