// 領域層：feed 實體樹與外部協作者實作的介面

pub mod contributor;
pub mod link;
pub mod model;
pub mod ports;
pub mod text;

pub use contributor::{BelongsTo, Collection, Contributor, Role, Subject};
pub use link::{IndirectAcquisition, Link, Price, Properties};
pub use model::{Facet, Feed, Group, Metadata, Publication, PublicationMetadata, Timestamp};
pub use text::{LanguageText, OneOrMany};
