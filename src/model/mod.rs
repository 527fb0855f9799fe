pub mod enriched_item;
pub mod pib_alert;
pub mod raw_item;
pub mod scheme;
pub mod source_config;
pub mod stored_article;

pub use enriched_item::{ConfidenceLevel, ContentCategory, EnrichedItem, Entity, SentimentLabel};
pub use pib_alert::PibAlert;
pub use raw_item::RawItem;
pub use scheme::Scheme;
pub use source_config::{SourceConfig, SourceEntry, SourceKind};
pub use stored_article::StoredArticle;
