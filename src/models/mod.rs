pub mod catalog;
pub mod descriptor;
pub mod loaders;
pub mod question;

pub use catalog::{Catalog, CatalogBuilder, DocumentGroup, GroupSwitch, DEFAULT_GROUP};
pub use descriptor::{DocId, DocumentDescriptor, GroupTag};
pub use loaders::{builtin, load_catalog, parse_catalog};
pub use question::{anchor_id, QuestionMarker, QuestionPattern, DEFAULT_QUESTION_PATTERN};
