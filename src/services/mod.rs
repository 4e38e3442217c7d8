pub mod anchor_annotator;
pub mod markdown_renderer;
pub mod page_builder;
pub mod question_extractor;

pub use anchor_annotator::{anchor_tag, annotate, scan_anchors};
pub use markdown_renderer::{GfmRenderer, MarkdownRenderer};
pub use page_builder::{escape_html, PageBuilder};
pub use question_extractor::{split_lines, QuestionExtractor};
