pub mod file_fetcher;
pub mod http_fetcher;
pub mod memory_fetcher;
pub mod text_fetcher;

pub use file_fetcher::FileFetcher;
pub use http_fetcher::HttpFetcher;
pub use memory_fetcher::MemoryFetcher;
pub use text_fetcher::TextFetcher;
