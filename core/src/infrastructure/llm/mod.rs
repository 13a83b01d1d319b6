pub mod gemini_client;
pub mod image_fetcher;

pub use gemini_client::GeminiLLMClient;
pub use image_fetcher::HttpImageFetcher;
