pub mod entities;
pub mod helpers;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::{UiTheme, Verdict, VerdictResult};
pub use ports::{ImageFetcher, LLMClient, VerdictService};
