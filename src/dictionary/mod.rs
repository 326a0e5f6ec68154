mod builder;
mod fetch;

pub use builder::{DictionaryBuilder, has_extension, parse_extensions};
pub use fetch::fetch_dictionary;
