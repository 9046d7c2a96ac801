pub mod format;

pub use format::{prepare_response, ResponseDetails};
