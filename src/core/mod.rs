pub mod formatter;

pub use formatter::{format_at, format_named, generate, now_local, FormatTag, INVALID_FORMAT};
