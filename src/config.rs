/// Run-wide settings, read once at startup.
///
/// The detector is driven by environment-style settings like the original
/// ingestion service: `CHUNKSIZE` sets the sliding-window size and
/// `SOURCE_EXT` the accepted file extension. Both can be overridden from
/// the command line. The chunk size is fixed for the lifetime of a run;
/// mixing chunk sizes across one corpus is not supported.
use std::env;

pub const DEFAULT_CHUNK_SIZE: usize = 5;
pub const DEFAULT_EXTENSION: &str = ".java";

/// Smallest usable chunk size. Expansion needs a second-to-last line in
/// every chunk, so single-line windows are rejected.
pub const MIN_CHUNK_SIZE: usize = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub chunk_size: usize,
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Read `CHUNKSIZE` and `SOURCE_EXT` from the environment, falling
    /// back to the defaults for missing or unusable values.
    pub fn from_env() -> Self {
        Self {
            chunk_size: parse_chunk_size(env::var("CHUNKSIZE").ok().as_deref()),
            extension: parse_extension(env::var("SOURCE_EXT").ok().as_deref()),
        }
    }
}

/// Parse a chunk size setting. Unparsable or too-small values fall back
/// to the default with a note, rather than silently changing behavior
/// between runs.
pub fn parse_chunk_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_CHUNK_SIZE;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= MIN_CHUNK_SIZE => n,
        _ => {
            eprintln!("note: ignoring chunk size {raw:?}, using default {DEFAULT_CHUNK_SIZE}");
            DEFAULT_CHUNK_SIZE
        }
    }
}

/// Normalize an extension setting to a `.ext` suffix usable with
/// `str::ends_with`.
pub fn parse_extension(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DEFAULT_EXTENSION.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_EXTENSION.to_string();
    }
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
