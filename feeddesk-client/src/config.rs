use anyhow::{Context, Result};
use std::env;

#[derive(Clone)]
pub struct Config {
    /// Server root the feeds API lives under, without a trailing slash.
    pub api_base: String,
}

impl Config {
    pub fn new(api_base: impl Into<String>) -> Self {
        Config {
            api_base: normalize_api_base(api_base.into()),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_base =
            env::var("FEEDS_API_BASE").context("FEEDS_API_BASE environment variable is required")?;

        Ok(Config::new(api_base))
    }
}

/// Strip trailing slashes so path joins never produce `//feeds`.
fn normalize_api_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(
            Config::new("http://localhost:3000/").api_base,
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_bare_base_is_kept() {
        assert_eq!(
            Config::new("http://localhost:3000").api_base,
            "http://localhost:3000"
        );
    }
}
