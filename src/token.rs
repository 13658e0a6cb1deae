use std::path::Path;

use anyhow::{Context, Result};
use tracing;

/// Reads an access token from a file, stripping surrounding whitespace.
/// Token files usually end in a newline, which would corrupt the
/// Authorization header if kept.
pub fn read_token(path: &Path) -> Result<String> {
    tracing::debug!("reading token from {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading token file {}", path.display()))?;
    Ok(contents.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_read_token_trims_whitespace() {
        let token = read_token(Path::new("testdata/token.txt")).unwrap();
        assert_eq!(token, "ghp_t0ken");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_read_token_missing_file() {
        let err = read_token(Path::new("testdata/no-such-token")).unwrap_err();
        assert!(err.to_string().contains("testdata/no-such-token"));
    }
}
