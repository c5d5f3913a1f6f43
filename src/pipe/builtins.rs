use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;

/// A pipe that parses a path segment into an `i32`
///
/// Accepts an optional sign. Rejects whitespace, decimals and values
/// outside the `i32` range.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseIntPipe;

#[async_trait]
impl Pipe for ParseIntPipe {
    type Input = String;
    type Output = i32;

    async fn transform(&self, input: String) -> PipeResult<i32> {
        input
            .parse::<i32>()
            .map_err(|e| PipeError::Validation(format!("'{}' is not an integer: {}", input, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parse(raw: &str) -> PipeResult<i32> {
        ParseIntPipe.transform(raw.to_string()).await
    }

    #[tokio::test]
    async fn test_parses_signed_integers() {
        assert_eq!(parse("42").await.unwrap(), 42);
        assert_eq!(parse("-7").await.unwrap(), -7);
        assert_eq!(parse("0").await.unwrap(), 0);
        assert_eq!(parse("2147483647").await.unwrap(), i32::MAX);
    }

    #[tokio::test]
    async fn test_rejects_non_integers() {
        for raw in ["abc", "1.5", " 1", "", "2147483648", "1e3"] {
            assert!(
                matches!(parse(raw).await, Err(PipeError::Validation(_))),
                "expected '{}' to be rejected",
                raw
            );
        }
    }
}
