//! Stdin/stdout JSON bridge over an [`Analyzer`].
//!
//! Stdout is exclusively reserved for the JSON protocol; all diagnostic
//! output (tracing, logs) must be routed to stderr.

use crate::analyzer::Analyzer;
use crate::error::{Result, SoulscapeError};
use crate::host::{HostResponse, request_id};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

/// Line counts for one bridge session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    pub answered: usize,
    pub failed: usize,
}

/// Run the bridge on the process's stdin and stdout until EOF.
pub async fn run_stdio_bridge(analyzer: &Analyzer) -> Result<BridgeStats> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = BufWriter::new(tokio::io::stdout());
    run_bridge(analyzer, reader, writer).await
}

/// Read requests line by line from `reader` and write one response line per
/// request to `writer`. Blank lines are skipped; unparseable lines get an
/// error response and the loop continues.
pub async fn run_bridge<R, W>(
    analyzer: &Analyzer,
    mut reader: R,
    mut writer: W,
) -> Result<BridgeStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = BridgeStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| SoulscapeError::Server(format!("failed to read from stdin: {e}")))?;

        // EOF
        if bytes_read == 0 {
            tracing::info!(
                answered = stats.answered,
                failed = stats.failed,
                "stdin closed (EOF); shutting down stdio bridge"
            );
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(request) => {
                let id = request_id(&request);
                match analyzer.analyze_request(&request) {
                    Ok(result) => HostResponse::success(id, result),
                    Err(e) => HostResponse::error(id, e.to_string()),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse request line from stdin");
                HostResponse::error(None, format!("failed to parse request: {e}"))
            }
        };

        if response.ok {
            stats.answered += 1;
        } else {
            stats.failed += 1;
        }

        let json = serde_json::to_string(&response).map_err(|e| {
            SoulscapeError::Server(format!("failed to serialize response line: {e}"))
        })?;
        write_line(&mut writer, &json).await?;
    }

    Ok(stats)
}

/// Write a single JSON line and flush.
async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, json: &str) -> Result<()> {
    writer
        .write_all(json.as_bytes())
        .await
        .map_err(|e| SoulscapeError::Server(format!("failed to write to stdout: {e}")))?;
    writer
        .write_all(b"\n")
        .await
        .map_err(|e| SoulscapeError::Server(format!("failed to write newline to stdout: {e}")))?;
    writer
        .flush()
        .await
        .map_err(|e| SoulscapeError::Server(format!("failed to flush stdout: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::emotion::EmotionCategory;

    async fn run(input: &str) -> (BridgeStats, Vec<HostResponse>) {
        let analyzer = Analyzer::default();
        let mut out: Vec<u8> = Vec::new();
        let stats = run_bridge(&analyzer, input.as_bytes(), &mut out).await.unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (stats, lines)
    }

    #[tokio::test]
    async fn answers_each_request_in_order() {
        let input = concat!(
            r#"{"id": "a", "text": "furious and angry"}"#,
            "\n",
            r#"{"id": "b", "text": "calm, relaxed and steady"}"#,
            "\n",
        );
        let (stats, lines) = run(input).await;
        assert_eq!(stats, BridgeStats { answered: 2, failed: 0 });
        assert_eq!(lines[0].id.as_deref(), Some("a"));
        assert_eq!(lines[0].result.as_ref().unwrap().emotion, EmotionCategory::Anger);
        assert_eq!(lines[1].id.as_deref(), Some("b"));
        assert_eq!(lines[1].result.as_ref().unwrap().emotion, EmotionCategory::Calm);
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let (stats, lines) = run("\n   \n{\"text\": \"sad\"}\n\n").await;
        assert_eq!(stats.answered, 1);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].id.is_none());
    }

    #[tokio::test]
    async fn bad_lines_produce_errors_without_stopping() {
        let input = "not json\n{\"id\": \"x\", \"text\": \"\"}\n{\"text\": \"glad\"}";
        let (stats, lines) = run(input).await;
        assert_eq!(stats, BridgeStats { answered: 1, failed: 2 });
        assert!(!lines[0].ok);
        assert!(lines[0].error.as_deref().unwrap().starts_with("failed to parse request"));
        assert_eq!(lines[1].id.as_deref(), Some("x"));
        assert_eq!(lines[1].error.as_deref(), Some("Text is required"));
        assert!(lines[2].ok);
    }
}
