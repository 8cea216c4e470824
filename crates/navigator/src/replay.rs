//! JSON-lines replay of recorded detector output
//!
//! One reader task parses input lines and feeds a bounded queue; a single
//! consumer drains it into the session, so frames are aggregated and
//! throttle-checked strictly one at a time.

use crate::NavigatorError;
use advisory::{AdvisoryRequest, NavigationSession};
use frame_aggregator::RawDetection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Frames allowed in flight between reader and session
pub const FRAME_QUEUE_DEPTH: usize = 2;

/// One input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputRecord {
    /// Detector output for one frame, stamped relative to the recording start
    Frame {
        timestamp_ms: u64,
        #[serde(default)]
        detections: Vec<RawDetection>,
    },
    /// A spoken question against the latest frame
    Query { question: String },
}

/// One output line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputRecord {
    Advisory(AdvisoryRequest),
    Query { question: String, prompt: String },
}

/// Counters for a finished replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub frames: u64,
    pub advisories: u64,
    pub queries: u64,
    pub skipped_lines: u64,
}

async fn read_records<R>(
    input: R,
    tx: mpsc::Sender<InputRecord>,
) -> Result<u64, NavigatorError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut line_no = 0u64;
    let mut skipped = 0u64;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<InputRecord>(line) {
            Ok(record) => {
                if tx.send(record).await.is_err() {
                    debug!("Session lane closed, stopping reader");
                    break;
                }
            }
            Err(e) => {
                warn!("Skipping line {}: {}", line_no, e);
                skipped += 1;
            }
        }
    }

    Ok(skipped)
}

async fn write_record<W>(output: &mut W, record: &OutputRecord) -> Result<(), NavigatorError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');
    output.write_all(&line).await?;
    Ok(())
}

/// Replay `input` through `session`, writing advisories and query prompts to `output`
pub async fn replay<R, W>(
    session: Arc<NavigationSession>,
    input: R,
    mut output: W,
) -> Result<ReplaySummary, NavigatorError>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::channel(FRAME_QUEUE_DEPTH);
    let reader = tokio::spawn(read_records(input, tx));

    let started = Instant::now();
    let mut summary = ReplaySummary::default();

    while let Some(record) = rx.recv().await {
        match record {
            InputRecord::Frame {
                timestamp_ms,
                detections,
            } => {
                let now = started + Duration::from_millis(timestamp_ms);
                let outcome = session.process_frame(detections, now)?;
                summary.frames += 1;

                if let Some(request) = outcome.advisory {
                    summary.advisories += 1;
                    write_record(&mut output, &OutputRecord::Advisory(request)).await?;
                }
            }
            InputRecord::Query { question } => {
                let prompt = session.voice_query_prompt(&question)?;
                summary.queries += 1;
                write_record(&mut output, &OutputRecord::Query { question, prompt }).await?;
            }
        }
    }
    output.flush().await?;

    summary.skipped_lines = reader
        .await
        .map_err(|e| NavigatorError::Reader(e.to_string()))??;

    info!(
        "Replay finished: {} frames, {} advisories, {} queries, {} skipped lines",
        summary.frames, summary.advisories, summary.queries, summary.skipped_lines
    );
    Ok(summary)
}
