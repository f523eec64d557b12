//! Sequential annotation loop: one request per record, in input order, one
//! call in flight at a time. A failed call never aborts the batch.

use std::thread;
use std::time::{Duration, Instant};

use super::AnalysisBackend;
use crate::models::annotation::{Annotation, Priority};
use crate::models::record::Record;
use crate::ui::messages;

/// Outcome of one enrichment pass. `analyzed + failed == eligible`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub eligible: usize,
    pub analyzed: usize,
    pub failed: usize,
}

/// Enriches every record whose description warrants analysis. Failures are
/// counted and logged, then the loop moves on; the pause between requests
/// keeps free-tier endpoints from rate-limiting the batch.
pub fn annotate<B: AnalysisBackend>(
    backend: &B,
    records: &mut [Record],
    delay: Duration,
) -> PipelineSummary {
    let eligible: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.wants_analysis())
        .map(|(i, _)| i)
        .collect();

    let total = eligible.len();
    let mut summary = PipelineSummary {
        eligible: total,
        ..Default::default()
    };

    for (n, idx) in eligible.into_iter().enumerate() {
        let record = &mut records[idx];
        let started = Instant::now();
        match backend.analyze(&record.description, &record.category) {
            Ok(reply) => {
                record.annotation = Some(Annotation {
                    summary: reply.summary,
                    recommendation: reply.recommendation,
                    priority: Priority::parse(&reply.priority),
                    elapsed_seconds: started.elapsed().as_secs_f64(),
                });
                summary.analyzed += 1;
            }
            Err(e) => {
                summary.failed += 1;
                messages::warning(format!(
                    "row {}: analysis failed: {e}",
                    record.row_number
                ));
            }
        }

        if n + 1 < total && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    summary
}
