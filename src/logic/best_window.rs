use super::calculations::{hour_score, round_display, TimeOfDay};
use super::thresholds::THRESHOLDS;
use crate::models::{HourlyReading, SprayStatus, WindowSpan};
use chrono::Timelike;

pub const NO_WINDOW_LOCAL: &str = "—";
pub const DEFAULT_WINDOW_LOCAL: &str = "06:00–09:00 น. (แนะนำ)";

/// Stricter per-reading test than the overall status check
pub fn is_sprayable(reading: &HourlyReading) -> bool {
    let t = &THRESHOLDS;
    reading.rain_probability < t.rain_prob_warn
        && reading.wind_speed_kmh <= t.wind_warn
        && reading.humidity_percent <= t.humidity_warn
        && reading.temperature_c <= t.temp_warn
}

/// Merge sprayable readings into contiguous blocks.
///
/// Readings must be in time order. A reading joins the running block when it
/// is at most `block_gap_hours` after the previous member.
pub fn merge_blocks(readings: &[HourlyReading]) -> Vec<WindowSpan> {
    let mut blocks = Vec::new();
    let mut current: Option<WindowSpan> = None;

    for reading in readings.iter().filter(|r| is_sprayable(r)) {
        let score = hour_score(reading);

        current = match current.take() {
            Some(mut block)
                if gap_hours(&block, reading) <= THRESHOLDS.block_gap_hours =>
            {
                block.end = reading.timestamp;
                block.score += score;
                Some(block)
            }
            previous => {
                blocks.extend(previous);
                Some(WindowSpan {
                    start: reading.timestamp,
                    end: reading.timestamp,
                    score,
                })
            }
        };
    }

    blocks.extend(current);
    blocks
}

fn gap_hours(block: &WindowSpan, next: &HourlyReading) -> f64 {
    (next.timestamp - block.end).num_seconds() as f64 / 3600.0
}

/// Pick the block to recommend: a long enough morning or evening block,
/// else any long enough block, else the first block.
pub fn select_block(blocks: &[WindowSpan]) -> Option<&WindowSpan> {
    let t = &THRESHOLDS;
    let long_enough = |b: &&WindowSpan| b.span_hours() >= t.min_block_hours;

    blocks
        .iter()
        .filter(long_enough)
        .find(|b| TimeOfDay::from_hour(b.start.hour(), t).is_preferred())
        .or_else(|| blocks.iter().find(long_enough))
        .or_else(|| blocks.first())
}

/// Local-language description of the chosen block or the fallback
pub fn describe(block: Option<&WindowSpan>, status: SprayStatus) -> String {
    match block {
        Some(block) => format_span(block),
        None if status == SprayStatus::Good => DEFAULT_WINDOW_LOCAL.to_string(),
        None => NO_WINDOW_LOCAL.to_string(),
    }
}

fn format_span(block: &WindowSpan) -> String {
    let start = block.start.format("%H:%M");
    let end = block.end.format("%H:%M");
    let span = block.span_hours();

    if block.start == block.end {
        format!("{} น.", start)
    } else if span >= THRESHOLDS.long_block_hours {
        format!("{}–{} น.", start, end)
    } else {
        format!("{}–{} น. ({} ชม.)", start, end, round_display(span))
    }
}
