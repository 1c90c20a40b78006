//! Period timeline
//!
//! Every Period gets an optional start, an optional duration and an optional
//! end. A Period without its own `start` begins where the previous Period with
//! a known end finished (or at zero). A Period without a duration, or with an
//! explicit `start` that cannot be parsed, leaves the running cursor untouched,
//! so a following derived Period reuses it.

use std::fmt;

use chrono::TimeDelta;

use crate::duration::parse_duration;
use crate::mpd::MpdTree;

/// Where a period's start time came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingSource {
    /// The Period carried its own `start` attribute
    Explicit,
    /// Chained from the previous period's end
    Derived,
}

impl fmt::Display for TimingSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimingSource::Explicit => f.write_str("explicit"),
            TimingSource::Derived => f.write_str("derived"),
        }
    }
}

/// Timing attributes of one Period element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodAttributes<'a> {
    pub start: Option<&'a str>,
    pub duration: Option<&'a str>,
}

/// One Period on the presentation timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodEntry {
    pub index: usize,
    /// `None` when the explicit `start` could not be parsed
    pub start: Option<TimeDelta>,
    pub duration: Option<TimeDelta>,
    /// `start + duration` when the duration is known
    pub end: Option<TimeDelta>,
    pub source: TimingSource,
}

/// Build the timeline from Period attributes in document order
pub fn build_timeline<'a, I>(periods: I) -> Vec<PeriodEntry>
where
    I: IntoIterator<Item = PeriodAttributes<'a>>,
{
    let mut cursor = TimeDelta::zero();

    periods
        .into_iter()
        .enumerate()
        .map(|(index, attrs)| {
            let (start, source) = match attrs.start.filter(|s| !s.is_empty()) {
                Some(raw) => {
                    let parsed = parse_duration(Some(raw));
                    if parsed.is_none() {
                        tracing::warn!("Period {}: unparseable start \"{}\"", index, raw);
                    }
                    (parsed, TimingSource::Explicit)
                }
                None => (Some(cursor), TimingSource::Derived),
            };

            let duration = parse_duration(attrs.duration);
            let end = start
                .zip(duration)
                .and_then(|(start, d)| start.checked_add(&d));
            if let Some(end) = end {
                cursor = end;
            }

            PeriodEntry {
                index,
                start,
                duration,
                end,
                source,
            }
        })
        .collect()
}

/// Build the timeline for every Period of a parsed MPD
pub fn extract_period_timeline(tree: MpdTree<'_, '_>) -> Vec<PeriodEntry> {
    let timeline = build_timeline(tree.periods().map(|p| PeriodAttributes {
        start: p.attribute("start"),
        duration: p.attribute("duration"),
    }));
    tracing::debug!("Built timeline with {} periods", timeline.len());
    timeline
}

/// Latest known period end, if any period has a known end
pub fn max_period_end(timeline: &[PeriodEntry]) -> Option<TimeDelta> {
    timeline.iter().filter_map(|p| p.end).max()
}

/// Sum of all known period durations, `None` when no period has one
pub fn total_playtime(timeline: &[PeriodEntry]) -> Option<TimeDelta> {
    timeline
        .iter()
        .filter_map(|p| p.duration)
        .fold(None, |total: Option<TimeDelta>, d| {
            Some(total.map_or(d, |t| t + d))
        })
}
