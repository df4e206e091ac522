use crate::scan::{KeywordCount, PageSignals};
use crate::types::report::{KeywordRecord, KeywordStatus, KeywordTally};

pub const TARGET_RANGE: (usize, usize) = (5, 9);
pub const SEMANTIC_RANGE: (usize, usize) = (2, 4);

impl KeywordStatus {
    pub fn classify(count: usize, recommended_min: usize) -> Self {
        if count == 0 {
            KeywordStatus::Missing
        } else if count < recommended_min {
            KeywordStatus::NeedsWork
        } else {
            KeywordStatus::Covered
        }
    }
}

fn record(entry: &KeywordCount, is_target: bool) -> KeywordRecord {
    let (recommended_min, recommended_max) = if is_target {
        TARGET_RANGE
    } else {
        SEMANTIC_RANGE
    };
    KeywordRecord {
        keyword: entry.keyword.clone(),
        is_target,
        count: entry.count,
        status: KeywordStatus::classify(entry.count, recommended_min),
        recommended_min,
        recommended_max,
    }
}

/// Target keyword first, then each semantic keyword in input order.
pub fn classify(signals: &PageSignals) -> Vec<KeywordRecord> {
    std::iter::once(record(&signals.target, true))
        .chain(signals.semantic.iter().map(|entry| record(entry, false)))
        .collect()
}

pub fn tally(records: &[KeywordRecord]) -> KeywordTally {
    records
        .iter()
        .fold(KeywordTally::default(), |mut tally, record| {
            match record.status {
                KeywordStatus::Covered => tally.covered += 1,
                KeywordStatus::NeedsWork => tally.needs_work += 1,
                KeywordStatus::Missing => tally.missing += 1,
            }
            tally
        })
}

pub fn missing_keywords(records: &[KeywordRecord]) -> Vec<&str> {
    records
        .iter()
        .filter(|record| record.status == KeywordStatus::Missing)
        .map(|record| record.keyword.as_str())
        .collect()
}
