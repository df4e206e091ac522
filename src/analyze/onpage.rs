use crate::scan::PageSignals;
use crate::types::scoring::{FactorScore, H1_MAX, META_DESCRIPTION_MAX, TITLE_MAX};
use std::ops::RangeInclusive;

pub const TITLE_LENGTH: RangeInclusive<usize> = 30..=65;
pub const META_LENGTH: RangeInclusive<usize> = 120..=160;

pub fn title_length_ok(signals: &PageSignals) -> bool {
    TITLE_LENGTH.contains(&signals.title_length)
}

pub fn meta_length_ok(signals: &PageSignals) -> bool {
    META_LENGTH.contains(&signals.meta_length)
}

pub fn title_score(signals: &PageSignals) -> FactorScore {
    let mut points = 0;
    if signals.title_has_keyword {
        points += 10;
    }
    if title_length_ok(signals) {
        points += 5;
    }
    FactorScore::new(points, TITLE_MAX)
}

pub fn meta_description_score(signals: &PageSignals) -> FactorScore {
    let mut points = 0;
    if signals.meta_has_keyword {
        points += 8;
    }
    if meta_length_ok(signals) {
        points += 7;
    }
    FactorScore::new(points, META_DESCRIPTION_MAX)
}

pub fn h1_score(signals: &PageSignals) -> FactorScore {
    let mut points = 0;
    if signals.h1_present {
        points += 5;
    }
    if signals.h1_has_keyword {
        points += 5;
    }
    FactorScore::new(points, H1_MAX)
}
