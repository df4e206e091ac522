use crate::types::scoring::{FactorScore, LINKS_MAX, SUBHEADINGS_MAX};

pub fn subheadings_score(subheading_count: usize) -> FactorScore {
    let points = match subheading_count {
        0 => 0,
        1 => 3,
        _ => 5,
    };
    FactorScore::new(points, SUBHEADINGS_MAX)
}

/// Binary: any detected link earns the full factor.
pub fn links_score(link_count: usize) -> FactorScore {
    let points = if link_count >= 1 { LINKS_MAX } else { 0 };
    FactorScore::new(points, LINKS_MAX)
}
