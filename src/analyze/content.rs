use crate::scan::KeywordCount;
use crate::types::scoring::{
    FactorScore, Points, CONTENT_LENGTH_MAX, KEYWORD_DENSITY_MAX, SEMANTIC_COVERAGE_MAX,
};

/// Word-count tiers, highest first.
const LENGTH_TIERS: [(usize, Points); 4] = [(800, 20), (500, 14), (300, 8), (150, 4)];

/// Target-keyword occurrence tiers, highest first.
const DENSITY_TIERS: [(usize, Points); 4] = [(6, 15), (4, 10), (2, 5), (1, 2)];

fn tiered(value: usize, tiers: &[(usize, Points)]) -> Points {
    tiers
        .iter()
        .find(|(floor, _)| value >= *floor)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn content_length_score(word_count: usize) -> FactorScore {
    FactorScore::new(tiered(word_count, &LENGTH_TIERS), CONTENT_LENGTH_MAX)
}

pub fn keyword_density_score(target_count: usize) -> FactorScore {
    FactorScore::new(tiered(target_count, &DENSITY_TIERS), KEYWORD_DENSITY_MAX)
}

/// Share of semantic keywords that appear at least once, scaled to 15.
///
/// An empty keyword set earns full credit.
pub fn semantic_coverage_score(semantic: &[KeywordCount]) -> FactorScore {
    if semantic.is_empty() {
        return FactorScore::new(SEMANTIC_COVERAGE_MAX, SEMANTIC_COVERAGE_MAX);
    }
    let covered = semantic.iter().filter(|entry| entry.count > 0).count();
    let ratio = covered as f64 / semantic.len() as f64;
    let points = (ratio * f64::from(SEMANTIC_COVERAGE_MAX)).round() as Points;
    FactorScore::new(points, SEMANTIC_COVERAGE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[usize]) -> Vec<KeywordCount> {
        values
            .iter()
            .enumerate()
            .map(|(index, count)| KeywordCount {
                keyword: format!("kw{index}"),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn content_length_tiers() {
        let cases = [
            (0, 0),
            (149, 0),
            (150, 4),
            (299, 4),
            (300, 8),
            (499, 8),
            (500, 14),
            (799, 14),
            (800, 20),
            (5000, 20),
        ];
        for (words, expected) in cases {
            assert_eq!(content_length_score(words).points, expected, "words = {words}");
        }
    }

    #[test]
    fn density_tiers() {
        let cases = [(0, 0), (1, 2), (2, 5), (3, 5), (4, 10), (5, 10), (6, 15), (40, 15)];
        for (count, expected) in cases {
            assert_eq!(keyword_density_score(count).points, expected, "count = {count}");
        }
    }

    #[test]
    fn density_is_monotonic_in_occurrence_count() {
        let mut previous = 0;
        for count in 0..50 {
            let points = keyword_density_score(count).points;
            assert!(points >= previous, "density dropped at count {count}");
            previous = points;
        }
    }

    #[test]
    fn empty_semantic_set_earns_full_coverage() {
        assert_eq!(semantic_coverage_score(&[]).points, 15);
    }

    #[test]
    fn coverage_rounds_to_nearest_point() {
        assert_eq!(semantic_coverage_score(&counts(&[1, 0])).points, 8);
        assert_eq!(semantic_coverage_score(&counts(&[3, 0, 0])).points, 5);
        assert_eq!(semantic_coverage_score(&counts(&[1, 1, 0])).points, 10);
        assert_eq!(semantic_coverage_score(&counts(&[0, 0, 0])).points, 0);
        assert_eq!(semantic_coverage_score(&counts(&[2, 1, 4])).points, 15);
    }
}
