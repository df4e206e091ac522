use crate::types::report::{ScoreReport, Severity};
use serde_json::json;

pub fn to_sarif(report: &ScoreReport) -> Result<String, serde_json::Error> {
    let location = if report.url.is_empty() {
        "page".to_string()
    } else {
        report.url.clone()
    };
    let results: Vec<_> = report
        .recommendations
        .iter()
        .filter(|recommendation| recommendation.severity != Severity::Ok)
        .map(|recommendation| {
            json!({
                "ruleId": recommendation.id,
                "level": if recommendation.severity == Severity::Error { "error" } else { "warning" },
                "message": { "text": recommendation.detail },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": location }
                    }
                }],
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "seoscore",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn sarif_lists_only_non_ok_recommendations() {
        let report = sample_report();
        let rendered = to_sarif(&report).expect("sarif should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("sarif should parse");

        let expected = report
            .recommendations
            .iter()
            .filter(|rec| rec.severity != Severity::Ok)
            .count();
        let results = value["runs"][0]["results"]
            .as_array()
            .expect("results should be an array");
        assert_eq!(results.len(), expected);
        assert!(results
            .iter()
            .any(|result| result["ruleId"] == "rec.meta_description" && result["level"] == "error"));
        assert!(results.iter().all(|result| result["ruleId"] != "rec.h1"));
    }
}
