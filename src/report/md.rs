use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# SEO Content Report\n\n");
    if !report.url.is_empty() {
        output.push_str(&format!("URL: {}\n\n", report.url));
    }
    output.push_str(&format!(
        "Target keyword: \"{}\"\n\nScore: {}/100 ({} words)\n\n",
        report.target_keyword, report.percentage, report.word_count
    ));

    output.push_str("## Score Breakdown\n\n");
    for (name, factor) in report.breakdown.factors() {
        output.push_str(&format!("- {}: {}/{}\n", name, factor.points, factor.max));
    }
    output.push('\n');

    output.push_str("## Keywords\n\n");
    output.push_str(&format!(
        "Covered: {}, needs work: {}, missing: {}\n\n",
        report.tally.covered, report.tally.needs_work, report.tally.missing
    ));
    output.push_str("| Keyword | Count | Recommended | Status |\n");
    output.push_str("|---|---|---|---|\n");
    for record in &report.keywords {
        let marker = if record.is_target { " (target)" } else { "" };
        output.push_str(&format!(
            "| {}{} | {} | {}-{} | {} |\n",
            record.keyword,
            marker,
            record.count,
            record.recommended_min,
            record.recommended_max,
            record.status
        ));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!(
            "- [{}] {}: {}\n",
            recommendation.severity, recommendation.label, recommendation.detail
        ));
    }
    output.push('\n');

    output.push_str("## Content Gaps\n\n");
    for gap in &report.content_gaps {
        output.push_str(&format!(
            "- {} ({}): {}\n",
            gap.title, gap.severity, gap.description
        ));
    }
    output.push('\n');

    output.push_str("## Quick Wins\n\n");
    if report.quick_wins.is_empty() {
        output.push_str("- none\n");
    } else {
        for win in &report.quick_wins {
            output.push_str(&format!("- [{}] {}: {}\n", win.priority, win.title, win.detail));
        }
    }

    output
}
