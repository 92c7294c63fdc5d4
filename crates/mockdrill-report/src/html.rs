//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use mockdrill_core::model::Response;
use mockdrill_core::report::Report;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a report and the session transcript.
pub fn generate_html(report: &Report, transcript: &[Response]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>mockdrill report</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>mockdrill report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} answered questions | generated {}</p>\n",
        transcript.len(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Overall summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str(&format!(
        "<p class=\"overall\">Overall score: <strong>{:.2} / 10</strong></p>\n",
        report.overall_score
    ));
    html.push_str(&format!(
        "<p>{}</p>\n",
        html_escape(&report.overall_feedback)
    ));

    // Per-topic table
    html.push_str("<table class=\"summary\">\n");
    html.push_str(
        "<thead><tr><th>Topic</th><th>Average</th><th>Questions</th><th>Feedback</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for (topic, breakdown) in &report.topic_breakdown {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>\n",
            topic,
            breakdown.average,
            breakdown.count,
            html_escape(&breakdown.feedback),
        ));
    }
    html.push_str("</tbody></table>\n");

    // SVG bar chart of topic averages
    if !report.topic_breakdown.is_empty() {
        html.push_str(&generate_bar_chart(report));
    }

    html.push_str("</section>\n");

    // Transcript
    html.push_str("<section class=\"transcript\">\n");
    html.push_str("<h2>Transcript</h2>\n");
    for (i, response) in transcript.iter().enumerate() {
        let score_class = if response.score >= 8 {
            "pass"
        } else if response.score >= 5 {
            "mid"
        } else {
            "fail"
        };
        html.push_str("<details>\n");
        html.push_str(&format!(
            "<summary><span class=\"badge {}\">{}/10</span> Q{} [{}] {}</summary>\n",
            score_class,
            response.score,
            i + 1,
            response.topic,
            html_escape(&response.prompt),
        ));
        let answer = if response.answer.trim().is_empty() {
            "<em>(no answer)</em>".to_string()
        } else {
            html_escape(&response.answer)
        };
        html.push_str(&format!("<p class=\"answer\">{answer}</p>\n"));
        html.push_str(&format!(
            "<p class=\"feedback\">{} ({} keyword(s) matched)</p>\n",
            html_escape(&response.feedback),
            response.matched_keywords.len(),
        ));
        html.push_str("</details>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &Report, transcript: &[Response], path: &Path) -> Result<()> {
    let html = generate_html(report, transcript);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(report: &Report) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 140;

    let total_height = report.topic_breakdown.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (topic, breakdown)) in report.topic_breakdown.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (breakdown.average / 10.0 * max_width as f64) as usize;

        let color = if breakdown.average >= 8.0 {
            "#22c55e"
        } else if breakdown.average >= 6.0 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            topic
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.2}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            breakdown.average
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.overall { font-size: 1.2rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.badge { display: inline-block; min-width: 3.2em; text-align: center; border-radius: 4px; padding: 0.1rem 0.3rem; margin-right: 0.5rem; }
.pass { background: var(--pass); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
.answer { white-space: pre-wrap; margin: 0.5rem 1.5rem; }
.feedback { color: #6b7280; margin: 0.5rem 1.5rem; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
