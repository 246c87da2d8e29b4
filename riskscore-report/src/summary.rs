use std::fmt::Write as _;

use riskscore_model::Assessment;

pub const REPORT_FILE_NAME: &str = "obesity_risk_score.txt";
pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Plain-text summary offered for download. Deterministic for a given assessment.
pub fn render_summary(assessment: &Assessment) -> String {
    let profile = assessment.profile();
    let bmi = assessment.bmi();
    let advice = assessment.advice();

    let mut out = String::with_capacity(1024);
    let _ = writeln!(out, "Obesity Risk Score Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "Age: {}", profile.age());
    let _ = writeln!(out, "Gender: {}", profile.gender());
    let _ = writeln!(
        out,
        "Height: {} ft {} in",
        profile.height_feet(),
        profile.height_inches()
    );
    let _ = writeln!(out, "Weight: {} lbs", profile.weight_lbs());
    let _ = writeln!(out);
    let _ = writeln!(out, "BMI: {}", bmi.value());
    let _ = writeln!(out, "Weight Category: {}", bmi.category());
    let _ = writeln!(out);
    let _ = writeln!(out, "Health Insights:");
    let _ = writeln!(out, "- {}", advice.insight());
    let _ = writeln!(out);
    let _ = writeln!(out, "Lifestyle Tips:");
    for tip in advice.lifestyle_tips() {
        let _ = writeln!(out, "- {}", tip);
    }

    if !advice.condition_notes().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Condition-Specific Guidance:");
        for note in advice.condition_notes() {
            let _ = writeln!(out, "- {}", note);
        }
    }
    out
}
