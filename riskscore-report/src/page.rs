use std::fmt::{Display, Write as _};

use itertools::Itertools;
use riskscore_model::{
    profile::{AGE_RANGE, HEIGHT_FEET_RANGE, HEIGHT_INCHES_RANGE, WEIGHT_LBS_RANGE},
    Assessment, AssessmentError, ConditionFlags, Gender, ProfileInput,
};
use strum::IntoEnumIterator;

const TITLE: &str = "Obesity Risk Score Calculator";
const CAPTION: &str = "Understand your weight category and get personalized health insights.";
const PLACEHOLDER: &str = "Select...";

/// Escape text for HTML.
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn options<T, I>(values: I, selected: Option<T>) -> String
where
    T: Display + PartialEq + Copy,
    I: IntoIterator<Item = T>,
{
    let placeholder = format!(
        "<option value=\"\"{}>{}</option>",
        if selected.is_none() { " selected" } else { "" },
        PLACEHOLDER
    );
    let choices = values
        .into_iter()
        .map(|v| {
            let label = esc(&v.to_string());
            format!(
                "<option value=\"{}\"{}>{}</option>",
                label,
                if selected == Some(v) { " selected" } else { "" },
                label
            )
        })
        .join("");
    placeholder + &choices
}

struct PageBuilder {
    buf: String,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
        }
    }

    fn start(&mut self) {
        let _ = write!(
            self.buf,
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
             <title>{title}</title>\
             <style>\
             body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;max-width:720px;margin:24px auto;padding:0 16px}}\
             label{{display:block;margin:0.75rem 0 0.25rem}}\
             select{{width:100%;padding:4px}}\
             .caption{{opacity:0.7}}\
             .subtitle{{font-size:20px;font-weight:600;margin:1.5rem 0 0.75rem 0}}\
             .check label{{display:inline;margin:0}}\
             .warning{{padding:12px;border-radius:6px;background:#fff4e5}}\
             .info{{padding:12px;border-radius:6px;background:#e8f1fb}}\
             .metric{{font-size:40px;font-weight:600}}\
             </style></head><body>\
             <h1>{title}</h1><p class=\"caption\">{caption}</p>",
            title = esc(TITLE),
            caption = esc(CAPTION),
        );
    }

    fn select<T, I>(&mut self, name: &str, label: &str, values: I, selected: Option<T>)
    where
        T: Display + PartialEq + Copy,
        I: IntoIterator<Item = T>,
    {
        let _ = write!(
            self.buf,
            "<label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\">{}</select>",
            options(values, selected),
            name = name,
            label = esc(label),
        );
    }

    fn checkbox(&mut self, name: &str, label: &str, checked: bool) {
        let _ = write!(
            self.buf,
            "<div class=\"check\"><input type=\"checkbox\" id=\"{name}\" name=\"{name}\" value=\"true\"{}> \
             <label for=\"{name}\">{label}</label></div>",
            if checked { " checked" } else { "" },
            name = name,
            label = esc(label),
        );
    }

    fn form(&mut self, input: &ProfileInput, conditions: &ConditionFlags) {
        let _ = write!(self.buf, "<form method=\"get\" action=\"/\">");
        self.select("age", "Age", AGE_RANGE, input.age);
        self.select("gender", "Gender", Gender::iter(), input.gender);
        self.select(
            "height_feet",
            "Height (feet)",
            HEIGHT_FEET_RANGE,
            input.height_feet,
        );
        self.select(
            "height_inches",
            "Height (inches)",
            HEIGHT_INCHES_RANGE,
            input.height_inches,
        );
        self.select("weight_lbs", "Weight (lbs)", WEIGHT_LBS_RANGE, input.weight_lbs);

        let _ = write!(
            self.buf,
            "<div class=\"subtitle\">Health Conditions (Select all that apply)</div>"
        );
        self.checkbox(
            "hypertension",
            "High blood pressure (hypertension)",
            conditions.has_hypertension,
        );
        self.checkbox("diabetes", "Type 2 diabetes", conditions.has_diabetes);
        self.checkbox("smoker", "Smoker (current or recent)", conditions.is_smoker);
        let _ = write!(
            self.buf,
            "<p><button type=\"submit\">Calculate</button></p></form>"
        );
    }

    fn warning(&mut self, message: &str) {
        let _ = write!(self.buf, "<p class=\"warning\">{}</p>", esc(message));
    }

    fn list(&mut self, items: &[&str]) {
        let _ = write!(
            self.buf,
            "<ul>{}</ul>",
            items
                .iter()
                .map(|item| format!("<li>{}</li>", esc(item)))
                .join("")
        );
    }

    fn results(&mut self, assessment: &Assessment, report_href: &str) {
        let bmi = assessment.bmi();
        let advice = assessment.advice();

        let _ = write!(
            self.buf,
            "<hr><h2>Results</h2>\
             <div>Your BMI</div><div class=\"metric\" id=\"bmi\">{}</div>\
             <p><b>Weight Category:</b> <span id=\"category\">{}</span></p>\
             <p class=\"info\">{}</p>",
            bmi.value(),
            esc(&bmi.category().to_string()),
            esc(advice.insight()),
        );

        let _ = write!(self.buf, "<hr><h4>Recommended Next Steps</h4>");
        self.list(advice.lifestyle_tips());

        if !advice.condition_notes().is_empty() {
            let _ = write!(self.buf, "<h4>Condition-Specific Guidance</h4>");
            self.list(advice.condition_notes());
        }

        let _ = write!(
            self.buf,
            "<hr><h4>Save Your Results</h4>\
             <p><a id=\"download\" href=\"{}\" download=\"{}\">Download Results Here</a></p>",
            esc(report_href),
            esc(crate::summary::REPORT_FILE_NAME),
        );
    }

    fn finish(mut self) -> String {
        self.buf.push_str("</body></html>");
        self.buf
    }
}

/// Renders the form, followed by either the results or the completion prompt.
pub fn render_page(
    input: &ProfileInput,
    conditions: &ConditionFlags,
    outcome: &Result<Assessment, AssessmentError>,
    report_href: &str,
) -> String {
    let mut page = PageBuilder::new();
    page.start();
    page.form(input, conditions);
    match outcome {
        Ok(assessment) => page.results(assessment, report_href),
        Err(e) => page.warning(&e.to_string()),
    }
    page.finish()
}
