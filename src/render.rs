//! HTML rendering of the application form.

use std::fmt::Write;

use crate::encoder::{table_for, Feature, FormSubmission};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Loan Approval Predictor</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
label { display: block; margin-top: .75rem; }
.result { margin-top: 1.5rem; padding: 1rem; border: 1px solid #888; font-weight: bold; }
</style>
</head>
<body>
<h1>Loan Approval Predictor</h1>
<form method="post" action="/">
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Dependents is free text in the model but the form offers the values seen in training.
const DEPENDENTS_OPTIONS: [&str; 4] = ["0", "1", "2", "3+"];

/// Renders the form page, pre-filled with `input_values`, plus `result` when there is one.
pub fn render_index(result: Option<&str>, input_values: &FormSubmission) -> String {
    let mut html = String::from(HEAD);

    for feature in Feature::ALL {
        let value = input_values.get(feature.name()).unwrap_or_default();
        // writing into a String cannot fail
        let _ = field(&mut html, feature, value);
    }
    html.push_str("<button type=\"submit\">Predict</button>\n</form>\n");

    if let Some(result) = result {
        let _ = writeln!(html, "<div class=\"result\">{}</div>", escape(result));
    }

    html.push_str(TAIL);
    html
}

fn field(html: &mut String, feature: Feature, value: &str) -> std::fmt::Result {
    let name = feature.name();
    writeln!(html, "<label for=\"{name}\">{}</label>", name.replace('_', " "))?;

    let options: Vec<&str> = match (feature, table_for(feature)) {
        (_, Some(table)) => table.iter().map(|&(label, _)| label).collect(),
        (Feature::Dependents, None) => DEPENDENTS_OPTIONS.to_vec(),
        (Feature::CreditHistory, None) => vec!["1", "0"],
        _ => {
            return writeln!(
                html,
                "<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\">",
                escape(value)
            );
        }
    };

    writeln!(html, "<select id=\"{name}\" name=\"{name}\">")?;
    writeln!(html, "<option value=\"\"></option>")?;
    for option in options {
        let selected = if option == value.trim() { " selected" } else { "" };
        writeln!(
            html,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape(option)
        )?;
    }
    writeln!(html, "</select>")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_every_field_and_no_result() {
        let html = render_index(None, &FormSubmission::new());

        for feature in Feature::ALL {
            assert!(
                html.contains(&format!("name=\"{}\"", feature.name())),
                "{feature:?}"
            );
        }
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn shows_the_result() {
        let html = render_index(Some("Approved (Loan Status = 1)"), &FormSubmission::new());
        assert!(html.contains("<div class=\"result\">Approved (Loan Status = 1)</div>"));
    }

    #[test]
    fn keeps_submitted_values() {
        let form: FormSubmission = [("Gender", "Female"), ("LoanAmount", "120")]
            .into_iter()
            .collect();

        let html = render_index(None, &form);
        assert!(html.contains("<option value=\"Female\" selected>Female</option>"));
        assert!(html.contains("name=\"LoanAmount\" value=\"120\""));
    }

    #[test]
    fn escapes_values() {
        let form: FormSubmission = [("ApplicantIncome", "\"><script>")].into_iter().collect();

        let html = render_index(None, &form);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
