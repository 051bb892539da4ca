//! Template loading and the few formatting helpers the pages share.

use crate::errors::{AppError, AppResult};

pub async fn load_template(name: &str) -> AppResult<String> {
    tokio::fs::read_to_string(format!("templates/{}", name))
        .await
        .map_err(|e| {
            tracing::error!("Failed to read template {}: {}", name, e);
            AppError::File(e)
        })
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cents as a dollar string, e.g. `1250` -> `12.50`.
pub fn format_cents(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_as_dollars() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1999), "19.99");
        assert_eq!(format_cents(7), "0.07");
        assert_eq!(format_cents(-250), "-2.50");
        assert_eq!(format_cents(2 * i128::from(i64::MAX)), "184467440737095516.14");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[tokio::test]
    async fn missing_templates_are_file_errors() {
        assert!(matches!(
            load_template("does-not-exist.html").await,
            Err(AppError::File(_))
        ));
    }
}
