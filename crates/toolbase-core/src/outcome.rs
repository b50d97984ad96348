//! Server Responses
//!
//! Form, action and delete endpoints answer with JSON carrying a
//! human-readable `response`. Forms may also answer with `status: "error"`
//! and replacement form HTML, or with a bare HTML form.

use serde::Deserialize;
use serde_json::Value;

use crate::escape_html;

#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    form: Option<String>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
}

/// Option to add to a select after an inline create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedOption {
    pub value: String,
    pub label: String,
}

impl CreatedOption {
    pub fn to_html(&self) -> String {
        format!(
            "<option value=\"{}\" selected>{}</option>",
            escape_html(&self.value),
            escape_html(&self.label)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Saved {
        message: Option<String>,
        created: Option<CreatedOption>,
    },
    Rejected {
        form_html: String,
        message: Option<String>,
    },
}

impl FormOutcome {
    pub fn parse(body: &str) -> Self {
        let raw: RawResponse = match serde_json::from_str(body) {
            Ok(raw) => raw,
            // Validation errors come back as the re-rendered form
            Err(_) => {
                return FormOutcome::Rejected {
                    form_html: body.to_string(),
                    message: None,
                }
            }
        };

        let failed = raw
            .status
            .as_deref()
            .map(|s| matches!(s, "error" | "invalid" | "failed"))
            .unwrap_or(false);

        if failed {
            return FormOutcome::Rejected {
                form_html: raw.form.unwrap_or_default(),
                message: raw.response,
            };
        }

        let created = match (raw.id, raw.name) {
            (Some(id), Some(name)) => Some(CreatedOption {
                value: value_to_string(&id),
                label: name,
            }),
            _ => None,
        };

        FormOutcome::Saved {
            message: raw.response,
            created,
        }
    }
}

/// `response` field of an action/delete answer.
pub fn parse_message(body: &str) -> Option<String> {
    serde_json::from_str::<RawResponse>(body)
        .ok()
        .and_then(|raw| raw.response)
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_success() {
        let outcome = FormOutcome::parse(r#"{"response": "Værktøj oprettet"}"#);
        assert_eq!(
            outcome,
            FormOutcome::Saved {
                message: Some("Værktøj oprettet".to_string()),
                created: None
            }
        );
    }

    #[test]
    fn test_status_error_with_form() {
        let outcome = FormOutcome::parse(
            r#"{"status": "error", "response": "Ret fejlene", "form": "<form class=\"add\"></form>"}"#,
        );
        match outcome {
            FormOutcome::Rejected { form_html, message } => {
                assert_eq!(form_html, r#"<form class="add"></form>"#);
                assert_eq!(message.as_deref(), Some("Ret fejlene"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_html_body_is_rejection() {
        let html = r#"<form class="add" id="tool"><ul class="errorlist"></ul></form>"#;
        assert_eq!(
            FormOutcome::parse(html),
            FormOutcome::Rejected { form_html: html.to_string(), message: None }
        );
    }

    #[test]
    fn test_inline_create_option() {
        let outcome = FormOutcome::parse(r#"{"status": "ok", "id": 17, "name": "Save & bor"}"#);
        let FormOutcome::Saved { created: Some(option), .. } = outcome else {
            panic!("expected created option");
        };
        assert_eq!(option.value, "17");
        assert_eq!(option.to_html(), r#"<option value="17" selected>Save &amp; bor</option>"#);
    }

    #[test]
    fn test_parse_message() {
        assert_eq!(parse_message(r#"{"response": "Gennemført"}"#).as_deref(), Some("Gennemført"));
        assert_eq!(parse_message("<html>"), None);
    }
}
