// Prompt templating shared by every AI endpoint.
// Each feature module keeps its own templates in a prompts.rs alongside it.

use thiserror::Error;

/// Closing instruction appended to every template that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "Your final output MUST be a single, clean, valid JSON object. \
    Do not include any text outside of this structure.";

/// Flattens user input for interpolation inside a quoted, single-line prompt slot.
/// Double quotes become single quotes and line breaks become spaces.
pub fn inline_value(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '"' => '\'',
            '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("prompt template '{template}' references parameter '{name}' which was not supplied")]
    MissingParameter { template: &'static str, name: String },
}

/// A named prompt with `{parameter}` placeholders.
///
/// A placeholder is `{` + identifier + `}` where the identifier starts with a
/// letter or underscore. Anything else (JSON examples, `{"key": ...}`) is
/// copied through untouched. Supplied values are inserted verbatim and never
/// re-scanned, so user input containing `{name}` cannot pull in other parameters.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub id: &'static str,
    body: &'static str,
}

impl PromptTemplate {
    pub const fn new(id: &'static str, body: &'static str) -> Self {
        Self { id, body }
    }

    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, PromptError> {
        let mut out = String::with_capacity(self.body.len());
        let mut rest = self.body;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match placeholder_name(after) {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| PromptError::MissingParameter {
                            template: self.id,
                            name: name.to_string(),
                        })?;
                    out.push_str(value);
                    rest = &after[name.len() + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// If `after_brace` starts with `identifier}`, returns the identifier.
fn placeholder_name(after_brace: &str) -> Option<&str> {
    let first = after_brace.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    let len = after_brace
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after_brace.len());
    after_brace[len..]
        .starts_with('}')
        .then(|| &after_brace[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate = PromptTemplate::new(
        "greeting",
        r#"Hello {name}, you chose {role_name}.
Return {"ok": true, "nested": {"x": 1}} and keep {2} literal."#,
    );

    #[test]
    fn test_render_substitutes_placeholders_and_keeps_json() {
        let out = GREETING
            .render(&[("name", "Asha"), ("role_name", "UX Designer")])
            .unwrap();
        assert_eq!(
            out,
            "Hello Asha, you chose UX Designer.\nReturn {\"ok\": true, \"nested\": {\"x\": 1}} and keep {2} literal."
        );
    }

    #[test]
    fn test_render_rejects_missing_parameter() {
        let err = GREETING.render(&[("name", "Asha")]).unwrap_err();
        assert_eq!(
            err,
            PromptError::MissingParameter {
                template: "greeting",
                name: "role_name".to_string()
            }
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = GREETING
            .render(&[("name", "{role_name}"), ("role_name", "Doctor")])
            .unwrap();
        assert!(out.starts_with("Hello {role_name}, you chose Doctor."));
    }

    #[test]
    fn test_unused_parameters_are_ignored() {
        let t = PromptTemplate::new("plain", "no placeholders");
        assert_eq!(t.render(&[("x", "y")]).unwrap(), "no placeholders");
    }

    #[test]
    fn test_inline_value_flattens_quotes_and_newlines() {
        assert_eq!(
            inline_value("  I said \"hi\"\nthen left "),
            "I said 'hi' then left"
        );
    }

    #[test]
    fn test_trailing_open_brace() {
        let t = PromptTemplate::new("edge", "ends with {");
        assert_eq!(t.render(&[]).unwrap(), "ends with {");
    }
}
