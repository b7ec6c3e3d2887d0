//! Non-interactive renderer answering prompts from predefined values
//!
//! Answers are keyed by prompt message. Useful for automation, testing,
//! or CI/CD environments where no terminal is attached.

use super::interface::*;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct ScriptedRenderer {
    answers: IndexMap<String, Value>,
}

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a renderer from a JSON object of `message -> answer` pairs.
    pub fn from_json(content: &str) -> Result<Self> {
        let answers: IndexMap<String, Value> = serde_json::from_str(content)?;
        Ok(Self { answers })
    }

    /// Add a predefined answer for a specific prompt message
    pub fn with_answer(mut self, prompt: &str, answer: impl Into<Value>) -> Self {
        self.answers.insert(prompt.to_string(), answer.into());
        self
    }

    /// Answer the prompt as if the user had cancelled it
    pub fn with_cancel(mut self, prompt: &str) -> Self {
        self.answers.insert(prompt.to_string(), Value::Null);
        self
    }

    /// `Some(None)` means the script cancels the prompt.
    fn lookup(&self, prompt: &str) -> Option<Option<&Value>> {
        self.answers.get(prompt).map(|value| (!value.is_null()).then_some(value))
    }

    fn as_text(prompt: &str, value: &Value) -> Result<String> {
        value.as_str().map(str::to_string).ok_or_else(|| {
            Error::InvalidArgument(format!("answer for '{prompt}' must be a string"))
        })
    }

    fn index_of(prompt: &str, choices: &[String], answer: &str) -> Result<usize> {
        choices.iter().position(|choice| choice == answer).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "answer '{answer}' for '{prompt}' is not one of the provided choices"
            ))
        })
    }
}

impl SelectRenderer for ScriptedRenderer {
    fn render_select(&self, config: &SelectConfig) -> Result<Option<usize>> {
        let index = match self.lookup(&config.prompt) {
            Some(None) => return Ok(None),
            Some(Some(value)) => {
                let answer = Self::as_text(&config.prompt, value)?;
                Self::index_of(&config.prompt, &config.choices, &answer)?
            }
            None => config.default_index.unwrap_or(0),
        };

        log::info!(
            "Auto-answering choice prompt '{}' with option {}: '{}'",
            config.prompt,
            index,
            config.choices.get(index).map_or("<invalid>", String::as_str)
        );
        Ok(Some(index))
    }
}

impl CheckboxRenderer for ScriptedRenderer {
    fn render_checkbox(&self, config: &CheckboxConfig) -> Result<Option<Vec<usize>>> {
        let indices: Vec<usize> = match self.lookup(&config.prompt) {
            Some(None) => return Ok(None),
            // A checkbox reports each checked item once, in choice order.
            Some(Some(Value::Array(values))) => values
                .iter()
                .map(|value| {
                    let answer = Self::as_text(&config.prompt, value)?;
                    Self::index_of(&config.prompt, &config.choices, &answer)
                })
                .collect::<Result<BTreeSet<_>>>()?
                .into_iter()
                .collect(),
            Some(Some(_)) => {
                return Err(Error::InvalidArgument(format!(
                    "answer for '{}' must be an array of strings",
                    config.prompt
                )))
            }
            // Default to selecting items that are marked as default
            None => config
                .defaults
                .iter()
                .enumerate()
                .filter_map(|(i, &selected)| selected.then_some(i))
                .collect(),
        };

        log::info!(
            "Auto-answering multiple choice prompt '{}' with options: {:?}",
            config.prompt,
            indices
        );
        Ok(Some(indices))
    }
}

impl PathRenderer for ScriptedRenderer {
    fn render_path(&self, config: &PathConfig) -> Result<Option<String>> {
        let path = match self.lookup(&config.prompt) {
            Some(None) => return Ok(None),
            Some(Some(value)) => Self::as_text(&config.prompt, value)?,
            None => config.default.clone(),
        };

        log::info!("Auto-answering path prompt '{}' with: '{}'", config.prompt, path);
        Ok(Some(path))
    }
}

impl AutocompleteRenderer for ScriptedRenderer {
    fn render_autocomplete(&self, config: &AutocompleteConfig) -> Result<Option<String>> {
        let text = match self.lookup(&config.prompt) {
            Some(None) => return Ok(None),
            Some(Some(value)) => Self::as_text(&config.prompt, value)?,
            None => config.default.clone().unwrap_or_default(),
        };

        log::info!("Auto-answering autocomplete prompt '{}' with: '{}'", config.prompt, text);
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn select_config() -> SelectConfig {
        SelectConfig {
            prompt: "Language?".to_string(),
            choices: vec!["python".to_string(), "rust".to_string()],
            default_index: Some(1),
        }
    }

    #[test]
    fn select_uses_answer_then_default() {
        let renderer = ScriptedRenderer::new().with_answer("Language?", "python");
        assert_eq!(renderer.render_select(&select_config()).unwrap(), Some(0));

        let renderer = ScriptedRenderer::new();
        assert_eq!(renderer.render_select(&select_config()).unwrap(), Some(1));
    }

    #[test]
    fn select_rejects_unknown_answer() {
        let renderer = ScriptedRenderer::new().with_answer("Language?", "cobol");
        assert!(matches!(
            renderer.render_select(&select_config()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn null_answer_cancels() {
        let renderer = ScriptedRenderer::new().with_cancel("Language?");
        assert_eq!(renderer.render_select(&select_config()).unwrap(), None);
    }

    #[test]
    fn checkbox_falls_back_to_checked_defaults() {
        let config = CheckboxConfig {
            prompt: "Stack?".to_string(),
            choices: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            defaults: vec![true, false, true],
        };
        let renderer = ScriptedRenderer::new();
        assert_eq!(renderer.render_checkbox(&config).unwrap(), Some(vec![0, 2]));

        let renderer = ScriptedRenderer::new().with_answer("Stack?", json!(["b"]));
        assert_eq!(renderer.render_checkbox(&config).unwrap(), Some(vec![1]));

        let renderer = ScriptedRenderer::new().with_answer("Stack?", "b");
        assert!(renderer.render_checkbox(&config).is_err());
    }

    #[test]
    fn checkbox_answers_come_back_once_in_choice_order() {
        let config = CheckboxConfig {
            prompt: "Stack?".to_string(),
            choices: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            defaults: vec![false; 3],
        };
        let renderer = ScriptedRenderer::new().with_answer("Stack?", json!(["c", "a", "a"]));
        assert_eq!(renderer.render_checkbox(&config).unwrap(), Some(vec![0, 2]));
    }

    #[test]
    fn text_prompts_read_answers_from_json() {
        let renderer =
            ScriptedRenderer::from_json(r#"{"Where?": "src", "Name?": null}"#).unwrap();

        let path = PathConfig {
            prompt: "Where?".to_string(),
            default: String::new(),
            only_directories: false,
        };
        assert_eq!(renderer.render_path(&path).unwrap().as_deref(), Some("src"));

        let autocomplete = AutocompleteConfig {
            prompt: "Name?".to_string(),
            choices: vec![],
            default: None,
            match_middle: true,
        };
        assert_eq!(renderer.render_autocomplete(&autocomplete).unwrap(), None);
    }

    #[test]
    fn from_json_requires_an_object() {
        assert!(matches!(ScriptedRenderer::from_json("[1, 2]"), Err(Error::JsonError(_))));
    }
}
