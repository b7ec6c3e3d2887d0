//! Integration tests driving the prompt facade through custom renderers
//!
//! No terminal is involved: every renderer here answers programmatically.

use chooser::error::{Error, PromptKind, Result};
use chooser::prompt::interface::*;
use chooser::prompt::{Prompts, ScriptedRenderer};
use serde_json::json;

/// Echoes the configured default back, like a user pressing enter.
struct AcceptDefaults;

impl SelectRenderer for AcceptDefaults {
    fn render_select(&self, config: &SelectConfig) -> Result<Option<usize>> {
        Ok(config.default_index)
    }
}

impl CheckboxRenderer for AcceptDefaults {
    fn render_checkbox(&self, config: &CheckboxConfig) -> Result<Option<Vec<usize>>> {
        let checked = config
            .defaults
            .iter()
            .enumerate()
            .filter_map(|(i, &checked)| checked.then_some(i))
            .collect();
        Ok(Some(checked))
    }
}

impl PathRenderer for AcceptDefaults {
    fn render_path(&self, config: &PathConfig) -> Result<Option<String>> {
        Ok(Some(config.default.clone()))
    }
}

impl AutocompleteRenderer for AcceptDefaults {
    fn render_autocomplete(&self, config: &AutocompleteConfig) -> Result<Option<String>> {
        Ok(config.default.clone())
    }
}

#[test_log::test]
fn accepting_defaults_returns_them_unchanged() {
    let prompts = Prompts::new(AcceptDefaults);
    let choices = ["Python", "Django", "FastAPI"];

    for default in choices {
        assert_eq!(prompts.single_choice("Framework?", &choices, Some(default)).unwrap(), default);
    }

    let selected = prompts
        .multi_select("Stack?", &choices, Some(["FastAPI", "Python"].as_slice()))
        .unwrap();
    assert_eq!(selected, vec!["Python", "FastAPI"]);

    assert_eq!(prompts.path_input("Output?", None, false).unwrap(), "");
    assert_eq!(
        prompts.autocomplete_input("Name?", ["web", "api"], Some("cli"), true).unwrap(),
        "cli"
    );
}

#[test_log::test]
fn missing_default_reads_as_cancellation() {
    let prompts = Prompts::new(AcceptDefaults);

    let err = prompts.single_choice("Framework?", &["Python"], None).unwrap_err();
    assert!(matches!(err, Error::PromptCancelled { kind: PromptKind::SingleChoice }));

    let err = prompts.autocomplete_input("Name?", ["web"], None, false).unwrap_err();
    assert!(matches!(err, Error::PromptCancelled { kind: PromptKind::Autocomplete }));
}

#[test_log::test]
fn scripted_answers_drive_every_prompt_kind() {
    let renderer = ScriptedRenderer::new()
        .with_answer("Framework?", "Django")
        .with_answer("Stack?", json!(["Django", "FastAPI"]))
        .with_answer("Output?", "./out")
        .with_answer("Name?", "my-service");
    let prompts = Prompts::new(renderer);
    let choices = ["Python", "Django", "FastAPI"];

    assert_eq!(prompts.single_choice("Framework?", &choices, None).unwrap(), "Django");
    assert_eq!(
        prompts.multi_select("Stack?", &choices, None).unwrap(),
        vec!["Django", "FastAPI"]
    );
    assert_eq!(prompts.path_input("Output?", Some("."), true).unwrap(), "./out");
    assert_eq!(
        prompts.autocomplete_input("Name?", Vec::<String>::new(), None, true).unwrap(),
        "my-service"
    );
}

#[test_log::test]
fn scripted_cancellation_surfaces_for_every_prompt_kind() {
    let renderer = ScriptedRenderer::from_json(
        r#"{"Framework?": null, "Stack?": null, "Output?": null, "Name?": null}"#,
    )
    .unwrap();
    let prompts = Prompts::new(renderer);

    let errors = [
        prompts.single_choice("Framework?", &["a"], None).unwrap_err(),
        prompts.multi_select("Stack?", &["a"], None).unwrap_err(),
        prompts.path_input("Output?", None, false).unwrap_err(),
        prompts.autocomplete_input("Name?", ["a"], None, false).unwrap_err(),
    ];
    assert!(errors.iter().all(Error::is_cancelled));
}

#[test_log::test]
fn scripted_multi_select_matches_a_real_checkbox() {
    let renderer = ScriptedRenderer::new().with_answer("Stack?", json!(["c", "a", "a"]));
    let prompts = Prompts::new(renderer);

    let selected = prompts.multi_select("Stack?", &["a", "b", "c"], None).unwrap();
    assert_eq!(selected, vec!["a", "c"]);
}
