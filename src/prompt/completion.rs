//! Tab completion sources handed to the dialoguer input prompts.

use dialoguer::Completion;
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR};

const HOME_PREFIX: &str = "~";

/// Completes filesystem paths relative to the current directory.
///
/// A leading `~` is read from the home directory but kept as typed.
#[derive(Debug, Clone, Default)]
pub struct PathCompletion {
    only_directories: bool,
    home: Option<PathBuf>,
}

impl PathCompletion {
    pub fn new(only_directories: bool) -> Self {
        Self { only_directories, home: dirs::home_dir() }
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Directory to list for the typed `dir_part`.
    fn resolve_dir(&self, dir_part: &str) -> PathBuf {
        if dir_part.is_empty() {
            return PathBuf::from(".");
        }
        if let (Some(rest), Some(home)) = (dir_part.strip_prefix(HOME_PREFIX), &self.home) {
            if rest.starts_with(is_separator) {
                return home.join(rest.trim_start_matches(is_separator));
            }
        }
        PathBuf::from(dir_part)
    }

    /// Entry names inside `dir` starting with `prefix`, sorted.
    fn candidates(&self, dir: &Path, prefix: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| !self.only_directories || entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort();
        names
    }

    pub fn complete(&self, input: &str) -> Option<String> {
        if input == HOME_PREFIX && self.home.is_some() {
            return Some(format!("{HOME_PREFIX}{MAIN_SEPARATOR}"));
        }

        let (dir_part, prefix) = match input.rfind(is_separator) {
            Some(idx) => input.split_at(idx + 1),
            None => ("", input),
        };
        let dir = self.resolve_dir(dir_part);

        let candidates = self.candidates(&dir, prefix);
        let common = longest_common_prefix(&candidates)?;

        let mut completed = format!("{dir_part}{common}");
        if candidates.len() == 1 && dir.join(common).is_dir() {
            completed.push(MAIN_SEPARATOR);
        }

        if completed == input {
            None
        } else {
            Some(completed)
        }
    }
}

impl Completion for PathCompletion {
    fn get(&self, input: &str) -> Option<String> {
        self.complete(input)
    }
}

fn longest_common_prefix(names: &[String]) -> Option<&str> {
    let first = names.first()?;
    let len = names.iter().skip(1).fold(first.len(), |len, name| {
        first
            .char_indices()
            .zip(name.chars())
            .take_while(|((idx, a), b)| *idx < len && a == b)
            .last()
            .map_or(0, |((idx, a), _)| idx + a.len_utf8())
    });
    Some(&first[..len])
}

/// Completes free text to one of a fixed set of suggestions.
#[derive(Debug, Clone)]
pub struct ChoiceCompletion {
    choices: Vec<String>,
    match_middle: bool,
}

impl ChoiceCompletion {
    pub fn new(choices: Vec<String>, match_middle: bool) -> Self {
        Self { choices, match_middle }
    }

    /// First suggestion matching `input`, ignoring ASCII case.
    pub fn suggest(&self, input: &str) -> Option<&str> {
        if input.is_empty() {
            return None;
        }
        let needle = input.to_ascii_lowercase();

        self.choices
            .iter()
            .find(|choice| {
                let haystack = choice.to_ascii_lowercase();
                if self.match_middle {
                    haystack.contains(&needle)
                } else {
                    haystack.starts_with(&needle)
                }
            })
            .map(String::as_str)
    }
}

impl Completion for ChoiceCompletion {
    fn get(&self, input: &str) -> Option<String> {
        self.suggest(input).filter(|choice| *choice != input).map(str::to_string)
    }
}
