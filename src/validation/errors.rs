use indexmap::IndexMap;

/// Per-field error messages. An empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: IndexMap<String, String>,
}

impl FieldErrors {
    pub fn for_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: names
                .into_iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn set_error(&mut self, name: impl Into<String>, error: impl Into<String>) {
        self.entries.insert(name.into(), error.into());
    }

    pub fn clear_error(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.clear();
        }
    }

    pub fn apply(&mut self, name: &str, result: Result<(), String>) {
        match result {
            Ok(()) => self.clear_error(name),
            Err(error) => self.set_error(name, error),
        }
    }

    /// Error message for `name`, or `""` when there is none.
    pub fn get(&self, name: &str) -> &str {
        self.entries.get(name).map(String::as_str).unwrap_or_default()
    }
}
