/*!
 * Locale document model.
 *
 * A locale file is a JSON object whose `progressions` field maps category names
 * to objects that map progression names to records:
 *
 * ```json
 * { "progressions": { "Basic": { "I-IV-V": { "nickname": "Classic", "description": "..." } } } }
 * ```
 *
 * Categories and progressions keep the key order of the source file. A root,
 * `progressions` value, category or progression record that is not an object
 * is rejected as a document error.
 */

use log::debug;
use serde_json::{Map, Value};
use std::path::Path;

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Nickname and description of one progression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionRecord {
    /// Short human-friendly alternate name
    pub nickname: Option<String>,

    /// Prose describing the progression
    pub description: Option<String>,
}

impl ProgressionRecord {
    /// Create a record with both fields set
    pub fn new(nickname: &str, description: &str) -> Self {
        Self {
            nickname: Some(nickname.to_string()),
            description: Some(description.to_string()),
        }
    }

    /// Nickname for display, empty when absent
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or("")
    }

    /// Description for display, empty when absent
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Whether a non-empty description is present
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    fn from_value(category: &str, name: &str, value: &Value) -> Result<Self, AppError> {
        let fields = value.as_object().ok_or_else(|| {
            AppError::Document(format!(
                "progression '{}' in category '{}' must be an object, found {}",
                name,
                category,
                kind_of(value)
            ))
        })?;

        Ok(Self {
            nickname: display_field(fields, "nickname"),
            description: display_field(fields, "description"),
        })
    }
}

/// A named progression inside a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    /// Progression label, usually a roman-numeral chord sequence
    pub name: String,

    /// Display fields
    pub record: ProgressionRecord,
}

/// A category of progressions, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category label
    pub name: String,

    /// Progressions in source order
    pub progressions: Vec<Progression>,
}

impl Category {
    /// Look up a progression by name
    pub fn progression(&self, name: &str) -> Option<&ProgressionRecord> {
        self.progressions.iter().find(|p| p.name == name).map(|p| &p.record)
    }
}

/// Parsed locale file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDocument {
    categories: Vec<Category>,
}

impl LocaleDocument {
    /// Build a document from already ordered categories
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Load and parse a locale file.
    ///
    /// Fails when the file cannot be read, is not valid JSON, or when the
    /// root, the `progressions` mapping, a category or a record is not an object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        debug!("Loading locale file: {:?}", path);

        let content = FileManager::read_locale(path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| AppError::parse(path, &e))?;

        Self::from_value(&value)
    }

    /// Parse a locale document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| AppError::parse("<inline>", &e))?;
        Self::from_value(&value)
    }

    /// Walk a parsed JSON value into a document
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        let root = value.as_object().ok_or_else(|| {
            AppError::Document(format!("locale root must be an object, found {}", kind_of(value)))
        })?;

        let progressions = match root.get("progressions") {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(AppError::Document(format!(
                    "'progressions' must be an object, found {}",
                    kind_of(other)
                )));
            }
        };

        let mut categories = Vec::with_capacity(progressions.len());
        for (category_name, body) in progressions {
            let body = body.as_object().ok_or_else(|| {
                AppError::Document(format!(
                    "category '{}' must be an object, found {}",
                    category_name,
                    kind_of(body)
                ))
            })?;

            let progressions = body
                .iter()
                .map(|(name, record)| {
                    Ok(Progression {
                        name: name.clone(),
                        record: ProgressionRecord::from_value(category_name, name, record)?,
                    })
                })
                .collect::<Result<Vec<_>, AppError>>()?;

            categories.push(Category {
                name: category_name.clone(),
                progressions,
            });
        }

        Ok(Self { categories })
    }

    /// Categories in source order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up a progression record by category and progression name
    pub fn record(&self, category: &str, progression: &str) -> Option<&ProgressionRecord> {
        self.category(category).and_then(|c| c.progression(progression))
    }

    /// Total number of progressions across all categories
    pub fn progression_count(&self) -> usize {
        self.categories.iter().map(|c| c.progressions.len()).sum()
    }

    /// Whether the document has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// Strings are shown as-is, anything else as compact JSON. An explicit null
// counts as absent and shows as empty rather than as a "None" literal.
fn display_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
