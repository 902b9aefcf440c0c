use serde::Serialize;

use crate::model::{CategoryRegistry, SuggestionOption};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CategoryJson {
    pub id: String,
    pub titles: usize,
}

#[derive(Serialize)]
pub struct TitlesJson {
    pub category: String,
    pub known: bool,
    pub titles: Vec<String>,
}

#[derive(Serialize)]
pub struct SuggestionsJson {
    pub category: String,
    pub query: String,
    pub options: Vec<SuggestionOption>,
}

pub fn categories_json(registry: &CategoryRegistry) -> Vec<CategoryJson> {
    registry
        .iter()
        .map(|(id, titles)| CategoryJson {
            id: id.to_string(),
            titles: titles.len(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per category: id padded to the widest id, then the title count
pub fn format_categories(registry: &CategoryRegistry) -> String {
    let width = registry.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (id, titles) in registry.iter() {
        let noun = if titles.len() == 1 { "title" } else { "titles" };
        out.push_str(&format!("{:<width$}  {} {}\n", id, titles.len(), noun, width = width));
    }
    out
}

/// One line per suggestion; the create option is prefixed with `+`
pub fn format_suggestions(options: &[SuggestionOption]) -> String {
    let mut out = String::new();
    for opt in options {
        if opt.is_create() {
            out.push_str(&format!("+ {}\n", opt.label()));
        } else {
            out.push_str(&format!("  {}\n", opt.label()));
        }
    }
    out
}
