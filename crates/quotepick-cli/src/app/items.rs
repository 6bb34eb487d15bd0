use super::config::ItemSource;
use super::error::CliError;
use quotepick::QUOTES;
use std::fs;

/// Loads the item list named by `source`.
///
/// An empty list is returned as-is; the picker reports it when asked to pick.
pub fn load_items(source: &ItemSource) -> Result<Vec<String>, CliError> {
    match source {
        ItemSource::Builtin => Ok(QUOTES.iter().map(|q| q.to_string()).collect()),
        ItemSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadItems {
                path: path.clone(),
                source,
            })?;
            let items = parse_items(&text);
            tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
            Ok(items)
        }
    }
}

/// Splits `text` into items: one per line, trimmed, blank lines skipped.
pub fn parse_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
