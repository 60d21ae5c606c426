use std::path::Path;

use crate::parsing::clstr::ParseError;

/// Parse a reference list: one accession per line.
///
/// Lines are split with [`str::lines`], which removes `\n` and `\r\n`
/// terminators and nothing else. Blank lines are kept as empty strings; they
/// never match a cluster because accessions are non-empty.
pub fn parse_reference_list_text(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read a reference list file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read as UTF-8 text.
pub fn parse_reference_list_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_reference_list_text(&content))
}

/// Check if the path has the conventional `.txt` extension
pub fn is_reference_list_file(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}
