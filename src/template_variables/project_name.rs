use regex::Regex;
use std::path::Path;

/// Check a proposed project name.
///
/// `Err` carries the reason shown to the user, either as a fatal message for
/// a name passed on the command line or as inline feedback while prompting.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if Path::new(name).exists() {
        return Err("Project directory already exists".to_string());
    }
    validate_name_syntax(name)
}

// The syntactic half, kept separate from the filesystem probe.
pub(crate) fn validate_name_syntax(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Project name must be at least 1 character long.".to_string());
    }
    let ident = Regex::new(r"^[A-Za-z_][0-9A-Za-z_]*$").expect("valid pattern");
    if !ident.is_match(name) {
        return Err(
            "Project name must contain only alphanumerics or underscore with no leading digits."
                .to_string(),
        );
    }
    Ok(())
}
