use heck::ToTitleCase;

/// Check a proposed display title. Anything printable goes; ASCII control
/// characters would corrupt the rendered files.
pub fn validate_project_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("Project title must be at least 1 character long.".to_string());
    }
    if title.chars().any(|c| matches!(c, '\x00'..='\x1f')) {
        return Err("Project title may not contain control characters.".to_string());
    }
    Ok(())
}

/// Default title for a project name: underscores become spaces, words get
/// capitalized (`my_cool_app` -> `My Cool App`).
pub fn default_project_title(name: &str) -> String {
    name.to_title_case()
}
