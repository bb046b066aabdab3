//! Best-effort detection of the package manager that launched us.
//!
//! Node package managers export a user-agent-like string such as
//! `npm/9.1.0 node/v20.1.0 darwin arm64`. Only the final "how to proceed"
//! message depends on it; the generated files do not.

/// Environment variable conventionally set by the invoking package manager.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Manager named when the user agent is absent or unparseable.
pub const FALLBACK_MANAGER: &str = "npm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub name: String,
    pub version: String,
}

impl PackageManager {
    /// Parse `name/version` out of the first token of the user agent.
    pub fn from_user_agent(user_agent: Option<&str>) -> Option<Self> {
        let pkg_spec = user_agent?.split(' ').next()?;
        let (name, version) = pkg_spec.split_once('/')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

/// Commands the user should run next, in the detected manager's vocabulary.
pub fn dev_instructions(manager: &str) -> Vec<String> {
    if manager == "yarn" {
        vec!["yarn".to_string(), "yarn dev".to_string()]
    } else {
        vec![format!("{manager} install"), format!("{manager} run dev")]
    }
}
