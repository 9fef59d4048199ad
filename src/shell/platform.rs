//! Platform and environment detection.

/// Environment variables whose presence marks a CI run.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// Check for CI markers with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARS.iter().any(|var| env_fn(var).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn detects_generic_ci_var() {
        assert!(is_ci_with_env(lookup(&[("CI", "true")])));
    }

    #[test]
    fn detects_github_actions() {
        assert!(is_ci_with_env(lookup(&[("GITHUB_ACTIONS", "true")])));
    }

    #[test]
    fn detects_jenkins() {
        assert!(is_ci_with_env(lookup(&[(
            "JENKINS_URL",
            "https://ci.example.com"
        )])));
    }

    #[test]
    fn no_markers_means_not_ci() {
        assert!(!is_ci_with_env(lookup(&[("HOME", "/home/user")])));
    }
}
