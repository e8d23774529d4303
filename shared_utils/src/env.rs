use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an optional environment variable. Unset and empty are both `None`.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    get_env_var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VAR: &str = "SHARED_UTILS_TEST_VAR";

    #[test]
    #[serial]
    fn missing_var_reports_its_name() {
        unsafe { std::env::remove_var(VAR) };
        let err = get_env_var(VAR).unwrap_err();
        assert_eq!(err.to_string(), format!("Missing environment variable: {VAR}"));
    }

    #[test]
    #[serial]
    fn optional_var_treats_empty_as_unset() {
        unsafe { std::env::set_var(VAR, "") };
        assert_eq!(get_optional_env_var(VAR), None);

        unsafe { std::env::set_var(VAR, "configs/export.toml") };
        assert_eq!(get_optional_env_var(VAR).as_deref(), Some("configs/export.toml"));

        unsafe { std::env::remove_var(VAR) };
    }
}
