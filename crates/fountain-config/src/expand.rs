//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Strings without `${` are returned unchanged, so a bare `$` in a path
/// is never treated as a variable.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("FOUNTAIN_TEST_CSS_DIR", "/srv/styles");
        }
        let result = expand_env("${FOUNTAIN_TEST_CSS_DIR}/script.css", "output.css_file").unwrap();
        assert_eq!(result, "/srv/styles/script.css");
        unsafe {
            std::env::remove_var("FOUNTAIN_TEST_CSS_DIR");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("FOUNTAIN_TEST_UNSET_PARENT");
        }
        let result =
            expand_env("${FOUNTAIN_TEST_UNSET_PARENT:-components}", "components.parent_dir")
                .unwrap();
        assert_eq!(result, "components");
    }

    #[test]
    fn test_missing_var_error() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("FOUNTAIN_TEST_MISSING");
        }
        let err = expand_env("${FOUNTAIN_TEST_MISSING}", "output.css_file").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOUNTAIN_TEST_MISSING"));
        assert!(err.to_string().contains("output.css_file"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("$styles/a.css", "output.css_file").unwrap(), "$styles/a.css");
    }
}
