//! Startup check for required environment variables.

use crate::errors::EnvNotFoundError;

/// Fail on the first key whose value is missing.
///
/// The mapping is scanned in iteration order. An empty string counts as
/// present; only `None` is missing.
pub fn validate_env<I, K, V>(vars: I, service: &str) -> Result<(), EnvNotFoundError>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
{
    for (key, value) in vars {
        if value.is_none() {
            return Err(EnvNotFoundError::new(key.as_ref(), service));
        }
    }

    tracing::info!(service = %service, "ENV's set correctly");
    Ok(())
}

/// Look up each key in the process environment.
pub fn read_env<'a>(keys: &[&'a str]) -> Vec<(&'a str, Option<String>)> {
    keys.iter().map(|key| (*key, std::env::var(key).ok())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::logging::capture::LogCapture;

    #[test]
    fn test_all_present() {
        let vars = [("A", Some("x")), ("B", Some(""))];
        assert!(validate_env(vars, "svc").is_ok());
    }

    #[test]
    fn test_missing_key_is_reported() {
        let vars = [("A", Some("x")), ("B", None)];
        let err = validate_env(vars, "svc").unwrap_err();
        assert_eq!(err.key(), "B");
        assert_eq!(err.service(), "svc");
    }

    #[test]
    fn test_stops_at_first_missing() {
        let vars: [(&str, Option<&str>); 3] = [("A", None), ("B", None), ("C", Some("c"))];
        let err = validate_env(vars, "svc").unwrap_err();
        assert_eq!(err.key(), "A");
    }

    #[test]
    fn test_success_is_logged() {
        let logs = LogCapture::start();
        validate_env([("A", Some("x"))], "billing").unwrap();

        let contents = logs.contents();
        assert!(contents.contains("ENV's set correctly"));
        assert!(contents.contains("service=billing"));
    }

    #[test]
    fn test_failure_is_not_logged_as_success() {
        let logs = LogCapture::start();
        assert!(validate_env([("A", None::<&str>)], "billing").is_err());
        assert!(!logs.contents().contains("ENV's set correctly"));
    }

    #[test]
    fn test_empty_mapping_passes() {
        let vars: Vec<(String, Option<String>)> = Vec::new();
        assert!(validate_env(vars, "svc").is_ok());
    }

    #[test]
    fn test_read_env_from_process() {
        temp_env::with_vars(
            [("REPLY_KIT_SET", Some("1")), ("REPLY_KIT_UNSET", None)],
            || {
                let vars = read_env(&["REPLY_KIT_SET", "REPLY_KIT_UNSET"]);
                assert_eq!(vars[0], ("REPLY_KIT_SET", Some("1".to_string())));
                assert_eq!(vars[1], ("REPLY_KIT_UNSET", None));

                let err = validate_env(vars, "svc").unwrap_err();
                assert_eq!(err.key(), "REPLY_KIT_UNSET");
            },
        );
    }
}
