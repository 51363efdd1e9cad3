//! Loader for tagstream credentials with INI + environment overlays.
//!
//! Credentials live in an INI file (`config.ini` by default) under a
//! `[twitter]` section. `TAGSTREAM_`-prefixed environment variables override
//! file values, and `${VAR}` placeholders inside values are expanded so the
//! actual secrets can stay out of the file entirely.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Twitter/X API credentials. Every field is required; a missing key is a
/// fatal load error.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub api_key_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub bearer_token: String,
}

/// File layout: one `[twitter]` section holding the credential keys.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    twitter: Credentials,
}

// Values may reference other env vars, so expansion loops until it reaches
// a fixed point or the depth cap.
fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (INI file + env overrides).
pub struct CredentialsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for CredentialsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsLoader {
    /// Start with the default sources: `TAGSTREAM_` env overrides, to be
    /// combined with whatever file or inline snippet the caller attaches.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("TAGSTREAM").separator("__"));
        Self { builder }
    }

    /// Attach a credentials file; the `config` crate infers the format from
    /// the suffix (`.ini` for the default `config.ini`).
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Merge an inline INI snippet; used by tests and doctests.
    ///
    /// ```
    /// use tagstream_config::CredentialsLoader;
    ///
    /// let creds = CredentialsLoader::new()
    ///     .with_ini_str(
    ///         r#"
    /// [twitter]
    /// api_key = k
    /// api_key_secret = ks
    /// access_token = at
    /// access_token_secret = ats
    /// bearer_token = bt
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(creds.bearer_token, "bt");
    /// ```
    pub fn with_ini_str(mut self, ini: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(ini, config::FileFormat::Ini));
        self
    }

    /// Merge all sources, expand `${VAR}` placeholders, and deserialize the
    /// `[twitter]` section into [`Credentials`].
    pub fn load(self) -> Result<Credentials, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: CredentialsFile =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed.twitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("FOO", Some("bar"), || {
            let mut v = json!("prefix-${FOO}-suffix");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("prefix-bar-suffix"));
        });
    }

    #[test]
    fn expands_inside_objects() {
        temp_env::with_var("SECRET", Some("hunter2"), || {
            let mut v = json!({ "twitter": { "bearer_token": "${SECRET}" } });
            expand_env_in_value(&mut v);
            assert_eq!(v, json!({ "twitter": { "bearer_token": "hunter2" } }));
        });
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                ("INNER", Some("qux")),
                ("OUTER", Some("mid-${INNER}")),
            ],
            || {
                let mut v = json!("X=${OUTER}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("X=mid-qux"));
            },
        );
    }

    #[test]
    fn stops_on_cycles() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            // Only termination matters here; the cycle leaves a placeholder.
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${DOES_NOT_EXIST}"));
    }
}
