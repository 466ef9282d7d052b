use config::{ConfigError, Environment, File, FileFormat, Source};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_increments")]
    pub increments: usize,
}

fn default_workers() -> usize {
    2
}

fn default_increments() -> usize {
    100
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            increments: default_increments(),
        }
    }
}

impl CounterConfig {
    /// Reads `atomic_counter.toml` from the working directory if there is
    /// one, then applies any `ATOMIC_COUNTER_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            File::with_name("atomic_counter").required(false),
            Environment::with_prefix("ATOMIC_COUNTER"),
        )
    }

    /// Layers `env` over `file`; env values are parsed into numbers where
    /// they look like one.
    pub fn load_from<F>(file: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        config.try_deserialize()
    }

    pub fn expected_total(&self) -> usize {
        self.workers.saturating_mul(self.increments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileSourceString;
    use std::collections::HashMap;
    use test_case::test_case;

    #[test]
    fn empty_document_uses_defaults() -> anyhow::Result<()> {
        let config = CounterConfig::from_toml_str("")?;
        assert_eq!(CounterConfig::default(), config);
        assert_eq!(200, config.expected_total());
        Ok(())
    }

    #[test_case("workers = 4" => CounterConfig { workers: 4, increments: 100 }; "only workers overridden")]
    #[test_case("increments = 7" => CounterConfig { workers: 2, increments: 7 }; "only increments overridden")]
    #[test_case("workers = 8\nincrements = 1000" => CounterConfig { workers: 8, increments: 1000 }; "both overridden")]
    fn partial_documents(toml: &str) -> CounterConfig {
        CounterConfig::from_toml_str(toml).expect("valid config")
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Environment::with_prefix("ATOMIC_COUNTER").source(Some(vars))
    }

    fn file(toml: &str) -> File<FileSourceString, FileFormat> {
        File::from_str(toml, FileFormat::Toml)
    }

    #[test]
    fn env_overrides_a_default() -> anyhow::Result<()> {
        let config = CounterConfig::load_from(file(""), env(&[("ATOMIC_COUNTER_WORKERS", "3")]))?;
        assert_eq!(
            CounterConfig {
                workers: 3,
                increments: 100
            },
            config
        );
        assert_eq!(300, config.expected_total());
        Ok(())
    }

    #[test]
    fn env_wins_over_the_file() -> anyhow::Result<()> {
        let config = CounterConfig::load_from(
            file("workers = 8\nincrements = 5"),
            env(&[("ATOMIC_COUNTER_WORKERS", "3")]),
        )?;
        assert_eq!(
            CounterConfig {
                workers: 3,
                increments: 5
            },
            config
        );
        Ok(())
    }

    #[test]
    fn unrelated_env_vars_are_ignored() -> anyhow::Result<()> {
        let config = CounterConfig::load_from(file(""), env(&[("OTHER_WORKERS", "9")]))?;
        assert_eq!(CounterConfig::default(), config);
        Ok(())
    }

    #[test]
    fn non_numeric_env_value_is_rejected() {
        let err = CounterConfig::load_from(file(""), env(&[("ATOMIC_COUNTER_WORKERS", "abc")]))
            .unwrap_err();
        assert!(err.to_string().contains("workers"), "unexpected error: {err}");
    }

    #[test]
    fn negative_workers_are_rejected() {
        assert!(CounterConfig::from_toml_str("workers = -1").is_err());
    }
}
