use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub log_level: String,
    /// Overrides the region resolved by the AWS default provider chain.
    pub region: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            region: None,
        }
    }
}

impl Configuration {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
            // .merge fills in any missing values from the environment
            .merge(Env::prefixed("APP_"))
    }
}
