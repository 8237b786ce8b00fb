//! Client configuration: cloud selection, tenant identity, and transport settings.

use std::str::FromStr;
use std::time::Duration;

use crate::Error;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// ZPA cloud the client talks to. Each cloud has a fixed management API host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cloud {
    #[default]
    Production,
    Beta,
    Gov,
    GovUs,
    ZpaTwo,
    Preview,
    Qa,
}

impl Cloud {
    /// Base URL of the management API for this cloud.
    pub fn base_url(&self) -> &'static str {
        match self {
            Cloud::Production => "https://config.private.zscaler.com",
            Cloud::Beta => "https://config.zpabeta.net",
            Cloud::Gov => "https://config.zpagov.net",
            Cloud::GovUs => "https://config.zpagov.us",
            Cloud::ZpaTwo => "https://config.zpatwo.net",
            Cloud::Preview => "https://config.zpapreview.net",
            Cloud::Qa => "https://config.qa.zpath.net",
        }
    }
}

impl std::fmt::Display for Cloud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cloud::Production => "PRODUCTION",
                Cloud::Beta => "BETA",
                Cloud::Gov => "GOV",
                Cloud::GovUs => "GOVUS",
                Cloud::ZpaTwo => "ZPATWO",
                Cloud::Preview => "PREVIEW",
                Cloud::Qa => "QA",
            }
        )
    }
}

impl FromStr for Cloud {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "PRODUCTION" => Ok(Cloud::Production),
            "BETA" => Ok(Cloud::Beta),
            "GOV" => Ok(Cloud::Gov),
            "GOVUS" => Ok(Cloud::GovUs),
            "ZPATWO" => Ok(Cloud::ZpaTwo),
            "PREVIEW" => Ok(Cloud::Preview),
            "QA" => Ok(Cloud::Qa),
            other => Err(Error::Config(format!("unknown cloud '{}'", other))),
        }
    }
}

/// Resolved client configuration.
///
/// Built once and handed to [`crate::Client::new`]; the client keeps it
/// behind an `Arc` and never mutates it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Management API base URL, without a trailing slash.
    pub base_url: String,
    /// Customer (tenant) ID used to build every management path.
    pub customer_id: String,
    /// Bearer token attached to every request, if any.
    pub access_token: Option<String>,
    /// Timeout applied to each HTTP round trip.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    /// Configuration for the given cloud and customer.
    pub fn new(cloud: Cloud, customer_id: &str) -> Self {
        Self::with_base_url(cloud.base_url(), customer_id)
    }

    /// Configuration with an explicit base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, customer_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            customer_id: customer_id.to_string(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("zscaler-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Resolves configuration from `ZPA_*` environment variables.
    ///
    /// `ZPA_CUSTOMER_ID` is required. `ZPA_BASE_URL` wins over `ZPA_CLOUD`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same rules as [`Config::from_env`], reading values through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(lookup(key));

        let customer_id = get("ZPA_CUSTOMER_ID")
            .ok_or_else(|| Error::Config("ZPA_CUSTOMER_ID is not set".to_string()))?;

        let mut config = match get("ZPA_BASE_URL") {
            Some(base_url) => Self::with_base_url(&base_url, &customer_id),
            None => {
                let cloud = get("ZPA_CLOUD")
                    .map(|c| c.parse::<Cloud>())
                    .transpose()?
                    .unwrap_or_default();
                Self::new(cloud, &customer_id)
            }
        };

        if let Some(token) = get("ZPA_ACCESS_TOKEN") {
            config.access_token = Some(token);
        }
        if let Some(secs) = get("ZPA_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                Error::Config(format!("ZPA_TIMEOUT_SECS is not a number: '{}'", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        config.validate()?;

        tracing::debug!(
            "Resolved configuration for customer {} at {}",
            config.customer_id,
            config.base_url
        );
        Ok(config)
    }

    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.customer_id.trim().is_empty() {
            return Err(Error::Config("customer ID must not be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

fn non_blank(val: Option<String>) -> Option<String> {
    val.map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn cloud_parses_case_insensitively() {
        assert_eq!("production".parse::<Cloud>().unwrap(), Cloud::Production);
        assert_eq!("GovUs".parse::<Cloud>().unwrap(), Cloud::GovUs);
        assert_eq!("zpatwo".parse::<Cloud>().unwrap(), Cloud::ZpaTwo);
        assert!(matches!("mars".parse::<Cloud>(), Err(Error::Config(_))));
    }

    #[test]
    fn cloud_display_round_trips() {
        for cloud in [Cloud::Beta, Cloud::Gov, Cloud::Preview, Cloud::Qa] {
            assert_eq!(cloud.to_string().parse::<Cloud>().unwrap(), cloud);
        }
    }

    #[test]
    fn base_url_is_trimmed() {
        let config = Config::with_base_url("http://localhost:8080/", "123");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn production_cloud_url() {
        let config = Config::new(Cloud::Production, "123");
        assert_eq!(config.base_url, "https://config.private.zscaler.com");
    }

    #[test]
    fn validate_rejects_empty_customer() {
        assert!(matches!(
            Config::with_base_url("http://localhost", " ").validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::with_base_url("not a url", "123").validate(),
            Err(Error::InvalidUrl(_))
        ));
        assert!(Config::with_base_url("http://localhost", "123")
            .validate()
            .is_ok());
    }

    #[test]
    fn lookup_requires_customer_id() {
        let err = resolve(&[("ZPA_CLOUD", "BETA")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Invalid configuration: ZPA_CUSTOMER_ID is not set");
        assert!(matches!(
            resolve(&[("ZPA_CUSTOMER_ID", "   ")]),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn lookup_defaults_to_production() {
        let config = resolve(&[("ZPA_CUSTOMER_ID", "216196257331281920")]).unwrap();
        assert_eq!(config.customer_id, "216196257331281920");
        assert_eq!(config.base_url, Cloud::Production.base_url());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn lookup_selects_cloud() {
        let config = resolve(&[("ZPA_CUSTOMER_ID", "1"), ("ZPA_CLOUD", "govus")]).unwrap();
        assert_eq!(config.base_url, "https://config.zpagov.us");
    }

    #[test]
    fn base_url_wins_over_cloud() {
        let config = resolve(&[
            ("ZPA_CUSTOMER_ID", "1"),
            ("ZPA_CLOUD", "BETA"),
            ("ZPA_BASE_URL", "http://localhost:9000/"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn base_url_skips_cloud_parsing() {
        let config = resolve(&[
            ("ZPA_CUSTOMER_ID", "1"),
            ("ZPA_CLOUD", "mars"),
            ("ZPA_BASE_URL", "http://localhost:9000"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn unknown_cloud_is_config_error() {
        let err = resolve(&[("ZPA_CUSTOMER_ID", "1"), ("ZPA_CLOUD", "mars")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn lookup_reads_token_and_timeout() {
        let config = resolve(&[
            ("ZPA_CUSTOMER_ID", "1"),
            ("ZPA_ACCESS_TOKEN", " secret "),
            ("ZPA_TIMEOUT_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.access_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn bad_timeout_is_config_error() {
        assert!(matches!(
            resolve(&[("ZPA_CUSTOMER_ID", "1"), ("ZPA_TIMEOUT_SECS", "soon")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            resolve(&[("ZPA_CUSTOMER_ID", "1"), ("ZPA_TIMEOUT_SECS", "0")]),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = Config::with_base_url("http://localhost", "1").with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
