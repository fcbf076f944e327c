use crate::ai::{AiSettings, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use crate::store::StoreSettings;
use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

/// File picked up from the working directory when no config path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub resilience: ResilienceConfig,
    pub ai: AiConfig,
    pub shop: ShopConfig,
    pub log: LogConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub requests_per_second: u32,
    pub burst_size: u32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShopConfig {
    pub tax_rate: f64,
    pub default_labor_rate: f64,
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    /// Serve Prometheus metrics on `/metrics`.
    pub metrics_enabled: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag > CLI env var > `SHOP_` env vars > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("resilience.rate_limit_enabled", true)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.requests_per_second", 20)?
            .set_default("resilience.burst_size", 40)?
            .set_default("resilience.request_timeout_secs", 90)?
            .set_default("ai.base_url", DEFAULT_BASE_URL)?
            .set_default("ai.text_model", DEFAULT_TEXT_MODEL)?
            .set_default("ai.image_model", DEFAULT_IMAGE_MODEL)?
            .set_default("ai.timeout_secs", 60)?
            .set_default("shop.tax_rate", 0.0)?
            .set_default("shop.default_labor_rate", 50.0)?
            .set_default("shop.seed_demo_data", true)?
            .set_default("log.json", false)?
            .set_default("telemetry.metrics_enabled", true)?;

        // Explicit file must exist; the working directory fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::new(path, FileFormat::Yaml).required(true)),
            None => builder.add_source(
                File::from(Path::new(CWD_CONFIG_FILE))
                    .format(FileFormat::Yaml)
                    .required(false),
            ),
        };

        // E.g. SHOP_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("SHOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Conventional key names used by AI tooling.
        for var in ["API_KEY", "GEMINI_API_KEY"] {
            if let Ok(val) = env::var(var)
                && !val.trim().is_empty()
            {
                builder = builder.set_override("ai.api_key", val)?;
            }
        }

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        url::Url::parse(&self.ai.base_url).map_err(|e| {
            config::ConfigError::Message(format!("ai.base_url is not a valid URL: {e}"))
        })?;
        if !(0.0..=1.0).contains(&self.shop.tax_rate) {
            return Err(config::ConfigError::Message(
                "shop.tax_rate must be between 0 and 1".to_string(),
            ));
        }
        if self.resilience.requests_per_second == 0 || self.resilience.burst_size == 0 {
            return Err(config::ConfigError::Message(
                "resilience.requests_per_second and resilience.burst_size must be positive"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for the AI adapter. Blank API keys count as missing.
    #[must_use]
    pub fn ai_settings(&self) -> AiSettings {
        AiSettings {
            base_url: self.ai.base_url.clone(),
            api_key: self
                .ai
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
            text_model: self.ai.text_model.clone(),
            image_model: self.ai.image_model.clone(),
            timeout: Duration::from_secs(self.ai.timeout_secs),
        }
    }

    #[must_use]
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            tax_rate: self.shop.tax_rate,
            default_labor_rate: self.shop.default_labor_rate,
        }
    }

    /// Upper bound for a single request.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        if self.resilience.timeout_disabled {
            Duration::from_secs(365 * 24 * 60 * 60) // 1 year
        } else {
            Duration::from_secs(self.resilience.request_timeout_secs)
        }
    }
}
