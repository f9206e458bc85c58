use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo_events: bool,
    pub resolver: ResolverConfig,
}

#[derive(Clone, Debug)]
pub struct ResolverConfig {
    pub ens_endpoint: String,
    pub profile_endpoint: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]
            });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:pickleball.db".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            cors_allowed_origins,
            seed_demo_events: env::var("SEED_DEMO_EVENTS")
                .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
                .unwrap_or(true),
            resolver: ResolverConfig::from_env(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        Self {
            ens_endpoint: env::var("ENS_RESOLVER_URL")
                .unwrap_or_else(|_| "https://api.ensideas.com/ens/resolve".to_string()),
            profile_endpoint: env::var("PROFILE_RESOLVER_URL")
                .unwrap_or_else(|_| "https://api.web3.bio/profile".to_string()),
            timeout_secs: env::var("RESOLVER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
