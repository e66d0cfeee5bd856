use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::features::potholes::models::Coordinate;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub geocoding: GeocodingConfig,
    pub route: RouteConfig,
    pub map: MapConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub busy_timeout_secs: u64,
}

/// Nominatim reverse geocoding client settings
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    /// Client-identifying tag, required by the Nominatim usage policy
    pub user_agent: String,
    pub timeout: Duration,
}

/// Navigation deep link settings
#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub base_url: String,
    /// Where every route starts (the asphalt plant)
    pub depot: Coordinate,
}

/// Initial map viewport handed to the map widget
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center: Coordinate,
    pub zoom: u8,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            geocoding: GeocodingConfig::from_env()?,
            route: RouteConfig::from_env()?,
            map: MapConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Read an environment variable, falling back to `default`, and parse it.
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size =
            parse_var("MAX_REQUEST_BODY_SIZE", Self::DEFAULT_MAX_REQUEST_BODY_SIZE)?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_URL: &'static str = "sqlite://cityfix.db?mode=rwc";
    // Single writer: one connection keeps every write serialized
    const DEFAULT_MAX_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            busy_timeout_secs: parse_var("DB_BUSY_TIMEOUT_SECS", Self::DEFAULT_BUSY_TIMEOUT_SECS)?,
        })
    }
}

impl GeocodingConfig {
    const DEFAULT_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";
    const DEFAULT_USER_AGENT: &'static str = "CityFixCore/0.1 (pothole-tracking)";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("GEOCODING_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let user_agent = env::var("GEOCODING_USER_AGENT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_USER_AGENT.to_string());
        let timeout_secs = parse_var("GEOCODING_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            user_agent,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl RouteConfig {
    const DEFAULT_BASE_URL: &'static str = "https://www.google.com/maps/dir/";
    const DEFAULT_DEPOT_LAT: f64 = -15.310306;
    const DEFAULT_DEPOT_LON: f64 = -49.6175;

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("ROUTE_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url,
            depot: Coordinate {
                latitude: parse_var("DEPOT_LAT", Self::DEFAULT_DEPOT_LAT)?,
                longitude: parse_var("DEPOT_LON", Self::DEFAULT_DEPOT_LON)?,
            },
        })
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            depot: Coordinate {
                latitude: Self::DEFAULT_DEPOT_LAT,
                longitude: Self::DEFAULT_DEPOT_LON,
            },
        }
    }
}

impl MapConfig {
    const DEFAULT_CENTER_LAT: f64 = -15.3072;
    const DEFAULT_CENTER_LON: f64 = -49.5975;
    const DEFAULT_ZOOM: u8 = 14;

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            center: Coordinate {
                latitude: parse_var("MAP_CENTER_LAT", Self::DEFAULT_CENTER_LAT)?,
                longitude: parse_var("MAP_CENTER_LON", Self::DEFAULT_CENTER_LON)?,
            },
            zoom: parse_var("MAP_ZOOM", Self::DEFAULT_ZOOM)?,
        })
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Coordinate {
                latitude: Self::DEFAULT_CENTER_LAT,
                longitude: Self::DEFAULT_CENTER_LON,
            },
            zoom: Self::DEFAULT_ZOOM,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "CityFix API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Pothole tracking and route planning".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_falls_back_to_default() {
        let value: u32 = parse_var("CITYFIX_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("CITYFIX_TEST_BAD_NUMBER", "not-a-number");
        let result: Result<f64, String> = parse_var("CITYFIX_TEST_BAD_NUMBER", 1.0);
        assert_eq!(
            result.unwrap_err(),
            "CITYFIX_TEST_BAD_NUMBER must be a valid number"
        );
    }

    #[test]
    fn test_route_defaults_point_at_depot() {
        let route = RouteConfig::default();
        assert_eq!(route.depot.latitude, -15.310306);
        assert_eq!(route.depot.longitude, -49.6175);
        assert!(route.base_url.ends_with("/dir/"));
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
