use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub seed_sample_bookings: bool,
    pub cors_allow_any_origin: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            seed_sample_bookings: env::var("SEED_SAMPLE_BOOKINGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            cors_allow_any_origin: env::var("CORS_ALLOW_ANY_ORIGIN")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

fn parse_flag(v: &str) -> bool {
    !matches!(
        v.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" 0 "));
        assert!(!parse_flag("Off"));
        assert!(!parse_flag(""));
    }
}
