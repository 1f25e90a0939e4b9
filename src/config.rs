use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Clinitek";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of rows in the "top time-slots" report.
pub const TOP_SLOT_LIMIT: usize = 6;

/// Quick-add appointments are scheduled this many minutes after "now".
pub const QUICK_ADD_OFFSET_MINUTES: i64 = 30;

/// Loopback only: the API has no authentication.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

const BIND_ADDR_ENV: &str = "CLINITEK_BIND_ADDR";
const SEED_DEMO_ENV: &str = "CLINITEK_SEED_DEMO";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinitek_lib=info,clinitek=info,tower_http=warn"
}

/// Address the reception API listens on (`CLINITEK_BIND_ADDR`, else the default).
pub fn bind_addr() -> SocketAddr {
    parse_bind_addr(std::env::var(BIND_ADDR_ENV).ok().as_deref())
}

/// Whether the demo dataset is loaded at startup (`CLINITEK_SEED_DEMO=1|true`).
pub fn seed_on_startup() -> bool {
    parse_flag(std::env::var(SEED_DEMO_ENV).ok().as_deref())
}

fn parse_bind_addr(raw: Option<&str>) -> SocketAddr {
    let default = || {
        DEFAULT_BIND_ADDR
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8787)))
    };

    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "Invalid {BIND_ADDR_ENV}, using {DEFAULT_BIND_ADDR}");
            default()
        }),
        None => default(),
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true") | Some("yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_defaults_to_loopback() {
        let addr = parse_bind_addr(None);
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8787);
    }

    #[test]
    fn bind_addr_accepts_override() {
        let addr = parse_bind_addr(Some("0.0.0.0:9000"));
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn bind_addr_falls_back_on_garbage() {
        assert_eq!(parse_bind_addr(Some("not-an-addr")), parse_bind_addr(None));
        assert_eq!(parse_bind_addr(Some("   ")), parse_bind_addr(None));
    }

    #[test]
    fn seed_flag_parsing() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some(" yes ")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn app_name_is_clinitek() {
        assert_eq!(APP_NAME, "Clinitek");
    }

    #[test]
    fn top_slot_limit_is_six() {
        assert_eq!(TOP_SLOT_LIMIT, 6);
    }
}
