// ABOUTME: Runtime environment passed explicitly to helpers that behave differently per host.
// ABOUTME: Replaces ambient "is this a browser / dev build" checks with an injected value.

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable that switches [`Environment::from_env`] into dev mode.
pub const ENV_VAR: &str = "FOLIO_ENV";

/// Operating system family reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
    Other,
}

/// Capabilities of the host the helpers run in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// A browser-like host with client-side storage.
    pub browser: bool,
    pub dev: bool,
    /// Raw platform string as reported by the host, e.g. `MacIntel`.
    pub platform: Option<String>,
}

impl Environment {
    /// A server-side/build-time environment: no browser, production mode.
    pub fn server() -> Self {
        Self::default()
    }

    pub fn browser(platform: impl Into<String>) -> Self {
        Self {
            browser: true,
            dev: false,
            platform: Some(platform.into()),
        }
    }

    /// Server environment with `dev` set when `FOLIO_ENV` is `dev` or `development`.
    pub fn from_env() -> Self {
        let dev = env::var(ENV_VAR)
            .map(|v| matches!(v.to_lowercase().as_str(), "dev" | "development"))
            .unwrap_or(false);
        Self {
            dev,
            ..Self::server()
        }
    }

    pub fn is_browser(&self) -> bool {
        self.browser
    }

    pub fn is_dev(&self) -> bool {
        self.dev
    }

    /// Platform family; always [`Platform::Other`] outside a browser.
    pub fn platform(&self) -> Platform {
        if !self.browser {
            return Platform::Other;
        }
        let raw = self.platform.as_deref().unwrap_or("").to_uppercase();
        if raw.contains("MAC") {
            Platform::Mac
        } else if raw.contains("WIN") {
            Platform::Windows
        } else if raw.contains("LINUX") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_detection() {
        assert_eq!(Environment::browser("MacIntel").platform(), Platform::Mac);
        assert_eq!(Environment::browser("Win32").platform(), Platform::Windows);
        assert_eq!(Environment::browser("Linux x86_64").platform(), Platform::Linux);
        assert_eq!(Environment::browser("iPhone").platform(), Platform::Other);
    }

    #[test]
    fn server_is_never_a_platform() {
        let env = Environment {
            platform: Some("MacIntel".into()),
            ..Environment::server()
        };
        assert_eq!(env.platform(), Platform::Other);
        assert!(!env.is_browser());
        assert!(!env.is_dev());
    }
}
