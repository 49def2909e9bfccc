//! Default values: service host, user agent, environment variable names.

/// Root of the public Rev AI API.
pub const API_HOST: &str = "https://api.rev.ai/";

/// Environment variable consulted by `access_token_from_env`.
pub const ACCESS_TOKEN_ENV: &str = "REVAI_ACCESS_TOKEN";

/// Product token used in the `User-Agent` header.
pub const SDK_NAME: &str = "RevAi-RustSDK";

pub mod http {
    pub use revai_spec::types::DEFAULT_CONNECT_TIMEOUT as CONNECT_TIMEOUT;
}

/// `RevAi-RustSDK/<version>`
pub fn user_agent() -> String {
    format!("{SDK_NAME}/{}", env!("CARGO_PKG_VERSION"))
}
