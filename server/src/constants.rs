// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 3000;

/// Frontend origins allowed to call the API from a browser
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3001", "https://app001-frontend.fly.dev"];

/// Prefix for environment variable overrides, e.g. `SERVER_PORT=4000`
pub const ENV_PREFIX: &str = "SERVER";
