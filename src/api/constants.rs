//! Wire constants for the Angel One SmartAPI.

/// Production REST endpoint root
pub const API_BASE_URL: &str = "https://apiconnect.angelone.in/rest";

/// Session generation (password + TOTP login) path
pub const LOGIN_PATH: &str = "/auth/angelbroking/user/v1/loginByPassword";

/// Headers SmartAPI expects on every request
pub mod headers {
    pub const PRIVATE_KEY: &str = "X-PrivateKey";

    pub const USER_TYPE: &str = "X-UserType";
    pub const USER_TYPE_VALUE: &str = "USER";

    pub const SOURCE_ID: &str = "X-SourceID";
    pub const SOURCE_ID_VALUE: &str = "WEB";

    // The API checks that the client network headers are present, not that
    // their values are meaningful.
    pub const CLIENT_LOCAL_IP: &str = "X-ClientLocalIP";
    pub const CLIENT_PUBLIC_IP: &str = "X-ClientPublicIP";
    pub const MAC_ADDRESS: &str = "X-MACAddress";
    pub const LOOPBACK_IP: &str = "127.0.0.1";
    pub const PLACEHOLDER_MAC: &str = "fe:80:00:00:00:00";
}

/// Build the full login endpoint URL
pub fn login_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, LOGIN_PATH)
}
