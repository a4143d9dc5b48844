pub mod credentials;
pub mod totp;

pub use credentials::Credentials;
