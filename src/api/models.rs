use serde::{Deserialize, Serialize};

/// Body of the `loginByPassword` request. The broker calls the PIN "password".
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub clientcode: &'a str,
    pub password: &'a str,
    pub totp: &'a str,
}

/// Envelope every SmartAPI response comes wrapped in. The status fields are
/// defaulted so a degenerate response carrying only `data` still parses.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errorcode: Option<String>,
    pub data: Option<SessionTokens>,
}

/// Token set returned on a successful login. Only the JWT is printed; the
/// refresh and feed tokens ride along because the service returns them.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionTokens {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(rename = "feedToken")]
    pub feed_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_wire_field_names() {
        let request = LoginRequest {
            clientcode: "C12345",
            password: "0000",
            totp: "123456",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["clientcode"], "C12345");
        assert_eq!(value["password"], "0000");
        assert_eq!(value["totp"], "123456");
    }

    #[test]
    fn response_parses_without_envelope_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"data":{"jwtToken":"abc123"}}"#).unwrap();
        let tokens = response.data.unwrap();
        assert_eq!(tokens.jwt_token, "abc123");
        assert!(tokens.refresh_token.is_none());
        assert!(tokens.feed_token.is_none());
    }

    #[test]
    fn response_parses_broker_rejection() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"status":false,"message":"Invalid totp","errorcode":"AB1050","data":null}"#,
        )
        .unwrap();
        assert!(!response.status);
        assert_eq!(response.errorcode.as_deref(), Some("AB1050"));
        assert!(response.data.is_none());
    }

    #[test]
    fn data_without_jwt_token_is_a_parse_error() {
        let result: Result<LoginResponse, _> =
            serde_json::from_str(r#"{"data":{"refreshToken":"r-1"}}"#);
        assert!(result.is_err());
    }
}
