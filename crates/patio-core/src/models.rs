//! Wire types for the parking service API.
//!
//! The backend speaks Portuguese camelCase JSON; field names are renamed to
//! English on the Rust side and must stay aligned with that contract.

use serde::{Deserialize, Serialize};

/// Authenticated user profile returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Response from `/auth/login`.
///
/// A missing token means the credentials were rejected even when the
/// endpoint answered 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "mensagem")]
    pub message: Option<String>,
}

/// Account creation request body for `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Response from `/auth/register`. Registration does not log the user in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A vehicle currently inside the lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveVehicle {
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "dataEntrada")]
    pub entry_date: String,
    #[serde(rename = "horarioEntrada")]
    pub entry_time: String,
}

/// Full parking record for a vehicle, open or settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "dataEntrada")]
    pub entry_date: String,
    #[serde(rename = "horarioEntrada")]
    pub entry_time: String,
    #[serde(default, rename = "dataSaida")]
    pub exit_date: Option<String>,
    #[serde(default, rename = "horarioSaida")]
    pub exit_time: Option<String>,
    #[serde(default, rename = "valorPago")]
    pub amount_paid: Option<f64>,
}

impl VehicleRecord {
    /// Whether the vehicle has left the lot.
    pub fn is_settled(&self) -> bool {
        self.exit_date.is_some()
    }
}

/// Acknowledgement returned by the entry/exit endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default, rename = "mensagem")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_backend_field_names() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"nome":"Maria Silva","email":"maria@example.com"}"#).unwrap();
        assert_eq!(profile.name, "Maria Silva");
        assert_eq!(profile.email, "maria@example.com");
    }

    #[test]
    fn test_credentials_serialize_password_as_senha() {
        let body = serde_json::to_value(Credentials {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .unwrap();
        assert_eq!(body["email"], "a@b.com");
        assert_eq!(body["senha"], "x");
        assert!(body.get("password").is_none());
    }

    #[test]
    fn test_login_response_token_is_optional() {
        let ok: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(ok.token.as_deref(), Some("abc123"));

        let rejected: LoginResponse =
            serde_json::from_str(r#"{"mensagem":"Credenciais inválidas"}"#).unwrap();
        assert!(rejected.token.is_none());
        assert_eq!(rejected.message.as_deref(), Some("Credenciais inválidas"));
    }

    #[test]
    fn test_vehicle_record_open_and_settled() {
        let open: VehicleRecord = serde_json::from_str(
            r#"{"placa":"ABC1234","dataEntrada":"2024-05-10","horarioEntrada":"08:30:00"}"#,
        )
        .unwrap();
        assert!(!open.is_settled());
        assert!(open.amount_paid.is_none());

        let settled: VehicleRecord = serde_json::from_str(
            r#"{
                "placa":"ABC1D23",
                "dataEntrada":"2024-05-10","horarioEntrada":"08:30:00",
                "dataSaida":"2024-05-10","horarioSaida":"11:05:00",
                "valorPago":12.5
            }"#,
        )
        .unwrap();
        assert!(settled.is_settled());
        assert_eq!(settled.amount_paid, Some(12.5));
    }
}
