use otp_core::domain::value_objects::SubmittedCode;
use otp_shared::types::ResponseStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerateOtpRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

/// Body of POST /api/validate-otp
///
/// Fields are kept as raw JSON so a wrongly typed value (a numeric `otp`, say)
/// still goes through the lookup instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateOtpRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub otp: Option<Value>,
}

impl ValidateOtpRequest {
    /// Store key for the email, or `None` when the field is absent or falsy
    pub fn email_key(&self) -> Option<String> {
        match present(&self.email)? {
            Value::String(email) => Some(email.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Submitted passcode, or `None` when the field is absent or falsy
    ///
    /// Only a JSON string can ever match a stored code.
    pub fn submitted_code(&self) -> Option<SubmittedCode<'_>> {
        match present(&self.otp)? {
            Value::String(code) => Some(SubmittedCode::Text(code)),
            _ => Some(SubmittedCode::Other),
        }
    }
}

/// `null`, `false`, `0` and `""` count as missing
fn present(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().filter(|value| match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Identity returned after a successful validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOtpResponse {
    pub status: ResponseStatus,
    pub username: String,
    pub userid: Uuid,
    pub credit: i64,
}

impl From<otp_core::domain::value_objects::VerifiedUser> for ValidateOtpResponse {
    fn from(user: otp_core::domain::value_objects::VerifiedUser) -> Self {
        Self {
            status: ResponseStatus::Success,
            username: user.username,
            userid: user.userid,
            credit: user.credit,
        }
    }
}
