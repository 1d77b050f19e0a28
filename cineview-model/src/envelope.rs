use serde::{Deserialize, Serialize};

/// The backend wraps every JSON body in `{success, message, data}`.
///
/// `data` is absent on some failure responses, so it stays an `Option`
/// until the caller decides whether a missing payload is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Total match count, only present on paginated filter responses.
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> ApiEnvelope<T> {
    /// Take the payload, treating a missing `data` field on a successful
    /// response as an empty message from the server.
    pub fn into_data(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| self.message.unwrap_or_else(|| "empty response".to_string()))
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "request rejected".to_string()))
        }
    }

    /// Like [`Self::into_data`], but a successful response with `data:
    /// null` is a legitimate "nothing here" answer (e.g. the user has not
    /// reviewed this title).
    pub fn into_optional_data(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "request rejected".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_successful_payload() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn failure_carries_server_message() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"no such title"}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err(), "no such title");
    }

    #[test]
    fn count_field_is_optional() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[],"count":250}"#).unwrap();
        assert_eq!(env.count, Some(250));
    }
}
