use crate::ports::ApiError;

/// Fallback text when an error carries no usable message.
pub const GENERIC_ALERT_MESSAGE: &str = "Something went wrong. Please try again.";

/// Blocking alert dialog.
#[async_trait::async_trait]
pub trait AlertPort: Send + Sync {
    async fn alert(&self, title: &str, message: &str);
}

/// Message shown to the user for a failed API call.
///
/// Server messages are shown verbatim; transport and decode failures get the
/// generic fallback.
pub fn alert_message(err: &ApiError) -> String {
    match err {
        ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => GENERIC_ALERT_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_kept() {
        let err = ApiError::Server {
            status: 422,
            message: "Username taken".into(),
        };
        assert_eq!(alert_message(&err), "Username taken");
    }

    #[test]
    fn network_errors_use_fallback() {
        assert_eq!(
            alert_message(&ApiError::Network("connection reset".into())),
            GENERIC_ALERT_MESSAGE
        );
    }
}
