//! EmailJS dispatch client.
//!
//! The collaborator is a black box: we POST the template parameters and map
//! anything other than a 200 to a user-visible failure. Calls block, so the
//! coordinator runs them on a background thread and forwards the outcome
//! through the FLTK channel.

use serde::Serialize;

use super::error::{AppError, Result};

const ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const TIMEOUT_SECS: u64 = 15;

pub const SERVICE_ID: &str = "service_znw9sdc";
pub const TEMPLATE_ID: &str = "template_bw7hg0x";
pub const USER_ID: &str = "YONMvZ3hNfquYJkjM";

/// Template parameters for one contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub sent_date: String,
}

#[derive(Serialize)]
struct DispatchRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// Deliver one submission. Blocks until the service answers or the timeout
/// fires; resolves to exactly one of delivered (Ok) or failed (Err).
pub fn dispatch(payload: &EmailPayload) -> Result<()> {
    let request = DispatchRequest {
        service_id: SERVICE_ID,
        template_id: TEMPLATE_ID,
        user_id: USER_ID,
        template_params: payload,
    };

    let response = minreq::post(ENDPOINT)
        .with_timeout(TIMEOUT_SECS)
        .with_json(&request)
        .map_err(|e| AppError::Dispatch(format!("failed to encode message: {}", e)))?
        .send()
        .map_err(|e| AppError::Dispatch(format!("failed to reach email service: {}", e)))?;

    if response.status_code == 200 {
        Ok(())
    } else {
        Err(AppError::Dispatch(format!(
            "email service returned {} {}",
            response.status_code, response.reason_phrase
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let payload = EmailPayload {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
            sent_date: "01/02/2026, 03:04".to_string(),
        };
        let request = DispatchRequest {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            user_id: USER_ID,
            template_params: &payload,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service_id"], SERVICE_ID);
        assert_eq!(value["template_id"], TEMPLATE_ID);
        assert_eq!(value["user_id"], USER_ID);
        assert_eq!(value["template_params"]["from_name"], "Ada");
        assert_eq!(value["template_params"]["from_email"], "ada@example.com");
        assert_eq!(value["template_params"]["message"], "Hello!");
        assert_eq!(value["template_params"]["sent_date"], "01/02/2026, 03:04");
    }
}
