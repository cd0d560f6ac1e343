use tagtrack_domain::DomainError;

use crate::event::EventResponse;

/// Convert a domain error to the invocation response
pub fn domain_error_to_response(error: DomainError) -> EventResponse {
    match error {
        DomainError::InvalidDeviceId(_) | DomainError::InvalidRoomId(_) => {
            EventResponse::missing_parameters()
        }

        DomainError::DeviceNotFound(_) => EventResponse::new(404, "Device not found"),

        DomainError::UpdateFailed(_) => {
            EventResponse::new(404, "Device not found or update failed")
        }

        DomainError::ConfigurationError(_) => {
            EventResponse::new(500, "Server configuration error")
        }

        DomainError::RepositoryError(_) => EventResponse::new(500, "Error processing data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let response =
            domain_error_to_response(DomainError::InvalidDeviceId("empty".to_string()));
        assert_eq!(response, EventResponse::new(400, "Missing required parameters"));

        let response = domain_error_to_response(DomainError::InvalidRoomId("empty".to_string()));
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn test_not_found_and_update_failed_are_distinct_404s() {
        let response =
            domain_error_to_response(DomainError::DeviceNotFound("device-9".to_string()));
        assert_eq!(response, EventResponse::new(404, "Device not found"));

        let response = domain_error_to_response(DomainError::UpdateFailed("device-9".to_string()));
        assert_eq!(
            response,
            EventResponse::new(404, "Device not found or update failed")
        );
    }

    #[test]
    fn test_configuration_and_store_errors_are_distinct_500s() {
        let response =
            domain_error_to_response(DomainError::ConfigurationError("no credentials".to_string()));
        assert_eq!(response, EventResponse::new(500, "Server configuration error"));

        let response = domain_error_to_response(DomainError::RepositoryError(anyhow::anyhow!(
            "connection refused"
        )));
        assert_eq!(response, EventResponse::new(500, "Error processing data"));
    }
}
