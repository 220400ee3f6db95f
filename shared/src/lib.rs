use serde::{Deserialize, Serialize};
use std::fmt;

use chrono::{NaiveDate, SecondsFormat, TimeZone, Utc};

/// Lifecycle status of a shipment guide.
///
/// The wire strings are the Spanish status names the backend stores. The
/// lifecycle only moves forward, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideStatus {
    #[serde(rename = "Pendiente")]
    Pendiente,
    #[serde(rename = "En tránsito")]
    EnTransito,
    #[serde(rename = "Entregado")]
    Entregado,
}

impl GuideStatus {
    /// Successor in the lifecycle. `Entregado` is terminal and maps to
    /// itself, so advancing a delivered guide is a no-op rather than an
    /// error.
    pub fn next(self) -> Self {
        match self {
            GuideStatus::Pendiente => GuideStatus::EnTransito,
            GuideStatus::EnTransito => GuideStatus::Entregado,
            GuideStatus::Entregado => GuideStatus::Entregado,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GuideStatus::Entregado)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuideStatus::Pendiente => "Pendiente",
            GuideStatus::EnTransito => "En tránsito",
            GuideStatus::Entregado => "Entregado",
        }
    }
}

impl fmt::Display for GuideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked shipment record. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    /// Server-assigned, immutable after creation.
    pub id: String,
    /// User-supplied, intended unique; checked client-side against the
    /// cached list only.
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub recipient: String,
    /// RFC 3339 timestamp; entered as a calendar date and normalized to
    /// midnight UTC before transmission.
    pub creation_date: String,
    pub status: GuideStatus,
    /// Timestamp of the last status mutation; absent until the first update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl Guide {
    /// Case-insensitive substring match of `query` against the tracking
    /// number. An empty query matches every guide.
    pub fn matches_query(&self, query: &str) -> bool {
        self.tracking_number
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Body for `POST /guias/crear-guia/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuideRequest {
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub recipient: String,
    /// Midnight UTC of the entered calendar date, RFC 3339 with
    /// millisecond precision.
    pub creation_date: String,
    /// Always `Pendiente`; new guides never start anywhere else.
    pub status: GuideStatus,
}

/// Body for `PUT /guias/{id}/actualizar-guia/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGuideStatusRequest {
    pub status: GuideStatus,
}

/// Raw form input for a new guide, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGuideInput {
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub recipient: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub creation_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuideValidationError {
    /// A required field is empty after trimming.
    EmptyField,
    /// The tracking number matches a cached guide, case-insensitively.
    DuplicateTrackingNumber,
    /// The registration date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate,
}

impl fmt::Display for GuideValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideValidationError::EmptyField => {
                write!(f, "Please complete all fields without leaving any blank.")
            }
            GuideValidationError::DuplicateTrackingNumber => {
                write!(f, "That tracking number already exists.")
            }
            GuideValidationError::InvalidDate => {
                write!(f, "The registration date is not a valid calendar date.")
            }
        }
    }
}

impl std::error::Error for GuideValidationError {}

impl NewGuideInput {
    /// Validate the input against the currently cached guides and build the
    /// creation request. Runs entirely client-side; nothing reaches the
    /// network on failure.
    ///
    /// Every field is trimmed before validation and transmission. The
    /// duplicate check is best-effort: it only sees the guides currently in
    /// the cache, not concurrent creations elsewhere.
    pub fn validate(
        &self,
        existing: &[Guide],
    ) -> Result<CreateGuideRequest, GuideValidationError> {
        let tracking_number = self.tracking_number.trim();
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        let recipient = self.recipient.trim();
        let creation_date = self.creation_date.trim();

        if tracking_number.is_empty()
            || origin.is_empty()
            || destination.is_empty()
            || recipient.is_empty()
            || creation_date.is_empty()
        {
            return Err(GuideValidationError::EmptyField);
        }

        let duplicate = existing.iter().any(|g| {
            g.tracking_number.trim().to_lowercase() == tracking_number.to_lowercase()
        });
        if duplicate {
            return Err(GuideValidationError::DuplicateTrackingNumber);
        }

        Ok(CreateGuideRequest {
            tracking_number: tracking_number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            recipient: recipient.to_string(),
            creation_date: date_to_wire_timestamp(creation_date)?,
            status: GuideStatus::Pendiente,
        })
    }
}

/// Convert a `YYYY-MM-DD` calendar date to the wire timestamp format:
/// midnight UTC, RFC 3339 with millisecond precision (`2024-01-01` becomes
/// `2024-01-01T00:00:00.000Z`).
pub fn date_to_wire_timestamp(date: &str) -> Result<String, GuideValidationError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| GuideValidationError::InvalidDate)?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or(GuideValidationError::InvalidDate)?;
    Ok(Utc
        .from_utc_datetime(&midnight)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide(id: &str, tracking_number: &str, status: GuideStatus) -> Guide {
        Guide {
            id: id.to_string(),
            tracking_number: tracking_number.to_string(),
            origin: "CDMX".to_string(),
            destination: "GDL".to_string(),
            recipient: "Juan".to_string(),
            creation_date: "2024-01-01T00:00:00.000Z".to_string(),
            status,
            last_update: None,
        }
    }

    fn input(tracking_number: &str) -> NewGuideInput {
        NewGuideInput {
            tracking_number: tracking_number.to_string(),
            origin: "CDMX".to_string(),
            destination: "GDL".to_string(),
            recipient: "Juan".to_string(),
            creation_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_status_advances_exactly_one_step() {
        assert_eq!(GuideStatus::Pendiente.next(), GuideStatus::EnTransito);
        assert_eq!(GuideStatus::EnTransito.next(), GuideStatus::Entregado);
    }

    #[test]
    fn test_terminal_status_is_idempotent() {
        assert_eq!(GuideStatus::Entregado.next(), GuideStatus::Entregado);
        assert!(GuideStatus::Entregado.is_terminal());
        assert!(!GuideStatus::Pendiente.is_terminal());
        assert!(!GuideStatus::EnTransito.is_terminal());
    }

    #[test]
    fn test_double_advance_walks_the_whole_lifecycle() {
        // Two steps from the initial state reach the terminal state without
        // skipping the middle one.
        let first = GuideStatus::Pendiente.next();
        assert_eq!(first, GuideStatus::EnTransito);
        assert_eq!(first.next(), GuideStatus::Entregado);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_value(GuideStatus::Pendiente).unwrap(),
            serde_json::json!("Pendiente")
        );
        assert_eq!(
            serde_json::to_value(GuideStatus::EnTransito).unwrap(),
            serde_json::json!("En tránsito")
        );
        assert_eq!(
            serde_json::to_value(GuideStatus::Entregado).unwrap(),
            serde_json::json!("Entregado")
        );

        let status: GuideStatus = serde_json::from_str("\"En tránsito\"").unwrap();
        assert_eq!(status, GuideStatus::EnTransito);
    }

    #[test]
    fn test_guide_deserializes_without_last_update() {
        let json = r#"{
            "id": "7",
            "trackingNumber": "TN1",
            "origin": "CDMX",
            "destination": "GDL",
            "recipient": "Juan",
            "creationDate": "2024-01-01T00:00:00.000Z",
            "status": "Pendiente"
        }"#;

        let guide: Guide = serde_json::from_str(json).unwrap();
        assert_eq!(guide.tracking_number, "TN1");
        assert_eq!(guide.status, GuideStatus::Pendiente);
        assert_eq!(guide.last_update, None);
    }

    #[test]
    fn test_create_request_wire_shape() {
        let request = input("TN1").validate(&[]).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["trackingNumber"], "TN1");
        assert_eq!(value["creationDate"], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["status"], "Pendiente");
    }

    #[test]
    fn test_matches_query_is_case_insensitive_substring() {
        let abc = guide("1", "ABC123", GuideStatus::Pendiente);
        let xyz = guide("2", "xyz999", GuideStatus::Pendiente);

        assert!(abc.matches_query("abc"));
        assert!(!xyz.matches_query("abc"));
        assert!(abc.matches_query(""));
        assert!(xyz.matches_query(""));
        assert!(!abc.matches_query("999"));
        assert!(xyz.matches_query("999"));
    }

    #[test]
    fn test_validate_rejects_any_blank_field() {
        let base = input("TN1");

        let blank_variants = [
            NewGuideInput { tracking_number: "   ".to_string(), ..base.clone() },
            NewGuideInput { origin: String::new(), ..base.clone() },
            NewGuideInput { destination: "  ".to_string(), ..base.clone() },
            NewGuideInput { recipient: "\t".to_string(), ..base.clone() },
            NewGuideInput { creation_date: " ".to_string(), ..base.clone() },
        ];

        for variant in blank_variants {
            assert_eq!(
                variant.validate(&[]),
                Err(GuideValidationError::EmptyField)
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_tracking_number_case_insensitively() {
        let existing = vec![guide("1", "TN1", GuideStatus::Pendiente)];

        assert_eq!(
            input("tn1").validate(&existing),
            Err(GuideValidationError::DuplicateTrackingNumber)
        );
        assert_eq!(
            input("  TN1  ").validate(&existing),
            Err(GuideValidationError::DuplicateTrackingNumber)
        );
        assert!(input("TN2").validate(&existing).is_ok());
    }

    #[test]
    fn test_validate_trims_fields_and_forces_initial_status() {
        let raw = NewGuideInput {
            tracking_number: "  TN1 ".to_string(),
            origin: " CDMX ".to_string(),
            destination: " GDL ".to_string(),
            recipient: " Juan ".to_string(),
            creation_date: " 2024-01-01 ".to_string(),
        };

        let request = raw.validate(&[]).unwrap();
        assert_eq!(request.tracking_number, "TN1");
        assert_eq!(request.origin, "CDMX");
        assert_eq!(request.destination, "GDL");
        assert_eq!(request.recipient, "Juan");
        assert_eq!(request.creation_date, "2024-01-01T00:00:00.000Z");
        assert_eq!(request.status, GuideStatus::Pendiente);
    }

    #[test]
    fn test_validate_rejects_malformed_dates() {
        let mut bad_date = input("TN1");
        bad_date.creation_date = "01/01/2024".to_string();
        assert_eq!(
            bad_date.validate(&[]),
            Err(GuideValidationError::InvalidDate)
        );

        let mut impossible = input("TN1");
        impossible.creation_date = "2024-02-31".to_string();
        assert_eq!(
            impossible.validate(&[]),
            Err(GuideValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_date_to_wire_timestamp_is_midnight_utc() {
        assert_eq!(
            date_to_wire_timestamp("2024-01-01").unwrap(),
            "2024-01-01T00:00:00.000Z"
        );
        assert_eq!(
            date_to_wire_timestamp("2024-02-29").unwrap(),
            "2024-02-29T00:00:00.000Z"
        );
    }
}
