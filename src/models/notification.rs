use serde::{Deserialize, Serialize};

/// Body of `POST /api/send-application`. Every field is optional on the wire so that
/// absent fields surface as a 400 with the standard envelope instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    /// Property display name, not id.
    pub property: Option<String>,
    /// Room display name, not id.
    pub room_type: Option<String>,
    pub move_in_date: Option<String>,
    pub lease_duration: Option<String>,
    pub occupation: Option<String>,
    pub occupation_detail: Option<String>,
    pub about_you: Option<String>,
    pub emergency_name: Option<String>,
    pub emergency_phone: Option<String>,
    pub how_heard: Option<String>,
}

impl ApplicationRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("dateOfBirth", &self.date_of_birth),
            ("moveInDate", &self.move_in_date),
            ("leaseDuration", &self.lease_duration),
            ("occupation", &self.occupation),
            ("aboutYou", &self.about_you),
        ])
    }
}

/// Body of `POST /api/send-tour-request`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TourRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Property display name, not id.
    pub property: Option<String>,
    pub date: Option<String>,
    /// Time-of-day bucket: `morning`, `afternoon` or `evening`.
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl TourRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("property", &self.property),
            ("date", &self.date),
            ("time", &self.time),
        ])
    }
}

fn missing(fields: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(name, _)| *name)
        .collect()
}

pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NotificationResponse {
    pub fn sent(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tour_request_missing_email() {
        let request: TourRequest = serde_json::from_value(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "property": "The Gramercy",
            "date": "2026-11-02",
            "time": "morning"
        }))
        .unwrap();
        assert_eq!(request.missing_fields(), vec!["email"]);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let request = ApplicationRequest {
            full_name: Some("  ".to_string()),
            ..Default::default()
        };
        let missing = request.missing_fields();
        assert_eq!(missing.len(), 8);
        assert_eq!(missing[0], "fullName");
    }

    #[test]
    fn test_optional_application_fields_not_required() {
        let request: ApplicationRequest = serde_json::from_value(json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "phone": "514-555-0100",
            "dateOfBirth": "2001-04-09",
            "moveInDate": "2026-12-01",
            "leaseDuration": "6 months",
            "occupation": "Student",
            "aboutYou": "Starting my master's at McGill."
        }))
        .unwrap();
        assert!(request.missing_fields().is_empty());
        assert!(request.emergency_name.is_none());
    }
}
