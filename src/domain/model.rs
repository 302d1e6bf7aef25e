use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A voyage row as the remote service reports it: joined with its vessel and
/// the associated unit types. Timestamps arrive as ISO-8601 UTC instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id: String,
    pub scheduled_departure: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel_id: String,
    pub vessel: Vessel,
    #[serde(default)]
    pub unit_types: Vec<UnitType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub name: String,
}

/// Vessel reference data shaped for a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    pub id: String,
    pub name: String,
    pub default_length: f64,
}

/// Payload for the create endpoint. `departure`/`arrival` are composed in
/// local time and serialize as bare ISO-8601 strings; `unit_types` carries
/// unit-type ids, not full objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoyageBody {
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub unit_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A dismissable user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success!".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_create_body_serializes_to_wire_shape() {
        let body = CreateVoyageBody {
            port_of_loading: "AAR".to_string(),
            port_of_discharge: "CPH".to_string(),
            vessel: "vessel-1".to_string(),
            departure: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            arrival: NaiveDate::from_ymd_opt(2024, 6, 3)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            unit_types: vec!["ut-1".to_string(), "ut-2".to_string()],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "portOfLoading": "AAR",
                "portOfDischarge": "CPH",
                "vessel": "vessel-1",
                "departure": "2024-06-01T08:00:00",
                "arrival": "2024-06-03T10:00:00",
                "unitTypes": ["ut-1", "ut-2"]
            })
        );
    }

    #[test]
    fn test_voyage_deserializes_joined_row() {
        let json = r#"{
            "id": "voyage-1",
            "scheduledDeparture": "2024-06-01T08:00:00.000Z",
            "scheduledArrival": "2024-06-03T10:00:00.000Z",
            "portOfLoading": "AAR",
            "portOfDischarge": "CPH",
            "vesselId": "vessel-1",
            "vessel": {"id": "vessel-1", "name": "Crown Seaways"},
            "unitTypes": [{"id": "ut-1", "name": "Trailer", "defaultLength": 13.6}]
        }"#;

        let voyage: Voyage = serde_json::from_str(json).unwrap();
        assert_eq!(voyage.id, "voyage-1");
        assert_eq!(voyage.vessel.name, "Crown Seaways");
        assert_eq!(voyage.unit_types.len(), 1);
        assert_eq!(voyage.unit_types[0].default_length, 13.6);
    }

    #[test]
    fn test_notification_titles() {
        assert_eq!(Notification::success("done").title, "Success!");
        assert_eq!(Notification::error("boom").title, "Error");
    }
}
