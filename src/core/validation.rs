use crate::core::session::FormState;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_UNIT_TYPES: usize = 5;

/// Field a validation message attaches to. `Date` is the synthetic combined
/// field for the temporal-ordering rule, rendered beneath both pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    PortOfLoading,
    PortOfDischarge,
    Vessel,
    Departure,
    Arrival,
    UnitTypes,
    Date,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::PortOfLoading => "portOfLoading",
            FieldKey::PortOfDischarge => "portOfDischarge",
            FieldKey::Vessel => "vessel",
            FieldKey::Departure => "departure",
            FieldKey::Arrival => "arrival",
            FieldKey::UnitTypes => "unitTypes",
            FieldKey::Date => "date",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type FieldErrors = BTreeMap<FieldKey, String>;

/// Evaluates the voyage-creation schema: per-field constraints first, then
/// the cross-field rules. An empty map means the form is valid.
pub fn evaluate(state: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if state.port_of_loading.trim().is_empty() {
        errors.insert(FieldKey::PortOfLoading, "Required".to_string());
    }
    if state.port_of_discharge.trim().is_empty() {
        errors.insert(FieldKey::PortOfDischarge, "Required".to_string());
    }
    if state.vessel.trim().is_empty() {
        errors.insert(FieldKey::Vessel, "Required".to_string());
    }
    if state.departure.is_none() {
        errors.insert(FieldKey::Departure, "Required".to_string());
    }
    if state.arrival.is_none() {
        errors.insert(FieldKey::Arrival, "Required".to_string());
    }
    if state.unit_types.len() < MIN_UNIT_TYPES {
        errors.insert(
            FieldKey::UnitTypes,
            "At least 5 unit types are required".to_string(),
        );
    }

    // Cross-field rules run after the per-field pass, and only once both
    // operands are present.
    if let (Some(departure), Some(arrival)) = (state.departure, state.arrival) {
        if arrival < departure {
            errors.insert(
                FieldKey::Date,
                "Arrival date cannot be earlier than departure date.".to_string(),
            );
        }
    }
    if !state.port_of_loading.trim().is_empty()
        && state.port_of_loading == state.port_of_discharge
    {
        errors.insert(
            FieldKey::PortOfDischarge,
            "Port of loading and port of discharge cannot be the same.".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn valid_state() -> FormState {
        FormState {
            port_of_loading: "AAR".to_string(),
            port_of_discharge: "CPH".to_string(),
            vessel: "vessel-1".to_string(),
            departure: Some(at(2024, 6, 1, 8, 0)),
            arrival: Some(at(2024, 6, 3, 10, 0)),
            unit_types: (1..=5).map(|i| format!("ut-{i}")).collect(),
        }
    }

    #[test]
    fn test_valid_state_yields_empty_map() {
        assert!(evaluate(&valid_state()).is_empty());
    }

    #[test]
    fn test_empty_fields_are_required() {
        let errors = evaluate(&FormState::default());
        assert_eq!(errors.get(&FieldKey::PortOfLoading).unwrap(), "Required");
        assert_eq!(errors.get(&FieldKey::PortOfDischarge).unwrap(), "Required");
        assert_eq!(errors.get(&FieldKey::Vessel).unwrap(), "Required");
        assert_eq!(errors.get(&FieldKey::Departure).unwrap(), "Required");
        assert_eq!(errors.get(&FieldKey::Arrival).unwrap(), "Required");
        // No operands present, so no cross-field messages.
        assert!(!errors.contains_key(&FieldKey::Date));
    }

    #[test]
    fn test_arrival_before_departure_attaches_to_date_field() {
        let mut state = valid_state();
        state.arrival = Some(at(2024, 6, 1, 7, 0));
        let errors = evaluate(&state);
        assert_eq!(
            errors.get(&FieldKey::Date).unwrap(),
            "Arrival date cannot be earlier than departure date."
        );
        assert!(!errors.contains_key(&FieldKey::Departure));
        assert!(!errors.contains_key(&FieldKey::Arrival));
    }

    #[test]
    fn test_arrival_equal_to_departure_is_allowed() {
        let mut state = valid_state();
        state.arrival = state.departure;
        assert!(evaluate(&state).is_empty());
    }

    #[test]
    fn test_ordering_compares_at_time_granularity() {
        let mut state = valid_state();
        state.departure = Some(at(2024, 6, 1, 8, 0));
        state.arrival = Some(at(2024, 6, 1, 7, 59));
        assert!(evaluate(&state).contains_key(&FieldKey::Date));

        state.arrival = Some(at(2024, 6, 1, 8, 1));
        assert!(evaluate(&state).is_empty());
    }

    #[test]
    fn test_unit_type_cardinality() {
        let mut state = valid_state();
        for count in 0..MIN_UNIT_TYPES {
            state.unit_types = (0..count).map(|i| format!("ut-{i}")).collect();
            assert_eq!(
                evaluate(&state).get(&FieldKey::UnitTypes).unwrap(),
                "At least 5 unit types are required"
            );
        }

        state.unit_types = (0..MIN_UNIT_TYPES).map(|i| format!("ut-{i}")).collect();
        assert!(evaluate(&state).is_empty());
        state.unit_types.push("ut-extra".to_string());
        assert!(evaluate(&state).is_empty());
    }

    #[test]
    fn test_equal_ports_are_rejected() {
        let mut state = valid_state();
        state.port_of_discharge = state.port_of_loading.clone();
        let errors = evaluate(&state);
        assert_eq!(
            errors.get(&FieldKey::PortOfDischarge).unwrap(),
            "Port of loading and port of discharge cannot be the same."
        );
    }

    #[test]
    fn test_equal_empty_ports_report_required_not_distinctness() {
        let mut state = valid_state();
        state.port_of_loading = String::new();
        state.port_of_discharge = String::new();
        let errors = evaluate(&state);
        assert_eq!(errors.get(&FieldKey::PortOfLoading).unwrap(), "Required");
        assert_eq!(errors.get(&FieldKey::PortOfDischarge).unwrap(), "Required");
    }
}
