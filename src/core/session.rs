use crate::core::validation::{self, FieldErrors, FieldKey};
use crate::domain::model::CreateVoyageBody;
use chrono::NaiveDateTime;

/// Current field values of the creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: String,
    pub departure: Option<NaiveDateTime>,
    pub arrival: Option<NaiveDateTime>,
    pub unit_types: Vec<String>,
}

/// One open creation-panel session: field values, the last validation error
/// map, and whether continuous revalidation has kicked in.
///
/// Validation re-runs synchronously after every field mutation once the form
/// has been touched (first submission attempt), so the error map always
/// reflects the latest values. Closing resets everything to defaults;
/// closing an already-closed session is a no-op.
#[derive(Debug, Default)]
pub struct FormSession {
    state: FormState,
    errors: FieldErrors,
    touched: bool,
    open: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.state = FormState::default();
        self.errors.clear();
        self.touched = false;
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.state = FormState::default();
        self.errors.clear();
        self.touched = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_port_of_loading(&mut self, value: &str) {
        self.state.port_of_loading = value.to_string();
        self.revalidate();
    }

    pub fn set_port_of_discharge(&mut self, value: &str) {
        self.state.port_of_discharge = value.to_string();
        self.revalidate();
    }

    /// Selecting a vessel clears a previously attached vessel error
    /// immediately, independent of the next full validation pass.
    pub fn select_vessel(&mut self, vessel_id: &str) {
        self.errors.remove(&FieldKey::Vessel);
        self.state.vessel = vessel_id.to_string();
        self.revalidate();
    }

    pub fn set_departure(&mut self, value: NaiveDateTime) {
        self.state.departure = Some(value);
        self.revalidate();
    }

    pub fn set_arrival(&mut self, value: NaiveDateTime) {
        self.state.arrival = Some(value);
        self.revalidate();
    }

    /// Replaces the unit-type selection with the aggregator's committed
    /// sequence.
    pub fn set_unit_types(&mut self, ids: Vec<String>) {
        self.state.unit_types = ids;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        if self.touched {
            self.errors = validation::evaluate(&self.state);
        }
    }

    /// The submission gate: runs a full validation pass and assembles the
    /// wire payload only when the error map is empty. Marks the form touched,
    /// switching on continuous revalidation.
    pub fn assemble(&mut self) -> Option<CreateVoyageBody> {
        self.touched = true;
        self.errors = validation::evaluate(&self.state);
        if !self.errors.is_empty() {
            return None;
        }
        Some(CreateVoyageBody {
            port_of_loading: self.state.port_of_loading.clone(),
            port_of_discharge: self.state.port_of_discharge.clone(),
            vessel: self.state.vessel.clone(),
            departure: self.state.departure?,
            arrival: self.state.arrival?,
            unit_types: self.state.unit_types.clone(),
        })
    }
}
