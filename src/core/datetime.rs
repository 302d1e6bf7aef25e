use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub type DateTimeObserver = Box<dyn FnMut(NaiveDateTime) + Send>;

/// Composes an independently chosen calendar day and a time-of-day string
/// into one local timestamp, under advisory min/max bounds supplied by a
/// sibling field.
///
/// The picker is either `Closed` (showing the last committed value) or
/// `Open` (tracking a pending day and a pending time, each possibly unset).
/// The provisional preview recombines on every edit, so it always reflects
/// the current pending pair. The composed value is only committed, and
/// emitted to the observer exactly once, on `confirm`.
pub struct DateTimeComposer {
    committed: Option<NaiveDateTime>,
    pending_date: Option<NaiveDate>,
    pending_time: Option<NaiveTime>,
    min_date: Option<NaiveDateTime>,
    max_date: Option<NaiveDateTime>,
    open: bool,
    observer: Option<DateTimeObserver>,
}

impl Default for DateTimeComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl DateTimeComposer {
    pub fn new() -> Self {
        Self {
            committed: None,
            pending_date: None,
            pending_time: None,
            min_date: None,
            max_date: None,
            open: false,
            observer: None,
        }
    }

    /// Registers the single change observer. Called once by the host.
    pub fn set_observer(&mut self, observer: DateTimeObserver) {
        self.observer = Some(observer);
    }

    /// Bounds come from sibling field values (e.g. the arrival picker's
    /// minimum is the departure field's current value). They only restrict
    /// which days are selectable; ordering is validated at submit time.
    pub fn set_min(&mut self, min: Option<NaiveDateTime>) {
        self.min_date = min;
    }

    pub fn set_max(&mut self, max: Option<NaiveDateTime>) {
        self.max_date = max;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Whether the day picker offers `day` at all, given the current bounds.
    pub fn day_selectable(&self, day: NaiveDate) -> bool {
        if let Some(min) = self.min_date {
            if day < min.date() {
                return false;
            }
        }
        if let Some(max) = self.max_date {
            if day > max.date() {
                return false;
            }
        }
        true
    }

    /// Picks a calendar day. Ignored while closed or for days the bounds
    /// exclude, mirroring a day picker that simply does not offer them.
    pub fn select_day(&mut self, day: NaiveDate) {
        if !self.open {
            return;
        }
        if !self.day_selectable(day) {
            tracing::debug!("day {day} outside picker bounds, ignored");
            return;
        }
        self.pending_date = Some(day);
    }

    /// Edits the time-of-day field ("HH:MM", seconds optional). Unparsable
    /// input leaves the last accepted time in place.
    pub fn edit_time(&mut self, input: &str) {
        if !self.open {
            return;
        }
        let parsed = NaiveTime::parse_from_str(input, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"));
        match parsed {
            Ok(time) => self.pending_time = Some(time),
            Err(_) => tracing::debug!("unparsable time-of-day input: {input:?}"),
        }
    }

    /// The provisional timestamp shown while the picker is open: pending day
    /// plus pending time, or the bare day (midnight) when no time is chosen.
    /// A time without a day composes nothing.
    pub fn provisional(&self) -> Option<NaiveDateTime> {
        let date = self.pending_date?;
        Some(match self.pending_time {
            Some(time) => date.and_time(time),
            None => date.and_time(NaiveTime::MIN),
        })
    }

    /// Confirms (or closes) the picker. Emits the provisional value exactly
    /// once when one exists; closing with nothing pending emits nothing and
    /// preserves the last committed value.
    pub fn confirm(&mut self) -> Option<NaiveDateTime> {
        if !self.open {
            return None;
        }
        self.open = false;
        let value = self.provisional()?;
        self.committed = Some(value);
        if let Some(observer) = &mut self.observer {
            observer(value);
        }
        Some(value)
    }

    pub fn committed(&self) -> Option<NaiveDateTime> {
        self.committed
    }
}
