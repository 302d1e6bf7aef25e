use std::collections::BTreeSet;

pub type SelectionObserver = Box<dyn FnMut(&[String]) + Send>;

/// Committed state behind a checklist dropdown: a set of selected option
/// identifiers. Every toggle notifies the registered observer synchronously
/// with the updated sequence, so the host form never has to poll.
///
/// Ids that do not appear in any option list still toggle (pass-through);
/// callers treat that as update-then-validate, not a rejected operation.
#[derive(Default)]
pub struct SelectionAggregator {
    selected: BTreeSet<String>,
    observer: Option<SelectionObserver>,
}

impl SelectionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the single change observer. Called once by the host.
    pub fn set_observer(&mut self, observer: SelectionObserver) {
        self.observer = Some(observer);
    }

    /// Flips membership of `id` and notifies the observer.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        let snapshot = self.selected();
        if let Some(observer) = &mut self.observer {
            observer(&snapshot);
        }
    }

    /// The current selection as an ordered, session-stable sequence.
    pub fn selected(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Statically typed view over the option list backing a checklist: a key
/// accessor and a label builder instead of dynamic property indexing.
pub struct ChecklistOptions<'a, T> {
    options: &'a [T],
    key: fn(&T) -> &str,
    label: fn(&T) -> String,
}

impl<'a, T> ChecklistOptions<'a, T> {
    pub fn new(options: &'a [T], key: fn(&T) -> &str, label: fn(&T) -> String) -> Self {
        Self {
            options,
            key,
            label,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.options
            .iter()
            .map(move |option| ((self.key)(option), (self.label)(option)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|option| (self.key)(option) == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UnitType;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut aggregator = SelectionAggregator::new();
        aggregator.toggle("ut-1");
        aggregator.toggle("ut-2");
        assert_eq!(aggregator.len(), 2);

        aggregator.toggle("ut-1");
        aggregator.toggle("ut-1");
        assert_eq!(aggregator.len(), 2);
        assert_eq!(aggregator.selected(), vec!["ut-1", "ut-2"]);
    }

    #[test]
    fn test_observer_sees_every_change_synchronously() {
        let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut aggregator = SelectionAggregator::new();
        aggregator.set_observer(Box::new(move |selected| {
            sink.lock().unwrap().push(selected.to_vec());
        }));

        aggregator.toggle("b");
        aggregator.toggle("a");
        aggregator.toggle("b");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], vec!["b"]);
        assert_eq!(seen[1], vec!["a", "b"]);
        assert_eq!(seen[2], vec!["a"]);
    }

    #[test]
    fn test_unknown_id_passes_through() {
        let mut aggregator = SelectionAggregator::new();
        aggregator.toggle("not-in-any-option-list");
        assert_eq!(aggregator.selected(), vec!["not-in-any-option-list"]);
    }

    #[test]
    fn test_order_is_stable_regardless_of_toggle_order() {
        let mut first = SelectionAggregator::new();
        first.toggle("ut-2");
        first.toggle("ut-1");

        let mut second = SelectionAggregator::new();
        second.toggle("ut-1");
        second.toggle("ut-2");

        assert_eq!(first.selected(), second.selected());
    }

    #[test]
    fn test_checklist_options_typed_accessors() {
        let unit_types = vec![
            UnitType {
                id: "ut-1".to_string(),
                name: "Trailer".to_string(),
                default_length: 13.6,
            },
            UnitType {
                id: "ut-2".to_string(),
                name: "Container".to_string(),
                default_length: 12.2,
            },
        ];

        let options = ChecklistOptions::new(
            &unit_types,
            |unit: &UnitType| unit.id.as_str(),
            |unit: &UnitType| format!("{} - {}", unit.name, unit.default_length),
        );

        let rendered: Vec<(String, String)> = options
            .iter()
            .map(|(id, label)| (id.to_string(), label))
            .collect();
        assert_eq!(rendered[0], ("ut-1".to_string(), "Trailer - 13.6".to_string()));
        assert!(options.contains("ut-2"));
        assert!(!options.contains("ut-9"));
    }
}
