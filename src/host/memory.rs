use crate::page::control::RawControl;
use crate::page::host::{EventKind, PageHost};

// ============================================================================
// InMemoryPage — node-list page fake for tests and snapshot-driven CLI runs
// ============================================================================

/// A page backed by an in-memory control list. Implements the host
/// primitives with plain storage writes and records every dispatched
/// notification so callers can assert on the sequence.
pub struct InMemoryPage {
    controls: Vec<RawControl>,
    events: Vec<(usize, EventKind)>,
    supports_text_input: bool,
}

impl InMemoryPage {
    pub fn new(controls: Vec<RawControl>) -> Self {
        Self {
            controls,
            events: Vec::new(),
            supports_text_input: true,
        }
    }

    /// A page whose host rejects the richer text notification, as older
    /// engines do. The applier is expected to swallow that failure.
    pub fn without_text_input(controls: Vec<RawControl>) -> Self {
        Self {
            controls,
            events: Vec::new(),
            supports_text_input: false,
        }
    }

    pub fn controls(&self) -> &[RawControl] {
        &self.controls
    }

    pub fn value_of(&self, control: usize) -> &str {
        &self.controls[control].value
    }

    pub fn is_checked(&self, control: usize) -> bool {
        self.controls[control].checked
    }

    /// Every notification dispatched so far, in order.
    pub fn events(&self) -> &[(usize, EventKind)] {
        &self.events
    }

    /// Notifications dispatched to one control, in order.
    pub fn events_for(&self, control: usize) -> Vec<EventKind> {
        self.events
            .iter()
            .filter(|(i, _)| *i == control)
            .map(|(_, e)| *e)
            .collect()
    }

    fn check_index(&self, control: usize) -> Result<(), String> {
        if control < self.controls.len() {
            Ok(())
        } else {
            Err(format!("no control at index {}", control))
        }
    }
}

impl PageHost for InMemoryPage {
    fn write_text(&mut self, control: usize, value: &str) -> Result<(), String> {
        self.check_index(control)?;
        self.controls[control].value = value.to_string();
        Ok(())
    }

    fn choose_option(&mut self, control: usize, option: usize) -> Result<(), String> {
        self.check_index(control)?;
        let node = &mut self.controls[control];
        let options = node.options.as_ref().ok_or_else(|| {
            format!("control {} has no option list", control)
        })?;
        let chosen = options
            .get(option)
            .ok_or_else(|| format!("control {} has no option {}", control, option))?;
        node.value = chosen.value.clone();
        Ok(())
    }

    fn set_checked(&mut self, control: usize, checked: bool) -> Result<(), String> {
        self.check_index(control)?;
        self.controls[control].checked = checked;
        Ok(())
    }

    fn dispatch(&mut self, control: usize, event: EventKind) -> Result<(), String> {
        self.check_index(control)?;
        if event == EventKind::TextInput && !self.supports_text_input {
            return Err("host does not support the text input notification".to_string());
        }
        self.events.push((control, event));
        Ok(())
    }
}
