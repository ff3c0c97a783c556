use implant_analyzer::{IdleTask, SessionHost};

/// Everything a host was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Navigate(f64),
    Status(String),
    EnterPlacement,
    ExitPlacement,
}

/// Test host that records every command and queues idle tasks for the test
/// to drain explicitly, the way a real event loop would.
pub struct RecordingHost {
    pub bounds: (f64, f64),
    pub events: Vec<HostEvent>,
    pub idle: Vec<IdleTask>,
}

impl RecordingHost {
    pub fn new(bounds: (f64, f64)) -> Self {
        Self {
            bounds,
            events: Vec::new(),
            idle: Vec::new(),
        }
    }

    /// Navigation depths in command order.
    pub fn navigations(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Navigate(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Status strings in command order.
    pub fn statuses(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Status(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &HostEvent) -> usize {
        self.events.iter().filter(|e| *e == wanted).count()
    }
}

impl SessionHost for RecordingHost {
    fn volume_bounds(&self) -> (f64, f64) {
        self.bounds
    }
    fn navigate_to(&mut self, depth_mm: f64) {
        self.events.push(HostEvent::Navigate(depth_mm));
    }
    fn set_status_text(&mut self, text: &str) {
        self.events.push(HostEvent::Status(text.to_string()));
    }
    fn enter_placement_mode(&mut self) {
        self.events.push(HostEvent::EnterPlacement);
    }
    fn exit_placement_mode(&mut self) {
        self.events.push(HostEvent::ExitPlacement);
    }
    fn schedule_idle(&mut self, task: IdleTask) {
        self.idle.push(task);
    }
}
