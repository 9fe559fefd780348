//! Tracks which page section is currently on screen.
//!
//! The tracker itself is host independent: intersection reports arrive as
//! [`IntersectionEntry`] batches, and the browser's observer sits behind
//! [`IntersectionHost`]. [`Observation`] ties the two together for as long as
//! it is alive.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Projects,
    Team,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 3] = [SectionId::Home, SectionId::Projects, SectionId::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Projects => "projects",
            SectionId::Team => "team",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// One threshold crossing as reported by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target_id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

type Subscriber = Box<dyn Fn(SectionId)>;

pub struct SectionTracker {
    active: SectionId,
    attached: bool,
    subscribers: Vec<Subscriber>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: SectionId::Home,
            attached: false,
            subscribers: Vec::new(),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// `callback` runs with the new id every time a batch changes the active section.
    pub fn subscribe(&mut self, callback: impl Fn(SectionId) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Applies one observation batch in delivery order, so the last
    /// intersecting entry wins. Returns the new active section if it changed.
    pub fn apply_batch(&mut self, entries: &[IntersectionEntry]) -> Option<SectionId> {
        if !self.is_attached() {
            debug!("Dropping {} intersection entries after detach", entries.len());
            return None;
        }

        let before = self.active;
        let mut ratio = 0.0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            match entry.target_id.parse::<SectionId>() {
                Ok(id) => {
                    self.active = id;
                    ratio = entry.ratio;
                }
                Err(e) => debug!("Ignoring intersection entry: {}", e),
            }
        }

        if self.active == before {
            return None;
        }

        debug!("Active section is now {} ({:.0}% visible)", self.active, ratio * 100.0);
        for subscriber in &self.subscribers {
            subscriber(self.active);
        }
        Some(self.active)
    }
}

/// The viewport-intersection primitive of the rendering environment.
pub trait IntersectionHost {
    fn observe(&mut self, section: SectionId) -> Result<(), SiteError>;
    /// Stops observing every element. Must be safe to call more than once.
    fn disconnect(&mut self);
}

/// Scoped subscription: the tracker stays attached and the host keeps
/// observing until this value is dropped.
pub struct Observation<H: IntersectionHost> {
    tracker: Rc<RefCell<SectionTracker>>,
    host: H,
}

impl<H: IntersectionHost> Observation<H> {
    pub fn start(
        tracker: Rc<RefCell<SectionTracker>>,
        host: H,
        sections: &[SectionId],
    ) -> Result<Self, SiteError> {
        tracker.borrow_mut().attach();
        // From here on Drop releases both sides, including on the error path below.
        let mut observation = Self { tracker, host };
        for &section in sections {
            observation.host.observe(section)?;
        }
        debug!(
            "Observing {} sections, {} active",
            sections.len(),
            observation.tracker.borrow().active()
        );
        Ok(observation)
    }
}

impl<H: IntersectionHost> Drop for Observation<H> {
    fn drop(&mut self) {
        self.host.disconnect();
        self.tracker.borrow_mut().detach();
        debug!("Section observation released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct HostLog {
        observed: Vec<SectionId>,
        disconnects: usize,
    }

    struct FakeHost {
        log: Rc<RefCell<HostLog>>,
        fail_on: Option<SectionId>,
    }

    impl FakeHost {
        fn new() -> (Self, Rc<RefCell<HostLog>>) {
            let log = Rc::new(RefCell::new(HostLog::default()));
            (Self { log: log.clone(), fail_on: None }, log)
        }
    }

    impl IntersectionHost for FakeHost {
        fn observe(&mut self, section: SectionId) -> Result<(), SiteError> {
            if self.fail_on == Some(section) {
                return Err(SiteError::MissingSection(section.as_str()));
            }
            self.log.borrow_mut().observed.push(section);
            Ok(())
        }

        fn disconnect(&mut self) {
            self.log.borrow_mut().disconnects += 1;
        }
    }

    fn entering(id: SectionId, ratio: f64) -> IntersectionEntry {
        IntersectionEntry { target_id: id.as_str().to_string(), is_intersecting: true, ratio }
    }

    fn leaving(id: SectionId, ratio: f64) -> IntersectionEntry {
        IntersectionEntry { target_id: id.as_str().to_string(), is_intersecting: false, ratio }
    }

    fn attached_tracker() -> SectionTracker {
        let mut tracker = SectionTracker::new();
        tracker.attach();
        tracker
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(SectionTracker::new().active(), SectionId::Home);
    }

    #[test]
    fn intersecting_section_becomes_active() {
        let mut tracker = attached_tracker();
        let changed = tracker.apply_batch(&[entering(SectionId::Projects, 0.6)]);
        assert_eq!(changed, Some(SectionId::Projects));
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn leaving_entries_do_not_change_active() {
        let mut tracker = attached_tracker();
        let changed = tracker.apply_batch(&[leaving(SectionId::Team, 0.2)]);
        assert_eq!(changed, None);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn last_intersecting_entry_in_batch_wins() {
        let mut tracker = attached_tracker();
        tracker.apply_batch(&[
            entering(SectionId::Team, 0.9),
            entering(SectionId::Projects, 0.5),
            leaving(SectionId::Home, 0.1),
        ]);
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = attached_tracker();
        let entry = IntersectionEntry {
            target_id: "footer".to_string(),
            is_intersecting: true,
            ratio: 1.0,
        };
        assert_eq!(tracker.apply_batch(&[entry]), None);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn repeated_event_notifies_once() {
        let mut tracker = attached_tracker();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            tracker.subscribe(move |_| calls.set(calls.get() + 1));
        }
        let entry = entering(SectionId::Team, 0.7);
        tracker.apply_batch(&[entry.clone()]);
        tracker.apply_batch(&[entry]);
        assert_eq!(tracker.active(), SectionId::Team);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscribers_receive_new_section() {
        let mut tracker = attached_tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            tracker.subscribe(move |id| seen.borrow_mut().push(id));
        }
        tracker.apply_batch(&[entering(SectionId::Projects, 0.5)]);
        tracker.apply_batch(&[entering(SectionId::Home, 0.5)]);
        assert_eq!(*seen.borrow(), vec![SectionId::Projects, SectionId::Home]);
    }

    #[test]
    fn observation_watches_every_section() {
        let tracker = Rc::new(RefCell::new(SectionTracker::new()));
        let (host, log) = FakeHost::new();
        let _observation = Observation::start(tracker.clone(), host, &SectionId::ALL).unwrap();
        assert!(tracker.borrow().is_attached());
        assert_eq!(log.borrow().observed, SectionId::ALL.to_vec());
        assert_eq!(log.borrow().disconnects, 0);
    }

    #[test]
    fn no_updates_after_teardown() {
        let tracker = Rc::new(RefCell::new(SectionTracker::new()));
        let (host, log) = FakeHost::new();
        let observation = Observation::start(tracker.clone(), host, &SectionId::ALL).unwrap();
        drop(observation);

        assert_eq!(log.borrow().disconnects, 1);
        let changed = tracker
            .borrow_mut()
            .apply_batch(&[entering(SectionId::Team, 1.0)]);
        assert_eq!(changed, None);
        assert_eq!(tracker.borrow().active(), SectionId::Home);
    }

    #[test]
    fn failed_start_releases_everything() {
        let tracker = Rc::new(RefCell::new(SectionTracker::new()));
        let (mut host, log) = FakeHost::new();
        host.fail_on = Some(SectionId::Team);

        let result = Observation::start(tracker.clone(), host, &SectionId::ALL);
        assert_eq!(result.err(), Some(SiteError::MissingSection("team")));
        assert_eq!(log.borrow().disconnects, 1);
        assert!(!tracker.borrow().is_attached());
    }

    #[test]
    fn section_ids_round_trip_through_strings() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(SectionId::Team.anchor(), "#team");
    }
}
