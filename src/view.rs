use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// An output region of the page. Each region is written by exactly one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    KeywordResults,
    NameResults,
    AddResult
}

impl Region {
    pub const ALL: [Region; 3] = [Region::KeywordResults, Region::NameResults, Region::AddResult];

    /// The element id of the region on the page.
    pub fn id(&self) -> &'static str {
        match self {
            Region::KeywordResults => "kw_results",
            Region::NameResults => "name_results",
            Region::AddResult => "add_result"
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|region| region.id() == id)
    }
}

/// Proof that an operation was started on a region; only the newest ticket may write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    region:     Region,
    serial:     u64
}

impl Ticket {
    pub fn region(&self) -> Region {
        self.region
    }
}

#[derive(Default)]
struct RegionState {
    latest:     u64,
    markup:     String
}

/// Current markup of every region together with the last ticket issued for it.
#[derive(Default)]
pub struct Screen {
    regions:    Mutex<HashMap<Region, RegionState>>
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket for `region` and shows `placeholder` there.
    pub fn begin(&self, region: Region, placeholder: &str) -> Ticket {
        let mut regions = self.lock();
        let state = regions.entry(region).or_default();
        state.latest += 1;
        state.markup = placeholder.to_string();

        Ticket { region, serial: state.latest }
    }

    /// Writes `markup` if `ticket` is still the latest for its region. Returns whether it did.
    pub fn apply(&self, ticket: Ticket, markup: String) -> bool {
        let mut regions = self.lock();
        let state = regions.entry(ticket.region).or_default();
        if state.latest != ticket.serial {
            debug!(region = ticket.region.id(), ticket = ticket.serial, latest = state.latest, "Discarding stale response");
            return false;
        }

        state.markup = markup;
        true
    }

    pub fn get(&self, region: Region) -> String {
        self.lock()
            .get(&region)
            .map(|state| state.markup.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Region, RegionState>> {
        // A panic while holding the lock cannot leave a region half written
        self.regions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
