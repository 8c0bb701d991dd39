use serde::{Deserialize, Serialize};

/// One entry of the staff roster ("штатное расписание").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub tbn: String,
    pub fio: String,
    pub position: String,
    pub department: String,
    pub fired: bool,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        !self.fired
    }

    /// Personnel number as stored in a timesheet row (`None` when blank).
    pub fn tbn_opt(&self) -> Option<String> {
        let t = self.tbn.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    }
}
