use super::holder::Holder;
use serde::Deserialize;
use serde::Serialize;

/// Read-only snapshot of one notebook column, with cards spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub holder: Holder,
    pub name: String,
    pub capacity: usize,
    pub known: Vec<String>,
    pub ruled: Vec<String>,
    pub pending: Vec<Vec<String>>,
    pub solved: bool,
}

/// Snapshot of the whole notebook: players in turn order, then the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub entities: Vec<Summary>,
}

impl Report {
    pub fn envelope(&self) -> Option<&Summary> {
        self.entities.iter().find(|s| s.holder.is_envelope())
    }
}
