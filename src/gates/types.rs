use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct QualityGate {
    pub id: u64,
    pub name: String,
}

impl QualityGate {
    #[allow(dead_code)]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct GateList {
    #[serde(rename = "qualitygates", default)]
    pub gates: Vec<QualityGate>,
    #[serde(rename = "default", default)]
    pub default_id: Option<u64>,
}

impl GateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_default(&self, gate: &QualityGate) -> bool {
        self.default_id == Some(gate.id)
    }

    /// Drops a deleted gate from the list, clearing the default marker if it pointed at it.
    pub fn remove(&mut self, id: u64) -> Option<QualityGate> {
        let index = self.gates.iter().position(|g| g.id == id)?;
        if self.default_id == Some(id) {
            self.default_id = None;
        }
        Some(self.gates.remove(index))
    }

    pub fn sorted(&self) -> Vec<&QualityGate> {
        let mut gates: Vec<_> = self.gates.iter().collect();
        gates.sort_by_key(|g| g.name.to_lowercase());
        gates
    }
}

/// One entry of the `errors` or `warnings` array of a failed API response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ValidationMessage {
    pub msg: String,
}

impl ValidationMessage {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ValidationMessage>,
    #[serde(default)]
    pub warnings: Vec<ValidationMessage>,
}

impl ErrorBody {
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .first()
            .or_else(|| self.warnings.first())
            .map(|m| m.msg.as_str())
    }
}
