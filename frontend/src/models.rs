use serde::{Serialize, Deserialize};

/// A selectable set option, identified by its display name.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct SetRef {
    pub name: String,
}

/// Sets that belong to one competitive format era.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub struct FormatCluster {
    #[serde(default)]
    pub name: Option<String>,
    pub sets: Vec<SetRef>,
}

/// Every format cluster, oldest first. Injected by the page template and
/// never mutated after load.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub struct SetCatalog {
    pub clusters: Vec<FormatCluster>,
}

impl SetCatalog {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The newest `count` clusters, still in catalog order.
    pub fn newest(&self, count: usize) -> &[FormatCluster] {
        let start = self.clusters.len().saturating_sub(count);
        &self.clusters[start..]
    }
}

/// Which search panel is on screen.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum SearchMode {
    #[default]
    Basic,
    Advanced,
}

/// Bulk set-selection shortcuts offered next to the set multi-select.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormatPreset {
    NewFormat, // newest clusters only
    AllSets,
    Clear,
}

/// Value of one named form control at submit time.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FieldValue {
    Text(String),
    Checkbox { checked: bool, value: String },
    Select(Option<String>),
    MultiSelect(Vec<String>),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
}

impl FormField {
    pub fn text(name: &str, value: &str) -> Self {
        Self { name: name.to_string(), value: FieldValue::Text(value.to_string()) }
    }

    pub fn checkbox(name: &str, value: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::Checkbox { checked, value: value.to_string() },
        }
    }

    pub fn select(name: &str, value: Option<&str>) -> Self {
        Self { name: name.to_string(), value: FieldValue::Select(value.map(str::to_string)) }
    }

    pub fn multi_select(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::MultiSelect(values.iter().map(|v| v.to_string()).collect()),
        }
    }
}
