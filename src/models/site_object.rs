use serde::{Deserialize, Serialize};

/// One construction site of the object catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteObject {
    /// Catalogue code ("ID (код) номер объекта"); may be blank.
    pub object_id: String,
    pub address: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub department: String,
}
