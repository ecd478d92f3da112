use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiSite {
    Yes,
    #[default]
    No,
}

/// Session-wide infrastructure choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InfrastructureDetails {
    pub is_multi_site: MultiSite,
    pub needs_walkie_talkie_interface: bool,
}

impl InfrastructureDetails {
    #[must_use]
    pub fn is_multi_site(&self) -> bool {
        self.is_multi_site == MultiSite::Yes
    }
}
