//! YAML session files: the CLI's stand-in for the interactive wizard.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use commsbom_core::{
    AggregationCache, Catalog, InfrastructureDetails, LocationDraft, ProductId, ProjectDetails,
    Session, SessionError,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SessionFile {
    pub project: ProjectDetails,
    pub infrastructure: InfrastructureDetails,
    pub locations: Vec<LocationDraft>,
    /// Absolute quantities applied after aggregation.
    pub overrides: BTreeMap<ProductId, u32>,
}

impl SessionFile {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid session file {}", path.display()))
    }

    pub(crate) fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Replays the file through the same steps the wizard takes: project,
    /// infrastructure, each location, then any hand edits.
    pub(crate) fn into_session(
        self,
        catalog: &Catalog,
        cache: &mut AggregationCache,
    ) -> Result<Session, SessionError> {
        let mut session = Session::new(self.project);
        session.set_infrastructure(self.infrastructure);
        for draft in self.locations {
            session.add_location(draft)?;
        }
        for (id, quantity) in self.overrides {
            session.set_quantity(catalog, cache, id, quantity);
        }
        Ok(session)
    }
}
