use serde_derive::Deserialize;
use tracing::info;

use crate::client::Transport;
use crate::error::Result;
use crate::pagination::{fetch_all_pages, Page};
use crate::scope::Scope;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RunnerGroup {
    pub id: i64,
    pub name: String,
    pub visibility: String,
    pub default: bool,
    #[serde(default)]
    pub selected_repositories_url: Option<String>,
    #[serde(default)]
    pub runners_url: Option<String>,
    #[serde(default)]
    pub inherited: bool,
    #[serde(default)]
    pub allows_public_repositories: bool,
    #[serde(default)]
    pub restricted_to_workflows: bool,
    #[serde(default)]
    pub selected_workflows: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct RunnerGroupsResponse {
    pub total_count: Option<usize>,
    pub runner_groups: Vec<RunnerGroup>,
}

impl Page for RunnerGroupsResponse {
    type Item = RunnerGroup;

    fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    fn into_items(self) -> Vec<RunnerGroup> {
        self.runner_groups
    }
}

/// Fetches every runner group of an enterprise or organization, in API order.
pub fn list_runner_groups<C>(client: &C, scope: &Scope) -> Result<Vec<RunnerGroup>>
where
    C: Transport + ?Sized,
{
    let groups = fetch_all_pages::<RunnerGroupsResponse, C>(client, &scope.runner_groups_path())?;
    info!(count = groups.len(), %scope, "fetched runner groups");
    Ok(groups)
}

#[cfg(test)]
pub(crate) fn group(id: i64, name: &str, visibility: &str, default: bool) -> RunnerGroup {
    RunnerGroup {
        id,
        name: name.to_string(),
        visibility: visibility.to_string(),
        default,
        selected_repositories_url: None,
        runners_url: None,
        inherited: false,
        allows_public_repositories: false,
        restricted_to_workflows: false,
        selected_workflows: Vec::new(),
    }
}
