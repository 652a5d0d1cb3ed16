use std::cmp::Ordering;

use serde_derive::Deserialize;
use tracing::info;

use crate::client::Transport;
use crate::error::{Error, Result};
use crate::pagination::{fetch_all_pages, Page};
use crate::scope::Scope;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Runner {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub busy: bool,
}

#[derive(Deserialize, Debug)]
pub struct RunnersResponse {
    pub total_count: Option<usize>,
    pub runners: Vec<Runner>,
}

impl Page for RunnersResponse {
    type Item = Runner;

    fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    fn into_items(self) -> Vec<Runner> {
        self.runners
    }
}

/// Operational state of a runner. Variants are declared in sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusClass {
    Active,
    Idle,
    Offline,
}

impl StatusClass {
    pub fn priority(self) -> u8 {
        self as u8
    }
}

impl Runner {
    pub fn status_class(&self) -> StatusClass {
        match (self.status.as_str(), self.busy) {
            ("online", true) => StatusClass::Active,
            ("online", false) => StatusClass::Idle,
            _ => StatusClass::Offline,
        }
    }
}

fn by_status_then_name(a: &Runner, b: &Runner) -> Ordering {
    a.status_class()
        .priority()
        .cmp(&b.status_class().priority())
        .then_with(|| a.name.cmp(&b.name))
}

/// Orders runners Active, Idle, Offline, then by name.
pub fn sort_runners(runners: &mut [Runner]) {
    runners.sort_by(by_status_then_name);
}

/// Fetches every runner in a runner group.
///
/// The group id is checked to be an integer before anything goes over the wire.
pub fn get_runners<C>(client: &C, scope: &Scope, runner_group_id: &str) -> Result<Vec<Runner>>
where
    C: Transport + ?Sized,
{
    if runner_group_id.parse::<i64>().is_err() {
        return Err(Error::InvalidRunnerGroupId(runner_group_id.to_string()));
    }

    let runners =
        fetch_all_pages::<RunnersResponse, C>(client, &scope.runners_path(runner_group_id))?;
    info!(count = runners.len(), %scope, runner_group_id, "fetched runners");
    Ok(runners)
}

#[cfg(test)]
pub(crate) fn runner(name: &str, status: &str, busy: bool) -> Runner {
    Runner {
        id: 0,
        name: name.to_string(),
        status: status.to_string(),
        busy,
    }
}
