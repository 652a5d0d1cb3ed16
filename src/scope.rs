use std::fmt;

/// The account that owns the runner groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    Enterprise(String),
    Organization(String),
}

impl Scope {
    /// Path prefix shared by every actions endpoint under this account.
    pub fn path(&self) -> String {
        match self {
            Scope::Enterprise(id) => format!("/enterprises/{}", id),
            Scope::Organization(org) => format!("/orgs/{}", org),
        }
    }

    pub fn runner_groups_path(&self) -> String {
        format!("{}/actions/runner-groups", self.path())
    }

    pub fn runners_path(&self, runner_group_id: &str) -> String {
        format!("{}/{}/runners", self.runner_groups_path(), runner_group_id)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Enterprise(id) => write!(f, "enterprise {}", id),
            Scope::Organization(org) => write!(f, "organization {}", org),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let ent = Scope::Enterprise("myenterprise".to_string());
        let org = Scope::Organization("myorg".to_string());

        assert_eq!(
            ent.runner_groups_path(),
            "/enterprises/myenterprise/actions/runner-groups"
        );
        assert_eq!(org.runner_groups_path(), "/orgs/myorg/actions/runner-groups");
        assert_eq!(
            ent.runners_path("123"),
            "/enterprises/myenterprise/actions/runner-groups/123/runners"
        );
        assert_eq!(
            org.runners_path("123"),
            "/orgs/myorg/actions/runner-groups/123/runners"
        );
    }
}
