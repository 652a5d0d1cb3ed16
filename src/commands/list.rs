use std::io::Write;

use anyhow::{Context, Result};

use crate::client::Transport;
use crate::format::format_runner_groups;
use crate::runner_group::list_runner_groups;
use crate::scope::Scope;

pub fn list(client: &impl Transport, scope: &Scope, out: &mut impl Write) -> Result<()> {
    let groups = list_runner_groups(client, scope)
        .with_context(|| format!("Failed to list runner groups for {}", scope))?;

    writeln!(out, "{}", format_runner_groups(&groups))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;

    fn run(fake: &FakeTransport, scope: &Scope) -> Result<String> {
        let mut out = Vec::new();
        list(fake, scope, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_prints_table() {
        colored::control::set_override(true);
        let fake = FakeTransport::new();
        fake.push_body(
            r#"{"total_count": 2, "runner_groups": [
                {"id": 1, "name": "Default", "visibility": "all", "default": true},
                {"id": 4, "name": "gpu", "visibility": "private", "default": false}
            ]}"#,
        );

        let output = run(&fake, &Scope::Enterprise("myenterprise".to_string())).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID\tName"));
        assert!(lines[1].starts_with("1\tDefault  "));
        assert!(lines[2].starts_with("4\tgpu      "));
    }

    #[test]
    fn test_list_with_no_groups_prints_blank_line() {
        let fake = FakeTransport::new();
        fake.push_body(r#"{"total_count": 0, "runner_groups": []}"#);

        let output = run(&fake, &Scope::Organization("myorg".to_string())).unwrap();

        assert_eq!(output, "\n");
    }

    #[test]
    fn test_list_error_names_scope() {
        let fake = FakeTransport::new();
        fake.push_failure("gh: Not Found (HTTP 404)");

        let err = run(&fake, &Scope::Organization("myorg".to_string())).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to list runner groups for organization myorg"
        );
        assert!(format!("{:#}", err).contains("HTTP 404"));
    }
}
