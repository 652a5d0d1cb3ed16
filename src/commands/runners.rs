use std::io::Write;

use anyhow::{Context, Result};

use crate::client::Transport;
use crate::error::Error;
use crate::format::{format_runner_row, format_runners_header, max_runner_name_len};
use crate::runner::{get_runners, sort_runners};
use crate::scope::Scope;

pub fn runners(
    client: &impl Transport,
    scope: &Scope,
    runner_group_id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut runners = match get_runners(client, scope, runner_group_id) {
        Err(e @ Error::InvalidRunnerGroupId(_)) => return Err(e.into()),
        r => r.with_context(|| {
            format!(
                "Failed to get runners of group {} for {}",
                runner_group_id, scope
            )
        })?,
    };

    sort_runners(&mut runners);
    let width = max_runner_name_len(&runners);

    writeln!(out, "{}", format_runners_header(width))?;
    for r in &runners {
        writeln!(out, "{}", format_runner_row(r, width))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;

    fn run(fake: &FakeTransport, id: &str) -> Result<String> {
        let mut out = Vec::new();
        runners(fake, &Scope::Organization("myorg".to_string()), id, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_runners_sorted_and_aligned() {
        colored::control::set_override(true);
        let fake = FakeTransport::new();
        fake.push_body(
            r#"{"total_count": 3, "runners": [
                {"id": 1, "name": "zz-offline", "status": "offline", "busy": false},
                {"id": 2, "name": "idle-box", "status": "online", "busy": false},
                {"id": 3, "name": "a-busy-runner", "status": "online", "busy": true}
            ]}"#,
        );

        let output = strip_ansi_escapes::strip_str(run(&fake, "7").unwrap());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Runners        Status",
                "a-busy-runner  ● Active",
                "idle-box       ● Idle",
                "zz-offline     ● Offline",
            ]
        );
    }

    #[test]
    fn test_no_runners_still_prints_header() {
        let fake = FakeTransport::new();
        fake.push_body(r#"{"total_count": 0, "runners": []}"#);

        let output = run(&fake, "7").unwrap();

        assert_eq!(output, "Runners  Status\n");
    }

    #[test]
    fn test_invalid_id_is_reported_verbatim() {
        let fake = FakeTransport::new();

        let err = run(&fake, "abc").unwrap_err();

        assert_eq!(err.to_string(), "invalid runner group ID: abc (must be a number)");
        assert_eq!(fake.call_count(), 0);
    }
}
