use std::collections::BTreeMap;
use std::process::Command;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::{Error, Result};

pub const ACCEPT: &str = "application/vnd.github+json";
pub const API_VERSION: &str = "2022-11-28";

/// Options handed to every `gh api` invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub headers: BTreeMap<String, String>,
    pub paginate: bool,
    pub hostname: String,
}

impl Default for Options {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), ACCEPT.to_string());
        headers.insert("X-GitHub-Api-Version".to_string(), API_VERSION.to_string());
        Options {
            headers,
            // Pages are walked by hand, see pagination.rs
            paginate: false,
            hostname: String::new(),
        }
    }
}

/// Fetches the raw body of one GET against the configured host.
pub trait Transport {
    fn call_api(&self, endpoint: &str) -> Result<Vec<u8>>;
}

/// Runs requests through the `gh` CLI, which owns authentication.
#[derive(Clone, Debug, Default)]
pub struct GhClient {
    options: Options,
}

impl GhClient {
    pub fn new() -> Self {
        GhClient::default()
    }

    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.options.hostname = hostname.to_string();
        self
    }

    fn args(&self, endpoint: &str) -> Vec<String> {
        let mut args = vec!["api".to_string()];
        for (key, value) in &self.options.headers {
            args.push("-H".to_string());
            args.push(format!("{}: {}", key, value));
        }
        if self.options.paginate {
            args.push("--paginate".to_string());
        }
        if !self.options.hostname.is_empty() {
            args.push("--hostname".to_string());
            args.push(self.options.hostname.clone());
        }
        args.push(endpoint.to_string());
        args
    }
}

impl Transport for GhClient {
    fn call_api(&self, endpoint: &str) -> Result<Vec<u8>> {
        let args = self.args(endpoint);
        trace!(?args, "running gh");

        let output = Command::new("gh")
            .args(&args)
            .output()
            .map_err(|source| Error::Exec {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                endpoint: endpoint.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

pub fn fetch_json<T, C>(client: &C, endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
    C: Transport + ?Sized,
{
    let raw = client.call_api(endpoint)?;
    serde_json::from_slice(&raw).map_err(|source| Error::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::Transport;
    use crate::error::{Error, Result};

    /// Replays queued bodies in order and records every endpoint asked for.
    #[derive(Default)]
    pub struct FakeTransport {
        responses: RefCell<VecDeque<Result<Vec<u8>>>>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            FakeTransport::default()
        }

        pub fn push_body(&self, body: impl Into<String>) {
            self.responses
                .borrow_mut()
                .push_back(Ok(body.into().into_bytes()));
        }

        pub fn push_failure(&self, message: &str) {
            self.responses.borrow_mut().push_back(Err(Error::Exec {
                endpoint: "fake".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, message.to_string()),
            }));
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for FakeTransport {
        fn call_api(&self, endpoint: &str) -> Result<Vec<u8>> {
            self.calls.borrow_mut().push(endpoint.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected request for {}", endpoint))
        }
    }
}
