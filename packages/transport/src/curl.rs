//! Transport that shells out to `curl` on the target host.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::runner::CommandRunner;

lazy_static! {
    static ref CURL_BANNER: Regex = Regex::new(r"^curl \d").unwrap();
}

/// Fetches metadata by running `curl <url>` through a [`CommandRunner`].
///
/// The preflight confirms `curl --version` answers with the usual banner;
/// after that each fetch is one `curl` invocation whose stdout is the
/// response body. A request that fails on the wire produces whatever curl
/// printed, usually an empty string.
pub struct CurlFetcher<R> {
    runner: R,
}

impl<R: CommandRunner> CurlFetcher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> Fetch for CurlFetcher<R> {
    fn preflight(&mut self) -> Result<(), Error> {
        let banner = self.runner.cmd_exec("curl --version")?;
        if !CURL_BANNER.is_match(&banner) {
            return Err(Error::ToolMissing {
                message: "curl is not installed".to_string(),
            });
        }
        Ok(())
    }

    fn fetch(&mut self, url: &Url) -> Result<String, Error> {
        log::debug!("Fetching {}...", url);
        self.runner.cmd_exec(&format!("curl {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runner that answers from a script and records what it was asked.
    struct ScriptedRunner {
        version_banner: String,
        body: String,
        commands: Vec<String>,
    }

    impl ScriptedRunner {
        fn new(version_banner: &str, body: &str) -> Self {
            Self {
                version_banner: version_banner.to_string(),
                body: body.to_string(),
                commands: Vec::new(),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn cmd_exec(&mut self, command: &str) -> Result<String, Error> {
            self.commands.push(command.to_string());
            if command == "curl --version" {
                Ok(self.version_banner.clone())
            } else {
                Ok(self.body.clone())
            }
        }
    }

    #[test]
    fn preflight_accepts_curl_banner() {
        let runner = ScriptedRunner::new(
            "curl 8.5.0 (x86_64-pc-linux-gnu) libcurl/8.5.0 OpenSSL/3.0.13\n",
            "",
        );
        let mut fetcher = CurlFetcher::new(runner);
        assert!(fetcher.preflight().is_ok());
    }

    #[test]
    fn preflight_rejects_missing_curl() {
        let runner = ScriptedRunner::new("sh: curl: command not found\n", "");
        let mut fetcher = CurlFetcher::new(runner);
        match fetcher.preflight() {
            Err(Error::ToolMissing { message }) => assert!(message.contains("curl")),
            other => panic!("Expected ToolMissing, got {:?}", other.err()),
        }
    }

    #[test]
    fn preflight_rejects_empty_output() {
        let runner = ScriptedRunner::new("", "");
        let mut fetcher = CurlFetcher::new(runner);
        assert!(matches!(
            fetcher.preflight(),
            Err(Error::ToolMissing { .. })
        ));
    }

    #[test]
    fn fetch_runs_curl_against_the_url() {
        let runner = ScriptedRunner::new("curl 8.5.0\n", "i-0123456789abcdef0");
        let mut fetcher = CurlFetcher::new(runner);
        let url = Url::parse("http://169.254.169.254/latest/meta-data/instance-id").unwrap();

        let body = fetcher.fetch(&url).unwrap();
        assert_eq!(body, "i-0123456789abcdef0");
        assert_eq!(
            fetcher.runner.commands,
            vec!["curl http://169.254.169.254/latest/meta-data/instance-id".to_string()]
        );
    }
}
