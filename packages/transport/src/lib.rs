//! Transports for talking to an instance-metadata endpoint.
//!
//! The [`Fetch`] trait is the single seam the crawler sees: one GET, raw
//! body text back. Two implementations are provided:
//!
//! - [`CurlFetcher`] shells out to `curl` through a [`CommandRunner`],
//!   which is how an enumeration run usually reaches the endpoint from a
//!   foothold shell on the target host.
//! - [`HttpFetcher`] speaks HTTP directly from this process via a blocking
//!   `reqwest` client.
//!
//! Neither transport retries or interprets the response; an empty or odd
//! body is the caller's problem to tolerate.

mod curl;
mod error;
mod fetch;
mod http;
mod runner;

pub use curl::CurlFetcher;
pub use error::Error;
pub use fetch::Fetch;
pub use http::HttpFetcher;
pub use runner::{CommandRunner, ShellRunner};
