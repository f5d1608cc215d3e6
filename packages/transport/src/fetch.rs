//! The fetch seam between the crawler and whatever moves the bytes.

use url::Url;

use crate::error::Error;

/// A single textual GET against a URI.
///
/// Implementations perform exactly one outbound request per call and
/// return the body text unmodified. No retries, no status interpretation;
/// callers decide what an empty or malformed body means.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Fetch>`.
pub trait Fetch {
    /// One-time availability check for the underlying mechanism.
    ///
    /// Runs once, before any metadata fetch. A failure here means the
    /// transport cannot be used at all; per-request failures are reported
    /// by [`Fetch::fetch`] instead.
    fn preflight(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// Fetch the body text at `url`.
    fn fetch(&mut self, url: &Url) -> Result<String, Error>;
}

// Blanket implementations for references and boxes

impl<T: Fetch + ?Sized> Fetch for &mut T {
    fn preflight(&mut self) -> Result<(), Error> {
        (*self).preflight()
    }

    fn fetch(&mut self, url: &Url) -> Result<String, Error> {
        (*self).fetch(url)
    }
}

impl<T: Fetch + ?Sized> Fetch for Box<T> {
    fn preflight(&mut self) -> Result<(), Error> {
        self.as_mut().preflight()
    }

    fn fetch(&mut self, url: &Url) -> Result<String, Error> {
        self.as_mut().fetch(url)
    }
}
