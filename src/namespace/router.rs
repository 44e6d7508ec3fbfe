//! Dispatch of locations to providers

use super::{EntryInfo, EnumerateError, FileKind, Namespace};
use crate::location::Location;

/// Routes every call to the first mounted provider that supports the
/// location. Unsupported locations fail with `Operation not supported`.
#[derive(Default)]
pub struct Router {
    providers: Vec<Box<dyn Namespace>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider. Earlier providers take precedence.
    pub fn mount(mut self, provider: impl Namespace + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    fn provider_for(&self, location: &Location) -> Result<&dyn Namespace, EnumerateError> {
        self.providers
            .iter()
            .find(|p| p.supports(location))
            .map(|p| p.as_ref())
            .ok_or(EnumerateError::Unsupported)
    }
}

impl Namespace for Router {
    fn supports(&self, location: &Location) -> bool {
        self.providers.iter().any(|p| p.supports(location))
    }

    fn query_kind(&self, location: &Location) -> Result<FileKind, EnumerateError> {
        self.provider_for(location)?.query_kind(location)
    }

    fn enumerate(&self, location: &Location) -> Result<Vec<EntryInfo>, EnumerateError> {
        self.provider_for(location)?.enumerate(location)
    }

    fn canonical(&self, location: &Location) -> String {
        match self.provider_for(location) {
            Ok(provider) => provider.canonical(location),
            Err(_) => location.uri().to_string(),
        }
    }
}
