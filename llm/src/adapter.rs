//! Provider adapter abstraction.

use crate::{CallError, Completion, ProviderConfig};

/// A capability for calling one AI-model provider.
///
/// One invocation performs exactly one network request to the provider's
/// completion endpoint. Failures come back as [`CallError`] values and
/// never propagate past this boundary; adapters share no mutable state.
pub trait Adapter: Clone + Send + Sync {
    /// Send a resolved prompt to the provider.
    fn call(
        &self,
        prompt: &str,
        config: &ProviderConfig,
    ) -> impl Future<Output = Result<Completion, CallError>> + Send;
}
