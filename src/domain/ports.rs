use crate::domain::error::ContactError;
use crate::domain::model::{FormState, RawResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Sends the contact form to the backend.
///
/// Implementations report only transport-level failures; status codes and
/// body parsing are left to the caller.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        form: &FormState,
    ) -> std::result::Result<RawResponse, ContactError>;
}
