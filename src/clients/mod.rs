//! Targets the finished order summary can be handed to.

use tracing::{info, instrument};

use crate::error::ShareError;

/// A finished order packaged for delivery to the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Something that can receive a shared order, such as a mail app.
pub trait OrderShare {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Share target that writes the order to the log.
#[derive(Debug, Clone, Default)]
pub struct LogShare;

impl OrderShare for LogShare {
    #[instrument(skip(self, request), fields(recipient = %request.recipient, subject = %request.subject))]
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        info!(body = %request.body, "Order shared");
        Ok(())
    }
}
