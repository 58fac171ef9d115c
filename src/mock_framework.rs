//! # Mock Framework
//!
//! Share targets for testing the order flow in isolation.
//!
//! Use [`RecordingShare`] to capture what the flow hands off, or
//! [`FailingShare`] to simulate a device with no app able to receive it.

use std::sync::{Arc, Mutex};

use crate::clients::{OrderShare, ShareRequest};
use crate::error::ShareError;

/// Records every request it receives. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingShare {
    requests: Arc<Mutex<Vec<ShareRequest>>>,
}

impl RecordingShare {
    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl OrderShare for RecordingShare {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// Always fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingShare(pub ShareError);

impl OrderShare for FailingShare {
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_share() {
        let share = RecordingShare::default();
        let observer = share.clone();
        let request = ShareRequest {
            recipient: "a@example.com".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        share.share(&request).unwrap();
        assert_eq!(observer.requests(), vec![request]);
    }
}
