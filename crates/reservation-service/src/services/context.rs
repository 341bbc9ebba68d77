//! Service context - dependency container for services
//!
//! Holds the ports and policies the reservation pipeline needs.

use std::sync::Arc;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use reservation_core::traits::{ReservationNotifier, ReservationRepository};

use crate::retry::RetryPolicy;

use super::error::{ServiceError, ServiceResult};

/// Default time a submission may take before the caller gets an answer
pub const DEFAULT_SUBMIT_DEADLINE: Duration = Duration::from_secs(25);

/// Service context containing all dependencies
///
/// Cheap to clone; everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    reservation_repo: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn ReservationNotifier>,
    retry_policy: RetryPolicy,
    utc_offset: FixedOffset,
    submit_deadline: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reservation_repo: Arc<dyn ReservationRepository>,
        notifier: Arc<dyn ReservationNotifier>,
        retry_policy: RetryPolicy,
        utc_offset: FixedOffset,
        submit_deadline: Duration,
    ) -> Self {
        Self {
            reservation_repo,
            notifier,
            retry_policy,
            utc_offset,
            submit_deadline,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the reservation repository
    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    /// Get the staff notifier
    pub fn notifier(&self) -> &dyn ReservationNotifier {
        self.notifier.as_ref()
    }

    /// Retry policy shared by persistence and notification
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Current calendar date at the restaurant
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }

    /// Budget for one submission. Notification gets what persistence left.
    pub fn submit_deadline(&self) -> Duration {
        self.submit_deadline
    }
}

/// Builder for ServiceContext
pub struct ServiceContextBuilder {
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    notifier: Option<Arc<dyn ReservationNotifier>>,
    retry_policy: RetryPolicy,
    utc_offset: FixedOffset,
    submit_deadline: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reservation_repo: None,
            notifier: None,
            retry_policy: RetryPolicy::default(),
            utc_offset: Utc.fix(),
            submit_deadline: DEFAULT_SUBMIT_DEADLINE,
        }
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn ReservationNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    pub fn submit_deadline(mut self, deadline: Duration) -> Self {
        self.submit_deadline = deadline;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.reservation_repo
                .ok_or_else(|| ServiceError::validation("reservation_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.retry_policy,
            self.utc_offset,
            self.submit_deadline,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
