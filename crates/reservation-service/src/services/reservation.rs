//! Reservation service
//!
//! Validates a submission, stores it, then tells the staff about it.

use std::time::Duration;

use tokio::time::{timeout, Instant};
use tracing::{error, info, instrument};

use reservation_common::Locale;
use reservation_core::{DomainError, Reservation};

use crate::dto::{CreateReservationRequest, ReservationCreatedResponse};
use crate::retry::retry_with_predicate;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a reservation.
    ///
    /// Validation errors short-circuit before any side effect. A persistence
    /// failure (after retries) is returned and no email is attempted. A
    /// notification failure is logged and reported through `email_sent`, as
    /// is a notification still running when the submit deadline passes.
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: CreateReservationRequest,
        locale: Locale,
    ) -> ServiceResult<ReservationCreatedResponse> {
        let started = Instant::now();
        let data = request.into_draft().validate(self.ctx.today())?;
        let reservation = Reservation::new(data);

        self.persist(&reservation).await?;

        info!(
            reservation_id = %reservation.id,
            reservation_type = %reservation.reservation_type,
            date = %reservation.date,
            guests = reservation.guests.get(),
            "Reservation stored"
        );

        let budget = self.ctx.submit_deadline().saturating_sub(started.elapsed());
        let email_sent = self.notify(&reservation, budget).await;

        Ok(ReservationCreatedResponse::new(&reservation, locale, email_sent))
    }

    async fn persist(&self, reservation: &Reservation) -> ServiceResult<()> {
        let repo = self.ctx.reservation_repo();

        retry_with_predicate(
            self.ctx.retry_policy(),
            "persist_reservation",
            || repo.create(reservation),
            DomainError::is_transient,
        )
        .await
        .map_err(|e| {
            error!(reservation_id = %reservation.id, error = %e, "Failed to store reservation");
            e.into()
        })
    }

    /// Best effort; returns whether an email actually went out
    async fn notify(&self, reservation: &Reservation, budget: Duration) -> bool {
        let notifier = self.ctx.notifier();

        let attempts = retry_with_predicate(
            self.ctx.retry_policy(),
            "notify_staff",
            || notifier.notify(reservation),
            DomainError::is_transient,
        );

        let Ok(result) = timeout(budget, attempts).await else {
            error!(
                reservation_id = %reservation.id,
                notifier = notifier.kind(),
                budget_ms = budget.as_millis() as u64,
                "Reservation saved but staff notification timed out"
            );
            return false;
        };

        match result {
            Ok(receipt) => {
                if receipt.delivered {
                    info!(
                        reservation_id = %reservation.id,
                        notifier = notifier.kind(),
                        message_id = receipt.message_id.as_deref().unwrap_or("-"),
                        "Staff notified"
                    );
                }
                receipt.delivered
            }
            Err(e) => {
                error!(
                    reservation_id = %reservation.id,
                    notifier = notifier.kind(),
                    error = %e,
                    "Reservation saved but staff notification failed"
                );
                false
            }
        }
    }
}
