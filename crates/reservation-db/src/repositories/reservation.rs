//! PostgreSQL implementation of ReservationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reservation_core::entities::Reservation;
use reservation_core::traits::{RepoResult, ReservationRepository};
use reservation_core::value_objects::ReservationId;

use crate::mappers::ReservationInsert;
use crate::models::ReservationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for health checks and migrations
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    /// Replaying an insert whose acknowledgement was lost is a no-op, so a
    /// retry after a dropped connection does not trip the primary key.
    #[instrument(skip(self, reservation), fields(reservation_id = %reservation.id))]
    async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        let row = ReservationInsert::new(reservation);

        sqlx::query(
            r"
            INSERT INTO reservations (
                id, name, email, phone, date, time, guests, message,
                reservation_type, event_type, event_type_custom, attendees,
                event_description, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (id) DO NOTHING
            ",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.email)
        .bind(row.phone)
        .bind(row.date)
        .bind(row.time)
        .bind(row.guests)
        .bind(row.message)
        .bind(row.reservation_type)
        .bind(row.event_type)
        .bind(row.event_type_custom)
        .bind(row.attendees)
        .bind(row.event_description)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, name, email, phone, date, time, guests, message,
                   reservation_type, event_type, event_type_custom, attendees,
                   event_description, created_at
            FROM reservations
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
