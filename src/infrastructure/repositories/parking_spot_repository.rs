//! ParkingSpot Repository Implementation
//!
//! PostgreSQL implementation of the ParkingSpotRepository trait. The car
//! association is stored as a `car_id` join column and materialized with a
//! LEFT JOIN on every read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Car, ParkingSpot, ParkingSpotRepository};
use crate::shared::error::AppError;

/// Joined row for reads: spot columns plus the attached car's columns,
/// all nullable on the car side because of the LEFT JOIN.
#[derive(Debug, sqlx::FromRow)]
struct SpotRow {
    id: Uuid,
    spot_number: String,
    registration_date: DateTime<Utc>,
    owner: String,
    apartment: String,
    block: String,
    car_id: Option<Uuid>,
    car_license_plate: Option<String>,
    car_brand: Option<String>,
    car_model: Option<String>,
    car_color: Option<String>,
}

impl SpotRow {
    /// Convert joined database row to domain ParkingSpot entity.
    fn into_spot(self) -> ParkingSpot {
        let car = match (
            self.car_id,
            self.car_license_plate,
            self.car_brand,
            self.car_model,
            self.car_color,
        ) {
            (Some(id), Some(license_plate), Some(car_brand), Some(car_model), Some(car_color)) => {
                Some(Car {
                    id,
                    license_plate,
                    car_brand,
                    car_model,
                    car_color,
                })
            }
            _ => None,
        };

        ParkingSpot {
            id: self.id,
            spot_number: self.spot_number,
            registration_date: self.registration_date,
            owner: self.owner,
            apartment: self.apartment,
            block: self.block,
            car,
        }
    }
}

/// Spot columns only, used by writes with RETURNING.
#[derive(Debug, sqlx::FromRow)]
struct SpotScalarRow {
    id: Uuid,
    spot_number: String,
    registration_date: DateTime<Utc>,
    owner: String,
    apartment: String,
    block: String,
}

const SELECT_JOINED: &str = r#"
    SELECT ps.id, ps.spot_number, ps.registration_date, ps.owner, ps.apartment, ps.block,
           c.id AS car_id, c.license_plate AS car_license_plate,
           c.car_brand, c.car_model, c.car_color
    FROM parking_spot ps
    LEFT JOIN car c ON c.id = ps.car_id
"#;

/// Map unique violations to conflicts, naming the rule that fired by
/// constraint. The constraints are the authority on uniqueness; the
/// service-level existence checks only exist for friendlier sequencing.
fn map_write_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            let message = match db_err.constraint() {
                Some("parking_spot_spot_number_key") => "Parking Spot is already in use!",
                Some("parking_spot_apartment_block_key") => {
                    "Parking Spot is already registered for this apartment and block!"
                }
                Some("parking_spot_car_id_key") => "Car is already assigned to a parking spot!",
                Some("car_license_plate_key") => "License plate is already in use!",
                _ => "Duplicate key",
            };
            AppError::Conflict(message.to_string())
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL parking spot repository implementation.
#[derive(Clone)]
pub struct PgParkingSpotRepository {
    pool: PgPool,
}

impl PgParkingSpotRepository {
    /// Create a new PgParkingSpotRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingSpotRepository for PgParkingSpotRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError> {
        let row = sqlx::query_as::<_, SpotRow>(&format!("{SELECT_JOINED} WHERE ps.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_spot()))
    }

    async fn find_by_spot_number(
        &self,
        spot_number: &str,
    ) -> Result<Option<ParkingSpot>, AppError> {
        let row =
            sqlx::query_as::<_, SpotRow>(&format!("{SELECT_JOINED} WHERE ps.spot_number = $1"))
                .bind(spot_number)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.into_spot()))
    }

    async fn find_by_apartment(&self, apartment: &str) -> Result<Option<ParkingSpot>, AppError> {
        let row = sqlx::query_as::<_, SpotRow>(&format!("{SELECT_JOINED} WHERE ps.apartment = $1"))
            .bind(apartment)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_spot()))
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Option<ParkingSpot>, AppError> {
        let row = sqlx::query_as::<_, SpotRow>(&format!(
            "{SELECT_JOINED} WHERE LOWER(ps.owner) = LOWER($1)"
        ))
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_spot()))
    }

    async fn find_all(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let rows = sqlx::query_as::<_, SpotRow>(&format!("{SELECT_JOINED} ORDER BY ps.spot_number"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_spot()).collect())
    }

    async fn create(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError> {
        let row = sqlx::query_as::<_, SpotScalarRow>(
            r#"
            INSERT INTO parking_spot (id, spot_number, registration_date, owner, apartment, block, car_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, spot_number, registration_date, owner, apartment, block
            "#,
        )
        .bind(spot.id)
        .bind(&spot.spot_number)
        .bind(spot.registration_date)
        .bind(&spot.owner)
        .bind(&spot.apartment)
        .bind(&spot.block)
        .bind(spot.car.as_ref().map(|c| c.id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(ParkingSpot {
            id: row.id,
            spot_number: row.spot_number,
            registration_date: row.registration_date,
            owner: row.owner,
            apartment: row.apartment,
            block: row.block,
            car: spot.car.clone(),
        })
    }

    async fn update(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SpotScalarRow>(
            r#"
            UPDATE parking_spot
            SET spot_number = $2,
                owner = $3,
                apartment = $4,
                block = $5
            WHERE id = $1
            RETURNING id, spot_number, registration_date, owner, apartment, block
            "#,
        )
        .bind(spot.id)
        .bind(&spot.spot_number)
        .bind(&spot.owner)
        .bind(&spot.apartment)
        .bind(&spot.block)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| AppError::NotFound(format!("Parking spot with id {} not found", spot.id)))?;

        if let Some(car) = &spot.car {
            sqlx::query(
                r#"
                UPDATE car
                SET license_plate = $2,
                    car_brand = $3,
                    car_model = $4,
                    car_color = $5
                WHERE id = $1
                "#,
            )
            .bind(car.id)
            .bind(&car.license_plate)
            .bind(&car.car_brand)
            .bind(&car.car_model)
            .bind(&car.car_color)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        }

        tx.commit().await?;

        Ok(ParkingSpot {
            id: row.id,
            spot_number: row.spot_number,
            registration_date: row.registration_date,
            owner: row.owner,
            apartment: row.apartment,
            block: row.block,
            car: spot.car.clone(),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // The spot row owns the join column, so the attached car has to be
        // removed explicitly after the spot releases it.
        let car_id = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT car_id FROM parking_spot WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Parking spot with id {} not found", id)))?;

        sqlx::query("DELETE FROM parking_spot WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if let Some(car_id) = car_id {
            sqlx::query("DELETE FROM car WHERE id = $1")
                .bind(car_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn spot_number_exists(&self, spot_number: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM parking_spot WHERE spot_number = $1)",
        )
        .bind(spot_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn apartment_and_block_exists(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM parking_spot WHERE apartment = $1 AND block = $2)",
        )
        .bind(apartment)
        .bind(block)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn car_is_assigned(&self, car_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM parking_spot WHERE car_id = $1)",
        )
        .bind(car_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
