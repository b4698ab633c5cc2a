//! Car Repository Implementation
//!
//! PostgreSQL implementation of the CarRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Car, CarRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `car` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: Uuid,
    license_plate: String,
    car_brand: String,
    car_model: String,
    car_color: String,
}

impl CarRow {
    /// Convert database row to domain Car entity.
    fn into_car(self) -> Car {
        Car {
            id: self.id,
            license_plate: self.license_plate,
            car_brand: self.car_brand,
            car_model: self.car_model,
            car_color: self.car_color,
        }
    }
}

/// PostgreSQL car repository implementation.
///
/// The license plate uniqueness rule is a database constraint
/// (`car_license_plate_key`); inserts and updates that trip it are
/// reported as conflicts, which closes the window between an existence
/// pre-check and the write.
#[derive(Clone)]
pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    /// Create a new PgCarRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, license_plate, car_brand, car_model, car_color
            FROM car
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_car()))
    }

    async fn find_by_license_plate(&self, license_plate: &str) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, license_plate, car_brand, car_model, car_color
            FROM car
            WHERE license_plate = $1
            "#,
        )
        .bind(license_plate)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_car()))
    }

    async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, license_plate, car_brand, car_model, car_color
            FROM car
            ORDER BY license_plate
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_car()).collect())
    }

    async fn create(&self, car: &Car) -> Result<Car, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            INSERT INTO car (id, license_plate, car_brand, car_model, car_color)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, license_plate, car_brand, car_model, car_color
            "#,
        )
        .bind(car.id)
        .bind(&car.license_plate)
        .bind(&car.car_brand)
        .bind(&car.car_model)
        .bind(&car.car_color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("License plate is already in use!".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_car())
    }

    async fn update(&self, car: &Car) -> Result<Car, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            UPDATE car
            SET license_plate = $2,
                car_brand = $3,
                car_model = $4,
                car_color = $5
            WHERE id = $1
            RETURNING id, license_plate, car_brand, car_model, car_color
            "#,
        )
        .bind(car.id)
        .bind(&car.license_plate)
        .bind(&car.car_brand)
        .bind(&car.car_model)
        .bind(&car.car_color)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("License plate is already in use!".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound(format!("Car with id {} not found", car.id)))?;

        Ok(row.into_car())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM car WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::Conflict("Car is assigned to a parking spot!".to_string())
                }
                _ => AppError::Database(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Car with id {} not found", id)));
        }

        Ok(())
    }

    async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM car WHERE license_plate = $1)",
        )
        .bind(license_plate)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
