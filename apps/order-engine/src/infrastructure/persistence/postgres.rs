//! PostgreSQL application repository.
//!
//! Uses `PostgreSQL` via `SQLx` with runtime-bound queries; the schema is
//! owned by the wider platform and managed outside this service.
//!
//! Expected tables:
//! - `applications(id, customer_id, plan_id, address_1, address_2, city,
//!   state, postcode, status, order_id, created_at, updated_at)`
//! - `plans(id, type, name, monthly_cost)` - `monthly_cost` in integer cents
//! - `customers(id, first_name, last_name)`

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::info;

use crate::domain::order_processing::aggregate::{Application, ReconstitutedApplicationParams};
use crate::domain::order_processing::errors::ApplicationError;
use crate::domain::order_processing::repository::{ApplicationPage, ApplicationRepository};
use crate::domain::order_processing::value_objects::{
    ApplicationStatus, Customer, Plan, PlanType, ServiceAddress,
};
use crate::domain::shared::{ApplicationId, CustomerId, Money, OrderId, PlanId};

/// Columns selected whenever a full application row is hydrated; plan and
/// customer data are joined eagerly so no follow-up reads are needed.
const APPLICATION_SELECT: &str = r"
    SELECT a.id, a.address_1, a.address_2, a.city, a.state, a.postcode,
           a.status, a.order_id, a.created_at,
           c.id AS customer_id, c.first_name, c.last_name,
           p.id AS plan_id, p.type AS plan_type, p.name AS plan_name, p.monthly_cost
    FROM applications a
    JOIN plans p ON p.id = a.plan_id
    JOIN customers c ON c.id = a.customer_id
";

/// PostgreSQL implementation of `ApplicationRepository`.
pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    /// Connect with the default pool size.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be connected.
    pub async fn new(database_url: &str) -> Result<Self, ApplicationError> {
        Self::with_max_connections(database_url, 5).await
    }

    /// Connect with a custom maximum pool size.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be connected.
    pub async fn with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, ApplicationError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| ApplicationError::Persistence {
                message: e.to_string(),
            })?;

        info!(
            max_connections = max_connections,
            "PostgreSQL connection pool initialized"
        );

        Ok(Self { pool })
    }

    /// Create a repository with an existing pool (for testing).
    #[must_use]
    pub const fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Hydrate an application aggregate from a joined row.
    fn row_to_application(row: &PgRow) -> Result<Application, ApplicationError> {
        let id: i64 = Self::get_field(row, "id")?;
        let status_raw: String = Self::get_field(row, "status")?;
        let status = ApplicationStatus::from_db_str(&status_raw).ok_or_else(|| {
            ApplicationError::Integrity {
                application_id: id,
                message: format!("unknown status value: {status_raw}"),
            }
        })?;

        let plan_type_raw: String = Self::get_field(row, "plan_type")?;
        let plan_type: PlanType =
            plan_type_raw
                .parse()
                .map_err(|_| ApplicationError::Integrity {
                    application_id: id,
                    message: format!("unknown plan type value: {plan_type_raw}"),
                })?;

        let address = ServiceAddress::new(
            Self::get_field::<String>(row, "address_1")?,
            row.try_get::<Option<String>, _>("address_2")
                .unwrap_or_default(),
            Self::get_field::<String>(row, "city")?,
            Self::get_field::<String>(row, "state")?,
            Self::get_field::<String>(row, "postcode")?,
        );

        let customer = Customer::new(
            CustomerId::new(Self::get_field(row, "customer_id")?),
            Self::get_field::<String>(row, "first_name")?,
            row.try_get::<Option<String>, _>("last_name")
                .unwrap_or_default(),
        );

        let plan = Plan::new(
            PlanId::new(Self::get_field(row, "plan_id")?),
            plan_type,
            Self::get_field::<String>(row, "plan_name")?,
            Money::from_cents(Self::get_field(row, "monthly_cost")?),
        );

        let order_id = row
            .try_get::<Option<String>, _>("order_id")
            .unwrap_or_default()
            .map(OrderId::new);

        let created_at: DateTime<Utc> = Self::get_field(row, "created_at")?;

        Application::reconstitute(ReconstitutedApplicationParams {
            id: ApplicationId::new(id),
            customer,
            address,
            plan,
            status,
            order_id,
            created_at,
        })
    }

    /// Read a required column, mapping failures to a persistence error.
    fn get_field<'r, T>(row: &'r PgRow, column: &str) -> Result<T, ApplicationError>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    {
        row.try_get::<T, _>(column)
            .map_err(|e| ApplicationError::Persistence {
                message: format!("{column}: {e}"),
            })
    }

    fn persistence_error(e: sqlx::Error) -> ApplicationError {
        ApplicationError::Persistence {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn find_ready_for_ordering(
        &self,
        plan_type: PlanType,
    ) -> Result<Vec<Application>, ApplicationError> {
        let query = format!("{APPLICATION_SELECT} WHERE p.type = $1 AND a.status = $2");

        let rows = sqlx::query(&query)
            .bind(plan_type.as_str())
            .bind(ApplicationStatus::AwaitingOrder.as_db_str())
            .fetch_all(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        rows.iter().map(Self::row_to_application).collect()
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, ApplicationError> {
        let query = format!("{APPLICATION_SELECT} WHERE a.id = $1");

        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    async fn mark_completed(
        &self,
        id: ApplicationId,
        order_id: &OrderId,
    ) -> Result<(), ApplicationError> {
        let result = sqlx::query(
            "UPDATE applications SET status = $2, order_id = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id.value())
        .bind(ApplicationStatus::Complete.as_db_str())
        .bind(order_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(Self::persistence_error)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::NotFound {
                application_id: id.value(),
            });
        }

        Ok(())
    }

    async fn mark_order_failed(&self, id: ApplicationId) -> Result<(), ApplicationError> {
        let result =
            sqlx::query("UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id.value())
                .bind(ApplicationStatus::OrderFailed.as_db_str())
                .execute(&self.pool)
                .await
                .map_err(Self::persistence_error)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::NotFound {
                application_id: id.value(),
            });
        }

        Ok(())
    }

    async fn list_page(
        &self,
        plan_type: Option<PlanType>,
        page: u32,
        per_page: u32,
    ) -> Result<ApplicationPage, ApplicationError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);
        let limit = i64::from(per_page);

        let (rows, total) = if let Some(plan_type) = plan_type {
            let query = format!(
                "{APPLICATION_SELECT} WHERE p.type = $1 \
                 ORDER BY a.created_at ASC, a.id ASC LIMIT $2 OFFSET $3"
            );
            let rows = sqlx::query(&query)
                .bind(plan_type.as_str())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(Self::persistence_error)?;

            let total: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM applications a JOIN plans p ON p.id = a.plan_id \
                 WHERE p.type = $1",
            )
            .bind(plan_type.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(Self::persistence_error)?;

            (rows, total)
        } else {
            let query = format!(
                "{APPLICATION_SELECT} ORDER BY a.created_at ASC, a.id ASC LIMIT $1 OFFSET $2"
            );
            let rows = sqlx::query(&query)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(Self::persistence_error)?;

            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
                .fetch_one(&self.pool)
                .await
                .map_err(Self::persistence_error)?;

            (rows, total)
        };

        let applications = rows
            .iter()
            .map(Self::row_to_application)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplicationPage {
            applications,
            total: total.unsigned_abs(),
        })
    }
}
