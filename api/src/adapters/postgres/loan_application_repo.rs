//! PostgreSQL adapter for LoanApplicationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{
    ApplicationId, ApplicationStatus, CustomerId, LoanApplication, NewLoanApplication,
};
use crate::domain::ports::LoanApplicationRepository;
use crate::entity::loan_applications;
use crate::error::DomainError;

/// PostgreSQL implementation of LoanApplicationRepository
pub struct PostgresLoanApplicationRepository {
    db: DatabaseConnection,
}

impl PostgresLoanApplicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TryFrom<loan_applications::Model> for LoanApplication {
    type Error = DomainError;

    fn try_from(m: loan_applications::Model) -> Result<Self, Self::Error> {
        let status = m.status.parse::<ApplicationStatus>().map_err(|e| {
            DomainError::Database(format!("application {}: {}", m.application_id, e))
        })?;

        Ok(Self {
            application_id: ApplicationId(m.application_id),
            customer_id: CustomerId(m.customer_id),
            loan_product_id: m.loan_product_id,
            loan_amount: m.loan_amount,
            tenure: m.tenure,
            interest_rate: m.interest_rate,
            collateral_details: m.collateral_details,
            status,
            applied_at: m.applied_at.with_timezone(&Utc),
            decided_at: m.decided_at.map(|d| d.with_timezone(&Utc)),
        })
    }
}

fn convert_all(models: Vec<loan_applications::Model>) -> Result<Vec<LoanApplication>, DomainError> {
    models.into_iter().map(LoanApplication::try_from).collect()
}

#[async_trait]
impl LoanApplicationRepository for PostgresLoanApplicationRepository {
    async fn create(
        &self,
        application: &NewLoanApplication,
    ) -> Result<LoanApplication, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = loan_applications::ActiveModel {
            application_id: NotSet,
            customer_id: Set(application.customer_id.0),
            loan_product_id: Set(application.loan_product_id),
            loan_amount: Set(application.loan_amount),
            tenure: Set(application.tenure),
            interest_rate: Set(application.interest_rate),
            collateral_details: Set(application.collateral_details.clone()),
            status: Set(ApplicationStatus::Submitted.to_string()),
            applied_at: Set(now),
            decided_at: Set(None),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<LoanApplication>, DomainError> {
        let result = loan_applications::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(LoanApplication::try_from).transpose()
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        let results = loan_applications::Entity::find()
            .filter(loan_applications::Column::CustomerId.eq(customer_id.0))
            .order_by_asc(loan_applications::Column::ApplicationId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        convert_all(results)
    }

    async fn find_all(&self) -> Result<Vec<LoanApplication>, DomainError> {
        let results = loan_applications::Entity::find()
            .order_by_asc(loan_applications::Column::ApplicationId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        convert_all(results)
    }

    async fn transition(
        &self,
        id: ApplicationId,
        from: ApplicationStatus,
        to: ApplicationStatus,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        let result = loan_applications::Entity::update_many()
            .col_expr(loan_applications::Column::Status, Expr::value(to.to_string()))
            .col_expr(
                loan_applications::Column::DecidedAt,
                Expr::value(decided_at.map(|at| at.fixed_offset())),
            )
            .filter(loan_applications::Column::ApplicationId.eq(id.0))
            .filter(loan_applications::Column::Status.eq(from.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected > 0 {
            return Ok(true);
        }

        match self.find_by_id(id).await? {
            Some(_) => Ok(false),
            None => Err(DomainError::NotFound(format!(
                "Loan application {} not found",
                id
            ))),
        }
    }
}
