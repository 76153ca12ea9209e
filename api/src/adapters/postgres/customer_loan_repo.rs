//! PostgreSQL adapter for CustomerLoanRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::domain::entities::{CollateralId, CustomerId, CustomerLoan, LoanId, NewCustomerLoan};
use crate::domain::ports::CustomerLoanRepository;
use crate::entity::customer_loans;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerLoanRepository
pub struct PostgresCustomerLoanRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerLoanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<customer_loans::Model> for CustomerLoan {
    fn from(m: customer_loans::Model) -> Self {
        Self {
            loan_id: LoanId(m.loan_id),
            customer_id: CustomerId(m.customer_id),
            loan_product_id: m.loan_product_id,
            loan_principal: m.loan_principal,
            tenure: m.tenure,
            interest: m.interest,
            emi: m.emi,
            collateral_id: m.collateral_id.map(CollateralId),
        }
    }
}

#[async_trait]
impl CustomerLoanRepository for PostgresCustomerLoanRepository {
    async fn find(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<Option<CustomerLoan>, DomainError> {
        let result = customer_loans::Entity::find_by_id(loan_id.0)
            .filter(customer_loans::Column::CustomerId.eq(customer_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, loan: &NewCustomerLoan) -> Result<CustomerLoan, DomainError> {
        let model = customer_loans::ActiveModel {
            loan_id: NotSet,
            customer_id: Set(loan.customer_id.0),
            loan_product_id: Set(loan.loan_product_id),
            loan_principal: Set(loan.loan_principal),
            tenure: Set(loan.tenure),
            interest: Set(loan.interest),
            emi: Set(loan.emi),
            collateral_id: Set(None),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn attach_collateral(
        &self,
        loan_id: LoanId,
        collateral_id: CollateralId,
    ) -> Result<(), DomainError> {
        let result = customer_loans::Entity::update_many()
            .col_expr(
                customer_loans::Column::CollateralId,
                Expr::value(collateral_id.0),
            )
            .filter(customer_loans::Column::LoanId.eq(loan_id.0))
            .filter(customer_loans::Column::CollateralId.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected > 0 {
            return Ok(());
        }

        let existing = customer_loans::Entity::find_by_id(loan_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match existing {
            Some(_) => Err(DomainError::Conflict(format!(
                "Loan {} already holds collateral",
                loan_id
            ))),
            None => Err(DomainError::NotFound(format!("Loan {} not found", loan_id))),
        }
    }
}
