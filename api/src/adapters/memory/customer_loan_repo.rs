//! In-memory adapter for CustomerLoanRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{CollateralId, CustomerId, CustomerLoan, LoanId, NewCustomerLoan};
use crate::domain::ports::CustomerLoanRepository;
use crate::error::DomainError;

#[derive(Default)]
struct LoanTable {
    rows: BTreeMap<LoanId, CustomerLoan>,
    last_id: i32,
}

#[derive(Default)]
pub struct InMemoryCustomerLoanRepository {
    table: RwLock<LoanTable>,
}

impl InMemoryCustomerLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a loan
    pub fn with_loan(mut self, loan: CustomerLoan) -> Self {
        let table = self.table.get_mut();
        table.last_id = table.last_id.max(loan.loan_id.0);
        table.rows.insert(loan.loan_id, loan);
        self
    }
}

#[async_trait]
impl CustomerLoanRepository for InMemoryCustomerLoanRepository {
    async fn find(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<Option<CustomerLoan>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .get(&loan_id)
            .filter(|loan| loan.customer_id == customer_id)
            .cloned())
    }

    async fn create(&self, loan: &NewCustomerLoan) -> Result<CustomerLoan, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let created = CustomerLoan {
            loan_id: LoanId(table.last_id),
            customer_id: loan.customer_id,
            loan_product_id: loan.loan_product_id,
            loan_principal: loan.loan_principal,
            tenure: loan.tenure,
            interest: loan.interest,
            emi: loan.emi,
            collateral_id: None,
        };
        table.rows.insert(created.loan_id, created.clone());

        Ok(created)
    }

    async fn attach_collateral(
        &self,
        loan_id: LoanId,
        collateral_id: CollateralId,
    ) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&loan_id) {
            Some(loan) => match loan.collateral_id {
                Some(existing) => Err(DomainError::Conflict(format!(
                    "Loan {} already holds collateral {}",
                    loan_id, existing
                ))),
                None => {
                    loan.collateral_id = Some(collateral_id);
                    Ok(())
                }
            },
            None => Err(DomainError::NotFound(format!("Loan {} not found", loan_id))),
        }
    }
}
