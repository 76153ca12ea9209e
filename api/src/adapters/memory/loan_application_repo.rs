//! In-memory adapter for LoanApplicationRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{
    ApplicationId, ApplicationStatus, CustomerId, LoanApplication, NewLoanApplication,
};
use crate::domain::ports::LoanApplicationRepository;
use crate::error::DomainError;

#[derive(Default)]
struct ApplicationTable {
    rows: BTreeMap<ApplicationId, LoanApplication>,
    last_id: i32,
}

#[derive(Default)]
pub struct InMemoryLoanApplicationRepository {
    table: RwLock<ApplicationTable>,
}

impl InMemoryLoanApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an application
    pub fn with_application(mut self, application: LoanApplication) -> Self {
        let table = self.table.get_mut();
        table.last_id = table.last_id.max(application.application_id.0);
        table.rows.insert(application.application_id, application);
        self
    }
}

#[async_trait]
impl LoanApplicationRepository for InMemoryLoanApplicationRepository {
    async fn create(
        &self,
        application: &NewLoanApplication,
    ) -> Result<LoanApplication, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let created = LoanApplication {
            application_id: ApplicationId(table.last_id),
            customer_id: application.customer_id,
            loan_product_id: application.loan_product_id,
            loan_amount: application.loan_amount,
            tenure: application.tenure,
            interest_rate: application.interest_rate,
            collateral_details: application.collateral_details.clone(),
            status: ApplicationStatus::Submitted,
            applied_at: Utc::now(),
            decided_at: None,
        };
        table.rows.insert(created.application_id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<LoanApplication>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<LoanApplication>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn transition(
        &self,
        id: ApplicationId,
        from: ApplicationStatus,
        to: ApplicationStatus,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(application) if application.status == from => {
                application.status = to;
                application.decided_at = decided_at;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(DomainError::NotFound(format!(
                "Loan application {} not found",
                id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_application, test_new_application};

    #[tokio::test]
    async fn listings_are_ordered_by_id() {
        let repo = InMemoryLoanApplicationRepository::new()
            .with_application(test_application(ApplicationId(7), CustomerId(1)))
            .with_application(test_application(ApplicationId(2), CustomerId(1)))
            .with_application(test_application(ApplicationId(4), CustomerId(2)));

        let all: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.application_id.0)
            .collect();
        let customer: Vec<_> = repo
            .find_by_customer(CustomerId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.application_id.0)
            .collect();

        assert_eq!(all, vec![2, 4, 7]);
        assert_eq!(customer, vec![2, 7]);
    }

    #[tokio::test]
    async fn create_starts_submitted() {
        let repo = InMemoryLoanApplicationRepository::new()
            .with_application(test_application(ApplicationId(3), CustomerId(1)));

        let created = repo
            .create(&test_new_application(CustomerId(5)))
            .await
            .unwrap();

        assert_eq!(created.application_id, ApplicationId(4));
        assert_eq!(created.status, ApplicationStatus::Submitted);
        assert!(created.decided_at.is_none());
    }

    #[tokio::test]
    async fn transition_of_missing_application_fails() {
        let repo = InMemoryLoanApplicationRepository::new();

        let result = repo
            .transition(
                ApplicationId(1),
                ApplicationStatus::Submitted,
                ApplicationStatus::Approved,
                Some(Utc::now()),
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn transition_only_applies_from_expected_status() {
        let repo = InMemoryLoanApplicationRepository::new()
            .with_application(test_application(ApplicationId(1), CustomerId(1)));

        let approved = repo
            .transition(
                ApplicationId(1),
                ApplicationStatus::Submitted,
                ApplicationStatus::Approved,
                Some(Utc::now()),
            )
            .await
            .unwrap();
        let rejected = repo
            .transition(
                ApplicationId(1),
                ApplicationStatus::Submitted,
                ApplicationStatus::Rejected,
                Some(Utc::now()),
            )
            .await
            .unwrap();

        assert!(approved);
        assert!(!rejected);
        let stored = repo.find_by_id(ApplicationId(1)).await.unwrap().unwrap();
        assert_eq!(stored.status, ApplicationStatus::Approved);
    }
}
