//! Loan management service
//!
//! Handles loan lookups, collateral pledges and the application lifecycle
//! (submitted, then approved or rejected once).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{
    monthly_installment, ApplicationId, ApplicationStatus, CashDeposit, CollateralReceipt,
    CustomerId, CustomerLoan, LoanApplication, LoanId, NewCustomerLoan, NewLoanApplication,
    RealEstate,
};
use crate::domain::ports::{
    CollateralClient, CustomerLoanRepository, LoanApplicationRepository, LoanManagement,
};
use crate::error::{AppError, DomainError};

/// Service for managing loans, collateral and loan applications
pub struct LoanManagementService<CL, LA, CC>
where
    CL: CustomerLoanRepository,
    LA: LoanApplicationRepository,
    CC: CollateralClient + ?Sized,
{
    loans: Arc<CL>,
    applications: Arc<LA>,
    collateral: Arc<CC>,
}

impl<CL, LA, CC> LoanManagementService<CL, LA, CC>
where
    CL: CustomerLoanRepository,
    LA: LoanApplicationRepository,
    CC: CollateralClient + ?Sized,
{
    pub fn new(loans: Arc<CL>, applications: Arc<LA>, collateral: Arc<CC>) -> Self {
        Self {
            loans,
            applications,
            collateral,
        }
    }

    /// Loan that collateral is about to be pledged against
    ///
    /// The loan must exist for the customer and must not hold collateral yet.
    async fn pledgeable_loan(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<CustomerLoan, AppError> {
        let loan = self
            .loans
            .find(loan_id, customer_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Loan {} not found for customer {}",
                    loan_id, customer_id
                ))
            })?;

        if let Some(existing) = loan.collateral_id {
            return Err(DomainError::Conflict(format!(
                "Loan {} already holds collateral {}",
                loan_id, existing
            ))
            .into());
        }

        Ok(loan)
    }

    /// Attach the collateral the collateral service just stored
    ///
    /// A concurrent pledge may have won the loan since `pledgeable_loan`; the
    /// repository refuses the second link and the stored record is reported.
    async fn link_collateral(
        &self,
        loan_id: LoanId,
        receipt: CollateralReceipt,
    ) -> Result<String, AppError> {
        if let Err(e) = self
            .loans
            .attach_collateral(loan_id, receipt.collateral_id)
            .await
        {
            tracing::warn!(
                loan_id = %loan_id,
                collateral_id = %receipt.collateral_id,
                error = %e,
                "Collateral stored but not linked to loan"
            );
            return Err(e.into());
        }

        tracing::info!(
            loan_id = %loan_id,
            collateral_id = %receipt.collateral_id,
            "Collateral linked to loan"
        );
        Ok(receipt.message)
    }

    /// Application that can still be decided
    async fn pending_application(&self, id: ApplicationId) -> Result<LoanApplication, AppError> {
        let application = self
            .applications
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Loan application {} not found", id)))?;

        if !application.status.is_pending() {
            return Err(DomainError::Conflict(format!(
                "Loan application {} is already {}",
                id, application.status
            ))
            .into());
        }

        Ok(application)
    }

    /// Move a submitted application to `to`; a concurrent decision loses with `Conflict`
    async fn decide(&self, id: ApplicationId, to: ApplicationStatus) -> Result<(), AppError> {
        let moved = self
            .applications
            .transition(id, ApplicationStatus::Submitted, to, Some(Utc::now()))
            .await?;

        if moved {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!(
                "Loan application {} was decided concurrently",
                id
            ))
            .into())
        }
    }
}

#[async_trait]
impl<CL, LA, CC> LoanManagement for LoanManagementService<CL, LA, CC>
where
    CL: CustomerLoanRepository,
    LA: LoanApplicationRepository,
    CC: CollateralClient + ?Sized,
{
    async fn get_loan_details(
        &self,
        loan_id: LoanId,
        customer_id: CustomerId,
    ) -> Result<CustomerLoan, AppError> {
        let loan = self.loans.find(loan_id, customer_id).await?.ok_or_else(|| {
            DomainError::NotFound(format!(
                "Loan {} not found for customer {}",
                loan_id, customer_id
            ))
        })?;
        Ok(loan)
    }

    async fn save_real_estate(
        &self,
        credential: &str,
        real_estate: RealEstate,
    ) -> Result<String, AppError> {
        let loan = self
            .pledgeable_loan(real_estate.loan_id, real_estate.customer_id)
            .await?;
        real_estate.validate().map_err(DomainError::Validation)?;

        let receipt = self
            .collateral
            .save_real_estate(credential, &real_estate)
            .await?;

        self.link_collateral(loan.loan_id, receipt).await
    }

    async fn save_cash_deposit(
        &self,
        credential: &str,
        cash_deposit: CashDeposit,
    ) -> Result<String, AppError> {
        let loan = self
            .pledgeable_loan(cash_deposit.loan_id, cash_deposit.customer_id)
            .await?;
        cash_deposit.validate().map_err(DomainError::Validation)?;

        let receipt = self
            .collateral
            .save_cash_deposit(credential, &cash_deposit)
            .await?;

        self.link_collateral(loan.loan_id, receipt).await
    }

    async fn apply_loan(&self, application: NewLoanApplication) -> Result<String, AppError> {
        application.validate().map_err(DomainError::Validation)?;

        let stored = self.applications.create(&application).await?;
        tracing::info!(
            application_id = %stored.application_id,
            customer_id = %stored.customer_id,
            "Loan application submitted"
        );

        Ok(format!(
            "Loan application {} submitted",
            stored.application_id
        ))
    }

    async fn view_customer_applications(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LoanApplication>, AppError> {
        Ok(self.applications.find_by_customer(customer_id).await?)
    }

    async fn get_all_applications(&self) -> Result<Vec<LoanApplication>, AppError> {
        Ok(self.applications.find_all().await?)
    }

    async fn approve_loan(&self, application_id: ApplicationId) -> Result<String, AppError> {
        let application = self.pending_application(application_id).await?;
        self.decide(application_id, ApplicationStatus::Approved)
            .await?;

        let created = self
            .loans
            .create(&NewCustomerLoan {
                customer_id: application.customer_id,
                loan_product_id: application.loan_product_id,
                loan_principal: application.loan_amount,
                tenure: application.tenure,
                interest: application.interest_rate,
                emi: monthly_installment(
                    application.loan_amount,
                    application.interest_rate,
                    application.tenure,
                ),
            })
            .await;

        let loan = match created {
            Ok(loan) => loan,
            Err(e) => {
                // Hand the application back so the approval can be retried
                if let Err(revert) = self
                    .applications
                    .transition(
                        application_id,
                        ApplicationStatus::Approved,
                        ApplicationStatus::Submitted,
                        None,
                    )
                    .await
                {
                    tracing::error!(
                        application_id = %application_id,
                        error = %revert,
                        "Approved application left without a loan"
                    );
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            application_id = %application_id,
            loan_id = %loan.loan_id,
            "Loan application approved"
        );

        Ok(format!(
            "Loan application {} approved; loan {} created",
            application_id, loan.loan_id
        ))
    }

    async fn reject_loan(&self, application_id: ApplicationId) -> Result<String, AppError> {
        self.pending_application(application_id).await?;
        self.decide(application_id, ApplicationStatus::Rejected)
            .await?;

        tracing::info!(application_id = %application_id, "Loan application rejected");

        Ok(format!("Loan application {} rejected", application_id))
    }
}
