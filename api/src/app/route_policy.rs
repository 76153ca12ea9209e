//! Route policy
//!
//! Declares which loan operations require a validated credential. The
//! collateral saves and the loan-detail fetch are always gated. The
//! application operations are open unless configuration adds them.

use std::collections::BTreeSet;

/// Every operation exposed under `/loan-management`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    GetLoanDetails,
    SaveRealEstateCollateral,
    SaveCashDepositCollateral,
    ApplyLoan,
    ViewCustomerApplications,
    GetAllApplications,
    ApproveApplication,
    RejectApplication,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::GetLoanDetails,
        Operation::SaveRealEstateCollateral,
        Operation::SaveCashDepositCollateral,
        Operation::ApplyLoan,
        Operation::ViewCustomerApplications,
        Operation::GetAllApplications,
        Operation::ApproveApplication,
        Operation::RejectApplication,
    ];

    /// Operations that can never be opened up by configuration
    pub const ALWAYS_GATED: [Operation; 3] = [
        Operation::GetLoanDetails,
        Operation::SaveRealEstateCollateral,
        Operation::SaveCashDepositCollateral,
    ];

    /// Name used in configuration and logs (matches the route segment)
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetLoanDetails => "getLoanDetails",
            Operation::SaveRealEstateCollateral => "saveRealEstateCollateral",
            Operation::SaveCashDepositCollateral => "saveCashDepositCollateral",
            Operation::ApplyLoan => "applyLoan",
            Operation::ViewCustomerApplications => "getLoanApplicationStatus",
            Operation::GetAllApplications => "getAll",
            Operation::ApproveApplication => "approveLoanApplication",
            Operation::RejectApplication => "rejectLoanApplication",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// The set of gated operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    gated: BTreeSet<Operation>,
}

impl RoutePolicy {
    /// Gate only the detail fetch and the collateral saves
    pub fn observed() -> Self {
        Self {
            gated: Operation::ALWAYS_GATED.into_iter().collect(),
        }
    }

    /// Gate every operation
    pub fn all() -> Self {
        Self {
            gated: Operation::ALL.into_iter().collect(),
        }
    }

    /// Start from the observed policy and gate `extra` on top of it
    pub fn with_gated(extra: &[Operation]) -> Self {
        let mut policy = Self::observed();
        policy.gated.extend(extra.iter().copied());
        policy
    }

    pub fn is_gated(&self, op: Operation) -> bool {
        self.gated.contains(&op)
    }

    /// Gated operations, in declaration order
    pub fn gated(&self) -> impl Iterator<Item = Operation> + '_ {
        self.gated.iter().copied()
    }

    /// Operations that pass straight to the domain layer
    pub fn open(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(move |op| !self.gated.contains(op))
    }
}
