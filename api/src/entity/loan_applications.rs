use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loan_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub application_id: i32,
    pub customer_id: i32,
    pub loan_product_id: i32,
    pub loan_amount: f64,
    pub tenure: i32,
    pub interest_rate: f64,
    pub collateral_details: Option<String>,
    /// One of submitted, approved, rejected
    pub status: String,
    pub applied_at: DateTimeWithTimeZone,
    pub decided_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
