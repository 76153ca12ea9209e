use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub loan_id: i32,
    pub customer_id: i32,
    pub loan_product_id: i32,
    pub loan_principal: f64,
    pub tenure: i32,
    pub interest: f64,
    pub emi: f64,
    pub collateral_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
