//! SeaORM model for the `slots` table.
//!
//! `claimed` and `claimant` are kept as separate columns to match the
//! persisted layout: `claimed = 0` pairs with an empty `claimant`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub number: String,
    pub claimed: i32,
    pub claimant: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
