//! Store database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Store;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// One store per merchant
    #[sea_orm(unique)]
    pub merchant_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::MerchantId",
        to = "super::user::Column::Id"
    )]
    Merchant,
    #[sea_orm(has_many = "super::faq::Entity")]
    Faqs,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Merchant.def()
    }
}

impl Related<super::faq::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faqs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(model: Model) -> Self {
        Store {
            id: model.id,
            name: model.name,
            merchant_id: model.merchant_id,
            created_at: model.created_at,
        }
    }
}
