use sea_orm::entity::prelude::*;

use crate::domain::Translation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "translations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub faq_id: i32,
    pub language: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faq::Entity",
        from = "Column::FaqId",
        to = "super::faq::Column::Id"
    )]
    Faq,
}

impl Related<super::faq::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faq.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Translation {
    fn from(model: Model) -> Self {
        Translation {
            id: model.id,
            faq_id: model.faq_id,
            language: model.language,
            question: model.question,
            answer: model.answer,
        }
    }
}
