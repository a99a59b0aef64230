//! Translation rows. Only written inside transactions, through
//! [`crate::infra::TxTranslationRepository`].

pub(crate) mod query {
    use sea_orm::sea_query::Expr;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    };

    use super::super::entities::translation::{self, ActiveModel, Entity as TranslationEntity};
    use crate::domain::{ReconcilePlan, Translation, TranslationInput};
    use crate::errors::AppResult;

    fn active_model(faq_id: i32, input: TranslationInput) -> ActiveModel {
        ActiveModel {
            faq_id: Set(faq_id),
            language: Set(input.language),
            question: Set(input.question),
            answer: Set(input.answer),
            ..Default::default()
        }
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Translation>> {
        Ok(TranslationEntity::find_by_id(id).one(db).await?.map(Translation::from))
    }

    /// Translations of many FAQs in insertion order
    pub async fn list_for_faqs<C: ConnectionTrait>(
        db: &C,
        faq_ids: Vec<i32>,
    ) -> AppResult<Vec<Translation>> {
        if faq_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = TranslationEntity::find()
            .filter(translation::Column::FaqId.is_in(faq_ids))
            .order_by_asc(translation::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Translation::from).collect())
    }

    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        faq_id: i32,
        input: TranslationInput,
    ) -> AppResult<Translation> {
        let model = active_model(faq_id, input).insert(db).await?;
        Ok(Translation::from(model))
    }

    pub async fn insert_many<C: ConnectionTrait>(
        db: &C,
        faq_id: i32,
        inputs: Vec<TranslationInput>,
    ) -> AppResult<()> {
        if inputs.is_empty() {
            return Ok(());
        }
        TranslationEntity::insert_many(inputs.into_iter().map(|input| active_model(faq_id, input)))
            .exec(db)
            .await?;
        Ok(())
    }

    /// Overwrite a row's content; `None` if it does not exist
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        input: TranslationInput,
    ) -> AppResult<Option<Translation>> {
        let Some(model) = TranslationEntity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.language = Set(input.language);
        active.question = Set(input.question);
        active.answer = Set(input.answer);
        let model = active.update(db).await?;

        Ok(Some(Translation::from(model)))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
        let result = TranslationEntity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_for_faq<C: ConnectionTrait>(db: &C, faq_id: i32) -> AppResult<u64> {
        let result = TranslationEntity::delete_many()
            .filter(translation::Column::FaqId.eq(faq_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Execute a reconciliation plan against one FAQ's rows
    pub async fn apply_plan<C: ConnectionTrait>(
        db: &C,
        faq_id: i32,
        plan: ReconcilePlan,
    ) -> AppResult<()> {
        if !plan.to_delete.is_empty() {
            TranslationEntity::delete_many()
                .filter(translation::Column::FaqId.eq(faq_id))
                .filter(translation::Column::Id.is_in(plan.to_delete))
                .exec(db)
                .await?;
        }

        for (id, input) in plan.to_update {
            TranslationEntity::update_many()
                .col_expr(translation::Column::Question, Expr::value(input.question))
                .col_expr(translation::Column::Answer, Expr::value(input.answer))
                .filter(translation::Column::Id.eq(id))
                .filter(translation::Column::FaqId.eq(faq_id))
                .exec(db)
                .await?;
        }

        insert_many(db, faq_id, plan.to_insert).await
    }
}
