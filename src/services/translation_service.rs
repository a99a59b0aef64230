//! Single-translation operations on an existing FAQ.
//!
//! Each call is authorized against the parent FAQ with the same management
//! rule as a full FAQ update, and keeps at most one row per language.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::access::{authorize, manage_decision};
use crate::domain::{Identity, Translation, TranslationInput};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Conflict if the FAQ already has a translation in that language
    async fn add(&self, identity: Identity, faq_id: i32, input: TranslationInput) -> AppResult<Translation>;

    async fn update(&self, identity: Identity, id: i32, input: TranslationInput) -> AppResult<Translation>;

    async fn delete(&self, identity: Identity, id: i32) -> AppResult<()>;
}

pub struct TranslationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TranslationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TranslationService for TranslationManager<U> {
    async fn add(&self, identity: Identity, faq_id: i32, input: TranslationInput) -> AppResult<Translation> {
        let translation = with_transaction!(self.uow, |ctx| {
            let faq = ctx.faqs().find_by_id(faq_id).await?.ok_or(AppError::FaqNotFound)?;
            authorize(manage_decision(identity.role, &faq.scope), &identity, &ctx.stores()).await?;

            if faq.translations.iter().any(|t| t.language == input.language) {
                return Err(AppError::conflict("Translation for this language"));
            }

            ctx.translations().insert(faq_id, input).await
        })?;

        tracing::info!(faq_id, translation_id = translation.id, language = %translation.language, "translation added");
        Ok(translation)
    }

    async fn update(&self, identity: Identity, id: i32, input: TranslationInput) -> AppResult<Translation> {
        let translation = with_transaction!(self.uow, |ctx| {
            let current = ctx.translations().find_by_id(id).await?.ok_or(AppError::NotFound)?;
            let faq = ctx
                .faqs()
                .find_by_id(current.faq_id)
                .await?
                .ok_or(AppError::FaqNotFound)?;
            authorize(manage_decision(identity.role, &faq.scope), &identity, &ctx.stores()).await?;

            let taken = faq
                .translations
                .iter()
                .any(|t| t.id != id && t.language == input.language);
            if taken {
                return Err(AppError::conflict("Translation for this language"));
            }

            ctx.translations().update(id, input).await?.ok_or(AppError::NotFound)
        })?;

        tracing::info!(translation_id = id, faq_id = translation.faq_id, "translation updated");
        Ok(translation)
    }

    async fn delete(&self, identity: Identity, id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            let current = ctx.translations().find_by_id(id).await?.ok_or(AppError::NotFound)?;
            let faq = ctx
                .faqs()
                .find_by_id(current.faq_id)
                .await?
                .ok_or(AppError::FaqNotFound)?;
            authorize(manage_decision(identity.role, &faq.scope), &identity, &ctx.stores()).await?;

            if !ctx.translations().delete(id).await? {
                return Err(AppError::NotFound);
            }
            Ok::<_, AppError>(())
        })?;

        tracing::info!(translation_id = id, "translation deleted");
        Ok(())
    }
}
