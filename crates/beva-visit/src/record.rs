//! The submitted evaluation record and the persistence seam.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use beva_core::{
    ActingUser, Appearance, DisplayCondition, IncidentType, PackagingCondition, Promotion,
    Severity, ShelfLocation,
};
use beva_geo::StoreSelection;

use crate::draft::EvaluationDraft;

/// Input record handed to the persistence collaborator on `Complete`.
///
/// Store, product, and user identities come from the ambient selection
/// context; the promoter never re-enters them. Numeric entries are coerced
/// leniently: an unparseable stock or price becomes zero rather than
/// rejecting the submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvaluation {
    pub store_id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub via_override: bool,

    pub stock: i32,
    pub shelf_location: Option<ShelfLocation>,
    pub display_condition: Option<DisplayCondition>,
    pub area_photo_url: Option<String>,

    pub freshness: u8,
    pub appearance: Option<Appearance>,
    pub packaging_condition: Option<PackagingCondition>,
    pub expiration_date: Option<chrono::NaiveDate>,
    pub temperature: Option<Decimal>,
    pub quality_photo_url: Option<String>,

    pub current_price: Decimal,
    pub suggested_price: Decimal,
    pub active_promotions: Vec<Promotion>,
    pub promotion_description: Option<String>,
    pub pop_material_present: bool,
    pub pop_photo_url: Option<String>,
    pub price_photo_url: Option<String>,

    pub incident_types: Vec<IncidentType>,
    pub severity: Option<Severity>,
    pub action_required: Option<String>,
    pub evidence_photo_url: Option<String>,
    pub detected_competition: Option<String>,

    pub has_incidents: bool,
    pub status: String,
    pub current_step: u8,
    pub completed_at: DateTime<Utc>,
}

impl NewEvaluation {
    /// Build the record from a finished draft and its session context.
    #[must_use]
    pub fn from_draft(
        draft: &EvaluationDraft,
        selection: &StoreSelection,
        user: &ActingUser,
        product_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let action_required = {
            let trimmed = draft.action_required.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Self {
            store_id: selection.store.id,
            product_id,
            user_id: user.id,
            via_override: selection.via_override,

            stock: draft.stock.trim().parse().unwrap_or(0),
            shelf_location: draft.shelf_location,
            display_condition: draft.display_condition,
            area_photo_url: draft.area_photo_url.clone(),

            freshness: draft.freshness,
            appearance: draft.appearance,
            packaging_condition: draft.packaging_condition,
            expiration_date: draft.expiration_date,
            temperature: draft.temperature.trim().parse().ok(),
            quality_photo_url: draft.quality_photo_url.clone(),

            current_price: draft.current_price.trim().parse().unwrap_or(Decimal::ZERO),
            suggested_price: draft.suggested_price.trim().parse().unwrap_or(Decimal::ZERO),
            active_promotions: draft.active_promotions.clone(),
            promotion_description: draft.promotion_description.clone(),
            pop_material_present: draft.pop_material_present,
            pop_photo_url: draft.pop_photo_url.clone(),
            price_photo_url: draft.price_photo_url.clone(),

            incident_types: draft.incident_types.clone(),
            severity: draft.severity,
            action_required,
            evidence_photo_url: draft.evidence_photo_url.clone(),
            detected_competition: draft.detected_competition.clone(),

            has_incidents: !draft.incident_types.is_empty(),
            status: "completed".to_string(),
            current_step: 5,
            completed_at,
        }
    }
}

/// A persisted evaluation as returned by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Identity generated by the collaborator.
    pub id: Uuid,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    pub record: NewEvaluation,
}

/// Failure reported by the persistence collaborator; surfaced verbatim and
/// always retryable — nothing was persisted.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Seam over the evaluation persistence collaborator.
pub trait EvaluationSink {
    fn create_evaluation(
        &self,
        record: NewEvaluation,
    ) -> impl std::future::Future<Output = Result<Evaluation, SinkError>> + Send;
}
