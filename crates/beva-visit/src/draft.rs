//! The working evaluation draft.
//!
//! One draft exists per active workflow and is owned by it exclusively:
//! created empty when a store/product selection begins, mutated field by
//! field as the promoter fills each stage, and either translated into a
//! [`crate::NewEvaluation`] on the terminal submit or discarded on cancel.
//! Nothing here is persisted before the submit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use beva_core::{
    Appearance, DisplayCondition, IncidentType, PackagingCondition, Promotion, Severity,
    ShelfLocation,
};

/// Field-by-field working state of one visit evaluation.
///
/// Numeric entries (`stock`, prices, `temperature`) hold the raw text from
/// the form inputs; they are coerced to numbers only at record build, where
/// anything unparseable lenient-defaults to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDraft {
    // Stage 1 — product selection.
    pub product_id: Option<Uuid>,

    // Stage 2 — availability.
    pub stock: String,
    pub shelf_location: Option<ShelfLocation>,
    pub display_condition: Option<DisplayCondition>,
    pub area_photo_url: Option<String>,

    // Stage 3 — quality.
    /// 1–5 scale, always pre-filled.
    pub freshness: u8,
    pub appearance: Option<Appearance>,
    pub packaging_condition: Option<PackagingCondition>,
    /// Feeds the near-expiry warning only; not required to advance.
    pub expiration_date: Option<NaiveDate>,
    pub temperature: String,
    pub quality_photo_url: Option<String>,

    // Stage 4 — prices.
    pub current_price: String,
    pub suggested_price: String,
    pub active_promotions: Vec<Promotion>,
    pub promotion_description: Option<String>,
    pub pop_material_present: bool,
    pub pop_photo_url: Option<String>,
    pub price_photo_url: Option<String>,

    // Stage 5 — incidents.
    pub incident_types: Vec<IncidentType>,
    pub severity: Option<Severity>,
    pub action_required: String,
    pub evidence_photo_url: Option<String>,
    pub detected_competition: Option<String>,
}

impl Default for EvaluationDraft {
    fn default() -> Self {
        Self {
            product_id: None,
            stock: String::new(),
            shelf_location: None,
            display_condition: None,
            area_photo_url: None,
            freshness: 3,
            appearance: None,
            packaging_condition: None,
            expiration_date: None,
            temperature: String::new(),
            quality_photo_url: None,
            current_price: String::new(),
            suggested_price: String::new(),
            active_promotions: Vec::new(),
            promotion_description: None,
            pop_material_present: false,
            pop_photo_url: None,
            price_photo_url: None,
            incident_types: Vec::new(),
            severity: None,
            action_required: String::new(),
            evidence_photo_url: None,
            detected_competition: None,
        }
    }
}

impl EvaluationDraft {
    /// Whether the `NoIncidents` sentinel is among the selected types.
    #[must_use]
    pub fn has_no_incidents_sentinel(&self) -> bool {
        self.incident_types.contains(&IncidentType::NoIncidents)
    }

    /// Whether any real (non-sentinel) incident type is selected.
    #[must_use]
    pub fn has_real_incidents(&self) -> bool {
        self.incident_types.iter().any(|t| t.is_real())
    }
}
