//! The five-stage visit workflow.
//!
//! Strictly linear: product selection → availability → quality → prices →
//! incidents, then one terminal submit. Forward movement is gated by a
//! per-stage completeness predicate; a blocked `next` is a no-op the UI
//! prevents by reading [`VisitWorkflow::can_proceed`], not an error. The
//! draft stays fully client-local until the one terminal submit.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use beva_core::{ActingUser, Catalog};
use beva_geo::StoreSelection;

use crate::draft::EvaluationDraft;
use crate::record::{Evaluation, EvaluationSink, NewEvaluation};
use crate::stage::Stage;

/// Where the workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    InProgress(Stage),
    /// Terminal: the record was accepted by the persistence collaborator.
    Submitted,
    /// Terminal: the draft was discarded without persistence.
    Cancelled,
}

#[derive(Debug, Error)]
pub enum VisitError {
    /// `Complete` called outside the incidents stage or with an unsatisfied
    /// predicate. A caller reading `can_complete` never sees this.
    #[error("evaluation is not ready to submit from the current stage")]
    NotSubmittable,

    /// `Complete` called while a submit is already pending.
    #[error("a submit is already in flight for this evaluation")]
    SubmitInFlight,

    /// The persistence collaborator rejected the record; the draft is intact
    /// and the submit can be retried.
    #[error("evaluation submit failed: {0}")]
    Submit(#[source] crate::record::SinkError),
}

/// One visit session: a store selection, an acting user, the catalog
/// snapshot taken at session start, and the exclusively-owned draft.
#[derive(Debug)]
pub struct VisitWorkflow {
    state: WorkflowState,
    draft: EvaluationDraft,
    selection: StoreSelection,
    user: ActingUser,
    catalog: Catalog,
    submitting: bool,
}

impl VisitWorkflow {
    /// Start a session for a selected store. The draft starts empty; the
    /// catalog is not refreshed for the lifetime of the session.
    #[must_use]
    pub fn new(selection: StoreSelection, user: ActingUser, catalog: Catalog) -> Self {
        Self {
            state: WorkflowState::InProgress(Stage::ProductSelection),
            draft: EvaluationDraft::default(),
            selection,
            user,
            catalog,
            submitting: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The current stage, or `None` once the workflow is terminal.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self.state {
            WorkflowState::InProgress(stage) => Some(stage),
            _ => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &EvaluationDraft {
        &self.draft
    }

    /// Mutable access for field edits. Product selection goes through
    /// [`Self::select_product`] so the active-product gate applies.
    pub fn draft_mut(&mut self) -> &mut EvaluationDraft {
        &mut self.draft
    }

    #[must_use]
    pub fn selection(&self) -> &StoreSelection {
        &self.selection
    }

    /// Select the product to evaluate. Only active catalog products are
    /// accepted; anything else is a no-op returning `false`.
    pub fn select_product(&mut self, product_id: Uuid) -> bool {
        match self.catalog.product(product_id) {
            Some(product) if product.active => {
                self.draft.product_id = Some(product_id);
                true
            }
            Some(product) => {
                tracing::debug!(product = %product.name, "ignoring selection of inactive product");
                false
            }
            None => {
                tracing::debug!(%product_id, "ignoring selection of unknown product");
                false
            }
        }
    }

    /// Near-expiry warning for the quality stage, recomputed on read.
    #[must_use]
    pub fn is_expiration_near(&self) -> bool {
        crate::derived::is_expiration_near(self.draft.expiration_date, Utc::now().date_naive())
    }

    /// Price variation against the suggested price, recomputed on read.
    #[must_use]
    pub fn price_variation_percent(&self) -> rust_decimal::Decimal {
        crate::derived::price_variation_percent(&self.draft.current_price, &self.draft.suggested_price)
    }

    /// Whether the current stage's completeness predicate holds.
    ///
    /// The quality stage gates only on appearance and packaging condition:
    /// the expiration date and photo are visually marked required in some
    /// renderings but have never blocked progress, and that behavior is
    /// kept as-is pending product-owner confirmation.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        let WorkflowState::InProgress(stage) = self.state else {
            return false;
        };
        match stage {
            Stage::ProductSelection => self.draft.product_id.is_some(),
            Stage::Availability => {
                !self.draft.stock.trim().is_empty()
                    && self.draft.shelf_location.is_some()
                    && self.draft.display_condition.is_some()
            }
            Stage::Quality => {
                self.draft.appearance.is_some() && self.draft.packaging_condition.is_some()
            }
            Stage::Prices => !self.draft.current_price.trim().is_empty(),
            Stage::Incidents => {
                if self.draft.has_no_incidents_sentinel() {
                    // "Everything OK" short-circuits, even with stray real
                    // types still checked.
                    true
                } else if self.draft.has_real_incidents() {
                    self.draft.severity.is_some()
                        && !self.draft.action_required.trim().is_empty()
                } else {
                    true
                }
            }
        }
    }

    /// Advance to the next stage. Returns `false` (no-op) when blocked by
    /// the completeness predicate, on the last stage, or once terminal.
    pub fn next(&mut self) -> bool {
        let WorkflowState::InProgress(stage) = self.state else {
            return false;
        };
        if !self.can_proceed() {
            tracing::debug!(stage = %stage, "next blocked: stage incomplete");
            return false;
        }
        let Some(next) = stage.next_stage() else {
            return false;
        };
        self.state = WorkflowState::InProgress(next);
        true
    }

    /// Move back one stage. Never blocked from a non-initial stage, and
    /// never discards data already entered in later stages.
    pub fn previous(&mut self) -> bool {
        let WorkflowState::InProgress(stage) = self.state else {
            return false;
        };
        let Some(previous) = stage.previous_stage() else {
            return false;
        };
        self.state = WorkflowState::InProgress(previous);
        true
    }

    /// Whether cancel is currently allowed: any non-terminal state with no
    /// submit in flight.
    #[must_use]
    pub fn can_cancel(&self) -> bool {
        matches!(self.state, WorkflowState::InProgress(_)) && !self.submitting
    }

    /// Discard the draft without persistence. No-op once terminal or while
    /// a submit is pending (the UI disables cancel until it settles).
    pub fn cancel(&mut self) -> bool {
        if !self.can_cancel() {
            return false;
        }
        self.draft = EvaluationDraft::default();
        self.state = WorkflowState::Cancelled;
        true
    }

    /// Whether `complete` would be accepted right now.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        self.state == WorkflowState::InProgress(Stage::Incidents)
            && self.can_proceed()
            && !self.submitting
    }

    /// Build the final record and hand it to the persistence collaborator.
    ///
    /// On success the workflow becomes `Submitted` (terminal). On failure it
    /// stays on the incidents stage with the draft intact; calling
    /// `complete` again retries. At most one submit is in flight per draft.
    ///
    /// # Errors
    ///
    /// [`VisitError::NotSubmittable`] outside the incidents stage or with an
    /// unsatisfied predicate, [`VisitError::SubmitInFlight`] while a submit
    /// is pending, and [`VisitError::Submit`] when the collaborator fails.
    pub async fn complete<S: EvaluationSink>(
        &mut self,
        sink: &S,
    ) -> Result<Evaluation, VisitError> {
        if self.submitting {
            return Err(VisitError::SubmitInFlight);
        }
        if self.state != WorkflowState::InProgress(Stage::Incidents) || !self.can_proceed() {
            return Err(VisitError::NotSubmittable);
        }

        // The stage-1 predicate guarantees a product id by the time the
        // incidents stage is reachable.
        let Some(product_id) = self.draft.product_id else {
            return Err(VisitError::NotSubmittable);
        };

        let record =
            NewEvaluation::from_draft(&self.draft, &self.selection, &self.user, product_id, Utc::now());

        self.submitting = true;
        let result = sink.create_evaluation(record).await;
        self.submitting = false;

        match result {
            Ok(evaluation) => {
                tracing::debug!(
                    evaluation_id = %evaluation.id,
                    store = %self.selection.store.name,
                    "evaluation submitted"
                );
                self.state = WorkflowState::Submitted;
                Ok(evaluation)
            }
            Err(e) => {
                tracing::warn!(error = %e, "evaluation submit failed, draft retained for retry");
                Err(VisitError::Submit(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;
