pub mod derived;
pub mod draft;
pub mod record;
pub mod stage;
pub mod workflow;

pub use derived::{is_expiration_near, price_variation_percent};
pub use draft::EvaluationDraft;
pub use record::{Evaluation, EvaluationSink, NewEvaluation, SinkError};
pub use stage::Stage;
pub use workflow::{VisitError, VisitWorkflow, WorkflowState};
