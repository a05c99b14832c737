//! Legal petition ("dilekçe") preparation: form fields, the step wizard,
//! the document-type catalog and the generation requests.

pub mod aggregate;
pub mod attachments;
pub mod catalog;
pub mod request;
pub mod wizard;

pub use aggregate::{FieldError, PetitionField, PetitionForm};
pub use catalog::{Category, DocumentType};
pub use wizard::{StepStatus, WizardState, TOTAL_STEPS};
