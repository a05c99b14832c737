//! Petition wizard - View Model

use contracts::domain::a001_petition::attachments::{Attachment, AttachmentList};
use contracts::domain::a001_petition::request::SuggestionField;
use contracts::domain::a001_petition::{FieldError, PetitionField, PetitionForm, WizardState};
use leptos::prelude::*;

/// One text signal per form input, bound directly to the thaw inputs.
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub court: RwSignal<String>,
    pub plaintiff_name: RwSignal<String>,
    pub plaintiff_national_id: RwSignal<String>,
    pub plaintiff_address: RwSignal<String>,
    pub defendant_name: RwSignal<String>,
    pub defendant_address: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub narrative: RwSignal<String>,
    pub relief: RwSignal<String>,
}

impl FormSignals {
    fn new() -> Self {
        Self {
            court: RwSignal::new(String::new()),
            plaintiff_name: RwSignal::new(String::new()),
            plaintiff_national_id: RwSignal::new(String::new()),
            plaintiff_address: RwSignal::new(String::new()),
            defendant_name: RwSignal::new(String::new()),
            defendant_address: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            narrative: RwSignal::new(String::new()),
            relief: RwSignal::new(String::new()),
        }
    }

    pub fn signal(&self, field: PetitionField) -> RwSignal<String> {
        match field {
            PetitionField::Court => self.court,
            PetitionField::PlaintiffName => self.plaintiff_name,
            PetitionField::PlaintiffNationalId => self.plaintiff_national_id,
            PetitionField::PlaintiffAddress => self.plaintiff_address,
            PetitionField::DefendantName => self.defendant_name,
            PetitionField::DefendantAddress => self.defendant_address,
            PetitionField::Subject => self.subject,
            PetitionField::Narrative => self.narrative,
            PetitionField::Relief => self.relief,
        }
    }

    /// Snapshot of the current input values.
    pub fn snapshot(&self) -> PetitionForm {
        let mut form = PetitionForm::default();
        for field in ALL_FIELDS {
            form.set(field, self.signal(field).get_untracked());
        }
        form
    }

    fn clear(&self) {
        for field in ALL_FIELDS {
            self.signal(field).set(String::new());
        }
    }
}

const ALL_FIELDS: [PetitionField; 9] = [
    PetitionField::Court,
    PetitionField::PlaintiffName,
    PetitionField::PlaintiffNationalId,
    PetitionField::PlaintiffAddress,
    PetitionField::DefendantName,
    PetitionField::DefendantAddress,
    PetitionField::Subject,
    PetitionField::Narrative,
    PetitionField::Relief,
];

#[derive(Clone, Copy)]
pub struct PetitionVm {
    /// Catalog key of the chosen document type; `None` shows the picker.
    pub selected_type: RwSignal<Option<&'static str>>,
    pub filter: RwSignal<String>,
    pub wizard: RwSignal<WizardState>,
    pub form: FormSignals,
    pub attachments: RwSignal<AttachmentList>,
    pub field_error: RwSignal<Option<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub is_generating_pdf: RwSignal<bool>,
    pub is_generating_udf: RwSignal<bool>,
    pub suggesting: RwSignal<Option<SuggestionField>>,
}

impl PetitionVm {
    pub fn new() -> Self {
        Self {
            selected_type: RwSignal::new(None),
            filter: RwSignal::new(String::new()),
            wizard: RwSignal::new(WizardState::default()),
            form: FormSignals::new(),
            attachments: RwSignal::new(AttachmentList::new()),
            field_error: RwSignal::new(None),
            error: RwSignal::new(None),
            is_generating_pdf: RwSignal::new(false),
            is_generating_udf: RwSignal::new(false),
            suggesting: RwSignal::new(None),
        }
    }

    pub fn select_type(&self, key: &'static str) {
        self.selected_type.set(Some(key));
        self.wizard.update(|w| w.reset());
        self.clear_errors();
    }

    /// Fill the plaintiff name from the saved profile unless one was typed.
    pub fn prefill_plaintiff(&self, profile_name: &str) {
        let name = profile_name.trim();
        let field = self.form.signal(PetitionField::PlaintiffName);
        if !name.is_empty() && field.with_untracked(|v| v.trim().is_empty()) {
            field.set(name.to_string());
        }
    }

    /// Back to the picker. Entered values are kept for the next type.
    pub fn deselect(&self) {
        self.selected_type.set(None);
        self.clear_errors();
    }

    pub fn next_step(&self) {
        let form = self.form.snapshot();
        let mut result = Ok(0);
        self.wizard.update(|w| result = w.advance(&form));
        match result {
            Ok(step) => {
                leptos::logging::log!("petition wizard: step {}", step);
                self.field_error.set(None);
            }
            Err(e) => self.field_error.set(Some(e)),
        }
    }

    pub fn prev_step(&self) {
        self.wizard.update(|w| {
            w.retreat();
        });
        self.field_error.set(None);
    }

    pub fn add_attachment(&self, name: String, size: u64) -> bool {
        let mut added = false;
        self.attachments
            .update(|list| added = list.add(Attachment::new(name, size)));
        added
    }

    pub fn remove_attachment(&self, name: &str) {
        self.attachments.update(|list| {
            list.remove(name);
        });
    }

    pub fn clear_errors(&self) {
        self.field_error.set(None);
        self.error.set(None);
    }

    /// Fresh form for a new petition.
    pub fn reset(&self) {
        self.form.clear();
        self.attachments.update(|list| list.clear());
        self.wizard.update(|w| w.reset());
        self.selected_type.set(None);
        self.clear_errors();
    }
}

pub fn use_petition_vm() -> PetitionVm {
    use_context::<PetitionVm>().expect("PetitionVm not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_keeps_typed_name() {
        let vm = PetitionVm::new();
        vm.prefill_plaintiff("  Ayşe Yılmaz ");
        assert_eq!(vm.form.snapshot().value(PetitionField::PlaintiffName), "Ayşe Yılmaz");

        vm.prefill_plaintiff("Mehmet Demir");
        assert_eq!(vm.form.snapshot().value(PetitionField::PlaintiffName), "Ayşe Yılmaz");
    }

    #[test]
    fn test_reset_clears_petition() {
        let vm = PetitionVm::new();
        vm.select_type("ise_iade");
        vm.form.signal(PetitionField::PlaintiffName).set("Ali Veli".to_string());
        vm.form.signal(PetitionField::Narrative).set("Olay".to_string());
        vm.next_step();
        assert!(vm.add_attachment("sozlesme.pdf".to_string(), 1024));

        vm.reset();

        assert_eq!(vm.selected_type.get_untracked(), None);
        assert_eq!(vm.wizard.get_untracked().current_step(), 1);
        assert!(vm.form.snapshot().is_blank(PetitionField::PlaintiffName));
        assert!(vm.attachments.with_untracked(|list| list.is_empty()));
    }

    #[test]
    fn test_next_step_requires_name() {
        let vm = PetitionVm::new();
        vm.next_step();
        assert_eq!(vm.wizard.get_untracked().current_step(), 1);
        assert!(vm.field_error.get_untracked().is_some());
    }
}
