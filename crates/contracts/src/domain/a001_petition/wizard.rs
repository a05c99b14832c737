//! Linear step wizard for the petition form.
//!
//! Steps:
//! 1. Plaintiff (name, national ID, address)
//! 2. Defendant and court
//! 3. Case details (subject, narrative)
//! 4. Requests and attachments, then submission

use super::aggregate::{FieldError, PetitionField, PetitionForm};

pub const TOTAL_STEPS: u8 = 4;

/// Display state of a step indicator in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "progress-step completed",
            StepStatus::Active => "progress-step active",
            StepStatus::Pending => "progress-step",
        }
    }
}

pub fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Kişisel Bilgiler",
        2 => "Karşı Taraf",
        3 => "Dava Detayları",
        4 => "Talepler ve Ekler",
        _ => "",
    }
}

/// Check the rules attached to `step`. Steps without rules always pass.
pub fn validate_step(step: u8, form: &PetitionForm) -> Result<(), FieldError> {
    match step {
        1 => {
            if form.is_blank(PetitionField::PlaintiffName) {
                return Err(FieldError::required(PetitionField::PlaintiffName));
            }
            form.validate_national_id()
        }
        3 => {
            for field in [PetitionField::Subject, PetitionField::Narrative] {
                if form.is_blank(field) {
                    return Err(FieldError::required(field));
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    current_step: u8,
    total_steps: u8,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(TOTAL_STEPS)
    }
}

impl WizardState {
    pub fn new(total_steps: u8) -> Self {
        Self {
            current_step: 1,
            total_steps: total_steps.max(1),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn total_steps(&self) -> u8 {
        self.total_steps
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 1
    }

    /// On the last step the submission actions replace "next".
    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps
    }

    /// Validate the active step and move forward, clamped at the last step.
    pub fn advance(&mut self, form: &PetitionForm) -> Result<u8, FieldError> {
        validate_step(self.current_step, form)?;
        if self.current_step < self.total_steps {
            self.current_step += 1;
        }
        Ok(self.current_step)
    }

    /// Move back without validation, clamped at step 1.
    pub fn retreat(&mut self) -> u8 {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.current_step
    }

    pub fn reset(&mut self) {
        self.current_step = 1;
    }

    pub fn step_status(&self, step: u8) -> StepStatus {
        if step == self.current_step {
            StepStatus::Active
        } else if step < self.current_step {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = u8> {
        1..=self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named() -> PetitionForm {
        PetitionForm {
            plaintiff_name: "Mehmet Demir".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_step1_rejects_missing_name() {
        let mut wizard = WizardState::default();
        let err = wizard.advance(&PetitionForm::default()).unwrap_err();
        assert_eq!(err.field, PetitionField::PlaintiffName);
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_step1_rejects_ten_digit_id() {
        let mut wizard = WizardState::default();
        let mut form = named();
        form.plaintiff_national_id = "1234567890".into();
        let err = wizard.advance(&form).unwrap_err();
        assert_eq!(err.field, PetitionField::PlaintiffNationalId);
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_step1_accepts_name_without_id() {
        let mut wizard = WizardState::default();
        assert_eq!(wizard.advance(&named()), Ok(2));
    }

    #[test]
    fn test_step3_requires_subject_and_narrative() {
        let mut wizard = WizardState::default();
        let mut form = named();
        wizard.advance(&form).unwrap();
        wizard.advance(&form).unwrap();
        assert_eq!(wizard.current_step(), 3);

        form.subject = "Kira alacağı".into();
        let err = wizard.advance(&form).unwrap_err();
        assert_eq!(err.field, PetitionField::Narrative);

        form.narrative = "Üç aylık kira ödenmedi.".into();
        assert_eq!(wizard.advance(&form), Ok(4));
        assert!(wizard.is_last());
    }

    #[test]
    fn test_advance_clamps_at_last_step() {
        let mut wizard = WizardState::new(2);
        let form = named();
        wizard.advance(&form).unwrap();
        assert_eq!(wizard.advance(&form), Ok(2));
    }

    #[test]
    fn test_retreat_clamps_at_one() {
        let mut wizard = WizardState::default();
        assert_eq!(wizard.retreat(), 1);
        wizard.advance(&named()).unwrap();
        assert_eq!(wizard.retreat(), 1);
        assert!(wizard.is_first());
    }

    #[test]
    fn test_step_status() {
        let mut wizard = WizardState::default();
        wizard.advance(&named()).unwrap();
        assert_eq!(wizard.step_status(1), StepStatus::Completed);
        assert_eq!(wizard.step_status(2), StepStatus::Active);
        assert_eq!(wizard.step_status(3), StepStatus::Pending);
    }
}
