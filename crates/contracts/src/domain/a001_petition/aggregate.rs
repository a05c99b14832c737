use serde::{Deserialize, Serialize};
use std::fmt;

/// Named inputs of the petition form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetitionField {
    Court,
    PlaintiffName,
    PlaintiffNationalId,
    PlaintiffAddress,
    DefendantName,
    DefendantAddress,
    Subject,
    Narrative,
    Relief,
}

impl PetitionField {
    pub fn label(&self) -> &'static str {
        match self {
            PetitionField::Court => "Mahkeme",
            PetitionField::PlaintiffName => "Ad Soyad",
            PetitionField::PlaintiffNationalId => "T.C. Kimlik No",
            PetitionField::PlaintiffAddress => "Adres",
            PetitionField::DefendantName => "Karşı Taraf Adı",
            PetitionField::DefendantAddress => "Karşı Taraf Adresi",
            PetitionField::Subject => "Konu",
            PetitionField::Narrative => "Olayın Özeti",
            PetitionField::Relief => "Talepler",
        }
    }
}

/// Validation failure tied to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: PetitionField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: PetitionField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: PetitionField) -> Self {
        Self::new(
            field,
            format!("Lütfen {} alanını doldurun.", field.label()),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FieldError {}

/// Length of a Turkish national identity number.
pub const NATIONAL_ID_LEN: usize = 11;

/// Values collected across the wizard steps. Kept as raw text; trimming
/// happens on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionForm {
    pub court: String,
    pub plaintiff_name: String,
    pub plaintiff_national_id: String,
    pub plaintiff_address: String,
    pub defendant_name: String,
    pub defendant_address: String,
    pub subject: String,
    pub narrative: String,
    pub relief: String,
}

impl PetitionForm {
    pub fn value(&self, field: PetitionField) -> &str {
        let raw = match field {
            PetitionField::Court => &self.court,
            PetitionField::PlaintiffName => &self.plaintiff_name,
            PetitionField::PlaintiffNationalId => &self.plaintiff_national_id,
            PetitionField::PlaintiffAddress => &self.plaintiff_address,
            PetitionField::DefendantName => &self.defendant_name,
            PetitionField::DefendantAddress => &self.defendant_address,
            PetitionField::Subject => &self.subject,
            PetitionField::Narrative => &self.narrative,
            PetitionField::Relief => &self.relief,
        };
        raw.trim()
    }

    pub fn set(&mut self, field: PetitionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PetitionField::Court => self.court = value,
            PetitionField::PlaintiffName => self.plaintiff_name = value,
            PetitionField::PlaintiffNationalId => self.plaintiff_national_id = value,
            PetitionField::PlaintiffAddress => self.plaintiff_address = value,
            PetitionField::DefendantName => self.defendant_name = value,
            PetitionField::DefendantAddress => self.defendant_address = value,
            PetitionField::Subject => self.subject = value,
            PetitionField::Narrative => self.narrative = value,
            PetitionField::Relief => self.relief = value,
        }
    }

    pub fn is_blank(&self, field: PetitionField) -> bool {
        self.value(field).is_empty()
    }

    /// Empty is allowed; otherwise exactly 11 ASCII digits.
    pub fn validate_national_id(&self) -> Result<(), FieldError> {
        let id = self.value(PetitionField::PlaintiffNationalId);
        if id.is_empty() {
            return Ok(());
        }
        if id.len() != NATIONAL_ID_LEN || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::new(
                PetitionField::PlaintiffNationalId,
                "T.C. Kimlik No 11 haneli olmalıdır.",
            ));
        }
        Ok(())
    }

    /// Minimum content required before anything is sent for generation.
    pub fn validate_for_submission(&self) -> Result<(), FieldError> {
        for field in [PetitionField::PlaintiffName, PetitionField::Narrative] {
            if self.is_blank(field) {
                return Err(FieldError::new(
                    field,
                    "Lütfen en az \"Ad Soyad\" ve \"Olayın Özeti\" alanlarını doldurun.",
                ));
            }
        }
        self.validate_national_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_trimmed() {
        let mut form = PetitionForm::default();
        form.set(PetitionField::PlaintiffName, "  Ayşe Yılmaz ");
        assert_eq!(form.value(PetitionField::PlaintiffName), "Ayşe Yılmaz");
        assert!(!form.is_blank(PetitionField::PlaintiffName));
    }

    #[test]
    fn test_national_id_rules() {
        let mut form = PetitionForm::default();
        assert!(form.validate_national_id().is_ok());

        form.plaintiff_national_id = "1234567890".into();
        assert!(form.validate_national_id().is_err());

        form.plaintiff_national_id = "1234567890a".into();
        assert!(form.validate_national_id().is_err());

        form.plaintiff_national_id = "12345678901".into();
        assert!(form.validate_national_id().is_ok());
    }

    #[test]
    fn test_submission_requires_name_and_narrative() {
        let mut form = PetitionForm {
            plaintiff_name: "Ali Veli".into(),
            ..Default::default()
        };
        let err = form.validate_for_submission().unwrap_err();
        assert_eq!(err.field, PetitionField::Narrative);

        form.narrative = "Kira ödenmedi.".into();
        assert!(form.validate_for_submission().is_ok());
    }
}
