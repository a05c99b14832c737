//! Payloads sent to the petition generation endpoints.

use super::aggregate::{PetitionField, PetitionForm};
use super::catalog;
use crate::shared::text::truncate_chars;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COURT: &str = "ASLİYE HUKUK MAHKEMESİ HAKİMLİĞİNE";
pub const PDF_DEFAULT_RELIEF: &str = "Hukuki haklarımın korunmasını talep ederim.";
pub const UDF_DEFAULT_RELIEF: &str = "Gereğinin yapılmasını arz ederim.";
pub const UDF_DEFAULT_SUBJECT: &str = "Dava";
pub const UDF_DEFAULT_TYPE: &str = "Genel";
const PLACEHOLDER: &str = "-";
const FILE_NAME_MAX_CHARS: usize = 30;

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// JSON body of `POST /api/dilekce/pdf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionPdfRequest {
    pub mahkeme: String,
    pub davaci_adi: String,
    pub davaci_tc: String,
    pub davaci_adres: String,
    pub davali_adi: String,
    pub davali_adres: String,
    pub konu: String,
    pub aciklamalar: String,
    pub talepler: String,
    pub dilekce_turu: String,
}

impl PetitionPdfRequest {
    /// Fill empty optional fields with the defaults the generator expects.
    pub fn from_form(form: &PetitionForm, type_key: Option<&str>) -> Self {
        let doc = type_key.and_then(catalog::lookup);
        let v = |f| form.value(f).to_string();
        let or_dash = |f| or_default(form.value(f), PLACEHOLDER).to_string();

        Self {
            mahkeme: or_default(form.value(PetitionField::Court), DEFAULT_COURT).to_string(),
            davaci_adi: v(PetitionField::PlaintiffName),
            davaci_tc: or_dash(PetitionField::PlaintiffNationalId),
            davaci_adres: or_dash(PetitionField::PlaintiffAddress),
            davali_adi: or_dash(PetitionField::DefendantName),
            davali_adres: or_dash(PetitionField::DefendantAddress),
            konu: or_default(
                form.value(PetitionField::Subject),
                doc.map(|d| d.default_subject)
                    .unwrap_or(catalog::FALLBACK_SUBJECT),
            )
            .to_string(),
            aciklamalar: v(PetitionField::Narrative),
            talepler: or_default(form.value(PetitionField::Relief), PDF_DEFAULT_RELIEF)
                .to_string(),
            dilekce_turu: doc
                .map(|d| d.display_name)
                .unwrap_or(catalog::FALLBACK_NAME)
                .to_string(),
        }
    }
}

/// Multipart fields of `POST /api/dilekce/udf`, in the order they are appended.
pub fn udf_form_fields(form: &PetitionForm, type_key: Option<&str>) -> Vec<(&'static str, String)> {
    let doc = type_key.and_then(catalog::lookup);
    let v = |f| form.value(f).to_string();

    vec![
        (
            "mahkeme",
            or_default(form.value(PetitionField::Court), DEFAULT_COURT).to_string(),
        ),
        ("davaci_adi", v(PetitionField::PlaintiffName)),
        ("davaci_tc", v(PetitionField::PlaintiffNationalId)),
        ("davaci_adres", v(PetitionField::PlaintiffAddress)),
        ("davali_adi", v(PetitionField::DefendantName)),
        ("davali_adres", v(PetitionField::DefendantAddress)),
        (
            "konu",
            or_default(
                form.value(PetitionField::Subject),
                doc.map(|d| d.default_subject).unwrap_or(UDF_DEFAULT_SUBJECT),
            )
            .to_string(),
        ),
        ("aciklamalar", v(PetitionField::Narrative)),
        (
            "talepler",
            or_default(form.value(PetitionField::Relief), UDF_DEFAULT_RELIEF).to_string(),
        ),
        (
            "dilekce_turu",
            doc.map(|d| d.display_name)
                .unwrap_or(UDF_DEFAULT_TYPE)
                .to_string(),
        ),
    ]
}

/// Download file name: the type name cut to 30 characters, anything outside
/// `[A-Za-z0-9]` replaced with `_`.
pub fn download_file_name(type_key: Option<&str>, extension: &str) -> String {
    let name = type_key
        .map(catalog::display_name_for)
        .unwrap_or(catalog::FALLBACK_NAME);
    let (head, _) = truncate_chars(name, FILE_NAME_MAX_CHARS);
    let clean: String = head
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.{}", clean, extension)
}

/// Which field the AI suggestion fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionField {
    #[serde(rename = "konu")]
    Subject,
    #[serde(rename = "talepler")]
    Relief,
}

impl SuggestionField {
    pub fn target(&self) -> PetitionField {
        match self {
            SuggestionField::Subject => PetitionField::Subject,
            SuggestionField::Relief => PetitionField::Relief,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionContext {
    pub dilekce_turu: String,
    pub davaci_adi: String,
    pub davali_adi: String,
    pub konu: String,
    pub aciklamalar: String,
}

/// JSON body of `POST /api/dilekce/generate-field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFieldRequest {
    pub field_type: SuggestionField,
    pub context: SuggestionContext,
}

impl GenerateFieldRequest {
    pub fn new(field_type: SuggestionField, form: &PetitionForm, type_key: Option<&str>) -> Self {
        let dilekce_turu = match type_key {
            Some(key) => catalog::lookup(key)
                .map(|d| d.display_name.to_string())
                .unwrap_or_else(|| key.to_string()),
            None => String::new(),
        };
        Self {
            field_type,
            context: SuggestionContext {
                dilekce_turu,
                davaci_adi: form.value(PetitionField::PlaintiffName).to_string(),
                davali_adi: form.value(PetitionField::DefendantName).to_string(),
                konu: form.value(PetitionField::Subject).to_string(),
                aciklamalar: form.value(PetitionField::Narrative).to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSuggestionResponse {
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PetitionForm {
        PetitionForm {
            plaintiff_name: "Zeynep Kaya".into(),
            narrative: "İşten haksız yere çıkarıldım.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pdf_defaults() {
        let req = PetitionPdfRequest::from_form(&form(), Some("ise-iade"));
        assert_eq!(req.mahkeme, DEFAULT_COURT);
        assert_eq!(req.davaci_tc, "-");
        assert_eq!(req.davali_adres, "-");
        assert_eq!(
            req.konu,
            "Feshin geçersizliği, işe iade ve boşta geçen süre ücreti"
        );
        assert_eq!(req.talepler, PDF_DEFAULT_RELIEF);
        assert_eq!(req.dilekce_turu, "İşe İade Davası Dilekçesi");
    }

    #[test]
    fn test_pdf_without_type() {
        let req = PetitionPdfRequest::from_form(&form(), None);
        assert_eq!(req.konu, "Dava Konusu");
        assert_eq!(req.dilekce_turu, "Dilekce");
    }

    #[test]
    fn test_udf_keeps_empty_optionals() {
        let fields = udf_form_fields(&form(), None);
        let get = |k: &str| fields.iter().find(|(n, _)| *n == k).map(|(_, v)| v.clone());
        assert_eq!(get("davaci_tc").as_deref(), Some(""));
        assert_eq!(get("konu").as_deref(), Some("Dava"));
        assert_eq!(get("talepler").as_deref(), Some(UDF_DEFAULT_RELIEF));
        assert_eq!(get("dilekce_turu").as_deref(), Some("Genel"));
        assert_eq!(fields.len(), 10);
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(
            download_file_name(Some("kira-tespit"), "pdf"),
            "Kira_Tespit_Davas_.pdf"
        );
        assert_eq!(download_file_name(None, "udf"), "Dilekce.udf");

        let long = download_file_name(Some("elatmanin-onlenmesi"), "pdf");
        assert_eq!(long.trim_end_matches(".pdf").chars().count(), 30);
        assert!(long
            .trim_end_matches(".pdf")
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    #[test]
    fn test_generate_field_serializes_field_type() {
        let req = GenerateFieldRequest::new(SuggestionField::Relief, &form(), Some("nafaka"));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["field_type"], "talepler");
        assert_eq!(json["context"]["dilekce_turu"], "Nafaka Davası Dilekçesi");
        assert_eq!(json["context"]["davaci_adi"], "Zeynep Kaya");
    }
}
