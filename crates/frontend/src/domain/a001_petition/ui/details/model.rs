//! Petition wizard - Model (generation and suggestion calls)

use crate::shared::api_utils::{api_url, error_detail, post_form, response_blob};
use crate::shared::download::{download_blob, download_bytes};
use contracts::domain::a001_petition::request::{
    download_file_name, udf_form_fields, FieldSuggestionResponse, GenerateFieldRequest,
    PetitionPdfRequest, SuggestionField,
};
use contracts::domain::a001_petition::PetitionForm;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Request;
use web_sys::FormData;

const PDF_FAILURE: &str = "PDF oluşturulamadı";
const UDF_FAILURE: &str = "UDF oluşturulamadı";
const SUGGESTION_FAILURE: &str = "Öneri alınamadı";

/// Generate the PDF and save it. Returns the downloaded file name.
pub async fn generate_pdf(form: &PetitionForm, type_key: Option<&str>) -> Result<String, String> {
    let body = PetitionPdfRequest::from_form(form, type_key);

    let response = Request::post(&api_url("/api/dilekce/pdf"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let raw = response.text().await.unwrap_or_default();
        return Err(ApiErrorBody::parse(&raw).message_or(PDF_FAILURE));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read PDF: {}", e))?;

    let file_name = download_file_name(type_key, "pdf");
    download_bytes(&bytes, "application/pdf", &file_name)?;
    Ok(file_name)
}

/// Generate the UYAP document (multipart request) and save it.
pub async fn generate_udf(form: &PetitionForm, type_key: Option<&str>) -> Result<String, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in udf_form_fields(form, type_key) {
        form_data
            .append_with_str(name, &value)
            .map_err(|e| format!("{e:?}"))?;
    }

    let response = post_form("/api/dilekce/udf", &form_data).await?;
    if !response.ok() {
        return Err(error_detail(&response, UDF_FAILURE).await);
    }

    let blob = response_blob(&response).await?;
    let file_name = download_file_name(type_key, "udf");
    download_blob(&blob, &file_name)?;
    Ok(file_name)
}

/// Ask the assistant for a subject or relief text.
pub async fn suggest_field(
    field: SuggestionField,
    form: &PetitionForm,
    type_key: Option<&str>,
) -> Result<String, String> {
    let body = GenerateFieldRequest::new(field, form, type_key);

    let response = Request::post(&api_url("/api/dilekce/generate-field"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let raw = response.text().await.unwrap_or_default();
        return Err(ApiErrorBody::parse(&raw).message_or(SUGGESTION_FAILURE));
    }

    let data: FieldSuggestionResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| SUGGESTION_FAILURE.to_string())
}
