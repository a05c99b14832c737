//! Contract analysis - Model

use crate::shared::api_utils::{error_detail, post_form, response_json};
use contracts::domain::a002_chat_session::dto::ANONYMOUS_USER;
use contracts::domain::a003_contract_analysis::{AnalysisResponse, FAILURE_FALLBACK};
use web_sys::{File, FormData};

/// Upload the file for analysis and return the markdown report.
pub async fn analyze_contract(file: &File) -> Result<String, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_str("user_id", ANONYMOUS_USER)
        .map_err(|e| format!("{e:?}"))?;

    let response = post_form("/api/sozlesme-analiz", &form_data).await?;
    if !response.ok() {
        return Err(error_detail(&response, FAILURE_FALLBACK).await);
    }

    let data: AnalysisResponse = response_json(&response).await?;
    Ok(data.markdown().to_string())
}
