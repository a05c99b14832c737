pub mod a001_petition;
pub mod a002_chat_session;
pub mod a003_contract_analysis;
pub mod a004_precedent_search;
