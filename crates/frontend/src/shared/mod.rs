pub mod api_utils;
pub mod date_utils;
pub mod download;
pub mod icons;
pub mod markdown;
pub mod modal;
pub mod storage;
pub mod theme;
pub mod toast;
