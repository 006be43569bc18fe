pub mod ai;
pub mod analysis_data;
pub mod analysis_record;
pub mod analysis_request;
pub mod api_response;
pub mod cli;
pub mod config;
pub mod error_response;
pub mod health_response;
pub mod issue;
pub mod new_analysis_record;
pub mod new_issue_record;
pub mod select_query;
