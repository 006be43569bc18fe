pub mod review_system_prompt;
