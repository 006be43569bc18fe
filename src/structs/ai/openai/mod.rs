pub mod openai_chat_response;
pub mod openai_message;
pub mod openai_request;
pub mod openai_response_format;
