mod common;

mod groq_provider;
mod history_endpoint;
