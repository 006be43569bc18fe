use crate::structs::analysis_request::AnalysisRequest;

pub fn generate_prompt(request: &AnalysisRequest) -> String {
    format!("Language: {}\n\nCode:\n{}", request.language, request.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_language_and_code() {
        let prompt = generate_prompt(&AnalysisRequest::new("fn main() {}", "rust"));
        assert_eq!(prompt, "Language: rust\n\nCode:\nfn main() {}");
    }
}
