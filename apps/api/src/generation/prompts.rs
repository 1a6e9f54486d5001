// All fixed text for question generation: the system role, the instruction
// template and the canned replies returned without calling the LLM.

/// Returned when neither a job description nor a resume was supplied.
pub const MISSING_INPUT_MESSAGE: &str =
    "Error: Please provide at least a job description or a resume.";

/// Returned when the input is small talk rather than a job description or resume.
pub const IRRELEVANT_INPUT_RESPONSE: &str = "\
I'm an interview preparation assistant. Give me a job description, a resume, or both, \
and I'll generate 8-15 role-specific interview questions with detailed answers, \
code examples where relevant, and key points to remember.

Tip: paste the full job posting (responsibilities and requirements) and/or your resume, \
or upload them as txt, pdf, docx or doc files, for the most relevant questions.";

/// Prefix of every result produced when the LLM call fails.
pub const LLM_ERROR_PREFIX: &str = "An error occurred: ";

/// System role for question generation.
pub const GENERATION_SYSTEM: &str = "You are an expert hiring manager and technical interviewer \
    with deep knowledge of various job roles and industries. \
    You write precise, professional interview questions and model answers.";

/// Question generation prompt template.
/// Replace: {context_label}, {document_block}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Generate 8-15 highly relevant, role-specific interview questions with detailed answers based on the provided {context_label}.

{document_block}

IMPORTANT INSTRUCTIONS:
1. Analyze the job role and generate questions specific to that position (e.g., Software Engineer, Data Scientist, Product Manager, etc.)
2. For technical roles, include coding questions, algorithm problems, system design questions, and data structure problems
3. For each question, provide a comprehensive answer (not just bullet points)
4. For technical questions, include relevant code snippets (3-10 lines) in the answer
5. Mix different types of questions: behavioral, technical, situational, and role-specific
6. Ensure questions match the candidate's experience level and the job requirements

FORMAT FOR EACH QUESTION:
## [Question Number]. [Question Title]

**Question:** [Detailed question]

**Answer:** [Comprehensive answer with explanations]

**Code Example (if applicable):**
```[language]
[Relevant code snippet]
```

**Key Points:**
- [Important point 1]
- [Important point 2]
- [Important point 3]

Be precise, professional, and ensure the questions are challenging but appropriate for the role and experience level."#;

/// Labelled sections for the LLM, blank line between them. Inputs must already be trimmed.
pub fn build_document_block(job_description: &str, resume: &str) -> String {
    let mut parts = Vec::with_capacity(2);
    if !job_description.is_empty() {
        parts.push(format!("Job Description:\n{job_description}"));
    }
    if !resume.is_empty() {
        parts.push(format!("Resume:\n{resume}"));
    }
    parts.join("\n\n")
}

/// Describes which inputs were supplied. Inputs must already be trimmed.
pub fn context_label(job_description: &str, resume: &str) -> &'static str {
    match (job_description.is_empty(), resume.is_empty()) {
        (false, false) => "job description and resume",
        (false, true) => "job description",
        _ => "resume",
    }
}

pub fn build_prompt(context_label: &str, document_block: &str) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{context_label}", context_label)
        .replace("{document_block}", document_block)
}
