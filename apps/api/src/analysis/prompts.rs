//! Prompt construction for the three analysis modes.

/// Analysis mode selected by the client's `analysisOption` field.
///
/// Selection is an exact string match. Anything that is not one of the two
/// named modes falls through to `AtsOptimization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    QuickScan,
    DetailedAnalysis,
    AtsOptimization,
}

impl AnalysisMode {
    pub const QUICK_SCAN: &'static str = "Quick Scan";
    pub const DETAILED_ANALYSIS: &'static str = "Detailed Analysis";
    pub const ATS_OPTIMIZATION: &'static str = "ATS Optimization";

    pub fn from_option(option: &str) -> Self {
        match option {
            Self::QUICK_SCAN => AnalysisMode::QuickScan,
            Self::DETAILED_ANALYSIS => AnalysisMode::DetailedAnalysis,
            _ => AnalysisMode::AtsOptimization,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::QuickScan => Self::QUICK_SCAN,
            AnalysisMode::DetailedAnalysis => Self::DETAILED_ANALYSIS,
            AnalysisMode::AtsOptimization => Self::ATS_OPTIMIZATION,
        }
    }

    fn instructions(&self) -> &'static str {
        match self {
            AnalysisMode::QuickScan => QUICK_SCAN_INSTRUCTIONS,
            AnalysisMode::DetailedAnalysis => DETAILED_ANALYSIS_INSTRUCTIONS,
            AnalysisMode::AtsOptimization => ATS_OPTIMIZATION_INSTRUCTIONS,
        }
    }

    fn job_description_label(&self) -> &'static str {
        match self {
            AnalysisMode::QuickScan | AnalysisMode::DetailedAnalysis => {
                "Job description (if provided)"
            }
            AnalysisMode::AtsOptimization => "Job description",
        }
    }
}

pub const QUICK_SCAN_INSTRUCTIONS: &str = r#"You are ResumeChecker, an expert in resume analysis. Provide a quick scan of the following resume:

1. Identify the most suitable profession for this resume.
2. List 3 key strengths of the resume.
3. Suggest 2 quick improvements.
4. Give an overall ATS score out of 100."#;

pub const DETAILED_ANALYSIS_INSTRUCTIONS: &str = r#"You are ResumeChecker, an expert in resume analysis. Provide a detailed analysis of the following resume:

1. Identify the most suitable profession for this resume.
2. List 5 strengths of the resume.
3. Suggest 3-5 areas for improvement with specific recommendations.
4. Rate the following aspects out of 10: Impact, Brevity, Style, Structure, Skills.
5. Provide a brief review of each major section (e.g., Summary, Experience, Education).
6. Give an overall ATS score out of 100 with a breakdown of the scoring."#;

pub const ATS_OPTIMIZATION_INSTRUCTIONS: &str = r#"You are ResumeChecker, an expert in ATS optimization. Analyze the following resume and provide optimization suggestions:

1. Identify keywords from the job description that should be included in the resume.
2. Suggest reformatting or restructuring to improve ATS readability.
3. Recommend changes to improve keyword density without keyword stuffing.
4. Provide 3-5 bullet points on how to tailor this resume for the specific job description.
5. Give an ATS compatibility score out of 100 and explain how to improve it."#;

/// Substitution policy for values interpolated into a prompt.
///
/// The default applies no cap and no escaping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptPolicy {
    /// Maximum characters kept from each interpolated value.
    pub max_input_chars: Option<usize>,
}

impl PromptPolicy {
    pub fn apply<'a>(&self, value: &'a str) -> &'a str {
        match self.max_input_chars {
            Some(max) => truncate_chars(value, max),
            None => value,
        }
    }
}

fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Builds the full prompt for `mode`.
///
/// Values are substituted in a single pass, so placeholder-like text inside
/// the resume or job description is never re-expanded.
pub fn build_prompt(
    resume_text: &str,
    job_description: &str,
    mode: AnalysisMode,
    policy: &PromptPolicy,
) -> String {
    format!(
        "{instructions}\n\nResume text: {resume}\n{label}: {job}\n",
        instructions = mode.instructions(),
        resume = policy.apply(resume_text),
        label = mode.job_description_label(),
        job = policy.apply(job_description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Doe, Software Engineer";
    const JD: &str = "Senior Rust Engineer. Requirements: tokio, axum.";

    fn all_modes() -> [AnalysisMode; 3] {
        [
            AnalysisMode::QuickScan,
            AnalysisMode::DetailedAnalysis,
            AnalysisMode::AtsOptimization,
        ]
    }

    #[test]
    fn test_named_modes_parse_exactly() {
        assert_eq!(AnalysisMode::from_option("Quick Scan"), AnalysisMode::QuickScan);
        assert_eq!(
            AnalysisMode::from_option("Detailed Analysis"),
            AnalysisMode::DetailedAnalysis
        );
        assert_eq!(
            AnalysisMode::from_option("ATS Optimization"),
            AnalysisMode::AtsOptimization
        );
    }

    #[test]
    fn test_unmatched_modes_fall_back_to_ats() {
        for option in ["quick scan", "Quick Scan ", "detailed", "", "Deep Dive"] {
            assert_eq!(
                AnalysisMode::from_option(option),
                AnalysisMode::AtsOptimization,
                "'{option}' should fall back to ATS Optimization"
            );
        }
    }

    #[test]
    fn test_unmatched_mode_prompt_equals_ats_prompt() {
        let policy = PromptPolicy::default();
        let ats = build_prompt(RESUME, JD, AnalysisMode::from_option("ATS Optimization"), &policy);
        let other = build_prompt(RESUME, JD, AnalysisMode::from_option("Cover Letter"), &policy);
        assert_eq!(ats, other);
    }

    #[test]
    fn test_as_str_round_trips_named_modes() {
        for mode in all_modes() {
            assert_eq!(AnalysisMode::from_option(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_quick_scan_prompt_contents() {
        let prompt = build_prompt(RESUME, "", AnalysisMode::QuickScan, &PromptPolicy::default());
        assert!(prompt.starts_with(QUICK_SCAN_INSTRUCTIONS));
        assert!(prompt.contains("List 3 key strengths"));
        assert!(prompt.contains("Suggest 2 quick improvements"));
        assert!(prompt.contains("Resume text: John Doe, Software Engineer"));
        assert!(prompt.contains("Job description (if provided): \n"));
    }

    #[test]
    fn test_detailed_prompt_rates_five_aspects() {
        let prompt = build_prompt(
            RESUME,
            JD,
            AnalysisMode::DetailedAnalysis,
            &PromptPolicy::default(),
        );
        assert!(prompt.contains("List 5 strengths"));
        assert!(prompt.contains("Impact, Brevity, Style, Structure, Skills"));
        assert!(prompt.contains("breakdown of the scoring"));
        assert!(prompt.contains(RESUME));
        assert!(prompt.contains(JD));
    }

    #[test]
    fn test_ats_prompt_uses_plain_job_description_label() {
        let prompt = build_prompt(
            RESUME,
            JD,
            AnalysisMode::AtsOptimization,
            &PromptPolicy::default(),
        );
        assert!(prompt.contains("keyword density without keyword stuffing"));
        assert!(prompt.contains(&format!("Job description: {JD}")));
        assert!(!prompt.contains("(if provided)"));
    }

    #[test]
    fn test_modes_never_produce_equal_prompts() {
        let policy = PromptPolicy::default();
        let prompts: Vec<String> = all_modes()
            .iter()
            .map(|m| build_prompt(RESUME, JD, *m, &policy))
            .collect();
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[0], prompts[2]);
        assert_ne!(prompts[1], prompts[2]);
    }

    #[test]
    fn test_inputs_are_interpolated_verbatim() {
        let resume = "Skills: {job_description} <b>Rust</b>\n\n  indented";
        let jd = "{resume_text} ${pdfText}";
        let prompt = build_prompt(resume, jd, AnalysisMode::QuickScan, &PromptPolicy::default());
        assert!(prompt.contains(resume));
        assert!(prompt.contains(jd));
    }

    #[test]
    fn test_policy_without_cap_passes_through() {
        let long = "x".repeat(100_000);
        assert_eq!(PromptPolicy::default().apply(&long).len(), 100_000);
    }

    #[test]
    fn test_policy_truncates_on_char_boundary() {
        let policy = PromptPolicy {
            max_input_chars: Some(4),
        };
        assert_eq!(policy.apply("résumé text"), "résu");
        assert_eq!(policy.apply("abc"), "abc");
    }

    #[test]
    fn test_policy_caps_both_interpolated_values() {
        let policy = PromptPolicy {
            max_input_chars: Some(5),
        };
        let prompt = build_prompt(
            "ABCDEFGHIJ",
            "0123456789",
            AnalysisMode::AtsOptimization,
            &policy,
        );
        assert!(prompt.contains("Resume text: ABCDE\n"));
        assert!(prompt.contains("Job description: 01234\n"));
        assert!(!prompt.contains("ABCDEF"));
    }
}
