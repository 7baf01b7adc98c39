//! Skills assessment — static question tables keyed by domain.

pub mod handlers;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentDomain {
    Technology,
    Business,
    Creative,
}

impl AssessmentDomain {
    /// Exact key lookup; anything else is `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "technology" => Some(Self::Technology),
            "business" => Some(Self::Business),
            "creative" => Some(Self::Creative),
            _ => None,
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            Self::Technology => TECHNOLOGY,
            Self::Business => BUSINESS,
            Self::Creative => CREATIVE,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    Scale { scale: Scale },
    MultipleChoice { options: &'static [&'static str] },
    SingleChoice { options: &'static [&'static str] },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Scale {
    pub min: u8,
    pub max: u8,
    pub labels: &'static [&'static str],
}

/// Questions for `domain_key`; empty for unknown keys.
pub fn skills_assessment_questions(domain_key: &str) -> &'static [Question] {
    AssessmentDomain::from_key(domain_key)
        .map(AssessmentDomain::questions)
        .unwrap_or(&[])
}

const TECHNOLOGY: &[Question] = &[
    Question {
        id: "tech-1",
        question: "How comfortable are you with programming concepts?",
        kind: QuestionKind::Scale {
            scale: Scale {
                min: 1,
                max: 5,
                labels: &[
                    "Never tried",
                    "Basic understanding",
                    "Comfortable",
                    "Advanced",
                    "Expert",
                ],
            },
        },
    },
    Question {
        id: "tech-2",
        question: "Which programming languages have you worked with?",
        kind: QuestionKind::MultipleChoice {
            options: &["Python", "Java", "JavaScript", "C++", "C#", "Go", "None"],
        },
    },
    Question {
        id: "tech-3",
        question: "How do you prefer to solve complex problems?",
        kind: QuestionKind::SingleChoice {
            options: &[
                "Break into smaller parts",
                "Research similar solutions",
                "Collaborate with others",
                "Trial and error",
            ],
        },
    },
];

const BUSINESS: &[Question] = &[
    Question {
        id: "biz-1",
        question: "How comfortable are you with data analysis and spreadsheets?",
        kind: QuestionKind::Scale {
            scale: Scale {
                min: 1,
                max: 5,
                labels: &["Never used", "Basic", "Comfortable", "Advanced", "Expert"],
            },
        },
    },
    Question {
        id: "biz-2",
        question: "Which business areas interest you most?",
        kind: QuestionKind::MultipleChoice {
            options: &[
                "Marketing",
                "Sales",
                "Finance",
                "Operations",
                "Strategy",
                "Human Resources",
            ],
        },
    },
];

const CREATIVE: &[Question] = &[
    Question {
        id: "creative-1",
        question: "Which creative tools have you used?",
        kind: QuestionKind::MultipleChoice {
            options: &[
                "Photoshop",
                "Illustrator",
                "Figma",
                "Canva",
                "Video editing software",
                "None",
            ],
        },
    },
    Question {
        id: "creative-2",
        question: "How do you approach creative projects?",
        kind: QuestionKind::SingleChoice {
            options: &[
                "Start with inspiration and mood boards",
                "Research and analyze examples",
                "Dive right in and iterate",
                "Plan thoroughly before creating",
            ],
        },
    },
];
