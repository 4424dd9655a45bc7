//! The four fixed wizard steps

use serde::Serialize;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;
pub const REVIEW_STEP: u8 = LAST_STEP;

/// Clamp any requested step number into [FIRST_STEP, LAST_STEP]
pub fn clamp_step(step: i64) -> u8 {
    step.clamp(FIRST_STEP as i64, LAST_STEP as i64) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Percentage reached on this step: 25, 50, 75, 100
    pub progress: u8,
    pub is_complete: bool,
}

struct StepDefinition {
    title: &'static str,
    description: &'static str,
}

const DEFINITIONS: [StepDefinition; LAST_STEP as usize] = [
    StepDefinition {
        title: "Basic Information",
        description: "Let's start with the fundamental details of your course",
    },
    StepDefinition {
        title: "Learning Objectives",
        description: "Define what participants will achieve by completing this course",
    },
    StepDefinition {
        title: "Specialized Content",
        description: "Specify the specialized context and requirements",
    },
    StepDefinition {
        title: "Review & Generate",
        description: "Review your course details and generate the content",
    },
];

/// Progress percentage for a step number
pub fn progress_for(step: u8) -> u8 {
    clamp_step(step as i64) * (100 / LAST_STEP)
}

/// Build the step list; `completed[i]` marks step `i + 1`
pub(crate) fn build_steps(completed: [bool; LAST_STEP as usize]) -> Vec<WizardStep> {
    DEFINITIONS
        .iter()
        .zip(completed)
        .enumerate()
        .map(|(index, (definition, is_complete))| {
            let id = index as u8 + 1;
            WizardStep {
                id,
                title: definition.title,
                description: definition.description,
                progress: progress_for(id),
                is_complete,
            }
        })
        .collect()
}
