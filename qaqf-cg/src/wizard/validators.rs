//! Per-step gates for forward navigation
//!
//! Each predicate reads only the data slice of its own step.

use crate::models::{BasicInfo, LearningObjectives, SpecializedContent};

use super::WizardData;

/// Step 1: title, description, audience and a level are all filled in
pub fn basic_info_ready(info: Option<&BasicInfo>) -> bool {
    info.is_some_and(|info| {
        !info.title.is_empty()
            && !info.description.is_empty()
            && !info.target_audience.is_empty()
            && info.level_label().is_some()
    })
}

/// Step 2: at least one objective and a duration
pub fn learning_objectives_ready(objectives: Option<&LearningObjectives>) -> bool {
    objectives.is_some_and(|o| !o.objectives.is_empty() && !o.duration.is_empty())
}

/// Step 3: the slice only has to exist, even with every field empty
pub fn specialized_content_ready(content: Option<&SpecializedContent>) -> bool {
    content.is_some()
}

/// Gate for leaving `step`; the review step has no next step
pub fn can_proceed(step: u8, data: &WizardData) -> bool {
    match step {
        1 => basic_info_ready(data.basic_info.as_ref()),
        2 => learning_objectives_ready(data.learning_objectives.as_ref()),
        3 => specialized_content_ready(data.specialized_content.as_ref()),
        _ => false,
    }
}
