//! Wizard state controller
//!
//! Tracks the active step (always within 1..=4) and the data gathered so far.
//! Setters replace whole slices without validation; gating lives in
//! [`super::validators`]. `next_step` is unchecked; `try_next_step` consults
//! the active step's gate first.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{BasicInfo, CourseData, CourseType, LearningObjectives, SpecializedContent};

use super::steps::{self, WizardStep, FIRST_STEP, LAST_STEP, REVIEW_STEP};
use super::validators;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Active step's gate is not satisfied
    #[error("step {step} is incomplete")]
    StepIncomplete { step: u8 },

    /// Data needed to assemble a course is missing
    #[error("course data is missing {0}")]
    MissingData(&'static str),

    /// Generation requested before the review step
    #[error("generation is only available on the review step (current step: {step})")]
    NotOnReviewStep { step: u8 },
}

/// Data gathered so far; every slice optional until its step is filled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_type: Option<CourseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<BasicInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<LearningObjectives>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialized_content: Option<SpecializedContent>,
}

impl WizardData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Assemble complete course data, naming the first missing slice
    pub fn to_course_data(&self) -> Result<CourseData, WizardError> {
        let course_type = self.course_type.ok_or(WizardError::MissingData("course type"))?;
        let basic_info = self
            .basic_info
            .clone()
            .ok_or(WizardError::MissingData("basic info"))?;
        let learning_objectives = self
            .learning_objectives
            .clone()
            .ok_or(WizardError::MissingData("learning objectives"))?;
        let specialized_content = self
            .specialized_content
            .clone()
            .ok_or(WizardError::MissingData("specialized content"))?;

        Ok(CourseData {
            course_type,
            basic_info,
            learning_objectives,
            specialized_content,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardController {
    current_step: u8,
    selected_course_type: Option<CourseType>,
    data: WizardData,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            current_step: FIRST_STEP,
            selected_course_type: None,
            data: WizardData::default(),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn selected_course_type(&self) -> Option<CourseType> {
        self.selected_course_type
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    /// Progress percentage of the active step
    pub fn progress(&self) -> u8 {
        steps::progress_for(self.current_step)
    }

    /// Step list with completion derived from the current data
    pub fn steps(&self) -> Vec<WizardStep> {
        steps::build_steps([
            self.data.basic_info.is_some(),
            self.data.learning_objectives.is_some(),
            self.data.specialized_content.is_some(),
            false,
        ])
    }

    pub fn update_basic_info(&mut self, basic_info: BasicInfo) {
        self.data.basic_info = Some(basic_info);
    }

    pub fn update_learning_objectives(&mut self, learning_objectives: LearningObjectives) {
        self.data.learning_objectives = Some(learning_objectives);
    }

    pub fn update_specialized_content(&mut self, specialized_content: SpecializedContent) {
        self.data.specialized_content = Some(specialized_content);
    }

    /// Advance one step, stopping at the review step. Does not check the gate.
    pub fn next_step(&mut self) {
        self.current_step = (self.current_step + 1).min(LAST_STEP);
    }

    /// Advance only if the active step's gate passes
    pub fn try_next_step(&mut self) -> Result<u8, WizardError> {
        if !self.can_proceed_to_next() {
            return Err(WizardError::StepIncomplete {
                step: self.current_step,
            });
        }
        self.next_step();
        Ok(self.current_step)
    }

    pub fn previous_step(&mut self) {
        self.current_step = self.current_step.saturating_sub(1).max(FIRST_STEP);
    }

    /// Jump to any step, clamped to 1..=4; intermediate steps are not checked
    pub fn go_to_step(&mut self, step: i64) {
        self.current_step = steps::clamp_step(step);
    }

    pub fn reset_wizard(&mut self) {
        self.current_step = FIRST_STEP;
        self.selected_course_type = None;
        self.data = WizardData::default();
    }

    /// Choosing a course type always restarts the flow at step 1
    pub fn select_course_type(&mut self, course_type: CourseType) {
        debug!(course_type = %course_type, "Course type selected");
        self.selected_course_type = Some(course_type);
        self.data.course_type = Some(course_type);
        self.current_step = FIRST_STEP;
    }

    pub fn can_proceed_to_next(&self) -> bool {
        validators::can_proceed(self.current_step, &self.data)
    }

    /// Course data for generation; only available on the review step
    pub fn course_data_for_generation(&self) -> Result<CourseData, WizardError> {
        if self.current_step != REVIEW_STEP {
            return Err(WizardError::NotOnReviewStep {
                step: self.current_step,
            });
        }
        self.data.to_course_data()
    }
}
