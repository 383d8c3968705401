use chrono::Utc;
use log::info;
use uuid::Uuid;
use validator::Validate;

use super::not_blank;
use crate::error::FormError;
use crate::models::{JobPosting, JobType};

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct JobForm {
    #[validate(custom(function = "not_blank", message = "Job title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Company name is required"))]
    pub company: String,
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,
    pub job_type: JobType,
    #[validate(custom(function = "not_blank", message = "Job description is required"))]
    pub description: String,
    pub skill_input: String,
    #[validate(length(min = 1, message = "Add at least one required skill"))]
    pub skills: Vec<String>,
}

impl JobForm {
    /// Moves the pending skill text into the list. Blank or repeated skills are dropped.
    pub fn add_skill(&mut self) -> bool {
        let skill = self.skill_input.trim().to_string();
        if skill.is_empty() || self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        self.skill_input.clear();
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn reset(&mut self) {
        *self = JobForm::default();
    }
}

pub fn submit_job(form: &JobForm) -> Result<JobPosting, FormError> {
    form.validate()?;
    let posting = JobPosting {
        id: Uuid::new_v4().to_string(),
        title: form.title.trim().to_string(),
        company: form.company.trim().to_string(),
        location: form.location.trim().to_string(),
        job_type: form.job_type,
        description: form.description.trim().to_string(),
        skills: form.skills.clone(),
        posted_at: Utc::now(),
    };
    info!("[Job] New posting '{}' at {}", posting.title, posting.company);
    Ok(posting)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> JobForm {
        JobForm {
            title: "Frontend Developer".into(),
            company: "DEALS-NG".into(),
            location: "Lagos".into(),
            description: "Build the marketplace UI.".into(),
            skills: vec!["Rust".into()],
            ..Default::default()
        }
    }

    #[test]
    fn skills_are_trimmed_and_unique() {
        let mut form = JobForm::default();
        form.skill_input = "  React ".into();
        assert!(form.add_skill());
        assert!(form.skill_input.is_empty());
        form.skill_input = "React".into();
        assert!(!form.add_skill());
        form.skill_input = "   ".into();
        assert!(!form.add_skill());
        assert_eq!(form.skills, vec!["React"]);
        form.remove_skill("React");
        assert!(form.skills.is_empty());
    }

    #[test]
    fn needs_at_least_one_skill() {
        let form = JobForm { skills: Vec::new(), ..filled() };
        assert!(!form.can_submit());
        assert_eq!(
            submit_job(&form),
            Err(FormError::Validation("Add at least one required skill".into()))
        );
    }

    #[test]
    fn submit_builds_posting_and_reset_clears() {
        let mut form = filled();
        form.job_type = JobType::Contract;
        let posting = submit_job(&form).unwrap();
        assert_eq!(posting.title, "Frontend Developer");
        assert_eq!(posting.job_type, JobType::Contract);
        form.reset();
        assert_eq!(form, JobForm::default());
    }
}
