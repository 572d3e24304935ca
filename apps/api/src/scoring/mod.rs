//! Resume scoring: a fixed four-category rubric over a resume outline.
//!
//! Overall score = rounded mean of the category scores.
//! Bands: ≥ 80 good, ≥ 60 fair, otherwise poor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod handlers;

pub const GOOD_THRESHOLD: u32 = 80;
pub const FAIR_THRESHOLD: u32 = 60;

/// More than this many experience entries counts as detailed.
const EXPERIENCE_MIN: usize = 2;
/// More than this many skills counts as a strong skill set.
const SKILLS_MIN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreBand::Good
        } else if score >= FAIR_THRESHOLD {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Good,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCategory {
    pub name: &'static str,
    pub score: u32,
    pub feedback: &'static str,
    pub status: CategoryStatus,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeScore {
    pub overall: u32,
    pub band: ScoreBand,
    pub categories: Vec<ScoreCategory>,
}

/// The parts of a resume the rubric looks at. Entries may be any JSON value;
/// only their number matters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeOutline {
    #[serde(default)]
    pub experience: Vec<Value>,
    #[serde(default)]
    pub skills: Vec<Value>,
}

fn category(
    name: &'static str,
    passed: bool,
    (good_score, good_feedback): (u32, &'static str),
    (warn_score, warn_feedback): (u32, &'static str),
) -> ScoreCategory {
    let (score, feedback, status) = if passed {
        (good_score, good_feedback, CategoryStatus::Good)
    } else {
        (warn_score, warn_feedback, CategoryStatus::Warning)
    };
    ScoreCategory {
        name,
        score,
        feedback,
        status,
        band: ScoreBand::for_score(score),
    }
}

fn fixed(name: &'static str, score: u32, feedback: &'static str) -> ScoreCategory {
    category(name, true, (score, feedback), (score, feedback))
}

/// Rounded arithmetic mean; 0 for no scores.
pub fn overall_score(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().sum();
    (f64::from(sum) / scores.len() as f64).round() as u32
}

pub fn score_resume(resume: &ResumeOutline) -> ResumeScore {
    let categories = vec![
        category(
            "Content Quality",
            resume.experience.len() > EXPERIENCE_MIN,
            (90, "Good amount of experience details provided"),
            (70, "Consider adding more detailed work experience"),
        ),
        fixed("ATS Compatibility", 85, "Good use of standard sections and keywords"),
        category(
            "Skills Match",
            resume.skills.len() > SKILLS_MIN,
            (95, "Strong skill set demonstrated"),
            (75, "Consider adding more relevant skills"),
        ),
        fixed("Format & Structure", 90, "Well-structured and easy to read"),
    ];

    let scores: Vec<u32> = categories.iter().map(|c| c.score).collect();
    let overall = overall_score(&scores);

    ResumeScore {
        overall,
        band: ScoreBand::for_score(overall),
        categories,
    }
}
