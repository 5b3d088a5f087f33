//! The hand-authored delivery pipeline: an ordered list of stages, each owned
//! by one agent. Stages marked parallel run alongside their sibling branch
//! (3A/3B, 5A/5B, ...).

use serde::Serialize;

use crate::org::{OrgError, OrgModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub stage_label: &'static str,
    pub display_name: &'static str,
    pub agent_id: &'static str,
    pub is_parallel: bool,
}

const fn stage(
    stage_label: &'static str,
    display_name: &'static str,
    agent_id: &'static str,
    is_parallel: bool,
) -> PipelineStage {
    PipelineStage {
        stage_label,
        display_name,
        agent_id,
        is_parallel,
    }
}

pub const PIPELINE_TITLE: &str = "Pipeline Workflow v2.0";

pub const PIPELINE: &[PipelineStage] = &[
    stage("1", "Intake", "ceo", false),
    stage("2", "Research", "product-researcher", false),
    stage("3A", "Spec", "product-manager", true),
    stage("3B", "Architecture", "architect", true),
    stage("4", "Design", "frontend-designer", false),
    stage("5A", "Development", "developer", true),
    stage("5B", "Analytics", "data-engineer", true),
    stage("6A", "Testing", "user-testing", true),
    stage("6B", "Code Review", "code-reviewer", true),
    stage("7", "Security", "security-engineer", false),
    stage("8A", "Docs", "technical-writer", true),
    stage("8B", "Launch Prep", "growth-marketer", true),
    stage("9", "DevOps", "devops-engineer", false),
    stage("10", "Launched", "ceo", false),
];

/// One step of the pipeline: a single sequential stage or a set of
/// parallel branches that run together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageGroup<'a> {
    pub stages: Vec<&'a PipelineStage>,
    pub parallel: bool,
}

/// Numeric step of a stage label: "5A" -> "5", "10" -> "10".
fn step_key(label: &str) -> &str {
    label.trim_end_matches(|c: char| c.is_ascii_alphabetic())
}

/// Partition stages into steps. Consecutive parallel stages that share a
/// step number are merged; every sequential stage is its own step.
pub fn group_stages(stages: &[PipelineStage]) -> Vec<StageGroup<'_>> {
    let mut groups: Vec<StageGroup<'_>> = Vec::new();

    for s in stages {
        if s.is_parallel {
            if let Some(last) = groups.last_mut() {
                let same_step = last.parallel
                    && last
                        .stages
                        .first()
                        .is_some_and(|first| step_key(first.stage_label) == step_key(s.stage_label));
                if same_step {
                    last.stages.push(s);
                    continue;
                }
            }
        }
        groups.push(StageGroup {
            stages: vec![s],
            parallel: s.is_parallel,
        });
    }

    groups
}

/// Stages owned by `agent_id`, in pipeline order.
pub fn stages_for<'a>(stages: &'a [PipelineStage], agent_id: &str) -> Vec<&'a PipelineStage> {
    stages.iter().filter(|s| s.agent_id == agent_id).collect()
}

/// Every stage must name an agent that exists in the roster.
pub fn validate_pipeline(model: &OrgModel, stages: &[PipelineStage]) -> Result<(), OrgError> {
    for s in stages {
        if !model.contains(s.agent_id) {
            return Err(OrgError::UnknownStageAgent {
                stage: s.stage_label.to_string(),
                agent: s.agent_id.to_string(),
            });
        }
    }
    Ok(())
}
