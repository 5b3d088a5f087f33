//! Printable snapshots of the chart for `--dump`.
//!
//! A `ChartReport` gathers everything the engine computes for one query
//! (hierarchy rows, team counts, pipeline steps, layout) and a
//! `ReportFormatter` turns it into text.

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use crate::layout::{layout, ChartLayout, LayoutConfig};
use crate::org::{OrgModel, Team};
use crate::pipeline::{group_stages, PipelineStage, PIPELINE, PIPELINE_TITLE};
use crate::query::{highlight_path, visibility, ChartQuery};

/// One row of the hierarchy, in pre-order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub name: String,
    pub team: Team,
    pub phase: Option<String>,
    pub depth: usize,
    pub visible: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportStep {
    pub parallel: bool,
    pub stages: Vec<PipelineStage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub query: ChartQuery,
    pub entries: Vec<ReportEntry>,
    pub team_counts: Vec<(Team, usize)>,
    pub pipeline: Vec<ReportStep>,
    pub layout: ChartLayout,
}

impl ChartReport {
    pub fn build(model: &OrgModel, query: &ChartQuery, config: &LayoutConfig) -> Self {
        let visible = visibility(model, &query.search, &query.teams);
        let path = highlight_path(model, query.selected.as_deref());

        let root = model.root();
        let entries = std::iter::once(root)
            .chain(model.descendants(&root.id))
            .map(|a| ReportEntry {
                id: a.id.clone(),
                name: a.name.clone(),
                team: a.team,
                phase: a.phase.clone(),
                depth: model.depth_of(&a.id).unwrap_or(0),
                visible: visible.get(&a.id).copied().unwrap_or(false),
                highlighted: path.contains_node(&a.id),
            })
            .collect();

        let pipeline = group_stages(PIPELINE)
            .into_iter()
            .map(|g| ReportStep {
                parallel: g.parallel,
                stages: g.stages.into_iter().copied().collect(),
            })
            .collect();

        Self {
            query: query.clone(),
            entries,
            team_counts: model.team_counts(),
            pipeline,
            layout: layout(model, config),
        }
    }

    pub fn total_agents(&self) -> usize {
        self.entries.len()
    }

    pub fn total_visible(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }
}

/// Implement this trait to add new output formats.
pub trait ReportFormatter {
    fn format(&self, report: &ChartReport) -> Result<String>;
}

/// Indented hierarchy plus a per-team count table.
///
/// Hidden rows (filtered out by the query) are prefixed with `-`;
/// rows on the highlight path with `*`.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Minimum width for the name column.
    pub min_name_width: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { min_name_width: 32 }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        let mut output = String::new();

        let search = report.query.search.as_str();
        let teams: Vec<String> = report.query.teams.iter().map(|t| t.to_string()).collect();
        output.push_str(&format!(
            "Org Chart (search: {}, teams: {}, selected: {})\n",
            if search.is_empty() { "none" } else { search },
            if teams.is_empty() { "all".to_string() } else { teams.join(",") },
            report.query.selected.as_deref().unwrap_or("none"),
        ));

        let width = report
            .entries
            .iter()
            .map(|e| e.depth * 2 + e.name.chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(self.min_name_width);

        let separator = "─".repeat(width + 32);
        output.push_str(&separator);
        output.push('\n');

        for entry in &report.entries {
            let marker = if !entry.visible {
                '-'
            } else if entry.highlighted {
                '*'
            } else {
                ' '
            };
            let label = format!("{}{} {}", "  ".repeat(entry.depth), marker, entry.name);
            output.push_str(&format!(
                "{:<width$} {:<12} {}\n",
                label,
                entry.team.to_string(),
                entry.phase.as_deref().unwrap_or("-"),
                width = width,
            ));
        }

        output.push_str(&separator);
        output.push('\n');

        for (team, count) in &report.team_counts {
            output.push_str(&format!(
                "{:<width$} {:>5}\n",
                team.display_name(),
                count,
                width = width,
            ));
        }
        output.push_str(&format!(
            "{:<width$} {:>5}  ({} visible)\n",
            "TOTAL",
            report.total_agents(),
            report.total_visible(),
            width = width,
        ));

        Ok(output)
    }
}

/// Pipeline steps, one line per stage; parallel branches share a step.
#[derive(Debug, Clone, Default)]
pub struct PipelineFormatter;

impl ReportFormatter for PipelineFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        let mut output = format!("{PIPELINE_TITLE}\n");
        for (i, step) in report.pipeline.iter().enumerate() {
            for s in &step.stages {
                let branch = if step.parallel { "  ║ " } else { "    " };
                output.push_str(&format!(
                    "{branch}{:>3}  {:<14} {}{}\n",
                    s.stage_label,
                    s.display_name,
                    s.agent_id,
                    if step.parallel { "  (parallel)" } else { "" },
                ));
            }
            if i + 1 < report.pipeline.len() {
                output.push_str("       ↓\n");
            }
        }
        Ok(output)
    }
}

/// The whole report, including layout coordinates, as pretty JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        serde_json::to_string_pretty(report).wrap_err("Failed to serialize chart report")
    }
}
