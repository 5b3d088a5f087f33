//! Stateless queries the renderer runs on every input change: highlight
//! path for a selection, visibility under search + team filters, and search
//! suggestions. The caller owns the selection and query text.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::layout::{edge_id, LayoutEdge};
use crate::org::{Agent, OrgModel, Team};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Caller-owned view state passed into every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartQuery {
    pub search: String,
    pub teams: BTreeSet<Team>,
    pub selected: Option<String>,
}

impl ChartQuery {
    pub fn is_filtered(&self) -> bool {
        !self.teams.is_empty() || normalize(&self.search).is_some()
    }

    pub fn toggle_team(&mut self, team: Team) {
        if !self.teams.remove(&team) {
            self.teams.insert(team);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightPath {
    /// Selected node first, then each manager up to the root.
    pub ancestors: Vec<String>,
    /// Selected node first, then everything below it in pre-order.
    pub descendants: Vec<String>,
    pub node_ids: BTreeSet<String>,
    pub edge_ids: BTreeSet<String>,
}

impl HighlightPath {
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge_ids.contains(id)
    }
}

pub fn highlight_path(model: &OrgModel, selected: Option<&str>) -> HighlightPath {
    let Some(selected) = selected.and_then(|id| model.get(id)) else {
        return HighlightPath::default();
    };

    let mut path = HighlightPath::default();

    let mut child = selected;
    path.ancestors.push(child.id.clone());
    for manager in model.ancestors(&selected.id) {
        path.edge_ids.insert(edge_id(&manager.id, &child.id));
        path.ancestors.push(manager.id.clone());
        child = manager;
    }

    path.descendants.push(selected.id.clone());
    for d in model.descendants(&selected.id) {
        if let Some(ref parent) = d.reports_to {
            path.edge_ids.insert(edge_id(parent, &d.id));
        }
        path.descendants.push(d.id.clone());
    }

    path.node_ids = path
        .ancestors
        .iter()
        .chain(&path.descendants)
        .cloned()
        .collect();
    path
}

/// Lowercased search needle, or `None` for an empty query. Whitespace is
/// part of the needle.
fn normalize(search: &str) -> Option<String> {
    (!search.is_empty()).then(|| search.to_lowercase())
}

/// Team filter gates first; search text only narrows within the gate.
pub fn is_visible(agent: &Agent, search: &str, teams: &BTreeSet<Team>) -> bool {
    if !teams.is_empty() && !teams.contains(&agent.team) {
        return false;
    }
    match normalize(search) {
        Some(needle) => agent.matches(&needle),
        None => true,
    }
}

pub fn visibility(model: &OrgModel, search: &str, teams: &BTreeSet<Team>) -> BTreeMap<String, bool> {
    model
        .agents()
        .iter()
        .map(|a| (a.id.clone(), is_visible(a, search, teams)))
        .collect()
}

/// An edge is drawn at full strength only when both endpoints are visible.
pub fn edge_visible(edge: &LayoutEdge, visible: &BTreeMap<String, bool>) -> bool {
    let shown = |id: &str| visible.get(id).copied().unwrap_or(false);
    shown(&edge.source) && shown(&edge.target)
}

pub fn search_suggestions<'a>(model: &'a OrgModel, search: &str, limit: usize) -> Vec<&'a Agent> {
    let Some(needle) = normalize(search) else {
        return Vec::new();
    };
    model
        .agents()
        .iter()
        .filter(|a| a.matches(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

#[cfg(test)]
mod tests {
    use super::helpers::*;
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_selection_is_empty() {
        let model = deep_model();
        assert!(highlight_path(&model, None).is_empty());
        assert!(highlight_path(&model, Some("ghost")).is_empty());
    }

    #[test]
    fn middle_node_path() {
        let model = deep_model();
        let path = highlight_path(&model, Some("l1"));
        assert_eq!(path.ancestors, vec!["l1", "left", "root"]);
        assert_eq!(path.descendants, vec!["l1", "l1a"]);
        assert_eq!(path.node_ids, set(&["root", "left", "l1", "l1a"]));
        assert_eq!(path.edge_ids, set(&["root-left", "left-l1", "l1-l1a"]));
        assert!(!path.contains_node("l2"));
        assert!(!path.contains_edge("left-l2"));
    }

    #[test]
    fn root_path_covers_everything() {
        let model = deep_model();
        let path = highlight_path(&model, Some("root"));
        assert_eq!(path.ancestors, vec!["root"]);
        assert_eq!(path.descendants.len(), model.len());
        assert_eq!(path.edge_ids.len(), model.len() - 1);
    }

    #[test]
    fn leaf_path_is_chain() {
        let model = deep_model();
        let path = highlight_path(&model, Some("l1a"));
        assert_eq!(path.descendants, vec!["l1a"]);
        assert_eq!(path.edge_ids.len(), model.depth_of("l1a").unwrap());
    }

    #[test]
    fn visibility_defaults_to_all() {
        let model = deep_model();
        let vis = visibility(&model, "", &BTreeSet::new());
        assert!(vis.values().all(|v| *v));
        assert_eq!(vis.len(), model.len());
    }

    #[test]
    fn whitespace_is_part_of_the_needle() {
        let model = model(vec![
            named("a", None, Team::Leadership, "Alpha Lead", "Runs things"),
            named("b", Some("a"), Team::Design, "Bravo", "Visual design work"),
        ]);
        let vis = visibility(&model, " lead ", &BTreeSet::new());
        assert!(!vis["a"]);
        assert!(!vis["b"]);
        assert!(visibility(&model, " lead", &BTreeSet::new())["a"]);

        let hits: Vec<&str> = search_suggestions(&model, " ", 5)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(hits, vec!["a", "b"]);
        assert!(search_suggestions(&model, "  ", 5).is_empty());
    }

    #[test]
    fn team_filter_is_a_hard_gate() {
        let model = deep_model();
        let teams = BTreeSet::from([Team::Engineering]);
        let vis = visibility(&model, "name", &teams);
        for agent in model.agents() {
            assert_eq!(vis[&agent.id], agent.team == Team::Engineering, "{}", agent.id);
        }
        // "r1" matches the search but fails the gate.
        assert!(!visibility(&model, "r1", &teams)["r1"]);
    }

    #[test]
    fn search_matches_name_or_role_case_insensitively() {
        let model = model(vec![
            named("a", None, Team::Leadership, "Alpha Lead", "Runs things"),
            named("b", Some("a"), Team::Design, "Bravo", "Visual DESIGN work"),
        ]);
        let vis = visibility(&model, "design", &BTreeSet::new());
        assert!(!vis["a"]);
        assert!(vis["b"]);
        let vis = visibility(&model, "ALPHA", &BTreeSet::new());
        assert!(vis["a"]);
        assert!(!vis["b"]);
    }

    #[test]
    fn edge_fades_with_either_endpoint() {
        let model = deep_model();
        let teams = BTreeSet::from([Team::Engineering]);
        let vis = visibility(&model, "", &teams);
        let edge = |s: &str, t: &str| LayoutEdge {
            id: edge_id(s, t),
            source: s.into(),
            target: t.into(),
        };
        assert!(edge_visible(&edge("left", "l1"), &vis));
        assert!(!edge_visible(&edge("root", "left"), &vis));
        assert!(!edge_visible(&edge("left", "l2"), &vis));
    }

    #[test]
    fn suggestions_are_capped_and_ordered() {
        let model = deep_model();
        assert!(search_suggestions(&model, "", 5).is_empty());
        assert!(search_suggestions(&model, "xyz-no-match", 5).is_empty());

        let hits = search_suggestions(&model, "ROLE", DEFAULT_SUGGESTION_LIMIT);
        let ids: Vec<&str> = hits.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "left", "right", "l1", "l2"]);
    }

    #[test]
    fn query_toggles_teams() {
        let mut q = ChartQuery::default();
        assert!(!q.is_filtered());
        q.toggle_team(Team::Design);
        assert!(q.teams.contains(&Team::Design));
        assert!(q.is_filtered());
        q.toggle_team(Team::Design);
        assert!(q.teams.is_empty());
        q.search = " x ".into();
        assert!(q.is_filtered());
    }
}
