//! Fixed three-tier layout of the org chart.
//!
//! Tier 0 holds the root, tier 1 the root's direct reports in a fixed
//! priority order, and tier 2 everyone else, stacked in one box per tier-1
//! agent directly below that agent's column. Positions are node centers in
//! an abstract coordinate space (y grows downward) with the root at (0, 0).

use std::collections::HashSet;

use serde::Serialize;

use crate::org::{Agent, OrgModel, Team};

/// Left-to-right order of the root's direct reports. Related roles sit next
/// to each other: operations on the left, the three VPs on the right.
pub const TIER1_ORDER: &[&str] = &[
    "chief-of-staff",
    "pipeline-manager",
    "vp-engineering",
    "vp-product",
    "vp-design",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
    /// Vertical gap between members stacked inside a group box.
    pub stack_gap: f64,
    pub group_padding: f64,
    pub tier1_order: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            node_height: 70.0,
            horizontal_gap: 40.0,
            vertical_gap: 100.0,
            stack_gap: 16.0,
            group_padding: 16.0,
            tier1_order: TIER1_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LayoutConfig {
    /// Center y of a tier.
    pub fn tier_y(&self, tier: u8) -> f64 {
        f64::from(tier) * (self.node_height + self.vertical_gap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub tier: u8,
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Labeled bounding box around the tier-2 members under one tier-1 agent.
/// `x`/`y` are the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutGroup {
    pub id: String,
    pub label: String,
    pub owner: String,
    pub team: Team,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub groups: Vec<LayoutGroup>,
}

/// Axis-aligned extent of a layout, node boxes and group boxes included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ChartLayout {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn bounds(&self, config: &LayoutConfig) -> Bounds {
        let half_w = config.node_width / 2.0;
        let half_h = config.node_height / 2.0;
        let mut b = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        };
        for n in &self.nodes {
            b.min_x = b.min_x.min(n.x - half_w);
            b.max_x = b.max_x.max(n.x + half_w);
            b.min_y = b.min_y.min(n.y - half_h);
            b.max_y = b.max_y.max(n.y + half_h);
        }
        for g in &self.groups {
            b.min_x = b.min_x.min(g.x);
            b.max_x = b.max_x.max(g.x + g.width);
            b.min_y = b.min_y.min(g.y);
            b.max_y = b.max_y.max(g.y + g.height);
        }
        b
    }
}

pub fn edge_id(parent: &str, child: &str) -> String {
    format!("{parent}-{child}")
}

pub fn group_id(owner: &str) -> String {
    format!("group-{owner}")
}

/// Centers of `count` nodes laid out in a row centered on x = 0.
pub fn row_centers(count: usize, config: &LayoutConfig) -> Vec<f64> {
    let pitch = config.node_width + config.horizontal_gap;
    let total = count as f64 * config.node_width
        + count.saturating_sub(1) as f64 * config.horizontal_gap;
    let start = -total / 2.0;
    (0..count)
        .map(|i| start + i as f64 * pitch + config.node_width / 2.0)
        .collect()
}

/// The root's direct reports in priority order. Reports missing from the
/// order list follow in insertion order; listed ids that are not direct
/// reports, and repeats, are skipped.
pub fn tier1_agents<'a>(model: &'a OrgModel, order: &[String]) -> Vec<&'a Agent> {
    let direct = model.children_of(&model.root().id);
    let mut listed: HashSet<&str> = HashSet::new();
    let mut out: Vec<&Agent> = Vec::with_capacity(direct.len());
    for id in order {
        if let Some(agent) = direct.iter().find(|a| &a.id == id) {
            if listed.insert(agent.id.as_str()) {
                out.push(agent);
            }
        }
    }
    out.extend(direct.iter().filter(|a| !listed.contains(a.id.as_str())));
    out
}

pub fn layout(model: &OrgModel, config: &LayoutConfig) -> ChartLayout {
    let mut nodes = Vec::with_capacity(model.len());
    let mut groups = Vec::new();

    let root = model.root();
    nodes.push(LayoutNode {
        id: root.id.clone(),
        x: 0.0,
        y: config.tier_y(0),
        tier: 0,
        group_id: None,
    });

    let tier1 = tier1_agents(model, &config.tier1_order);
    let columns = row_centers(tier1.len(), config);
    let tier1_y = config.tier_y(1);
    let tier2_y = config.tier_y(2);

    for (agent, &x) in tier1.iter().zip(&columns) {
        nodes.push(LayoutNode {
            id: agent.id.clone(),
            x,
            y: tier1_y,
            tier: 1,
            group_id: None,
        });
    }

    for (owner, &x) in tier1.iter().zip(&columns) {
        let members = model.descendants(&owner.id);
        if members.is_empty() {
            continue;
        }
        let gid = group_id(&owner.id);
        for (i, member) in members.iter().enumerate() {
            nodes.push(LayoutNode {
                id: member.id.clone(),
                x,
                y: tier2_y + i as f64 * (config.node_height + config.stack_gap),
                tier: 2,
                group_id: Some(gid.clone()),
            });
        }

        let count = members.len() as f64;
        let pad = config.group_padding;
        groups.push(LayoutGroup {
            id: gid,
            label: owner.short_name().to_string(),
            owner: owner.id.clone(),
            team: owner.team,
            x: x - config.node_width / 2.0 - pad,
            y: tier2_y - config.node_height / 2.0 - pad,
            width: config.node_width + 2.0 * pad,
            height: count * config.node_height + (count - 1.0) * config.stack_gap + 2.0 * pad,
            members: members.iter().map(|m| m.id.clone()).collect(),
        });
    }

    let edges: Vec<LayoutEdge> = model
        .agents()
        .iter()
        .filter_map(|a| {
            a.reports_to.as_ref().map(|parent| LayoutEdge {
                id: edge_id(parent, &a.id),
                source: parent.clone(),
                target: a.id.clone(),
            })
        })
        .collect();

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        groups = groups.len(),
        "layout computed"
    );

    ChartLayout {
        nodes,
        edges,
        groups,
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

#[cfg(test)]
mod tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn row_centers_are_symmetric() {
        let cfg = LayoutConfig::default();
        assert_eq!(row_centers(1, &cfg), vec![0.0]);
        assert_eq!(row_centers(2, &cfg), vec![-110.0, 110.0]);
        assert_eq!(row_centers(5, &cfg), vec![-440.0, -220.0, 0.0, 220.0, 440.0]);
        assert!(row_centers(0, &cfg).is_empty());
    }

    #[test]
    fn fixture_tiers() {
        let model = fixture();
        let cfg = LayoutConfig::default();
        let chart = layout(&model, &cfg);

        let root = chart.node("ceo").unwrap();
        assert_eq!((root.x, root.y, root.tier), (0.0, 0.0, 0));

        let tier1: Vec<&LayoutNode> = chart.nodes.iter().filter(|n| n.tier == 1).collect();
        let ids: Vec<&str> = tier1.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, TIER1_ORDER);
        assert!(tier1.iter().all(|n| n.y == cfg.tier_y(1)));
        let xs: Vec<f64> = tier1.iter().map(|n| n.x).collect();
        for (l, r) in xs.iter().zip(xs.iter().rev()) {
            assert_eq!(*l, -*r);
        }
    }

    #[test]
    fn tier2_sits_in_owner_column() {
        let model = fixture();
        let chart = layout(&model, &LayoutConfig::default());

        for node in chart.nodes.iter().filter(|n| n.tier == 2) {
            let owner = model
                .ancestors(&node.id)
                .into_iter()
                .find(|a| model.depth_of(&a.id) == Some(1))
                .unwrap();
            assert_eq!(node.x, chart.node(&owner.id).unwrap().x, "{} column", node.id);
            assert_eq!(node.group_id.as_deref(), Some(group_id(&owner.id).as_str()));
        }
        assert_eq!(chart.nodes.len(), model.len());
    }

    #[test]
    fn groups_follow_tier1_order_and_enclose_members() {
        let model = fixture();
        let cfg = LayoutConfig::default();
        let chart = layout(&model, &cfg);

        let owners: Vec<&str> = chart.groups.iter().map(|g| g.owner.as_str()).collect();
        assert_eq!(owners, TIER1_ORDER);

        let eng = chart.groups.iter().find(|g| g.owner == "vp-engineering").unwrap();
        assert_eq!(eng.members.len(), 5);
        assert_eq!(eng.label, "VP Engineering");
        assert_eq!(eng.team, Team::Engineering);
        assert_eq!(eng.height, 5.0 * 70.0 + 4.0 * 16.0 + 32.0);
        for id in &eng.members {
            let n = chart.node(id).unwrap();
            assert!(n.x - cfg.node_width / 2.0 >= eng.x);
            assert!(n.x + cfg.node_width / 2.0 <= eng.x + eng.width);
            assert!(n.y - cfg.node_height / 2.0 >= eng.y);
            assert!(n.y + cfg.node_height / 2.0 <= eng.y + eng.height);
        }
    }

    #[test]
    fn deeper_levels_collapse_into_tier2() {
        let model = deep_model();
        let mut cfg = LayoutConfig::default();
        cfg.tier1_order = vec!["right".into(), "left".into()];
        let chart = layout(&model, &cfg);

        let left = chart.groups.iter().find(|g| g.owner == "left").unwrap();
        assert_eq!(left.members, vec!["l1", "l1a", "l2"]);
        let l1a = chart.node("l1a").unwrap();
        assert_eq!(l1a.tier, 2);
        assert_eq!(l1a.y, cfg.tier_y(2) + cfg.node_height + cfg.stack_gap);
        assert!(chart.node("right").unwrap().x < chart.node("left").unwrap().x);
    }

    #[test]
    fn unlisted_direct_reports_are_appended() {
        let model = deep_model();
        let mut cfg = LayoutConfig::default();
        cfg.tier1_order = vec!["right".into(), "ghost".into()];
        let ids: Vec<&str> = tier1_agents(&model, &cfg.tier1_order)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["right", "left"]);
    }

    #[test]
    fn repeated_order_entries_place_once() {
        let model = deep_model();
        let mut cfg = LayoutConfig::default();
        cfg.tier1_order = vec!["left".into(), "right".into(), "left".into()];
        let chart = layout(&model, &cfg);

        assert_eq!(chart.nodes.len(), model.len());
        let tier1: Vec<&str> = chart
            .nodes
            .iter()
            .filter(|n| n.tier == 1)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(tier1, vec!["left", "right"]);
        let owners: Vec<&str> = chart.groups.iter().map(|g| g.owner.as_str()).collect();
        assert_eq!(owners, vec!["left", "right"]);
    }

    #[test]
    fn one_edge_per_non_root_agent() {
        let model = fixture();
        let chart = layout(&model, &LayoutConfig::default());
        assert_eq!(chart.edges.len(), model.len() - 1);
        let ids: HashSet<&str> = chart.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), chart.edges.len());
        let e = chart.edges.iter().find(|e| e.target == "support-agent").unwrap();
        assert_eq!(e.id, "chief-of-staff-support-agent");
        assert_eq!(e.source, "chief-of-staff");
    }

    #[test]
    fn layout_is_repeatable() {
        let model = fixture();
        let cfg = LayoutConfig::default();
        assert_eq!(layout(&model, &cfg), layout(&model, &cfg));
    }

    #[test]
    fn bounds_cover_groups() {
        let model = fixture();
        let cfg = LayoutConfig::default();
        let chart = layout(&model, &cfg);
        let b = chart.bounds(&cfg);
        assert_eq!(b.min_y, -35.0);
        assert_eq!(b.min_x, -440.0 - 90.0 - 16.0);
        assert_eq!(b.max_x, 440.0 + 90.0 + 16.0);
        let eng = chart.groups.iter().find(|g| g.owner == "vp-engineering").unwrap();
        assert_eq!(b.max_y, eng.y + eng.height);
    }
}
