use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod fixture;

pub use error::OrgError;

pub type AgentId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Leadership,
    Engineering,
    Product,
    Design,
    Support,
}

impl Team {
    /// Left-to-right order used by the team grid and the count tables.
    pub const ALL: [Team; 5] = [
        Team::Leadership,
        Team::Engineering,
        Team::Product,
        Team::Design,
        Team::Support,
    ];

    pub fn color(self) -> &'static str {
        match self {
            Team::Leadership => "#8b5cf6",
            Team::Engineering => "#ef4444",
            Team::Product => "#06b6d4",
            Team::Design => "#ec4899",
            Team::Support => "#f59e0b",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Team::Leadership => "Leadership",
            Team::Engineering => "VP Engineering Team",
            Team::Product => "VP Product Team",
            Team::Design => "VP Design & QA Team",
            Team::Support => "Support",
        }
    }

    /// Compact label shown under a node when it has no phase.
    pub fn short_label(self) -> &'static str {
        match self {
            Team::Leadership => "Leadership",
            Team::Engineering => "Engineering",
            Team::Product => "Product",
            Team::Design => "Design & QA",
            Team::Support => "Support",
        }
    }

    /// Key that toggles this team's filter in the TUI.
    pub fn filter_key(self) -> char {
        match self {
            Team::Leadership => 'L',
            Team::Engineering => 'E',
            Team::Product => 'P',
            Team::Design => 'D',
            Team::Support => 'S',
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Leadership => write!(f, "leadership"),
            Team::Engineering => write!(f, "engineering"),
            Team::Product => write!(f, "product"),
            Team::Design => write!(f, "design"),
            Team::Support => write!(f, "support"),
        }
    }
}

impl FromStr for Team {
    type Err = OrgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrgError::UnknownTeam(s.to_string()))
    }
}

/// How much an agent may approve on its own before a human checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AutonomyLevel {
    L0,
    L1,
    L2,
}

impl AutonomyLevel {
    pub fn color(self) -> &'static str {
        match self {
            AutonomyLevel::L0 => "#3b82f6",
            AutonomyLevel::L1 => "#22c55e",
            AutonomyLevel::L2 => "#f59e0b",
        }
    }
}

impl fmt::Display for AutonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutonomyLevel::L0 => write!(f, "L0"),
            AutonomyLevel::L1 => write!(f, "L1"),
            AutonomyLevel::L2 => write!(f, "L2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autonomy {
    pub level: AutonomyLevel,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub role: String,
    pub reports_to: Option<AgentId>,
    pub team: Team,
    pub phase: Option<String>,
    pub tools: Vec<String>,
    pub responsibilities: Vec<String>,
    pub color: String,
    pub icon: String,
    pub autonomy: Option<Autonomy>,
}

impl Agent {
    /// Case-insensitive substring match against name or role.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.role.to_lowercase().contains(needle)
    }

    /// Name without the "(Claude)"-style suffix used on the root record.
    pub fn short_name(&self) -> &str {
        match self.name.find(" (") {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// The validated, immutable agent set plus its derived indexes.
#[derive(Debug, Clone)]
pub struct OrgModel {
    agents: Vec<Agent>,
    index: HashMap<AgentId, usize>,
    children: HashMap<AgentId, Vec<usize>>,
    depths: Vec<usize>,
    root: usize,
}

impl OrgModel {
    /// Validate the agent set and build the lookup indexes.
    /// Fails on duplicate ids, a missing or repeated root, a dangling
    /// `reports_to`, or any agent that cannot be reached from the root.
    pub fn new(agents: Vec<Agent>) -> Result<Self, OrgError> {
        let mut index = HashMap::with_capacity(agents.len());
        for (i, agent) in agents.iter().enumerate() {
            if index.insert(agent.id.clone(), i).is_some() {
                return Err(OrgError::DuplicateId(agent.id.clone()));
            }
        }

        let roots: Vec<usize> = agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.reports_to.is_none())
            .map(|(i, _)| i)
            .collect();
        let root = match roots.as_slice() {
            [] => return Err(OrgError::NoRoot),
            [only] => *only,
            many => {
                return Err(OrgError::MultipleRoots(
                    many.iter().map(|&i| agents[i].id.clone()).collect(),
                ))
            }
        };

        let mut children: HashMap<AgentId, Vec<usize>> = HashMap::new();
        for (i, agent) in agents.iter().enumerate() {
            if let Some(ref parent) = agent.reports_to {
                if !index.contains_key(parent) {
                    return Err(OrgError::UnknownParent {
                        agent: agent.id.clone(),
                        parent: parent.clone(),
                    });
                }
                children.entry(parent.clone()).or_default().push(i);
            }
        }

        // Breadth-first from the root; anything left unvisited sits on a cycle.
        let mut depths = vec![usize::MAX; agents.len()];
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(root, 0usize)]);
        while let Some((i, depth)) = queue.pop_front() {
            if !visited.insert(i) {
                continue;
            }
            depths[i] = depth;
            if let Some(kids) = children.get(&agents[i].id) {
                queue.extend(kids.iter().map(|&k| (k, depth + 1)));
            }
        }
        if let Some(i) = (0..agents.len()).find(|i| !visited.contains(i)) {
            return Err(OrgError::Unreachable(agents[i].id.clone()));
        }

        tracing::debug!(
            agents = agents.len(),
            root = %agents[root].id,
            "org model built"
        );

        Ok(Self {
            agents,
            index,
            children,
            depths,
            root,
        })
    }

    /// The built-in agent roster.
    pub fn fixture() -> Result<Self, OrgError> {
        Self::new(fixture::seed_agents())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.index.get(id).map(|&i| &self.agents[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn root(&self) -> &Agent {
        &self.agents[self.root]
    }

    /// Direct reports in insertion order.
    pub fn children_of(&self, id: &str) -> Vec<&Agent> {
        self.children
            .get(id)
            .map(|kids| kids.iter().map(|&i| &self.agents[i]).collect())
            .unwrap_or_default()
    }

    pub fn has_children(&self, id: &str) -> bool {
        self.children.get(id).is_some_and(|kids| !kids.is_empty())
    }

    pub fn parent_of(&self, id: &str) -> Option<&Agent> {
        self.get(id)?.reports_to.as_deref().and_then(|p| self.get(p))
    }

    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|&i| self.depths[i])
    }

    pub fn max_depth(&self) -> usize {
        self.depths.iter().copied().max().unwrap_or(0)
    }

    /// Managers of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: &str) -> Vec<&Agent> {
        let mut chain = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(agent) = current {
            chain.push(agent);
            current = self.parent_of(&agent.id);
        }
        chain
    }

    /// Everyone below `id`, in pre-order.
    pub fn descendants(&self, id: &str) -> Vec<&Agent> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, id: &str, out: &mut Vec<&'a Agent>) {
        for child in self.children_of(id) {
            out.push(child);
            self.collect_descendants(&child.id, out);
        }
    }

    pub fn team_members(&self, team: Team) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.team == team).collect()
    }

    /// Member count per team, in `Team::ALL` order.
    pub fn team_counts(&self) -> Vec<(Team, usize)> {
        Team::ALL
            .into_iter()
            .map(|t| (t, self.agents.iter().filter(|a| a.team == t).count()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
