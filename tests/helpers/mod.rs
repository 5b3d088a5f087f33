use crate::org::{Agent, OrgModel, Team};

/// Create a bare agent record for testing.
/// Name and role are derived from the id so search tests can target them.
pub fn agent(id: &str, reports_to: Option<&str>, team: Team) -> Agent {
    Agent {
        id: id.to_string(),
        name: format!("{id} name"),
        role: format!("{id} role"),
        reports_to: reports_to.map(str::to_string),
        team,
        phase: None,
        tools: Vec::new(),
        responsibilities: Vec::new(),
        color: team.color().to_string(),
        icon: "*".to_string(),
        autonomy: None,
    }
}

/// Create an agent with an explicit display name and role.
pub fn named(id: &str, reports_to: Option<&str>, team: Team, name: &str, role: &str) -> Agent {
    let mut a = agent(id, reports_to, team);
    a.name = name.to_string();
    a.role = role.to_string();
    a
}

/// Build a model, panicking on invalid input.
pub fn model(agents: Vec<Agent>) -> OrgModel {
    OrgModel::new(agents).expect("test roster must be a valid tree")
}

/// The built-in roster.
pub fn fixture() -> OrgModel {
    OrgModel::fixture().expect("built-in roster must validate")
}

/// A three-level tree with a grandchild under a second-tier node:
///
/// ```text
/// root
/// ├── left
/// │   ├── l1
/// │   │   └── l1a
/// │   └── l2
/// └── right
///     └── r1
/// ```
pub fn deep_model() -> OrgModel {
    model(vec![
        agent("root", None, Team::Leadership),
        agent("left", Some("root"), Team::Engineering),
        agent("right", Some("root"), Team::Product),
        agent("l1", Some("left"), Team::Engineering),
        agent("l2", Some("left"), Team::Design),
        agent("r1", Some("right"), Team::Product),
        agent("l1a", Some("l1"), Team::Support),
    ])
}
