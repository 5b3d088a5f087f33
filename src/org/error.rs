/// Why an agent roster or pipeline table was refused at load time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrgError {
    #[error("no agent without a manager; the roster needs exactly one root")]
    NoRoot,

    #[error("more than one root agent: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),

    #[error("agent id `{0}` appears more than once")]
    DuplicateId(String),

    #[error("agent `{agent}` reports to unknown agent `{parent}`")]
    UnknownParent { agent: String, parent: String },

    #[error("agent `{0}` is not reachable from the root (reporting cycle)")]
    Unreachable(String),

    #[error("pipeline stage `{stage}` names unknown agent `{agent}`")]
    UnknownStageAgent { stage: String, agent: String },

    #[error("unknown team `{0}` (expected leadership, engineering, product, design or support)")]
    UnknownTeam(String),
}
