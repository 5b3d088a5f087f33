//! The built-in agent roster (roster v2.0).

use super::{Agent, Autonomy, AutonomyLevel, Team};

struct Seed {
    id: &'static str,
    name: &'static str,
    role: &'static str,
    reports_to: Option<&'static str>,
    team: Team,
    phase: Option<&'static str>,
    tools: &'static [&'static str],
    responsibilities: &'static [&'static str],
    color: &'static str,
    icon: &'static str,
    autonomy: Option<(AutonomyLevel, &'static str)>,
}

impl From<&Seed> for Agent {
    fn from(s: &Seed) -> Self {
        Agent {
            id: s.id.to_string(),
            name: s.name.to_string(),
            role: s.role.to_string(),
            reports_to: s.reports_to.map(str::to_string),
            team: s.team,
            phase: s.phase.map(str::to_string),
            tools: s.tools.iter().map(|t| t.to_string()).collect(),
            responsibilities: s.responsibilities.iter().map(|r| r.to_string()).collect(),
            color: s.color.to_string(),
            icon: s.icon.to_string(),
            autonomy: s.autonomy.map(|(level, description)| Autonomy {
                level,
                description: description.to_string(),
            }),
        }
    }
}

pub fn seed_agents() -> Vec<Agent> {
    SEED.iter().map(Agent::from).collect()
}

const SEED: &[Seed] = &[
    // Leadership
    Seed {
        id: "ceo",
        name: "CEO (Claude)",
        role: "Strategic orchestration, user interaction, multi-agent coordination",
        reports_to: None,
        team: Team::Leadership,
        phase: None,
        tools: &["All tools", "Task delegation", "Direct user communication"],
        responsibilities: &[
            "Strategic decision making",
            "User interaction and communication",
            "Multi-agent coordination",
            "Final approvals on critical decisions",
        ],
        color: "#3b82f6",
        icon: "👑",
        autonomy: None,
    },
    Seed {
        id: "chief-of-staff",
        name: "Chief of Staff",
        role: "Notion ops, business tracking, admin coordination",
        reports_to: Some("ceo"),
        team: Team::Leadership,
        phase: None,
        tools: &["Notion MCP", "Bash", "Read/Write", "WebFetch"],
        responsibilities: &[
            "Notion workspace management",
            "Business venture tracking",
            "Memory management",
            "Task board coordination",
        ],
        color: "#8b5cf6",
        icon: "📋",
        autonomy: None,
    },
    Seed {
        id: "pipeline-manager",
        name: "Pipeline Manager",
        role: "Project lifecycle coordination, handoffs, progress tracking",
        reports_to: Some("ceo"),
        team: Team::Leadership,
        phase: None,
        tools: &["Notion MCP", "Task tool", "Read/Write", "Bash"],
        responsibilities: &[
            "Orchestrate projects through pipeline",
            "Coordinate handoffs between agents",
            "Track progress and blockers",
            "Manage parallel execution",
        ],
        color: "#10b981",
        icon: "🔄",
        autonomy: None,
    },
    Seed {
        id: "autopilot-agent",
        name: "Autopilot Agent",
        role: "Autonomous checkpoint approval, overnight operations",
        reports_to: Some("pipeline-manager"),
        team: Team::Leadership,
        phase: None,
        tools: &["Read", "Notion MCP", "Bash", "WebFetch"],
        responsibilities: &[
            "Auto-approve low-risk checkpoints",
            "Escalate blockers and critical errors",
            "Generate morning summary reports",
            "Track costs and budget limits",
        ],
        color: "#f59e0b",
        icon: "🤖",
        autonomy: None,
    },
    // VP layer
    Seed {
        id: "vp-engineering",
        name: "VP Engineering",
        role: "Technical execution, code quality, infrastructure oversight",
        reports_to: Some("ceo"),
        team: Team::Engineering,
        phase: None,
        tools: &["Task tool", "GitHub MCP", "Supabase MCP", "Read/Write"],
        responsibilities: &[
            "Oversee all technical execution",
            "Coordinate engineering team",
            "Enforce technical standards",
            "Quality gate approvals",
        ],
        color: "#ef4444",
        icon: "⚙️",
        autonomy: None,
    },
    Seed {
        id: "vp-product",
        name: "VP Product",
        role: "Product strategy, research, requirements, growth",
        reports_to: Some("ceo"),
        team: Team::Product,
        phase: None,
        tools: &["Task tool", "Notion MCP", "Perplexity MCP", "WebSearch"],
        responsibilities: &[
            "Product strategy alignment",
            "Research coordination",
            "Launch strategy oversight",
            "Success metrics definition",
        ],
        color: "#06b6d4",
        icon: "📊",
        autonomy: None,
    },
    Seed {
        id: "vp-design",
        name: "VP Design & QA",
        role: "UX, visual design, quality assurance, documentation",
        reports_to: Some("ceo"),
        team: Team::Design,
        phase: None,
        tools: &["Task tool", "Notion MCP", "Figma MCP", "Playwright MCP"],
        responsibilities: &[
            "Design standards oversight",
            "QA coordination",
            "Documentation quality",
            "Release readiness sign-off",
        ],
        color: "#ec4899",
        icon: "🎨",
        autonomy: None,
    },
    // Engineering
    Seed {
        id: "architect",
        name: "Architect",
        role: "Tech stack, system design, database schema, API design",
        reports_to: Some("vp-engineering"),
        team: Team::Engineering,
        phase: Some("Phase 3B"),
        tools: &["GitHub MCP", "Notion MCP", "Read", "WebSearch"],
        responsibilities: &[
            "Tech stack selection",
            "System architecture design",
            "Database schema design",
            "API design and contracts",
        ],
        color: "#ef4444",
        icon: "🏗️",
        autonomy: Some((AutonomyLevel::L1, "Auto-approve if standard stack")),
    },
    Seed {
        id: "developer",
        name: "Developer",
        role: "Build applications, implement features, deploy to preview",
        reports_to: Some("vp-engineering"),
        team: Team::Engineering,
        phase: Some("Phase 5A"),
        tools: &["GitHub MCP", "Supabase MCP", "Netlify MCP", "File tools", "Bash"],
        responsibilities: &[
            "Project setup and initialization",
            "Frontend and backend development",
            "Database implementation",
            "Deployment to preview",
        ],
        color: "#ef4444",
        icon: "💻",
        autonomy: Some((AutonomyLevel::L0, "Auto-approve if build + tests pass")),
    },
    Seed {
        id: "devops-engineer",
        name: "DevOps Engineer",
        role: "CI/CD, infrastructure, monitoring, deployment automation",
        reports_to: Some("vp-engineering"),
        team: Team::Engineering,
        phase: Some("Phase 9"),
        tools: &["GitHub MCP", "Netlify MCP", "Supabase MCP", "Bash", "Security Scanner"],
        responsibilities: &[
            "CI/CD pipeline setup",
            "Environment management",
            "Monitoring and alerts",
            "Production deployment",
        ],
        color: "#ef4444",
        icon: "🚀",
        autonomy: Some((AutonomyLevel::L1, "Auto-approve if CI/CD passes")),
    },
    Seed {
        id: "code-reviewer",
        name: "Code Reviewer",
        role: "PR reviews, code quality, best practices enforcement",
        reports_to: Some("vp-engineering"),
        team: Team::Engineering,
        phase: Some("Phase 6B"),
        tools: &["GitHub MCP", "Read", "Grep", "Glob", "Security Scanner"],
        responsibilities: &[
            "PR code reviews",
            "Code quality enforcement",
            "Security issue detection",
            "Best practices guidance",
        ],
        color: "#ef4444",
        icon: "👀",
        autonomy: Some((AutonomyLevel::L0, "Auto-approve if no critical issues")),
    },
    Seed {
        id: "security-engineer",
        name: "Security Engineer",
        role: "Vulnerability scanning, security audits, clearance",
        reports_to: Some("vp-engineering"),
        team: Team::Engineering,
        phase: Some("Phase 7"),
        tools: &["Security Scanner", "GitHub MCP", "Bash", "Read/Grep", "Notion MCP"],
        responsibilities: &[
            "Dependency audits",
            "Secret detection",
            "Code security analysis",
            "Security clearance sign-off",
        ],
        color: "#ef4444",
        icon: "🔒",
        autonomy: Some((AutonomyLevel::L2, "Always requires checkpoint")),
    },
    // Product
    Seed {
        id: "product-researcher",
        name: "Product Researcher",
        role: "Market research, competitor analysis, GO/NO-GO validation",
        reports_to: Some("vp-product"),
        team: Team::Product,
        phase: Some("Phase 2"),
        tools: &["Perplexity MCP", "Composio (Reddit)", "WebSearch", "WebFetch", "Notion MCP"],
        responsibilities: &[
            "Market research",
            "Competitor analysis",
            "User research",
            "Feasibility assessment",
        ],
        color: "#06b6d4",
        icon: "🔍",
        autonomy: Some((AutonomyLevel::L1, "Auto-approve if GO + 3 sources")),
    },
    Seed {
        id: "product-manager",
        name: "Product Manager",
        role: "Requirements, MVP scoping, user stories, success metrics",
        reports_to: Some("vp-product"),
        team: Team::Product,
        phase: Some("Phase 3A"),
        tools: &["Notion MCP", "Read"],
        responsibilities: &[
            "Requirements definition",
            "MVP scope definition",
            "User story creation",
            "Success metrics",
        ],
        color: "#06b6d4",
        icon: "📝",
        autonomy: Some((AutonomyLevel::L2, "Always requires checkpoint")),
    },
    Seed {
        id: "data-engineer",
        name: "Data Engineer",
        role: "Analytics, data pipelines, dashboards, metrics tracking",
        reports_to: Some("vp-product"),
        team: Team::Product,
        phase: Some("Phase 5B"),
        tools: &["Supabase MCP", "Notion MCP", "Bash", "Read/Write"],
        responsibilities: &[
            "Analytics schema setup",
            "Event tracking implementation",
            "Dashboard creation",
            "Metrics reporting",
        ],
        color: "#06b6d4",
        icon: "📈",
        autonomy: Some((AutonomyLevel::L0, "Auto-approve on completion")),
    },
    Seed {
        id: "growth-marketer",
        name: "Growth Marketer",
        role: "Landing pages, SEO, app store optimization, launch strategy",
        reports_to: Some("vp-product"),
        team: Team::Product,
        phase: Some("Phase 8B"),
        tools: &["WebSearch", "Perplexity MCP", "Notion MCP", "GitHub MCP", "Netlify MCP"],
        responsibilities: &[
            "Launch strategy planning",
            "Landing page creation",
            "SEO optimization",
            "Growth experiments",
        ],
        color: "#06b6d4",
        icon: "📣",
        autonomy: Some((AutonomyLevel::L1, "Auto-approve if plan complete")),
    },
    // Design & QA
    Seed {
        id: "frontend-designer",
        name: "Frontend Designer",
        role: "UI/UX design, mockups, design systems, component specs",
        reports_to: Some("vp-design"),
        team: Team::Design,
        phase: Some("Phase 4"),
        tools: &["Notion MCP", "WebSearch", "Read/Write", "Gemini MCP"],
        responsibilities: &[
            "Design direction setting",
            "Visual mockup creation",
            "Design system definition",
            "Component specifications",
        ],
        color: "#ec4899",
        icon: "✨",
        autonomy: Some((AutonomyLevel::L2, "Always requires checkpoint")),
    },
    Seed {
        id: "user-testing",
        name: "User Testing",
        role: "E2E tests, cross-browser, accessibility, performance",
        reports_to: Some("vp-design"),
        team: Team::Design,
        phase: Some("Phase 6A"),
        tools: &["Playwright MCP", "Puppeteer MCP", "Sentry MCP", "Notion MCP", "WebFetch"],
        responsibilities: &[
            "E2E test execution",
            "Cross-browser testing",
            "Accessibility audits",
            "Performance testing",
        ],
        color: "#ec4899",
        icon: "🧪",
        autonomy: Some((AutonomyLevel::L1, "Auto-approve if no P0/P1 bugs")),
    },
    Seed {
        id: "technical-writer",
        name: "Technical Writer",
        role: "Documentation, README, user guides, handoff summaries",
        reports_to: Some("vp-design"),
        team: Team::Design,
        phase: Some("Phase 8A"),
        tools: &["Notion MCP", "GitHub MCP", "Read"],
        responsibilities: &[
            "README documentation",
            "User guide creation",
            "API documentation",
            "Handoff summary",
        ],
        color: "#ec4899",
        icon: "📚",
        autonomy: Some((AutonomyLevel::L0, "Auto-approve if docs complete")),
    },
    // Support
    Seed {
        id: "support-agent",
        name: "Support Agent",
        role: "User feedback, bug reports, FAQs, customer communication",
        reports_to: Some("chief-of-staff"),
        team: Team::Support,
        phase: None,
        tools: &["Notion MCP", "GitHub MCP", "Slack MCP", "WebSearch", "Read/Write"],
        responsibilities: &[
            "Feedback processing",
            "Bug report logging",
            "FAQ management",
            "User communication",
        ],
        color: "#f59e0b",
        icon: "💬",
        autonomy: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::OrgModel;

    #[test]
    fn seed_builds_a_valid_model() {
        let model = OrgModel::fixture().unwrap();
        assert_eq!(model.len(), SEED.len());
        assert_eq!(model.root().id, "ceo");
        assert_eq!(model.max_depth(), 2);
    }

    #[test]
    fn autonomy_only_on_pipeline_agents() {
        for agent in seed_agents() {
            assert_eq!(
                agent.autonomy.is_some(),
                agent.phase.is_some(),
                "autonomy/phase mismatch for {}",
                agent.id
            );
        }
    }

    #[test]
    fn support_reports_into_leadership() {
        let model = OrgModel::fixture().unwrap();
        let support = model.get("support-agent").unwrap();
        assert_eq!(support.team, Team::Support);
        assert_eq!(model.parent_of("support-agent").unwrap().team, Team::Leadership);
    }
}
