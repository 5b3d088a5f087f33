use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::layout::{layout, ChartLayout, LayoutConfig};
use crate::org::{Agent, OrgModel, Team};
use crate::pipeline::{group_stages, PIPELINE};
use crate::query::{
    highlight_path, is_visible, search_suggestions, ChartQuery, HighlightPath,
    DEFAULT_SUGGESTION_LIMIT,
};

/// Which presentation of the roster fills the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Hierarchy,
    Pipeline,
    Teams,
    Graph,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Hierarchy,
        ViewMode::Pipeline,
        ViewMode::Teams,
        ViewMode::Graph,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Hierarchy => "Organization Tree",
            ViewMode::Pipeline => "Pipeline",
            ViewMode::Teams => "Teams",
            ViewMode::Graph => "Graph",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ViewMode::Hierarchy => ViewMode::Pipeline,
            ViewMode::Pipeline => ViewMode::Teams,
            ViewMode::Teams => ViewMode::Graph,
            ViewMode::Graph => ViewMode::Hierarchy,
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hierarchy" | "tree" => Ok(ViewMode::Hierarchy),
            "pipeline" => Ok(ViewMode::Pipeline),
            "teams" | "team" => Ok(ViewMode::Teams),
            "graph" => Ok(ViewMode::Graph),
            other => Err(format!("unknown view `{other}`")),
        }
    }
}

/// A flattened row in the active view, ready for rendering.
#[derive(Debug, Clone)]
pub struct ViewRow {
    pub agent_id: Option<String>,
    pub display_name: String,
    pub label: String,        // phase or team, stage label, or tier
    pub icon: String,
    pub team: Option<Team>,
    pub depth: usize,         // nesting depth for indentation
    pub is_header: bool,      // team headers in the team view
    pub is_expanded: bool,
    pub has_children: bool,
    pub parallel: bool,       // pipeline branch that runs alongside its sibling
    pub visible: bool,
    pub highlighted: bool,
}

/// Which panel is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    View,
    Detail,
}

pub struct App {
    pub model: OrgModel,
    pub layout_config: LayoutConfig,
    pub chart: ChartLayout,
    pub should_quit: bool,

    pub view: ViewMode,
    pub rows: Vec<ViewRow>,
    pub selected_index: usize,
    pub collapsed: HashSet<String>,

    // Selection, search text and team filters.
    pub query: ChartQuery,
    pub highlight: HighlightPath,

    pub focus: FocusPanel,
    pub detail_scroll: u16,

    pub search_mode: bool,
}

impl App {
    pub fn new(model: OrgModel, layout_config: LayoutConfig) -> Self {
        let chart = layout(&model, &layout_config);
        // The top two levels start open; anything deeper starts collapsed.
        let collapsed: HashSet<String> = model
            .agents()
            .iter()
            .filter(|a| model.depth_of(&a.id).is_some_and(|d| d >= 2) && model.has_children(&a.id))
            .map(|a| a.id.clone())
            .collect();
        let mut app = Self {
            model,
            layout_config,
            chart,
            should_quit: false,
            view: ViewMode::Hierarchy,
            rows: Vec::new(),
            selected_index: 0,
            collapsed,
            query: ChartQuery::default(),
            highlight: HighlightPath::default(),
            focus: FocusPanel::View,
            detail_scroll: 0,
            search_mode: false,
        };
        app.rebuild_rows();
        app
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.query.selected.as_deref().and_then(|id| self.model.get(id))
    }

    /// Current suggestions for the search text.
    pub fn suggestions(&self) -> Vec<&Agent> {
        search_suggestions(&self.model, &self.query.search, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Rebuild the rows of the active view from the model + query state.
    pub fn rebuild_rows(&mut self) {
        self.highlight = highlight_path(&self.model, self.query.selected.as_deref());

        let mut rows = Vec::new();
        match self.view {
            ViewMode::Hierarchy => {
                let root = self.model.root();
                self.flatten_agent(root, 0, &mut rows);
            }
            ViewMode::Pipeline => {
                for group in group_stages(PIPELINE) {
                    for stage in group.stages {
                        if let Some(agent) = self.model.get(stage.agent_id) {
                            let mut row = self.agent_row(agent, 0);
                            row.display_name = stage.display_name.to_string();
                            row.label = format!("{:>3}", stage.stage_label);
                            row.parallel = group.parallel;
                            rows.push(row);
                        }
                    }
                }
            }
            ViewMode::Teams => {
                for (team, count) in self.model.team_counts() {
                    rows.push(ViewRow {
                        agent_id: None,
                        display_name: team.display_name().to_string(),
                        label: format!("{count} agents"),
                        icon: String::new(),
                        team: Some(team),
                        depth: 0,
                        is_header: true,
                        is_expanded: true,
                        has_children: count > 0,
                        parallel: false,
                        visible: self.query.teams.is_empty() || self.query.teams.contains(&team),
                        highlighted: false,
                    });
                    for agent in self.model.team_members(team) {
                        rows.push(self.agent_row(agent, 1));
                    }
                }
            }
            ViewMode::Graph => {
                for node in &self.chart.nodes {
                    if let Some(agent) = self.model.get(&node.id) {
                        let mut row = self.agent_row(agent, usize::from(node.tier));
                        row.label = format!("tier {}", node.tier);
                        rows.push(row);
                    }
                }
            }
        }

        self.rows = rows;
        if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }
    }

    fn agent_row(&self, agent: &Agent, depth: usize) -> ViewRow {
        ViewRow {
            agent_id: Some(agent.id.clone()),
            display_name: agent.name.clone(),
            label: agent
                .phase
                .clone()
                .unwrap_or_else(|| agent.team.short_label().to_string()),
            icon: agent.icon.clone(),
            team: Some(agent.team),
            depth,
            is_header: false,
            is_expanded: false,
            has_children: false,
            parallel: false,
            visible: is_visible(agent, &self.query.search, &self.query.teams),
            highlighted: self.highlight.contains_node(&agent.id),
        }
    }

    fn flatten_agent(&self, agent: &Agent, depth: usize, rows: &mut Vec<ViewRow>) {
        let is_expanded = !self.collapsed.contains(&agent.id);
        let has_children = self.model.has_children(&agent.id);

        let mut row = self.agent_row(agent, depth);
        row.is_expanded = is_expanded;
        row.has_children = has_children;
        rows.push(row);

        if has_children && is_expanded {
            for child in self.model.children_of(&agent.id) {
                self.flatten_agent(child, depth + 1, rows);
            }
        }
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if self.view == view {
            return;
        }
        tracing::debug!(?view, "switching view");
        self.view = view;
        self.selected_index = 0;
        self.rebuild_rows();
        self.focus_selected_row();
    }

    /// Select an agent by id. Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<&str>) {
        let id = id.filter(|id| self.model.contains(id)).map(str::to_string);
        if self.query.selected == id {
            return;
        }
        tracing::debug!(selected = ?id, "selection changed");
        self.query.selected = id;
        self.detail_scroll = 0;
        self.rebuild_rows();
    }

    /// Move the cursor to the row of the selected agent, expanding its
    /// managers in the hierarchy if they were collapsed.
    pub fn focus_selected_row(&mut self) {
        let Some(id) = self.query.selected.clone() else {
            return;
        };
        if self.view == ViewMode::Hierarchy {
            let managers: Vec<String> = self
                .model
                .ancestors(&id)
                .iter()
                .map(|a| a.id.clone())
                .collect();
            let before = self.collapsed.len();
            for m in &managers {
                self.collapsed.remove(m);
            }
            if self.collapsed.len() != before {
                self.rebuild_rows();
            }
        }
        if let Some(idx) = self
            .rows
            .iter()
            .position(|r| r.agent_id.as_deref() == Some(id.as_str()))
        {
            self.selected_index = idx;
        }
    }

    pub fn toggle_team_filter(&mut self, team: Team) {
        self.query.toggle_team(team);
        tracing::debug!(teams = ?self.query.teams, "team filter changed");
        self.rebuild_rows();
    }

    pub fn clear_query(&mut self) {
        self.query.search.clear();
        self.query.teams.clear();
        self.rebuild_rows();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.search_mode {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll(-1),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => self.toggle_expand(),
            KeyCode::Char('h') | KeyCode::Left => self.collapse_current(),
            KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('g') => self.select_first(),
            KeyCode::Char('/') => {
                self.search_mode = true;
                self.query.search.clear();
                self.rebuild_rows();
            }
            KeyCode::Char('c') => self.clear_query(),
            KeyCode::Char('v') => self.set_view(self.view.next()),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.set_view(ViewMode::ALL[idx]);
            }
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                if let Some(team) = Team::ALL.into_iter().find(|t| t.filter_key() == c) {
                    self.toggle_team_filter(team);
                }
            }
            KeyCode::Esc => self.select(None),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::PageDown => self.scroll(10),
            KeyCode::PageUp => self.scroll(-10),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll(-3),
            MouseEventKind::ScrollDown => self.scroll(3),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_mode = false;
                self.query.search.clear();
                self.rebuild_rows();
            }
            KeyCode::Enter => {
                self.search_mode = false;
                self.jump_to_search_match();
            }
            KeyCode::Backspace => {
                self.query.search.pop();
                self.rebuild_rows();
            }
            KeyCode::Char(c) => {
                self.query.search.push(c);
                self.rebuild_rows();
            }
            _ => {}
        }
    }

    fn scroll(&mut self, delta: i32) {
        match self.focus {
            FocusPanel::View => self.move_selection(delta),
            FocusPanel::Detail => {
                let next = i32::from(self.detail_scroll) + delta;
                self.detail_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
            }
        }
    }

    fn move_selection(&mut self, delta: i32) {
        if self.rows.is_empty() {
            return;
        }
        let new_idx = self.selected_index as i32 + delta;
        self.selected_index = new_idx.clamp(0, self.rows.len() as i32 - 1) as usize;
        self.sync_selection();
    }

    fn select_first(&mut self) {
        self.selected_index = 0;
        self.sync_selection();
    }

    fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = self.rows.len() - 1;
            self.sync_selection();
        }
    }

    /// The cursor row's agent becomes the selection; header rows keep it.
    fn sync_selection(&mut self) {
        let id = self
            .rows
            .get(self.selected_index)
            .and_then(|r| r.agent_id.clone());
        if id.is_some() {
            self.select(id.as_deref());
        }
    }

    fn toggle_expand(&mut self) {
        if self.view != ViewMode::Hierarchy {
            self.sync_selection();
            return;
        }
        if let Some(row) = self.rows.get(self.selected_index) {
            if row.has_children {
                if let Some(id) = row.agent_id.clone() {
                    if !self.collapsed.remove(&id) {
                        self.collapsed.insert(id);
                    }
                    self.rebuild_rows();
                }
            }
        }
    }

    fn collapse_current(&mut self) {
        if self.view != ViewMode::Hierarchy {
            return;
        }
        if let Some(row) = self.rows.get(self.selected_index) {
            if let Some(id) = row.agent_id.clone() {
                if row.has_children && self.collapsed.insert(id) {
                    self.rebuild_rows();
                }
            }
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::View => FocusPanel::Detail,
            FocusPanel::Detail => FocusPanel::View,
        };
    }

    fn jump_to_search_match(&mut self) {
        let first = self.suggestions().first().map(|a| a.id.clone());
        if let Some(id) = first {
            self.select(Some(&id));
            self.focus_selected_row();
        }
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
