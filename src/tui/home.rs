//! Home view - both task lists, reordering and dialogs

use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tracing::{error, info};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{ConfirmDialog, DialogResult, ImportDialog, InfoDialog, NewTaskDialog};
use super::styles::Theme;
use crate::profile::Config;
use crate::storage::KeyValueStore;
use crate::task::{
    describe_summary, Category, DragOutcome, DropSide, DropTarget, Interest, ReorderEngine, Row,
    TaskId, TaskType, Tracker,
};


/// Every card is three lines: header, description, details.
const CARD_HEIGHT: u16 = 3;

fn pane(category: Category) -> usize {
    match category {
        Category::TimeSensitive => 0,
        Category::Regular => 1,
    }
}

#[derive(Debug, Clone, Copy)]
struct CardArea {
    category: Category,
    row: usize,
    area: Rect,
}

struct ConstantEdit {
    id: String,
    input: Input,
}

struct StatusMessage {
    text: String,
    is_error: bool,
}

enum Selection {
    Constant(String),
    Task(TaskId),
    Nothing,
}

pub struct HomeView<S> {
    tracker: Tracker<S>,
    profile: String,
    config: Config,

    // UI state
    focus: Category,
    cursors: [usize; 2],
    scroll: [usize; 2],
    engine: ReorderEngine,
    /// Pane and row a keyboard move started from.
    grab_origin: Option<(Category, usize)>,
    constant_edit: Option<ConstantEdit>,
    status: Option<StatusMessage>,

    // Dialogs
    show_help: bool,
    new_dialog: Option<NewTaskDialog>,
    confirm_dialog: Option<ConfirmDialog<TaskId>>,
    info_dialog: Option<InfoDialog>,
    import_dialog: Option<ImportDialog>,

    // Layout of the last frame, for mouse hit testing
    pane_areas: [Rect; 2],
    card_areas: Vec<CardArea>,
}

impl<S: KeyValueStore> HomeView<S> {
    pub fn new(tracker: Tracker<S>, profile: &str, config: Config) -> Self {
        let mut view = Self {
            tracker,
            profile: profile.to_string(),
            config,
            focus: Category::TimeSensitive,
            cursors: [0; 2],
            scroll: [0; 2],
            engine: ReorderEngine::new(),
            grab_origin: None,
            constant_edit: None,
            status: None,
            show_help: false,
            new_dialog: None,
            confirm_dialog: None,
            info_dialog: None,
            import_dialog: None,
            pane_areas: [Rect::default(); 2],
            card_areas: Vec::new(),
        };
        view.resume_constant_edit();
        view
    }

    pub fn tracker(&self) -> &Tracker<S> {
        &self.tracker
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.new_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.info_dialog.is_some()
            || self.import_dialog.is_some()
    }

    fn cursor(&self) -> usize {
        self.cursors[pane(self.focus)]
    }

    fn row_count(&self, category: Category) -> usize {
        self.tracker.rows(category).len()
    }

    /// Constant rows sit above the tasks and can't be dragged over.
    fn first_task_row(&self, category: Category) -> usize {
        self.tracker
            .rows(category)
            .iter()
            .take_while(|row| matches!(row, Row::Constant(_)))
            .count()
    }

    fn selection(&self) -> Selection {
        match self.tracker.rows(self.focus).get(self.cursor()) {
            Some(Row::Constant(task)) => Selection::Constant(task.id.clone()),
            Some(Row::Task(task)) => Selection::Task(task.id),
            None => Selection::Nothing,
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    fn clamp_cursors(&mut self) {
        for category in Category::ALL {
            let len = self.row_count(category);
            let cursor = &mut self.cursors[pane(category)];
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.row_count(self.focus);
        // While moving a task the slot after the last row means "end of list".
        let (min, max) = if self.engine.is_dragging() {
            (self.first_task_row(self.focus), len)
        } else if len == 0 {
            return;
        } else {
            (0, len - 1)
        };

        let cursor = self.cursors[pane(self.focus)].saturating_add_signed(delta);
        self.cursors[pane(self.focus)] = cursor.clamp(min, max.max(min));
    }

    fn select_task(&mut self, id: TaskId) {
        for category in Category::ALL {
            let row = self
                .tracker
                .rows(category)
                .iter()
                .position(|row| row.as_task().is_some_and(|t| t.id == id));
            if let Some(row) = row {
                self.focus = category;
                self.cursors[pane(category)] = row;
                return;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.new_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.new_dialog = None,
                DialogResult::Submit(mut draft) => match draft.commit(self.tracker.tasks_mut()) {
                    Ok(Some(id)) => {
                        self.new_dialog = None;
                        self.select_task(id);
                        self.set_status(format!("Added task {}", id));
                    }
                    Ok(None) => dialog.set_error("Description cannot be empty".to_string()),
                    Err(e) => {
                        error!("Failed to add task: {}", e);
                        dialog.set_error(format!("Could not save: {}", e));
                    }
                },
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.confirm_dialog = None,
                DialogResult::Submit(id) => {
                    self.confirm_dialog = None;
                    self.delete_task(id);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.info_dialog {
            if !matches!(dialog.handle_key(key), DialogResult::Continue) {
                self.info_dialog = None;
            }
            return None;
        }

        if let Some(dialog) = &mut self.import_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.import_dialog = None,
                DialogResult::Submit(path) => {
                    self.import_dialog = None;
                    self.import_from(&path);
                }
            }
            return None;
        }

        if self.constant_edit.is_some() {
            self.handle_edit_key(key);
            return None;
        }

        if self.engine.is_dragging() {
            self.handle_move_key(key);
            return None;
        }

        self.status = None;

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => self.cursors[pane(self.focus)] = 0,
            KeyCode::End | KeyCode::Char('G') => {
                let len = self.row_count(self.focus);
                self.cursors[pane(self.focus)] = len.saturating_sub(1);
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.other();
            }
            KeyCode::Char('h') | KeyCode::Char('l') => self.focus = self.focus.other(),
            KeyCode::Char('n') => {
                self.new_dialog = Some(NewTaskDialog::new(self.focus.is_time_sensitive()));
            }
            KeyCode::Char('d') | KeyCode::Delete => match self.selection() {
                Selection::Task(id) => self.confirm_delete(id),
                Selection::Constant(_) => self.set_error("Constant tasks can't be deleted"),
                Selection::Nothing => {}
            },
            KeyCode::Char('e') => match self.selection() {
                Selection::Constant(id) => self.start_constant_edit(&id),
                Selection::Task(_) => self.set_error("Only constant tasks can be edited"),
                Selection::Nothing => {}
            },
            KeyCode::Char('i') | KeyCode::Enter => self.show_details(),
            KeyCode::Char(' ') => match self.selection() {
                Selection::Task(id) => self.grab(id),
                Selection::Constant(_) => self.set_error("Constant tasks can't be moved"),
                Selection::Nothing => {}
            },
            KeyCode::Char('x') => self.export(),
            KeyCode::Char('I') => {
                let path = self.config.backup.default_export_path();
                self.import_dialog = Some(ImportDialog::new(&path));
            }
            _ => {}
        }

        None
    }

    fn confirm_delete(&mut self, id: TaskId) {
        let Some(task) = self.tracker.tasks().get(id) else {
            return;
        };
        let message = format!("Delete '{}'?", task.description);
        self.confirm_dialog = Some(ConfirmDialog::new("Delete Task", &message, id));
    }

    fn delete_task(&mut self, id: TaskId) {
        match self.tracker.tasks_mut().remove(id) {
            Ok(_) => {
                info!("Deleted task {}", id);
                self.clamp_cursors();
                self.set_status("Task deleted");
            }
            Err(e) => {
                error!("Failed to delete task {}: {}", id, e);
                self.set_error(format!("Could not delete task: {}", e));
            }
        }
    }

    fn show_details(&mut self) {
        let dialog = match self.tracker.rows(self.focus).get(self.cursor()) {
            Some(Row::Task(task)) => InfoDialog::for_task(task),
            Some(Row::Constant(task)) => InfoDialog::new(&task.label)
                .field("Task", task.description.clone())
                .field("Location", task.location.clone())
                .field("Interest", task.interest.label()),
            None => return,
        };
        self.info_dialog = Some(dialog);
    }

    fn export(&mut self) {
        let path = self.config.backup.default_export_path();
        match self.tracker.export_to_file(&path) {
            Ok(written) => self.set_status(format!("Exported to {}", written.display())),
            Err(e) => {
                error!("Export failed: {}", e);
                self.set_error(format!("Export failed: {}", e));
            }
        }
    }

    fn import_from(&mut self, path: &std::path::Path) {
        match self.tracker.import_from_file(path) {
            Ok(summary) => {
                self.clamp_cursors();
                self.resume_constant_edit();
                self.info_dialog = Some(
                    InfoDialog::new("Import Complete")
                        .field("", format!("Imported {}", describe_summary(&summary))),
                );
            }
            Err(e) => {
                error!("Import of {} failed: {}", path.display(), e);
                self.info_dialog = Some(InfoDialog::error("Import Failed", &e.to_string()));
            }
        }
    }

    // Constant task editing

    fn start_constant_edit(&mut self, id: &str) {
        if !self.tracker.constants().is_editing(id) {
            if let Err(e) = self.tracker.constants_mut().toggle_edit(id) {
                self.set_error(format!("Could not start editing: {}", e));
                return;
            }
        }
        self.resume_constant_edit();
    }

    /// Reopens the editor for a constant task left in edit mode.
    fn resume_constant_edit(&mut self) {
        self.constant_edit = self
            .tracker
            .constants()
            .tasks()
            .iter()
            .find(|t| t.editing)
            .map(|t| ConstantEdit {
                id: t.id.clone(),
                input: Input::new(t.description.clone()),
            });
    }

    /// Enter and leaving the editor (Esc, Tab) both save the typed text.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(edit) = &mut self.constant_edit else {
            return;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.commit_constant_edit()
            }
            _ => {
                edit.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn commit_constant_edit(&mut self) {
        let Some(edit) = self.constant_edit.take() else {
            return;
        };
        let text = edit.input.value().trim();
        let constants = self.tracker.constants_mut();
        // An emptied field keeps the old description
        let saved = if text.is_empty() {
            Ok(false)
        } else {
            constants.set_description(&edit.id, text)
        };
        match saved.and_then(|_| constants.toggle_edit(&edit.id)) {
            Ok(_) => self.set_status("Constant task updated"),
            Err(e) => self.set_error(format!("Could not save: {}", e)),
        }
    }

    // Reordering

    fn grab(&mut self, id: TaskId) {
        let Some(index) = self.tracker.tasks().position(id) else {
            return;
        };
        self.engine.begin(id, index);
        self.grab_origin = Some((self.focus, self.cursor()));
        self.update_keyboard_hover();
        self.set_status("Moving task: j/k pick a spot, Tab switches list, Space drops");
    }

    fn keyboard_target(&self) -> Option<DropTarget> {
        let dragged = self.engine.dragged_id()?;
        let cursor = self.cursor();
        match self.tracker.rows(self.focus).get(cursor) {
            Some(Row::Task(task)) => {
                let below_origin = matches!(
                    self.grab_origin,
                    Some((category, row)) if category == self.focus && cursor > row
                );
                let side = if task.id != dragged && below_origin {
                    DropSide::After
                } else {
                    DropSide::Before
                };
                Some(DropTarget::on_task(self.focus, task.id, side))
            }
            Some(Row::Constant(_)) => None,
            None => Some(DropTarget::end_of(self.focus)),
        }
    }

    fn update_keyboard_hover(&mut self) {
        let target = self.keyboard_target();
        self.engine.hover(target);
    }

    fn handle_move_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.other();
                self.move_cursor(0);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.finish_drag();
                return;
            }
            KeyCode::Esc => {
                self.engine.cancel();
                if let Some((category, row)) = self.grab_origin.take() {
                    self.focus = category;
                    self.cursors[pane(category)] = row;
                }
                self.set_status("Move cancelled");
                return;
            }
            _ => return,
        }
        self.update_keyboard_hover();
    }

    fn finish_drag(&mut self) {
        self.grab_origin = None;
        match self.engine.release(self.tracker.tasks_mut()) {
            Ok(DragOutcome::Committed {
                task_id, category, ..
            }) => {
                self.select_task(task_id);
                self.set_status(format!("Moved to {}", category.title()));
            }
            Ok(DragOutcome::Cancelled) => self.clamp_cursors(),
            Err(e) => {
                error!("Failed to save reorder: {}", e);
                self.clamp_cursors();
                self.set_error(format!("Could not save: {}", e));
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.has_dialog() || self.constant_edit.is_some() {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.engine.is_dragging() {
                    self.engine.cancel();
                    self.grab_origin = None;
                }
                let Some(hit) = self.card_at(x, y) else {
                    return;
                };
                self.status = None;
                self.focus = hit.category;
                self.cursors[pane(hit.category)] = hit.row;
                if let Selection::Task(id) = self.selection() {
                    if let Some(index) = self.tracker.tasks().position(id) {
                        self.engine.begin(id, index);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.engine.is_dragging() => {
                let target = self.mouse_target(x, y);
                self.engine.hover(target);
            }
            MouseEventKind::Up(MouseButton::Left) if self.engine.is_dragging() => {
                self.finish_drag();
            }
            MouseEventKind::ScrollDown => self.move_cursor(1),
            MouseEventKind::ScrollUp => self.move_cursor(-1),
            _ => {}
        }
    }

    fn card_at(&self, x: u16, y: u16) -> Option<CardArea> {
        self.card_areas
            .iter()
            .find(|card| card.area.contains(Position::new(x, y)))
            .copied()
    }

    /// Drop target under the pointer. Empty list space means the end of that
    /// list; constant cards and anything outside the lists are not targets.
    fn mouse_target(&self, x: u16, y: u16) -> Option<DropTarget> {
        if let Some(card) = self.card_at(x, y) {
            return match self.tracker.rows(card.category).get(card.row) {
                Some(Row::Task(task)) => Some(DropTarget::on_task(
                    card.category,
                    task.id,
                    DropSide::from_midpoint(y, card.area.y, card.area.height),
                )),
                _ => None,
            };
        }

        Category::ALL
            .into_iter()
            .find(|category| self.pane_areas[pane(*category)].contains(Position::new(x, y)))
            .map(DropTarget::end_of)
    }

    // Rendering

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        let mut card_areas = Vec::new();
        for category in Category::ALL {
            let block = self.pane_block(category, theme);
            let pane_area = panes[pane(category)];
            let inner = block.inner(pane_area);
            frame.render_widget(block, pane_area);

            self.adjust_scroll(category, inner.height);
            self.pane_areas[pane(category)] = inner;
            card_areas.extend(self.render_cards(frame, inner, category, theme));
        }
        self.card_areas = card_areas;

        self.render_status_bar(frame, main_chunks[1], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
        if let Some(dialog) = &self.new_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.import_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.info_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn pane_block(&self, category: Category, theme: &Theme) -> Block<'static> {
        let task_count = self
            .tracker
            .tasks()
            .iter()
            .filter(|t| Category::of(t) == category)
            .count();
        let drop_at_end = self.engine.hover_target() == Some(DropTarget::end_of(category));
        let border = if drop_at_end {
            theme.drop_marker
        } else if self.focus == category {
            theme.accent
        } else {
            theme.border
        };

        let title = match category {
            Category::TimeSensitive => format!(
                " {} ({}) [{}] ",
                category.title(),
                task_count,
                self.profile
            ),
            Category::Regular => format!(" {} ({}) ", category.title(), task_count),
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .title_style(Style::default().fg(theme.title).bold())
    }

    fn adjust_scroll(&mut self, category: Category, height: u16) {
        let visible = (height / CARD_HEIGHT).max(1) as usize;
        let cursor = self.cursors[pane(category)];
        let scroll = &mut self.scroll[pane(category)];
        if cursor < *scroll {
            *scroll = cursor;
        } else if cursor >= *scroll + visible {
            *scroll = cursor + 1 - visible;
        }
    }

    fn render_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        category: Category,
        theme: &Theme,
    ) -> Vec<CardArea> {
        let rows = self.tracker.rows(category);
        let mut cards = Vec::new();

        if rows.is_empty() && !self.engine.is_dragging() {
            let empty = vec![
                Line::from(""),
                Line::from("No tasks").style(Style::default().fg(theme.dimmed)),
                Line::from("Press 'n' to add one").style(Style::default().fg(theme.hint)),
            ];
            frame.render_widget(Paragraph::new(empty).alignment(Alignment::Center), area);
            return cards;
        }

        let scroll = self.scroll[pane(category)];
        let mut y = area.y;
        for (index, row) in rows.iter().enumerate().skip(scroll) {
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let card = Rect::new(area.x, y, area.width, CARD_HEIGHT);
            let lines = self.card_lines(category, index, row, theme);
            let selected = self.focus == category && self.cursor() == index;
            let style = if selected {
                Style::default().bg(theme.selection)
            } else {
                Style::default()
            };
            frame.render_widget(Paragraph::new(lines).style(style), card);
            cards.push(CardArea {
                category,
                row: index,
                area: card,
            });
            y += CARD_HEIGHT;
        }

        let end_slot_selected =
            self.engine.is_dragging() && self.focus == category && self.cursor() == rows.len();
        if end_slot_selected && y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "▶ drop at end of list",
                    Style::default().fg(theme.drop_marker).bold(),
                )),
                Rect::new(area.x, y, area.width, 1),
            );
        }

        cards
    }

    fn card_lines(
        &self,
        category: Category,
        index: usize,
        row: &Row<'_>,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let selected = self.focus == category && self.cursor() == index;
        let dragged = row
            .as_task()
            .is_some_and(|t| Some(t.id) == self.engine.dragged_id());
        let drop_side = match (self.engine.hover_target(), row.as_task()) {
            (Some(DropTarget { anchor: Some((id, side)), .. }), Some(task)) if id == task.id => {
                Some(side)
            }
            _ => None,
        };

        let gutter = |line: usize| -> Span<'static> {
            match drop_side {
                Some(DropSide::Before) if line == 0 => {
                    Span::styled("▲ ", Style::default().fg(theme.drop_marker).bold())
                }
                Some(DropSide::After) if line == 2 => {
                    Span::styled("▼ ", Style::default().fg(theme.drop_marker).bold())
                }
                _ if selected => Span::styled("▌ ", Style::default().fg(theme.accent)),
                _ => Span::raw("  "),
            }
        };

        let (marker, interest, label, label_color, location) = match row {
            Row::Constant(task) => (
                task.interest.marker(),
                task.interest,
                task.label.clone(),
                theme.constant,
                task.location.clone(),
            ),
            Row::Task(task) => (
                task.interest.marker(),
                task.interest,
                task.task_type().label().to_string(),
                if task.task_type() == TaskType::Hunts {
                    theme.hunt
                } else {
                    theme.text
                },
                task.location.clone(),
            ),
        };
        let marker_color = match interest {
            Interest::High => theme.high_interest,
            Interest::Low => theme.low_interest,
        };
        let dim = |color: Color| if dragged { theme.dimmed } else { color };

        let mut header = vec![
            gutter(0),
            Span::styled(format!("{} ", marker), Style::default().fg(dim(marker_color))),
            Span::styled(label, Style::default().fg(dim(label_color))),
        ];
        if !location.is_empty() {
            header.push(Span::styled(
                format!(" · {}", location),
                Style::default().fg(theme.dimmed),
            ));
        }

        let editing = match (row, &self.constant_edit) {
            (Row::Constant(task), Some(edit)) if edit.id == task.id => Some(edit),
            _ => None,
        };
        let description = match editing {
            Some(edit) => Line::from(vec![
                gutter(1),
                Span::styled(
                    edit.input.value().to_string(),
                    Style::default().fg(theme.accent),
                ),
                Span::styled("█", Style::default().fg(theme.accent)),
            ]),
            None => Line::from(vec![
                gutter(1),
                Span::styled(
                    row.description().to_string(),
                    Style::default().fg(dim(theme.text)).bold(),
                ),
            ]),
        };

        let details = match row.as_task().and_then(|t| t.hunt_details()) {
            Some(hunt) => {
                let mut parts = Vec::new();
                if !hunt.weapon.is_empty() {
                    parts.push(hunt.weapon.clone());
                }
                if !hunt.stats.is_empty() {
                    parts.push(hunt.stats.clone());
                }
                if hunt.has_ephemera {
                    parts.push("Ephemera".to_string());
                }
                parts.join(" · ")
            }
            None if editing.is_some() => "Enter/Esc save".to_string(),
            None if matches!(row, Row::Constant(_)) => "constant".to_string(),
            None => String::new(),
        };

        vec![
            Line::from(header),
            description,
            Line::from(vec![
                gutter(2),
                Span::styled(details, Style::default().fg(theme.dimmed).italic()),
            ]),
        ]
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(status) = &self.status {
            let color = if status.is_error {
                theme.error
            } else {
                theme.accent
            };
            let line = Line::from(Span::styled(
                format!(" {}", status.text),
                Style::default().fg(color),
            ));
            frame.render_widget(
                Paragraph::new(line).style(Style::default().bg(theme.selection)),
                area,
            );
            return;
        }

        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let keys: &[(&str, &str)] = if self.constant_edit.is_some() {
            &[("Enter/Esc", "Save"), ("Tab", "Save")]
        } else {
            &[
                ("j/k", "Navigate"),
                ("Tab", "Switch"),
                ("n", "New"),
                ("d", "Delete"),
                ("Space", "Move"),
                ("e", "Edit"),
                ("x/I", "Export/Import"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans = Vec::new();
        for (i, (key, desc)) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection)),
            area,
        );
    }
}
