use crate::input::keymap::Action;
use crate::ui::components::table::PAGE_SIZES;
use crate::ui::components::MessageType;
use crate::units::SortColumn;

use super::{App, PageError};

impl App {
    pub fn execute_action(&mut self, action: Action) {
        let total = self.rows().len();

        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => self.table_state.move_down(total),
            Action::MoveUp => self.table_state.move_up(),
            Action::Top => self.table_state.top(),
            Action::Bottom => self.table_state.bottom(total),
            Action::NextPage => self.table_state.next_page(total),
            Action::PrevPage => self.table_state.prev_page(),
            Action::CyclePageSize => self.table_state.cycle_page_size(),
            Action::SortNext => self.table_state.sort_next(),
            Action::ToggleSortDirection => self.table_state.toggle_sort_direction(),
            Action::AddUnit => self.start_add(),
            Action::EditSelected => self.open_edit_selected(),
            Action::DeleteSelected => self.delete_selected_with_feedback(),
            Action::Refresh => self.refresh_with_feedback(),
            Action::EnterSearch => self.mode_state.to_search(self.table_state.search.as_deref()),
            Action::EnterCommand => self.mode_state.to_command(),
            Action::ClearSearch => self.table_state.set_search(None),
            Action::Search(query) => self.table_state.set_search(Some(query)),
            Action::ExecuteCommand(cmd) => self.execute_command(&cmd),
            _ => {}
        }
    }

    pub fn execute_command(&mut self, cmd: &str) {
        let mut parts = cmd.split_whitespace();

        match (parts.next(), parts.next()) {
            (None, _) => {}
            (Some("q" | "quit"), _) => self.should_quit = true,
            (Some("r" | "refresh"), _) => self.refresh_with_feedback(),
            (Some("add"), _) => self.start_add(),
            (Some("pagesize"), Some(size)) => self.set_page_size(size),
            (Some("sort"), Some(column)) => self.sort_by_name(column),
            (Some(other), _) => self.set_message(&format!("Unknown command: {}", other), MessageType::Error),
        }
    }

    fn refresh_with_feedback(&mut self) {
        match self.refresh() {
            Ok(()) => self.set_message(&format!("Loaded {} units", self.units.len()), MessageType::Info),
            Err(e) => self.report("Could not load units", &e),
        }
    }

    fn delete_selected_with_feedback(&mut self) {
        if self.selected_unit().is_none() {
            return;
        }
        match self.delete_selected() {
            Ok(()) => self.set_message("Unit deleted", MessageType::Success),
            Err(PageError::Reload(e)) => {
                self.set_message(&format!("Unit deleted; reload failed: {}", e), MessageType::Error)
            }
            Err(e) => self.report("Could not delete unit", &e),
        }
    }

    fn set_page_size(&mut self, size: &str) {
        let applied = size.parse::<usize>().is_ok_and(|n| self.table_state.set_page_size(n));
        if applied {
            let total = self.rows().len();
            self.table_state.clamp(total);
        } else {
            self.set_message(&format!("Page size must be one of {:?}", PAGE_SIZES), MessageType::Error);
        }
    }

    fn sort_by_name(&mut self, name: &str) {
        match SortColumn::parse(name) {
            Some(column) => self.table_state.sort_by(column),
            None => self.set_message(&format!("Unknown column: {}", name), MessageType::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::units::SortDirection;

    fn many(n: usize) -> Vec<crate::units::Unit> {
        (0..n)
            .map(|i| unit(&i.to_string(), "A", i as i64 + 1, 1, &format!("Resident {}", i), "555"))
            .collect()
    }

    #[test]
    fn test_quit_commands() {
        let (mut app, _api) = app_with(Vec::new());
        app.execute_command("quit");
        assert!(app.should_quit);

        let (mut app, _api) = app_with(Vec::new());
        app.execute_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_pagesize_command() {
        let (mut app, _api) = app_with(many(12));
        app.mount();
        app.execute_command("pagesize 10");
        assert_eq!(app.table_state.page_size, 10);

        app.execute_command("pagesize 7");
        assert_eq!(app.table_state.page_size, 10);
        let (_, kind, _) = app.message.as_ref().unwrap();
        assert_eq!(*kind, MessageType::Error);
    }

    #[test]
    fn test_sort_command() {
        let (mut app, _api) = app_with(many(3));
        app.mount();
        app.execute_command("sort floor");
        assert_eq!(app.table_state.sort, Some((SortColumn::Floor, SortDirection::Ascending)));

        app.execute_command("sort colour");
        assert_eq!(app.message.as_ref().unwrap().0, "Unknown column: colour");
    }

    #[test]
    fn test_unknown_command() {
        let (mut app, _api) = app_with(Vec::new());
        app.execute_command("launch");
        assert_eq!(app.message.as_ref().unwrap().0, "Unknown command: launch");
        app.message = None;
        app.execute_command("   ");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_refresh_action_picks_up_backend_changes() {
        let (mut app, api) = app_with(many(2));
        app.mount();
        api.set_offline(true);
        app.execute_action(Action::Refresh);
        assert_eq!(app.message.as_ref().unwrap().1, MessageType::Error);

        api.set_offline(false);
        app.execute_command("r");
        assert_eq!(app.message.as_ref().unwrap().0, "Loaded 2 units");
    }

    #[test]
    fn test_paging_actions() {
        let (mut app, _api) = app_with(many(12));
        app.mount();
        app.execute_action(Action::NextPage);
        assert_eq!(app.table_state.selected, 5);
        assert_eq!(app.table_state.summary(12, 12), "Showing 6 to 10 of 12 entries");
        app.execute_action(Action::Bottom);
        assert_eq!(app.table_state.selected, 11);
        app.execute_action(Action::Top);
        assert_eq!(app.table_state.selected, 0);
    }

    #[test]
    fn test_delete_action_reports_failure() {
        let (mut app, api) = app_with(many(1));
        app.mount();
        api.set_offline(true);
        app.execute_action(Action::DeleteSelected);
        assert_eq!(app.units.len(), 1);
        assert!(app.message.as_ref().unwrap().0.starts_with("Could not delete unit"));
    }

    #[test]
    fn test_delete_on_empty_table_is_silent() {
        let (mut app, api) = app_with(Vec::new());
        app.mount();
        let before = api.request_count();
        app.execute_action(Action::DeleteSelected);
        assert_eq!(api.request_count(), before);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_delete_reported_as_done_when_reload_fails() {
        let (mut app, api) = app_with(many(2));
        app.mount();
        api.set_list_failing(true);
        app.execute_action(Action::DeleteSelected);

        assert_eq!(api.snapshot().len(), 1);
        assert!(app.message.as_ref().unwrap().0.starts_with("Unit deleted; reload failed"));
    }
}
