use chrono::Local;
use tracing::{debug, error, info};

use crate::ui::components::{FieldName, RowAction, RowActions};
use crate::units::Unit;

use super::{App, EditSession, PageError};

impl App {
    /// Replace the collection with the backend's list. On failure the
    /// collection is left as it was.
    pub fn refresh(&mut self) -> Result<(), PageError> {
        let units = self
            .api
            .list()
            .inspect_err(|e| error!(error = %e, "failed to load units"))?;

        debug!(count = units.len(), "units loaded");
        self.units = units;
        let total = self.rows().len();
        self.table_state.clamp(total);
        self.last_refresh = Some(Local::now().format("%H:%M:%S").to_string());
        Ok(())
    }

    pub fn update_form_field(&mut self, name: FieldName, value: &str) {
        self.form.update_field(name, value);
    }

    /// Send the add form as a new unit, then clear it and reload.
    pub fn submit_create(&mut self) -> Result<(), PageError> {
        let fields = self.form.validate()?;
        self.api
            .create(&fields)
            .inspect_err(|e| error!(error = %e, "failed to create unit"))?;

        info!(block = %fields.block, unit_number = fields.unit_number, "unit created");
        self.form.clear();
        self.reload()
    }

    pub fn open_edit(&mut self, unit: Unit) {
        debug!(id = %unit.id, "editing unit");
        let draft = std::mem::take(&mut self.form);
        self.form.load(&unit.fields);
        self.editing = Some(EditSession { unit, draft });
        self.mode_state.to_modal();
    }

    pub fn open_edit_selected(&mut self) {
        if let Some(RowAction::Edit(unit)) = self.selected_unit().map(|u| RowActions::new(u).edit()) {
            self.open_edit(unit);
        }
    }

    /// Replace every field of the unit in the modal, reload, then close it.
    pub fn submit_edit(&mut self) -> Result<(), PageError> {
        let id = self
            .editing
            .as_ref()
            .map(|s| s.unit.id.clone())
            .ok_or(PageError::NotEditing)?;
        let fields = self.form.validate()?;

        debug!(id = %id, "updating unit");
        self.api
            .update(&id, &fields)
            .inspect_err(|e| error!(error = %e, id = %id, "failed to update unit"))?;

        info!(id = %id, "unit updated");
        let reloaded = self.reload();
        self.close_edit();
        reloaded
    }

    /// Dismiss the modal and give the add form its draft back.
    pub fn close_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            self.form = session.draft;
        }
        self.mode_state.to_normal();
    }

    pub fn delete_unit(&mut self, id: &str) -> Result<(), PageError> {
        debug!(id = %id, "deleting unit");
        self.api
            .delete(id)
            .inspect_err(|e| error!(error = %e, id = %id, "failed to delete unit"))?;

        info!(id = %id, "unit deleted");
        self.reload()
    }

    /// Refresh after a change the backend already accepted.
    fn reload(&mut self) -> Result<(), PageError> {
        self.refresh().map_err(|e| match e {
            PageError::Api(source) => PageError::Reload(source),
            other => other,
        })
    }

    pub fn delete_selected(&mut self) -> Result<(), PageError> {
        let Some(action) = self.selected_unit().map(|u| RowActions::new(u).delete()) else {
            return Ok(());
        };
        self.apply_row_action(action)
    }

    pub fn apply_row_action(&mut self, action: RowAction) -> Result<(), PageError> {
        match action {
            RowAction::Edit(unit) => {
                self.open_edit(unit);
                Ok(())
            }
            RowAction::Delete(id) => self.delete_unit(&id),
        }
    }

    /// The unit behind the highlighted table row.
    pub fn selected_unit(&self) -> Option<&Unit> {
        let rows = self.rows();
        let row = rows.get(self.table_state.selected)?;
        self.units.get(row.index)
    }

    pub fn start_add(&mut self) {
        self.mode_state.to_insert();
    }
}
