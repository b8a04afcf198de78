//! In-memory backend used by tests in place of the REST server.

use std::cell::RefCell;
use std::rc::Rc;

use super::{ApiError, ApiResult, Unit, UnitFields, UnitsApi};

#[derive(Default)]
struct Store {
    units: Vec<Unit>,
    offline: bool,
    list_failing: bool,
    requests: usize,
}

#[derive(Clone, Default)]
pub struct MemoryUnitsApi {
    store: Rc<RefCell<Store>>,
}

impl MemoryUnitsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(units: Vec<Unit>) -> Self {
        let api = Self::new();
        api.store.borrow_mut().units = units;
        api
    }

    pub fn set_offline(&self, offline: bool) {
        self.store.borrow_mut().offline = offline;
    }

    /// Only `list` fails; mutations still go through.
    pub fn set_list_failing(&self, failing: bool) {
        self.store.borrow_mut().list_failing = failing;
    }

    pub fn snapshot(&self) -> Vec<Unit> {
        self.store.borrow().units.clone()
    }

    pub fn request_count(&self) -> usize {
        self.store.borrow().requests
    }

    fn guard(&self) -> ApiResult<()> {
        let mut store = self.store.borrow_mut();
        store.requests += 1;
        if store.offline {
            return Err(ApiError::Unavailable("memory://units".to_string()));
        }
        Ok(())
    }

    fn not_found(method: &'static str, id: &str) -> ApiError {
        ApiError::Status {
            method,
            url: format!("memory://units/{}", id),
            status: 404,
        }
    }
}

impl UnitsApi for MemoryUnitsApi {
    fn list(&self) -> ApiResult<Vec<Unit>> {
        self.guard()?;
        if self.store.borrow().list_failing {
            return Err(ApiError::Unavailable("memory://units".to_string()));
        }
        Ok(self.snapshot())
    }

    fn create(&self, fields: &UnitFields) -> ApiResult<()> {
        self.guard()?;
        let unit = Unit {
            id: uuid::Uuid::new_v4().to_string(),
            fields: fields.clone(),
        };
        self.store.borrow_mut().units.push(unit);
        Ok(())
    }

    fn update(&self, id: &str, fields: &UnitFields) -> ApiResult<()> {
        self.guard()?;
        let mut store = self.store.borrow_mut();
        let unit = store
            .units
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::not_found("PUT", id))?;
        unit.fields = fields.clone();
        Ok(())
    }

    fn delete(&self, id: &str) -> ApiResult<()> {
        self.guard()?;
        let mut store = self.store.borrow_mut();
        let before = store.units.len();
        store.units.retain(|u| u.id != id);
        if store.units.len() == before {
            return Err(Self::not_found("DELETE", id));
        }
        Ok(())
    }

    fn location(&self) -> &str {
        "memory://units"
    }
}
