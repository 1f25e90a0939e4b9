//! Shared types for the reception API layer.

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::core_state::CoreState;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }

    /// Clinic-local wall-clock time.
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Default day for agenda queries and seeding.
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
