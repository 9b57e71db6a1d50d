//! The embedded route catalog.
//!
//! Timetables ship inside the binary and are parsed once at startup. A
//! malformed stop time is a load error, not something to skip: the data
//! is static, so a bad entry is a bug to fix before serving anything.

mod registry;
mod routes;

use tracing::debug;

use crate::domain::{RouteDefinition, RouteError};

pub use registry::{DriverRecord, driver_for_bus, driver_roster, stop_registry};
pub use routes::{RAW_ROUTES, TimetableStop};

/// Error returned when the embedded catalog fails to load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A route failed validation
    #[error("invalid route in catalog: {0}")]
    Route(#[from] RouteError),

    /// Two routes share a number
    #[error("duplicate route number in catalog: {0}")]
    DuplicateRoute(String),
}

/// Ordered, read-only list of routes.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<RouteDefinition>,
}

impl RouteCatalog {
    /// Load the embedded campus routes.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_raw(RAW_ROUTES)
    }

    /// Build a catalog from raw timetable literals.
    pub fn from_raw(raw: &[(&str, &[TimetableStop])]) -> Result<Self, CatalogError> {
        let routes = raw
            .iter()
            .map(|(number, timetable)| RouteDefinition::from_timetable(number, timetable))
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::new(routes)?;
        debug!(routes = catalog.len(), "loaded route catalog");
        Ok(catalog)
    }

    /// Build a catalog from routes, rejecting duplicate route numbers.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, CatalogError> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.number() == route.number()) {
                return Err(CatalogError::DuplicateRoute(route.number().to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// Routes in catalog order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Look up a route by number.
    pub fn get(&self, number: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.number() == number)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
