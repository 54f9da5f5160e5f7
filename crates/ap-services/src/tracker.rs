//! `RouteTracker` — at most one route at a time.
//!
//! Each request gets a fresh [`RouteRequestId`].  Starting a request drops
//! the displayed route and supersedes any request still in flight; a reply
//! carrying an older id is ignored.

use ap_core::RouteRequestId;

use crate::{Route, ServiceResult};

/// What happened to a routing reply.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteUpdate {
    /// The reply belonged to the latest request and is now the active route.
    Shown,
    /// A newer request superseded this one; the reply was discarded.
    Stale,
    /// The latest request failed; there is no active route.
    Failed(crate::ServiceError),
}

#[derive(Debug, Default)]
pub struct RouteTracker {
    last_issued: Option<RouteRequestId>,
    pending:     Option<RouteRequestId>,
    active:      Option<Route>,
}

impl RouteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request.  Returns its id and whether a displayed route was
    /// dropped to make room for it.
    pub fn begin(&mut self) -> (RouteRequestId, bool) {
        let id = match self.last_issued {
            Some(prev) => prev.next(),
            None => RouteRequestId(0),
        };
        if let Some(old) = self.pending {
            log::debug!("route request {old} superseded by {id}");
        }
        self.last_issued = Some(id);
        self.pending = Some(id);
        let dropped = self.active.take().is_some();
        (id, dropped)
    }

    /// Apply the reply for request `id`.
    pub fn resolve(&mut self, id: RouteRequestId, reply: ServiceResult<Route>) -> RouteUpdate {
        if self.pending != Some(id) {
            return RouteUpdate::Stale;
        }
        self.pending = None;
        match reply {
            Ok(route) => {
                self.active = Some(route);
                RouteUpdate::Shown
            }
            Err(e) => RouteUpdate::Failed(e),
        }
    }

    pub fn active(&self) -> Option<&Route> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> Option<RouteRequestId> {
        self.pending
    }
}
