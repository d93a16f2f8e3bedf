use crate::domain::plan::{PlanRequest, PlanResponse};
use crate::fetch::ScoringService;

/// The single user-facing message all plan-path failures collapse into:
/// transport errors, non-2xx statuses and unparseable bodies alike.
pub const PLAN_UNAVAILABLE: &str =
    "Plan unavailable right now. Adjust a setting or refresh to try again.";

/// Proof that a request was issued against a particular generation of the
/// parameter state. Settling with an outdated ticket is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Race-reconciliation core for the plan cycle. Last request wins: a
/// response is committed only if no newer request was issued since it
/// started. Superseded responses are discarded on arrival; the transport
/// is never aborted.
#[derive(Debug, Default)]
pub struct PlanState {
    generation: u64,
    loading: bool,
    error: Option<String>,
    plan: Option<PlanResponse>,
    last_request: Option<PlanRequest>,
}

impl PlanState {
    /// Starts a new request cycle: bumps the generation, clears any error
    /// and enters the loading state. Returns `None` when the same
    /// parameter tuple is already in flight or committed without error,
    /// so each distinct tuple goes out at most once. A tuple that
    /// previously failed may be reissued (the explicit-refresh path).
    pub fn issue(&mut self, req: &PlanRequest) -> Option<Ticket> {
        let same_tuple = self.last_request.as_ref() == Some(req);
        if same_tuple && self.error.is_none() && (self.loading || self.plan.is_some()) {
            return None;
        }

        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.last_request = Some(req.clone());
        Some(Ticket(self.generation))
    }

    /// Applies a completed fetch. Returns `false` when the ticket was
    /// superseded and the result discarded. On failure for the current
    /// generation the error flag is set and any previously committed plan
    /// is left untouched.
    pub fn settle(&mut self, ticket: Ticket, outcome: anyhow::Result<PlanResponse>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale plan response"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(plan) => {
                self.plan = Some(plan);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "plan fetch failed");
                self.error = Some(PLAN_UNAVAILABLE.to_string());
            }
        }
        true
    }

    pub fn plan(&self) -> Option<&PlanResponse> {
        self.plan.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_request(&self) -> Option<&PlanRequest> {
        self.last_request.as_ref()
    }
}

/// Drives one request/settle cycle against a scoring service. The state
/// is owned here and only ever touched from the caller's task, so the
/// last-request-wins guarantee rests on the generation compare alone.
pub struct PlanFetcher<C> {
    client: C,
    state: PlanState,
}

impl<C: ScoringService> PlanFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: PlanState::default(),
        }
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Issues a request for `req` and settles its result. Returns `false`
    /// when the tuple was deduplicated or the result arrived stale.
    pub async fn refresh(&mut self, req: &PlanRequest) -> bool {
        let Some(ticket) = self.state.issue(req) else {
            return false;
        };
        let outcome = self.client.fetch_plan(req).await;
        self.state.settle(ticket, outcome)
    }
}
