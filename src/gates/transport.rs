use crate::gates::client::{ApiError, GateClient, Result};
use crate::gates::types::{GateList, QualityGate};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Per-request overrides of the default failure handling.
///
/// A status listed here is left entirely to the caller: the global error
/// reporter is not invoked for it.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct RequestOptions {
    suppressed_statuses: BTreeSet<u16>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress_status(mut self, status: u16) -> Self {
        self.suppressed_statuses.insert(status);
        self
    }

    pub fn is_suppressed(&self, status: u16) -> bool {
        self.suppressed_statuses.contains(&status)
    }

    pub fn should_report(&self, error: &ApiError) -> bool {
        match error.status() {
            Some(status) => !self.is_suppressed(status),
            None => true,
        }
    }
}

/// Default, application-wide display of request failures.
pub trait ErrorReporter {
    fn report(&self, error: &ApiError);
}

#[allow(async_fn_in_trait)]
pub trait GateStore {
    async fn list(&self, options: &RequestOptions) -> Result<GateList>;
    async fn destroy(&self, gate: &QualityGate, options: &RequestOptions) -> Result<()>;
}

/// [`GateClient`] with global error reporting applied to every failure not
/// suppressed by the request options. Failures are still returned to the caller.
#[derive(Clone)]
pub struct ReportingStore<R> {
    client: GateClient,
    reporter: R,
}

impl<R: ErrorReporter> ReportingStore<R> {
    pub fn new(client: GateClient, reporter: R) -> Self {
        Self { client, reporter }
    }

    fn handle<T>(&self, result: Result<T>, options: &RequestOptions) -> Result<T> {
        if let Err(e) = &result {
            if options.should_report(e) {
                warn!(error = %e, "request failed");
                self.reporter.report(e);
            } else {
                debug!(error = %e, "request failure left to caller");
            }
        }
        result
    }
}

impl<R: ErrorReporter> GateStore for ReportingStore<R> {
    async fn list(&self, options: &RequestOptions) -> Result<GateList> {
        let result = self.client.list().await;
        self.handle(result, options)
    }

    async fn destroy(&self, gate: &QualityGate, options: &RequestOptions) -> Result<()> {
        debug!(gate_id = gate.id, gate = %gate.name, "destroying quality gate");
        let result = self.client.destroy(gate.id).await;
        self.handle(result, options)
    }
}
