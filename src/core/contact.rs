use crate::config::BackendConfig;
use crate::domain::error::ContactError;
use crate::domain::model::{
    ContactField, FlowView, FormState, RawResponse, SubmissionResult, SubmitEvent, SubmitOutcome,
};
use crate::domain::ports::ContactTransport;
use tokio::sync::watch;

/// Turns a raw backend response into success or a `ContactError`.
///
/// The body is parsed before the status is looked at, so a non-JSON error
/// page surfaces as a parse failure rather than a rejection.
pub fn interpret_response(response: &RawResponse) -> Result<(), ContactError> {
    let data: serde_json::Value = serde_json::from_slice(&response.body)?;

    if !response.is_success() {
        let detail = data
            .get("detail")
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        return Err(ContactError::Rejected {
            status: response.status,
            detail,
        });
    }

    Ok(())
}

/// Local UI state of the contact section plus the one network call it makes.
pub struct ContactSubmissionFlow<T: ContactTransport> {
    transport: T,
    endpoint: String,
    state: FlowView,
    updates: watch::Sender<FlowView>,
}

impl<T: ContactTransport> ContactSubmissionFlow<T> {
    pub fn new(transport: T, backend: &BackendConfig) -> Self {
        let state = FlowView::default();
        let (updates, _) = watch::channel(state.clone());
        Self {
            transport,
            endpoint: backend.contact_endpoint(),
            state,
            updates,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.state.form
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.state.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    pub fn submit_enabled(&self) -> bool {
        self.state.submit_enabled()
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    /// Receives a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<FlowView> {
        self.updates.subscribe()
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        self.publish();
    }

    pub fn close_menu(&mut self) {
        if self.state.menu_open {
            self.state.menu_open = false;
            self.publish();
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.state.form.set(field, value.into());
        self.publish();
    }

    pub fn fill(&mut self, form: FormState) {
        self.state.form = form;
        self.publish();
    }

    /// Sends the current form once and records how it went.
    ///
    /// Failures never escape: they end up in the returned outcome and in
    /// `result()`. The form is only cleared after the backend accepted it.
    pub async fn submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let missing = self.state.form.missing_required();
        if !missing.is_empty() {
            tracing::debug!("Submit blocked, missing required fields: {:?}", missing);
            return SubmitOutcome::Blocked(missing);
        }

        let payload = self.state.form.clone();
        let mut guard = SubmittingGuard::engage(&mut self.state, &self.updates);

        tracing::info!("Submitting contact form to {}", self.endpoint);
        let attempt = match self.transport.post_json(&self.endpoint, &payload).await {
            Ok(response) => {
                tracing::debug!("Contact endpoint responded with status {}", response.status);
                interpret_response(&response)
            }
            Err(e) => Err(e),
        };

        let outcome = match attempt {
            Ok(()) => {
                tracing::info!("✅ Contact form accepted");
                guard.state.form.clear();
                let result = SubmissionResult::success();
                guard.state.result = Some(result.clone());
                SubmitOutcome::Accepted(result)
            }
            Err(e) => {
                tracing::warn!("❌ Contact form submission failed ({}): {}", e.kind(), e);
                guard.state.result = Some(SubmissionResult::failure(e.user_message()));
                SubmitOutcome::Failed(e)
            }
        };
        drop(guard);

        outcome
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}

/// Holds the submitting flag up for the lifetime of an attempt.
///
/// Dropping it lowers the flag and publishes the final snapshot, including
/// when the submit future itself is dropped before the response arrives.
struct SubmittingGuard<'a> {
    state: &'a mut FlowView,
    updates: &'a watch::Sender<FlowView>,
}

impl<'a> SubmittingGuard<'a> {
    fn engage(state: &'a mut FlowView, updates: &'a watch::Sender<FlowView>) -> Self {
        state.submitting = true;
        state.result = None;
        updates.send_replace(state.clone());
        Self { state, updates }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.submitting = false;
        self.updates.send_replace(self.state.clone());
    }
}
