//! Application state: form, in-flight request, layout or error

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ApiError, LayoutClient};
use crate::models::{LayoutResult, RoomSpec};

/// A room and the layout generated for it. Always held together.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub room: RoomSpec,
    pub layout: LayoutResult,
}

/// What the user is looking at.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Form,
    Layout(Design),
    Failed(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("a layout request is already in progress")]
    Busy,
}

/// Proof that a submission was started; carries the room snapshot.
#[derive(Debug)]
#[must_use = "a submission must be finished to clear the in-flight flag"]
pub struct Submission {
    room: RoomSpec,
}

impl Submission {
    pub fn room(&self) -> &RoomSpec {
        &self.room
    }
}

/// Holds the current view and guarantees at most one request in flight.
#[derive(Debug)]
pub struct Session {
    view: View,
    in_flight: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Form,
            in_flight: false,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// True while a request is outstanding; inputs and submit are disabled.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Start a submission. Any previous layout or error is dropped.
    pub fn begin(&mut self, room: RoomSpec) -> Result<Submission, SessionError> {
        if self.in_flight {
            warn!("submission rejected: request already in flight");
            return Err(SessionError::Busy);
        }
        self.in_flight = true;
        self.view = View::Form;
        Ok(Submission { room })
    }

    /// Complete a submission with the service outcome.
    pub fn finish(&mut self, submission: Submission, outcome: Result<LayoutResult, ApiError>) {
        self.in_flight = false;
        self.view = match outcome {
            Ok(layout) => {
                info!(items = layout.furniture.len(), "layout ready");
                View::Layout(Design {
                    room: submission.room,
                    layout,
                })
            }
            Err(err) => {
                warn!(error = %err, "layout request failed");
                View::Failed(err.to_string())
            }
        };
    }

    /// Submit `room` to the service and wait for the outcome.
    pub async fn submit(&mut self, client: &LayoutClient, room: RoomSpec) -> Result<&View, SessionError> {
        let submission = self.begin(room)?;
        let outcome = client.generate_layout(submission.room()).await;
        self.finish(submission, outcome);
        Ok(&self.view)
    }

    /// Back to an empty form. Clears room, layout and error together.
    ///
    /// Refused while a request is outstanding, since its outcome would
    /// land on the fresh form.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.in_flight {
            warn!("reset rejected: request still in flight");
            return Err(SessionError::Busy);
        }
        self.view = View::Form;
        Ok(())
    }
}
