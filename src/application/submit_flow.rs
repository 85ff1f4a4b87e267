// src/application/submit_flow.rs
use crate::domain::{DomainError, Severity};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Renders transient notifications. Implementations stack messages in
/// arrival order; there is no queueing or de-duplication.
pub trait Notifier {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Re-requests the notes page, the way a browser reload of the current page
/// would. A seam so tests can count invocations.
pub trait PageReloader {
    fn reload(&mut self) -> Result<(), DomainError>;
}

/// The post-submit cycle shared by add, edit, and delete: surface the
/// outcome, then reload the notes page exactly once after a fixed delay if
/// the mutation succeeded. Failed or locally-rejected submissions never
/// trigger a reload.
pub struct SubmitFlow<N: Notifier, P: PageReloader> {
    notifier: N,
    reloader: P,
    reload_delay: Duration,
}

impl<N: Notifier, P: PageReloader> SubmitFlow<N, P> {
    pub fn new(notifier: N, reloader: P, reload_delay: Duration) -> Self {
        Self {
            notifier,
            reloader,
            reload_delay,
        }
    }

    /// Returns whether the mutation succeeded. The reload failing does not
    /// retroactively fail the mutation; it is reported and left at that.
    pub fn complete(&mut self, outcome: Result<String, DomainError>) -> bool {
        match outcome {
            Ok(message) => {
                self.notifier.notify(Severity::Success, &message);
                debug!(delay_ms = self.reload_delay.as_millis() as u64, "Scheduling page reload");
                thread::sleep(self.reload_delay);
                if let Err(err) = self.reloader.reload() {
                    self.notifier.notify(err.severity(), &err.to_string());
                }
                true
            }
            Err(err) => {
                self.notifier.notify(err.severity(), &err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{CountingReloader, RecordingNotifier};

    fn flow(
        notifier: RecordingNotifier,
        reloader: CountingReloader,
    ) -> SubmitFlow<RecordingNotifier, CountingReloader> {
        SubmitFlow::new(notifier, reloader, Duration::ZERO)
    }

    #[test]
    fn given_successful_outcome_when_completing_then_reloads_exactly_once() {
        // Arrange
        let notifier = RecordingNotifier::default();
        let events = notifier.clone();
        let reloader = CountingReloader::default();
        let reloads = reloader.clone();
        let mut flow = flow(notifier, reloader);

        // Act
        let succeeded = flow.complete(Ok("Note added successfully".to_string()));

        // Assert
        assert!(succeeded);
        assert_eq!(reloads.reload_count(), 1);
        assert_eq!(
            events.events(),
            vec![(Severity::Success, "Note added successfully".to_string())]
        );
    }

    #[test]
    fn given_rejected_outcome_when_completing_then_never_reloads() {
        // Arrange
        let notifier = RecordingNotifier::default();
        let events = notifier.clone();
        let reloader = CountingReloader::default();
        let reloads = reloader.clone();
        let mut flow = flow(notifier, reloader);

        // Act
        let succeeded = flow.complete(Err(DomainError::Rejected("Failed to add note".to_string())));

        // Assert
        assert!(!succeeded);
        assert_eq!(reloads.reload_count(), 0);
        assert_eq!(
            events.events(),
            vec![(Severity::Danger, "Failed to add note".to_string())]
        );
    }

    #[test]
    fn given_blank_title_rejection_when_completing_then_notifies_as_warning() {
        // Arrange
        let notifier = RecordingNotifier::default();
        let events = notifier.clone();
        let reloader = CountingReloader::default();
        let reloads = reloader.clone();
        let mut flow = flow(notifier, reloader);

        // Act
        flow.complete(Err(DomainError::EmptyTitle));

        // Assert
        assert_eq!(reloads.reload_count(), 0);
        let recorded = events.events();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, Severity::Warning);
    }

    #[test]
    fn given_failing_reloader_when_completing_success_then_reports_but_still_succeeds() {
        // Arrange
        let notifier = RecordingNotifier::default();
        let events = notifier.clone();
        let mut flow = flow(notifier, CountingReloader::failing());

        // Act
        let succeeded = flow.complete(Ok("Note deleted successfully".to_string()));

        // Assert
        assert!(succeeded);
        let recorded = events.events();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].0, Severity::Success);
        assert_eq!(recorded[1].0, Severity::Danger);
    }
}
