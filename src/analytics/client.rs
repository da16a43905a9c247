use tokio::sync::{mpsc, oneshot};

use super::types::{AnalyticsCommand, AnalyticsError, CommandEnvelope};

/// Cloneable handle for sending commands to the analytics service.
#[derive(Clone)]
pub struct AnalyticsClient {
    sender: mpsc::Sender<CommandEnvelope>,
}

impl AnalyticsClient {
    pub(crate) fn new(sender: mpsc::Sender<CommandEnvelope>) -> Self {
        Self { sender }
    }

    /// Send `command` and wait for the service to finish handling it.
    pub async fn send(&self, command: AnalyticsCommand) -> Result<(), AnalyticsError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(CommandEnvelope {
                command,
                respond_to,
            })
            .await
            .map_err(|_| AnalyticsError::Disconnected)?;

        receiver.await.map_err(|_| AnalyticsError::Disconnected)?
    }

    pub async fn init_user_session(&self) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::InitUserSession).await
    }

    pub async fn start_session(&self, guid: impl Into<String>) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::StartSession { guid: guid.into() })
            .await
    }

    pub async fn stop_session(&self) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::StopSession).await
    }

    pub async fn log_event(&self, event: serde_json::Value) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::LogEvent { event }).await
    }

    pub async fn log_page_view(&self, route: impl Into<String>) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::LogPageView {
            route: route.into(),
        })
        .await
    }

    pub async fn create_ab_test(&self, test: impl Into<String>) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::CreateAbTest { test: test.into() })
            .await
    }

    pub async fn log_goal(&self, goal_id: u32) -> Result<(), AnalyticsError> {
        self.send(AnalyticsCommand::LogGoal { goal_id }).await
    }
}
