use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};

use crate::config::AnalyticsConfig;
use crate::selectors::analytics::{
    get_balance_flags, get_user_tiers, is_authenticated, is_user_data_settled,
};
use crate::state::StateStore;

use super::bridge::MessageBridge;
use super::types::{
    AnalyticsCommand, AnalyticsError, AnalyticsMessage, CommandEnvelope, CustomVariable,
    CRYPTO_BALANCES, KYC_TIER, LOG_LOCATION,
};
use super::user_id::{generate_unique_user_id, session_user_id, KeyDeriver};

const LANDING_ROUTE: &str = "/home";

/// Performs the side effect behind each analytics command.
pub struct AnalyticsHandler {
    store: StateStore,
    bridge: Arc<dyn MessageBridge>,
    deriver: Arc<dyn KeyDeriver>,
    config: AnalyticsConfig,
}

impl AnalyticsHandler {
    pub fn new(
        store: StateStore,
        bridge: Arc<dyn MessageBridge>,
        deriver: Arc<dyn KeyDeriver>,
        config: AnalyticsConfig,
    ) -> Self {
        Self {
            store,
            bridge,
            deriver,
            config,
        }
    }

    pub async fn handle(&self, command: &AnalyticsCommand) -> Result<(), AnalyticsError> {
        if !self.config.enabled {
            tracing::debug!(command = command.name(), "Analytics disabled, skipping");
            return Ok(());
        }

        match command {
            AnalyticsCommand::InitUserSession => self.init_user_session().await,
            AnalyticsCommand::StartSession { guid } => self.start_session(guid),
            AnalyticsCommand::StopSession => self.stop_session(),
            AnalyticsCommand::LogEvent { event } => {
                self.post_message(AnalyticsMessage::new("trackEvent", event.clone()))
            }
            AnalyticsCommand::LogPageView { route } => self.log_page_view(route),
            AnalyticsCommand::CreateAbTest { test } => self.post_message(AnalyticsMessage::new(
                "AbTesting::create",
                json!({ "name": test }),
            )),
            AnalyticsCommand::LogGoal { goal_id } => {
                self.post_message(AnalyticsMessage::new("trackGoal", json!([goal_id])))
            }
        }
    }

    fn post_message(&self, message: AnalyticsMessage) -> Result<(), AnalyticsError> {
        tracing::trace!(method = %message.method, "Posting analytics message");
        self.bridge.post(&message)?;
        Ok(())
    }

    fn start_session(&self, guid: &str) -> Result<(), AnalyticsError> {
        self.post_message(AnalyticsMessage::new(
            "setUserId",
            json!([session_user_id(guid)]),
        ))
    }

    fn stop_session(&self) -> Result<(), AnalyticsError> {
        self.post_message(AnalyticsMessage::new("resetUserId", json!([])))
    }

    /// Only authenticated page views are reported.
    fn log_page_view(&self, route: &str) -> Result<(), AnalyticsError> {
        if !is_authenticated(&self.store.snapshot()) {
            return Ok(());
        }
        self.post_message(AnalyticsMessage::new(
            "logPageView",
            json!({ "route": route }),
        ))
    }

    fn set_custom_variable(
        &self,
        variable: CustomVariable,
        value: serde_json::Value,
    ) -> Result<(), AnalyticsError> {
        self.post_message(AnalyticsMessage::new(
            "setCustomVariable",
            json!({
                "variableId": variable.id,
                "variableName": variable.name,
                "variableValue": value,
                "variableScope": "visit",
            }),
        ))
    }

    async fn wait_for_user_data(&self) -> Result<(), AnalyticsError> {
        let poll = Duration::from_millis(self.config.user_data_poll_ms);
        let wait = async {
            while !is_user_data_settled(&self.store.snapshot()) {
                tokio::time::sleep(poll).await;
            }
        };
        let timeout_ms = self.config.user_data_timeout_ms;
        tokio::time::timeout(Duration::from_millis(timeout_ms), wait)
            .await
            .map_err(|_| AnalyticsError::UserDataTimeout { timeout_ms })
    }

    async fn init_user_session(&self) -> Result<(), AnalyticsError> {
        self.wait_for_user_data().await?;
        let guid = generate_unique_user_id(&self.store.snapshot(), self.deriver.as_ref())?;

        // Reporting steps are independent: a failed post is logged and the
        // rest still run. The first failure is returned.
        let mut first_error = None;
        let mut record = |operation: &str, result: Result<(), AnalyticsError>| {
            if let Err(err) = result {
                tracing::warn!(
                    location = LOG_LOCATION,
                    operation,
                    error = %err,
                    "Session init step failed"
                );
                first_error.get_or_insert(err);
            }
        };

        record("startSession", self.start_session(&guid));
        record("logPageView", self.log_page_view(LANDING_ROUTE));

        // Give profile and balance requests time to land before reporting
        tokio::time::sleep(Duration::from_millis(self.config.custom_variable_delay_ms)).await;

        let state = self.store.snapshot();
        let tiers = get_user_tiers(&state);
        record(
            "setCustomVariable",
            self.set_custom_variable(KYC_TIER, json!(tiers.current)),
        );

        let flags = serde_json::to_string(&get_balance_flags(&state))
            .map_err(|e| AnalyticsError::Bridge(e.into()));
        match flags {
            Ok(flags) => record(
                "setCustomVariable",
                self.set_custom_variable(CRYPTO_BALANCES, json!(flags)),
            ),
            Err(err) => record("setCustomVariable", Err(err)),
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub struct AnalyticsService {
    pub(crate) receiver: mpsc::Receiver<CommandEnvelope>,
}

impl AnalyticsService {
    pub(crate) fn new(receiver: mpsc::Receiver<CommandEnvelope>) -> Self {
        Self { receiver }
    }

    /// Process commands until every client is dropped.
    ///
    /// Immediate commands are handled one at a time in arrival order.
    /// Commands that wait on state or timers run on their own task so they
    /// never hold up the queue. In-flight tasks are awaited before returning.
    pub async fn run(mut self, handler: AnalyticsHandler) {
        let handler = Arc::new(handler);
        let mut detached = JoinSet::new();

        loop {
            tokio::select! {
                envelope = self.receiver.recv() => {
                    let Some(envelope) = envelope else { break };
                    if envelope.command.runs_detached() {
                        let handler = Arc::clone(&handler);
                        detached.spawn(async move { respond(&handler, envelope).await });
                    } else {
                        respond(&handler, envelope).await;
                    }
                }
                Some(joined) = detached.join_next(), if !detached.is_empty() => {
                    log_join_error(joined);
                }
            }
        }

        while let Some(joined) = detached.join_next().await {
            log_join_error(joined);
        }
        tracing::debug!("Analytics service stopped");
    }
}

async fn respond(handler: &AnalyticsHandler, envelope: CommandEnvelope) {
    let CommandEnvelope {
        command,
        respond_to,
    } = envelope;
    let result = handler.handle(&command).await;
    if let Err(err) = &result {
        tracing::error!(
            location = LOG_LOCATION,
            operation = command.name(),
            error = %err,
            "Analytics command failed"
        );
    }
    if respond_to.send(result).is_err() {
        tracing::trace!(
            operation = command.name(),
            "Analytics response dropped (receiver gone)"
        );
    }
}

fn log_join_error(joined: Result<(), JoinError>) {
    if let Err(err) = joined {
        tracing::error!(location = LOG_LOCATION, error = %err, "Analytics task aborted");
    }
}
