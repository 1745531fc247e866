//! The two-phase request/confirmation workflow.
//!
//! Per actor: `Idle -> Staged -> (Applied | Cancelled) -> Idle`. Intents are
//! checked (permission, then input) before anything is staged; a confirm takes
//! the staged action out of its slot and applies it exactly once, a cancel
//! takes it and drops it. Staging again before resolving replaces the slot.

use super::convert::{Conversion, convert};
use super::error::{ValidationError, WorkflowError};
use super::ports::{DirectoryStore, Notifier, RateStore};
use super::stager::{ConfirmationStager, DraftBook};
use super::types::{
    Access, Actor, ActorId, Applied, Caller, Decision, ExchangeRequest, Location, PendingAction,
    Rate, RateLimits, Resolution, Role,
};
use super::validate;
use chrono::{Local, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct WorkflowEngine {
    rates: Arc<dyn RateStore>,
    directory: Arc<dyn DirectoryStore>,
    notifier: Arc<dyn Notifier>,
    stager: ConfirmationStager,
    drafts: DraftBook,
    limits: RateLimits,
}

impl WorkflowEngine {
    pub fn new(
        rates: Arc<dyn RateStore>,
        directory: Arc<dyn DirectoryStore>,
        notifier: Arc<dyn Notifier>,
        limits: RateLimits,
    ) -> Self {
        Self {
            rates,
            directory,
            notifier,
            stager: ConfirmationStager::new(),
            drafts: DraftBook::new(),
            limits,
        }
    }

    pub fn stager(&self) -> &ConfirmationStager {
        &self.stager
    }

    // ---- permissions ------------------------------------------------------

    pub async fn access_of(&self, actor: ActorId) -> Result<Access, WorkflowError> {
        Ok(self
            .directory
            .find_actor(actor)
            .await?
            .map(|a| a.access())
            .unwrap_or(Access::Unknown))
    }

    /// Unknown and inactive actors get the same refusal.
    pub async fn require_active(&self, actor: ActorId) -> Result<Role, WorkflowError> {
        self.access_of(actor)
            .await?
            .active_role()
            .ok_or(WorkflowError::PermissionDenied)
    }

    pub async fn require_admin(&self, actor: ActorId) -> Result<(), WorkflowError> {
        match self.require_active(actor).await? {
            Role::Admin => Ok(()),
            Role::User => Err(WorkflowError::PermissionDenied),
        }
    }

    // ---- staging ----------------------------------------------------------

    async fn stage(&self, actor: ActorId, action: PendingAction) -> PendingAction {
        if let Some(old) = self.stager.stage(actor, action.clone()).await {
            debug!(target="workflow", actor, replaced=old.kind(), kind=action.kind(), "pending action replaced");
        }
        info!(target="workflow", actor, kind=action.kind(), "staged");
        action
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn stage_rate_change(
        &self,
        actor: ActorId,
        args: &[&str],
    ) -> Result<PendingAction, WorkflowError> {
        self.require_admin(actor).await?;
        let (buy, sell) = validate::validate_rate_change(args, &self.limits)?;
        Ok(self.stage(actor, PendingAction::SetRate { buy, sell }).await)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn stage_add_user(
        &self,
        actor: ActorId,
        args: &[&str],
    ) -> Result<PendingAction, WorkflowError> {
        self.require_admin(actor).await?;
        let (id, role, username) = validate::parse_add_user(args)?;
        Ok(self
            .stage(actor, PendingAction::AddUser { id, role, username })
            .await)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn stage_delete_user(
        &self,
        actor: ActorId,
        args: &[&str],
    ) -> Result<PendingAction, WorkflowError> {
        self.require_admin(actor).await?;
        let id = validate::parse_delete_user(args)?;
        if id == actor {
            return Err(WorkflowError::SelfDeletion);
        }
        Ok(self.stage(actor, PendingAction::DeleteUser { id }).await)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn stage_add_location(
        &self,
        actor: ActorId,
        args: &[&str],
    ) -> Result<PendingAction, WorkflowError> {
        self.require_admin(actor).await?;
        let name = validate::parse_location_name(args)?;
        Ok(self.stage(actor, PendingAction::AddLocation { name }).await)
    }

    /// Validates a raw `amount,currency,rate,HH.MM` line and keeps it as the
    /// actor's draft. Returns the draft with the active locations to pick from.
    #[instrument(level = "debug", skip(self))]
    pub async fn draft_request(
        &self,
        actor: ActorId,
        line: &str,
    ) -> Result<(ExchangeRequest, Vec<Location>), WorkflowError> {
        self.require_active(actor).await?;
        let parts = validate::split_request_line(line)?;
        let current = self.rates.current_rate().await?;
        let request = validate::validate(&parts, current.as_ref())?;
        self.drafts.stage(actor, request.clone()).await;
        let locations = self
            .directory
            .list_locations()
            .await?
            .into_iter()
            .filter(|l| l.active)
            .collect();
        debug!(target="workflow", actor, "request drafted");
        Ok((request, locations))
    }

    /// Binds the actor's draft to a location and stages it for forwarding.
    /// An unavailable location or an unconvertible amount leaves the draft in place.
    #[instrument(level = "debug", skip(self, caller), fields(actor = caller.id))]
    pub async fn choose_location(
        &self,
        caller: &Caller,
        location_id: i32,
    ) -> Result<PendingAction, WorkflowError> {
        self.require_active(caller.id).await?;
        let location = self
            .directory
            .find_location(location_id)
            .await?
            .filter(|l| l.active)
            .ok_or(WorkflowError::LocationUnavailable)?;
        let request = self
            .drafts
            .take(caller.id)
            .await
            .ok_or(WorkflowError::NoPendingAction)?;
        let Some(conversion) = convert(request.amount, request.currency, request.requested_rate)
        else {
            self.drafts.stage(caller.id, request).await;
            return Err(ValidationError::InvalidAmount.into());
        };
        let message = format_request_message(&request, &conversion, &location, caller);
        Ok(self
            .stage(caller.id, PendingAction::UserRequest { message })
            .await)
    }

    // ---- resolution -------------------------------------------------------

    /// Resolves the actor's staged action. The slot is emptied before anything
    /// else happens, so a failed apply is reported once and not retried.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve(
        &self,
        actor: ActorId,
        decision: Decision,
    ) -> Result<Resolution, WorkflowError> {
        let Some(action) = self.stager.take(actor).await else {
            debug!(target="workflow", actor, ?decision, "nothing staged");
            return Err(WorkflowError::NoPendingAction);
        };
        match decision {
            Decision::Cancel => {
                info!(target="workflow", actor, kind=action.kind(), "cancelled");
                Ok(Resolution::Cancelled(action))
            }
            Decision::Confirm => {
                let kind = action.kind();
                match self.apply(actor, action).await {
                    Ok(applied) => {
                        info!(target="workflow", actor, kind, "applied");
                        Ok(Resolution::Applied(applied))
                    }
                    Err(e) => {
                        warn!(target="workflow", actor, kind, error=%e, "apply failed");
                        Err(e)
                    }
                }
            }
        }
    }

    async fn apply(&self, actor: ActorId, action: PendingAction) -> Result<Applied, WorkflowError> {
        match action {
            PendingAction::SetRate { buy, sell } => {
                let rate = Rate {
                    buy,
                    sell,
                    updated_at: Utc::now(),
                    updated_by: actor,
                };
                self.rates.commit_rate(&rate).await?;
                Ok(Applied::RateSet { buy, sell })
            }
            PendingAction::AddUser { id, role, username } => {
                let new_actor = Actor {
                    id,
                    role,
                    active: true,
                    username,
                };
                if !self.directory.insert_actor(&new_actor).await? {
                    return Err(WorkflowError::DuplicateActor(id));
                }
                Ok(Applied::UserAdded {
                    id,
                    role,
                    username: new_actor.username,
                })
            }
            PendingAction::DeleteUser { id } => {
                if !self.directory.delete_actor(id).await? {
                    return Err(WorkflowError::ActorNotFound(id));
                }
                Ok(Applied::UserDeleted { id })
            }
            PendingAction::AddLocation { name } => {
                // An existing name counts as success.
                self.directory.insert_location(&name).await?;
                Ok(Applied::LocationAdded { name })
            }
            PendingAction::UserRequest { message } => {
                self.notifier.notify_administrator(&message).await?;
                Ok(Applied::RequestForwarded)
            }
        }
    }

    // ---- immediate (unstaged) operations ----------------------------------

    /// The rate as shown to users. Refused unless it was updated on `today`.
    pub async fn rate_view(&self, actor: ActorId, today: NaiveDate) -> Result<Rate, WorkflowError> {
        self.require_active(actor).await?;
        let rate = self
            .rates
            .current_rate()
            .await?
            .ok_or(ValidationError::RateNotSet)?;
        if rate.updated_at.with_timezone(&Local).date_naive() != today {
            return Err(WorkflowError::RateNotSetToday);
        }
        Ok(rate)
    }

    pub async fn list_users(&self, actor: ActorId) -> Result<Vec<Actor>, WorkflowError> {
        self.require_admin(actor).await?;
        Ok(self.directory.list_actors().await?)
    }

    pub async fn list_locations(&self, actor: ActorId) -> Result<Vec<Location>, WorkflowError> {
        self.require_admin(actor).await?;
        Ok(self.directory.list_locations().await?)
    }

    /// Enables or disables a location right away and returns the refreshed list.
    #[instrument(level = "debug", skip(self))]
    pub async fn toggle_location(
        &self,
        actor: ActorId,
        location_id: i32,
        active: bool,
    ) -> Result<Vec<Location>, WorkflowError> {
        self.require_admin(actor).await?;
        if !self
            .directory
            .set_location_active(location_id, active)
            .await?
        {
            return Err(WorkflowError::LocationUnavailable);
        }
        info!(target="workflow", actor, location_id, active, "location toggled");
        Ok(self.directory.list_locations().await?)
    }
}

/// The message forwarded to the administrator for a client request.
pub fn format_request_message(
    request: &ExchangeRequest,
    conversion: &Conversion,
    location: &Location,
    caller: &Caller,
) -> String {
    format!(
        "📩 New request:\n\n\
         Prepare for client: {conversion}\n\
         Client brings: {} {}\n\
         Rate: {}\n\
         Location: {}\n\
         Due: {}\n\
         Created by: @{} ({})",
        request.amount,
        request.currency,
        request.requested_rate,
        location.name,
        request.due_time,
        caller.display_name,
        caller.id,
    )
}
