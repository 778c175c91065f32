//! Server action gates
//!
//! Privileged club actions and who may perform them. The HTTP layer calls
//! [`authorize`] before touching storage and turns a refusal into a 403.

use serde::Serialize;
use tracing::debug;

use super::access::AccessRule;
use super::rbac::ActorDescriptor;
use crate::utils::error::{ClubError, Result};

/// A privileged server-side club action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubAction {
    UpdateClubSettings,
    RegenerateClubCode,
    DeleteClub,
    CreateRole,
    UpdateRole,
    ViewPendingMembers,
    ApproveMember,
    RejectMember,
    ApproveTransaction,
}

impl ClubAction {
    pub const ALL: [ClubAction; 9] = [
        ClubAction::UpdateClubSettings,
        ClubAction::RegenerateClubCode,
        ClubAction::DeleteClub,
        ClubAction::CreateRole,
        ClubAction::UpdateRole,
        ClubAction::ViewPendingMembers,
        ClubAction::ApproveMember,
        ClubAction::RejectMember,
        ClubAction::ApproveTransaction,
    ];

    /// Wire name, e.g. `"approve_member"`
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubAction::UpdateClubSettings => "update_club_settings",
            ClubAction::RegenerateClubCode => "regenerate_club_code",
            ClubAction::DeleteClub => "delete_club",
            ClubAction::CreateRole => "create_role",
            ClubAction::UpdateRole => "update_role",
            ClubAction::ViewPendingMembers => "view_pending_members",
            ClubAction::ApproveMember => "approve_member",
            ClubAction::RejectMember => "reject_member",
            ClubAction::ApproveTransaction => "approve_transaction",
        }
    }

    /// Who may perform the action
    pub fn rule(&self) -> AccessRule {
        match self {
            ClubAction::UpdateClubSettings
            | ClubAction::RegenerateClubCode
            | ClubAction::DeleteClub
            | ClubAction::CreateRole
            | ClubAction::UpdateRole => AccessRule::PresidentOnly,
            ClubAction::ViewPendingMembers
            | ClubAction::ApproveMember
            | ClubAction::RejectMember
            | ClubAction::ApproveTransaction => AccessRule::Officer,
        }
    }

    /// Message shown to a member who is refused
    pub fn denial_message(&self) -> &'static str {
        match self {
            ClubAction::UpdateClubSettings => "Only president can update club settings",
            ClubAction::RegenerateClubCode => "Only president can regenerate club code",
            ClubAction::DeleteClub => "Only president can delete club",
            ClubAction::CreateRole => "Only president can create roles",
            ClubAction::UpdateRole => "Only president can update roles",
            ClubAction::ViewPendingMembers
            | ClubAction::ApproveMember
            | ClubAction::RejectMember => "Access denied",
            ClubAction::ApproveTransaction => "Only President/VP can approve transactions",
        }
    }
}

impl std::str::FromStr for ClubAction {
    type Err = ClubError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ClubError::validation(format!("Unknown club action: {}", s)))
    }
}

/// Outcome of an action check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    /// The action that was checked
    pub action: ClubAction,
    /// Whether the actor may perform it
    pub allowed: bool,
    /// Reason for denial (if not allowed)
    pub reason: Option<&'static str>,
}

/// Decide whether an actor may perform an action
pub fn check(actor: &ActorDescriptor, action: ClubAction) -> AccessDecision {
    let kind = actor.role_kind();
    let permissions = actor.effective_permissions();
    let allowed = action.rule().permits(kind, Some(&permissions));

    debug!(
        "Action {:?} for role '{}' ({:?}): {}",
        action,
        actor.role(),
        kind,
        if allowed { "allowed" } else { "denied" }
    );

    AccessDecision {
        action,
        allowed,
        reason: (!allowed).then(|| action.denial_message()),
    }
}

/// Like [`check`], failing with [`ClubError::Forbidden`] when refused
pub fn authorize(actor: &ActorDescriptor, action: ClubAction) -> Result<()> {
    let decision = check(actor, action);
    match decision.reason {
        None => Ok(()),
        Some(reason) => Err(ClubError::forbidden(reason)),
    }
}
