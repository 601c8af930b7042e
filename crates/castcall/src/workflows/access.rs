use serde::{Deserialize, Serialize};

/// Identifier wrapper for marketplace users (artists and recruiters alike).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Marketplace roles that gate the use-case functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Artist,
    Recruiter,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Recruiter => "recruiter",
        }
    }
}

/// The caller identity every use-case function receives explicitly.
///
/// There is no ambient session state: handlers pass the actor down and services
/// check it against the resource's owning id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

/// Authorization failures surfaced to callers as business errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("operation requires the {required} role")]
    RoleRequired { required: &'static str },
    #[error("user {user} does not own {resource}")]
    NotOwner { user: String, resource: String },
    #[error("user {user} cannot read dashboards for {target}")]
    NotSelf { user: String, target: String },
}

pub fn ensure_artist(actor: &Actor) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Artist => Ok(()),
        Role::Recruiter => Err(AccessDenied::RoleRequired {
            required: Role::Artist.label(),
        }),
    }
}

pub fn ensure_recruiter(actor: &Actor) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Recruiter => Ok(()),
        Role::Artist => Err(AccessDenied::RoleRequired {
            required: Role::Recruiter.label(),
        }),
    }
}

/// The ownership predicate: the actor must be a recruiter and must own `resource`.
pub fn ensure_recruiter_owns(
    actor: &Actor,
    owner: &UserId,
    resource: &str,
) -> Result<(), AccessDenied> {
    ensure_recruiter(actor)?;
    if &actor.user_id == owner {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner {
            user: actor.user_id.0.clone(),
            resource: resource.to_string(),
        })
    }
}

/// Artists may only act on records they created.
pub fn ensure_artist_owns(
    actor: &Actor,
    owner: &UserId,
    resource: &str,
) -> Result<(), AccessDenied> {
    ensure_artist(actor)?;
    if &actor.user_id == owner {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner {
            user: actor.user_id.0.clone(),
            resource: resource.to_string(),
        })
    }
}

/// Dashboards are self-service only.
pub fn ensure_self(actor: &Actor, target: &UserId) -> Result<(), AccessDenied> {
    if &actor.user_id == target {
        Ok(())
    } else {
        Err(AccessDenied::NotSelf {
            user: actor.user_id.0.clone(),
            target: target.0.clone(),
        })
    }
}
