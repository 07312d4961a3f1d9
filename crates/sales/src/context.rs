//! Acting-user context passed explicitly into command handlers.

use domain::ClientId;

/// The user on whose behalf a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemUser {
    client_id: ClientId,
}

impl SystemUser {
    pub fn new(client_id: ClientId) -> Self {
        Self { client_id }
    }

    /// The client record this user acts as.
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }
}

/// Per-invocation context supplied by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemContext {
    system_user: SystemUser,
}

impl SystemContext {
    pub fn new(system_user: SystemUser) -> Self {
        Self { system_user }
    }

    /// Context acting as the given client.
    pub fn for_client(client_id: ClientId) -> Self {
        Self::new(SystemUser::new(client_id))
    }

    pub fn system_user(&self) -> SystemUser {
        self.system_user
    }
}
