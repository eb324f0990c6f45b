use thiserror::Error;

use crate::vault::VaultError;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("no folder selected")]
    NoFolderSelected,

    #[error(transparent)]
    Vault(#[from] VaultError),
}
