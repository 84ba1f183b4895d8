//! Validation outcomes shared by the checks and the renderer

use crate::matching::Mismatch;
use crate::policy::WeakPassword;
use thiserror::Error;

/// Why a check failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error(transparent)]
    Weak(#[from] WeakPassword),
    #[error(transparent)]
    Mismatch(#[from] Mismatch),
}

/// Result of one check, valid or invalid with its reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Reason),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), Reason> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(reason) => Err(reason),
        }
    }
}

impl<E: Into<Reason>> From<Result<(), E>> for Verdict {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(e) => Verdict::Invalid(e.into()),
        }
    }
}
