//! Reply ids for leg sub-messages.
//!
//! Each leg message is dispatched with `reply_on_error`. The reply id packs
//! the leg index and the kind of transfer so the `reply` entry point can
//! surface a named error for the failing leg and revert the whole call.

use crate::error::SettlementError;

/// Low byte of the reply id.
const KIND_BITS: u32 = 8;
const KIND_MASK: u64 = 0xff;

/// Which transfer capability a sub-message used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegFailure {
    /// Bank send or native value forwarded to a contract
    Native = 1,
    /// CW20 pull or allowance-based pull
    Token = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegReply {
    pub index: usize,
    pub kind: LegFailure,
}

impl LegReply {
    pub fn native(index: usize) -> Self {
        Self {
            index,
            kind: LegFailure::Native,
        }
    }

    pub fn token(index: usize) -> Self {
        Self {
            index,
            kind: LegFailure::Token,
        }
    }

    pub fn id(&self) -> u64 {
        ((self.index as u64) << KIND_BITS) | self.kind as u64
    }

    pub fn from_id(id: u64) -> Result<Self, SettlementError> {
        let kind = match id & KIND_MASK {
            1 => LegFailure::Native,
            2 => LegFailure::Token,
            _ => return Err(SettlementError::UnknownReplyId { id }),
        };
        Ok(Self {
            index: (id >> KIND_BITS) as usize,
            kind,
        })
    }

    /// Error reported when this leg's sub-message failed with `reason`.
    pub fn into_error(self, reason: String) -> SettlementError {
        match self.kind {
            LegFailure::Native => SettlementError::TransferFailed {
                index: self.index,
                reason,
            },
            LegFailure::Token => SettlementError::TokenTransferFailed {
                index: self.index,
                reason,
            },
        }
    }
}
