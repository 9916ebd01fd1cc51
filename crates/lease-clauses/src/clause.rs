//! Clause identifiers, families, and their output keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One legal clause with its own discriminator and template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseFamily {
    Termination,
    AssignmentByLessor,
    RightToMortgage,
    Counterparts,
    DefaultPenalty,
    SecurityDeposit,
}

impl ClauseFamily {
    pub const ALL: [ClauseFamily; 6] = [
        Self::Termination,
        Self::AssignmentByLessor,
        Self::RightToMortgage,
        Self::Counterparts,
        Self::DefaultPenalty,
        Self::SecurityDeposit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Termination => "termination",
            Self::AssignmentByLessor => "assignment_by_lessor",
            Self::RightToMortgage => "right_to_mortgage",
            Self::Counterparts => "counterparts",
            Self::DefaultPenalty => "default_penalty",
            Self::SecurityDeposit => "security_deposit",
        }
    }

    /// Clauses composed by this family, in document order.
    pub fn clauses(&self) -> &'static [ClauseId] {
        match self {
            Self::Termination => &[ClauseId::TerminationByLessor, ClauseId::PostTermination],
            Self::AssignmentByLessor => &[ClauseId::AssignmentByLessor],
            Self::RightToMortgage => &[ClauseId::RightToMortgage],
            Self::Counterparts => &[ClauseId::Counterparts],
            Self::DefaultPenalty => &[ClauseId::DefaultPenalty, ClauseId::DefaultRemedy],
            Self::SecurityDeposit => &[
                ClauseId::SecurityDepositRefund,
                ClauseId::SecurityDepositTransfer,
            ],
        }
    }
}

/// A single composed paragraph of the lease deed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseId {
    /// 20.1
    TerminationByLessor,
    /// 20.2
    PostTermination,
    /// 23
    AssignmentByLessor,
    /// 26
    RightToMortgage,
    /// 30
    Counterparts,
    /// 4.3
    DefaultPenalty,
    /// 4.4
    DefaultRemedy,
    /// 7.2
    SecurityDepositRefund,
    /// 7.3
    SecurityDepositTransfer,
}

impl ClauseId {
    pub const ALL: [ClauseId; 9] = [
        Self::TerminationByLessor,
        Self::PostTermination,
        Self::AssignmentByLessor,
        Self::RightToMortgage,
        Self::Counterparts,
        Self::DefaultPenalty,
        Self::DefaultRemedy,
        Self::SecurityDepositRefund,
        Self::SecurityDepositTransfer,
    ];

    pub fn family(&self) -> ClauseFamily {
        match self {
            Self::TerminationByLessor | Self::PostTermination => ClauseFamily::Termination,
            Self::AssignmentByLessor => ClauseFamily::AssignmentByLessor,
            Self::RightToMortgage => ClauseFamily::RightToMortgage,
            Self::Counterparts => ClauseFamily::Counterparts,
            Self::DefaultPenalty | Self::DefaultRemedy => ClauseFamily::DefaultPenalty,
            Self::SecurityDepositRefund | Self::SecurityDepositTransfer => {
                ClauseFamily::SecurityDeposit
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TerminationByLessor => "termination_by_lessor",
            Self::PostTermination => "post_termination",
            Self::AssignmentByLessor => "assignment_by_lessor",
            Self::RightToMortgage => "right_to_mortgage",
            Self::Counterparts => "counterparts",
            Self::DefaultPenalty => "default_penalty",
            Self::DefaultRemedy => "default_remedy",
            Self::SecurityDepositRefund => "security_deposit_refund",
            Self::SecurityDepositTransfer => "security_deposit_transfer",
        }
    }

    /// Clause number as printed in the deed.
    pub fn number(&self) -> &'static str {
        match self {
            Self::TerminationByLessor => "20.1",
            Self::PostTermination => "20.2",
            Self::AssignmentByLessor => "23",
            Self::RightToMortgage => "26",
            Self::Counterparts => "30",
            Self::DefaultPenalty => "4.3",
            Self::DefaultRemedy => "4.4",
            Self::SecurityDepositRefund => "7.2",
            Self::SecurityDepositTransfer => "7.3",
        }
    }

    /// Preview heading, e.g. `CLAUSE 26 - RIGHT TO MORTGAGE`.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::TerminationByLessor => "CLAUSE 20.1 - TERMINATION BY LESSOR",
            Self::PostTermination => "CLAUSE 20.2 - POST-TERMINATION",
            Self::AssignmentByLessor => "CLAUSE 23 - ASSIGNMENT BY LESSOR",
            Self::RightToMortgage => "CLAUSE 26 - RIGHT TO MORTGAGE",
            Self::Counterparts => "CLAUSE 30 - COUNTERPARTS",
            Self::DefaultPenalty => "CLAUSE 4.3 - DEFAULT PENALTY",
            Self::DefaultRemedy => "CLAUSE 4.4 - REMEDY PERIOD",
            Self::SecurityDepositRefund => "CLAUSE 7.2 - SECURITY DEPOSIT REFUND",
            Self::SecurityDepositTransfer => "CLAUSE 7.3 - TRANSFER ON SALE",
        }
    }

    /// Config key the composed text is cached under.
    pub fn output_key(&self) -> &'static str {
        match self {
            Self::TerminationByLessor => "terminationClause201",
            Self::PostTermination => "terminationClause202",
            Self::AssignmentByLessor => "assignmentClause23",
            Self::RightToMortgage => "mortgageClause26",
            Self::Counterparts => "counterpartsClause30",
            Self::DefaultPenalty => "defaultClause43",
            Self::DefaultRemedy => "defaultClause44",
            Self::SecurityDepositRefund => "securityDepositClause72",
            Self::SecurityDepositTransfer => "securityDepositClause73",
        }
    }

    /// Short key read by older document templates.
    pub fn legacy_key(&self) -> &'static str {
        match self {
            Self::TerminationByLessor => "clause201",
            Self::PostTermination => "clause202",
            Self::AssignmentByLessor => "clause23",
            Self::RightToMortgage => "clause26",
            Self::Counterparts => "clause30",
            Self::DefaultPenalty => "clause43",
            Self::DefaultRemedy => "clause44",
            Self::SecurityDepositRefund => "clause72",
            Self::SecurityDepositTransfer => "clause73",
        }
    }

    pub fn from_str_id(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// Clause whose canonical or legacy key is `key`.
    pub fn for_output_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.output_key() == key || id.legacy_key() == key)
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `key` holds derived clause text rather than user input.
pub fn is_output_key(key: &str) -> bool {
    ClauseId::for_output_key(key).is_some()
}
