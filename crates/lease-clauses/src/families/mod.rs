//! Built-in clause families. Each module owns its variant enums, template
//! table, and optional fragments.

pub mod assignment;
pub mod counterparts;
pub mod default_penalty;
pub mod mortgage;
pub mod security_deposit;
pub mod termination;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;

/// Static composer for a clause id.
pub fn composer_for(id: ClauseId) -> &'static dyn ClauseComposer {
    match id {
        ClauseId::TerminationByLessor => &termination::TerminationByLessor,
        ClauseId::PostTermination => &termination::PostTermination,
        ClauseId::AssignmentByLessor => &assignment::AssignmentByLessor,
        ClauseId::RightToMortgage => &mortgage::RightToMortgage,
        ClauseId::Counterparts => &counterparts::Counterparts,
        ClauseId::DefaultPenalty => &default_penalty::DefaultPenalty,
        ClauseId::DefaultRemedy => &default_penalty::DefaultRemedy,
        ClauseId::SecurityDepositRefund => &security_deposit::SecurityDepositRefund,
        ClauseId::SecurityDepositTransfer => &security_deposit::SecurityDepositTransfer,
    }
}

/// Boxed composers for every built-in clause, in document order.
pub fn builtin() -> Vec<Box<dyn ClauseComposer>> {
    vec![
        Box::new(termination::TerminationByLessor),
        Box::new(termination::PostTermination),
        Box::new(assignment::AssignmentByLessor),
        Box::new(mortgage::RightToMortgage),
        Box::new(counterparts::Counterparts),
        Box::new(default_penalty::DefaultPenalty),
        Box::new(default_penalty::DefaultRemedy),
        Box::new(security_deposit::SecurityDepositRefund),
        Box::new(security_deposit::SecurityDepositTransfer),
    ]
}
