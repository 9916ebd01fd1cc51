//! Termination (clause 20).
//!
//! 20.1 selects the lessor's termination right from `terminationClauseType`.
//! 20.2 is a fixed post-termination sentence extended, in this order, by the
//! possession return period, the selected consequences, and the early
//! termination right.

use lease_core::ClauseConfig;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;
use crate::template::{self, Param, VariantTag, BLANK};

pub const CLAUSE_TYPE: &str = "terminationClauseType";
pub const NOTICE_DAYS: &str = "terminationNoticeDays";
pub const FIRST_WARNING_DAYS: &str = "firstWarningDays";
pub const CUSTOM_CLAUSE: &str = "customTerminationClause";
pub const POSSESSION_RETURN_DAYS: &str = "possessionReturnDays";
pub const ENABLE_CONSEQUENCES: &str = "enableTerminationConsequences";
pub const CONSEQUENCES: &str = "terminationConsequences";
pub const ENABLE_EARLY_TERMINATION: &str = "enableEarlyTermination";
pub const EARLY_TERMINATION_TYPE: &str = "earlyTerminationType";
pub const EARLY_TERMINATION_NOTICE: &str = "earlyTerminationNotice";
pub const EARLY_TERMINATION_PENALTY: &str = "earlyTerminationPenalty";
pub const EARLY_TERM_AFTER_MONTHS: &str = "earlyTermAfterMonths";

pub const SELECT_PLACEHOLDER: &str = "[Select termination type]";
pub const CUSTOM_PLACEHOLDER: &str = "[Your custom termination clause will appear here]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationType {
    Standard,
    WithWarning,
    Escalation,
    Immediate,
    MutualAgreement,
    Custom,
}

impl VariantTag for TerminationType {
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::WithWarning,
        Self::Escalation,
        Self::Immediate,
        Self::MutualAgreement,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::WithWarning => "with_warning",
            Self::Escalation => "escalation",
            Self::Immediate => "immediate",
            Self::MutualAgreement => "mutual_agreement",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarlyTerminationType {
    WithPenalty,
    NoticeOnly,
    LessorOnly,
    AfterLockIn,
}

impl VariantTag for EarlyTerminationType {
    const ALL: &'static [Self] = &[
        Self::WithPenalty,
        Self::NoticeOnly,
        Self::LessorOnly,
        Self::AfterLockIn,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::WithPenalty => "with_penalty",
            Self::NoticeOnly => "notice_only",
            Self::LessorOnly => "lessor_only",
            Self::AfterLockIn => "after_lockin",
        }
    }
}

const LESSOR_PARAMS: &[Param] = &[
    Param::new("days", NOTICE_DAYS, BLANK),
    Param::new("first_warning", FIRST_WARNING_DAYS, "7"),
    Param::new("custom", CUSTOM_CLAUSE, CUSTOM_PLACEHOLDER),
];

const EARLY_PARAMS: &[Param] = &[
    Param::new("notice", EARLY_TERMINATION_NOTICE, "90"),
    Param::new("penalty", EARLY_TERMINATION_PENALTY, "3 months rent"),
    Param::new("lock_in", EARLY_TERM_AFTER_MONTHS, "12"),
];

pub fn lessor_template(kind: TerminationType) -> &'static str {
    match kind {
        TerminationType::Standard => "The Lessor shall have the right to terminate the lease without notice in the event of a default by the Lessee that is not remedied within {days} days of receiving a written notice from the Lessor regarding the default.",
        TerminationType::WithWarning => "The Lessor shall have the right to terminate the lease in the event of a default by the Lessee. The Lessor must first provide a written notice to the Lessee specifying the nature of the default. If the Lessee fails to remedy the default within {days} days of receiving such notice, the Lessor may proceed with termination by serving a final termination notice.",
        TerminationType::Escalation => "The Lessor shall have the right to terminate the lease through the following escalation process: (a) First Warning - Written notice to remedy default within {first_warning} days; (b) Second Warning - If not remedied, additional {days} days to cure the breach; (c) Termination - If still not remedied, the Lessor may terminate the lease without further notice.",
        TerminationType::Immediate => "The Lessor shall have the right to terminate the lease immediately without prior notice in the event of any material default by the Lessee, including but not limited to non-payment of rent for 2 consecutive months, illegal use of premises, or causing significant damage to the property.",
        TerminationType::MutualAgreement => "This lease may be terminated by mutual written agreement of both parties at any time. In case of unilateral termination by the Lessor due to Lessee's default, the Lessor must provide written notice to the Lessee. If the default is not remedied within {days} days, the Lessor may terminate the lease.",
        TerminationType::Custom => "{custom}",
    }
}

pub fn early_termination_template(kind: EarlyTerminationType) -> &'static str {
    match kind {
        EarlyTerminationType::WithPenalty => "Either party may terminate this lease before the expiration of the Lease Period by providing {notice} days written notice to the other party and paying a penalty equivalent to {penalty}.",
        EarlyTerminationType::NoticeOnly => "Either party may terminate this lease before the expiration of the Lease Period by providing {notice} days written notice to the other party without any penalty.",
        EarlyTerminationType::LessorOnly => "Only the Lessor may terminate this lease before the expiration of the Lease Period by providing {notice} days written notice to the Lessee. The Lessee does not have the right to early termination.",
        EarlyTerminationType::AfterLockIn => "After completion of {lock_in} months from the commencement date, either party may terminate this lease by providing {notice} days written notice to the other party.",
    }
}

const POST_TERMINATION_BASE: &str = "Upon any termination of the Lease for any reason, the Lessee shall return physical vacant possession of the scheduled property to the Lessor";
const DEPOSIT_REFUND: &str = ", concurrently with the Lessor refunding the Security Deposit to the Lessee after deducting all amounts due and payable by the Lessee under this Lease Deed";
const CONSEQUENCES_PREFIX: &str = ". Additionally, upon termination: ";

/// Clause 20.1.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminationByLessor;

impl ClauseComposer for TerminationByLessor {
    fn id(&self) -> ClauseId {
        ClauseId::TerminationByLessor
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[CLAUSE_TYPE, NOTICE_DAYS, FIRST_WARNING_DAYS, CUSTOM_CLAUSE]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        match TerminationType::read(config, CLAUSE_TYPE) {
            Some(kind) => template::render(lessor_template(kind), LESSOR_PARAMS, config),
            None => SELECT_PLACEHOLDER.to_string(),
        }
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        match TerminationType::read(config, CLAUSE_TYPE) {
            Some(kind) => template::missing(lessor_template(kind), LESSOR_PARAMS, config),
            None => vec![CLAUSE_TYPE],
        }
    }
}

/// Clause 20.2.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostTermination;

impl ClauseComposer for PostTermination {
    fn id(&self) -> ClauseId {
        ClauseId::PostTermination
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[
            POSSESSION_RETURN_DAYS,
            ENABLE_CONSEQUENCES,
            CONSEQUENCES,
            ENABLE_EARLY_TERMINATION,
            EARLY_TERMINATION_TYPE,
            EARLY_TERMINATION_NOTICE,
            EARLY_TERMINATION_PENALTY,
            EARLY_TERM_AFTER_MONTHS,
        ]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        let mut text = String::from(POST_TERMINATION_BASE);

        if let Some(days) = config.text(POSSESSION_RETURN_DAYS) {
            text.push_str(&format!(" within {days} days of termination notice"));
        }
        text.push_str(DEPOSIT_REFUND);

        if config.is_enabled(ENABLE_CONSEQUENCES) {
            let consequences = config.list(CONSEQUENCES);
            if !consequences.is_empty() {
                text.push_str(CONSEQUENCES_PREFIX);
                text.push_str(&consequences.join("; "));
            }
        }
        text.push('.');

        if config.is_enabled(ENABLE_EARLY_TERMINATION) {
            if let Some(kind) = EarlyTerminationType::read(config, EARLY_TERMINATION_TYPE) {
                text.push(' ');
                text.push_str(&template::render(
                    early_termination_template(kind),
                    EARLY_PARAMS,
                    config,
                ));
            }
        }

        text
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if config.is_enabled(ENABLE_CONSEQUENCES) && config.list(CONSEQUENCES).is_empty() {
            missing.push(CONSEQUENCES);
        }
        if config.is_enabled(ENABLE_EARLY_TERMINATION)
            && EarlyTerminationType::read(config, EARLY_TERMINATION_TYPE).is_none()
        {
            missing.push(EARLY_TERMINATION_TYPE);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalation_uses_first_warning_default() {
        let config = ClauseConfig::new()
            .with(CLAUSE_TYPE, "escalation")
            .with(NOTICE_DAYS, 10);
        let text = TerminationByLessor.compose(&config);
        assert!(text.contains("within 7 days; (b)"));
        assert!(text.contains("additional 10 days"));
    }

    #[test]
    fn immediate_needs_no_notice_days() {
        let config = ClauseConfig::new().with(CLAUSE_TYPE, "immediate");
        assert!(TerminationByLessor.completeness(&config).is_complete());
    }

    #[test]
    fn early_termination_without_type_adds_nothing() {
        let base = PostTermination.compose(&ClauseConfig::new());
        let config = ClauseConfig::new().with(ENABLE_EARLY_TERMINATION, true);
        assert_eq!(PostTermination.compose(&config), base);
        assert_eq!(
            PostTermination.missing_fields(&config),
            vec![EARLY_TERMINATION_TYPE]
        );
    }
}
