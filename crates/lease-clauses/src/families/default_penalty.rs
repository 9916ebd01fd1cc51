//! Default on rent (clauses 4.3 and 4.4).
//!
//! 4.3 wraps the selected penalty in a fixed stipulation sentence. 4.4 is the
//! optional remedy period and renders empty while `enableRemedyPeriod` is off.

use lease_core::ClauseConfig;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;
use crate::template::{self, Param, VariantTag, BLANK};

pub const CONSECUTIVE_MONTHS: &str = "defaultConsecutiveMonths";
pub const PENALTY_TYPE: &str = "defaultPenaltyType";
pub const LATE_FEE_AMOUNT: &str = "lateFeeAmount";
pub const LATE_FEE_CURRENCY: &str = "lateFeeCurrency";
pub const INTEREST_RATE: &str = "penaltyInterestRate";
pub const CUSTOM_PENALTY: &str = "customPenaltyClause";
pub const ADDITIONAL_RIGHTS: &str = "additionalPenaltyRights";
pub const ENABLE_REMEDY_PERIOD: &str = "enableRemedyPeriod";
pub const NOTICE_PERIOD_DAYS: &str = "noticePeriodDays";
pub const REMEDY_ACTION: &str = "remedyPeriodAction";
pub const CUSTOM_REMEDY: &str = "customRemedyClause";

/// `lateFeeCurrency` value that makes the late fee a share of the rent.
pub const PERCENTAGE: &str = "percentage";

pub const SELECT_PENALTY_PLACEHOLDER: &str = "[Select penalty type]";
pub const CUSTOM_PENALTY_PLACEHOLDER: &str = "[Your custom penalty clause will appear here]";
pub const SELECT_ACTION_PLACEHOLDER: &str = "[Select action]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenaltyType {
    TerminateAndReclaim,
    LateFeePenalty,
    InterestAccumulation,
    LegalAction,
    MultiplePenalties,
    Custom,
}

impl VariantTag for PenaltyType {
    const ALL: &'static [Self] = &[
        Self::TerminateAndReclaim,
        Self::LateFeePenalty,
        Self::InterestAccumulation,
        Self::LegalAction,
        Self::MultiplePenalties,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::TerminateAndReclaim => "terminate_and_reclaim",
            Self::LateFeePenalty => "late_fee_penalty",
            Self::InterestAccumulation => "interest_accumulation",
            Self::LegalAction => "legal_action",
            Self::MultiplePenalties => "multiple_penalties",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemedyAction {
    AutoTerminate,
    LessorAction,
    EscalatePenalty,
}

impl VariantTag for RemedyAction {
    const ALL: &'static [Self] = &[Self::AutoTerminate, Self::LessorAction, Self::EscalatePenalty];

    fn tag(self) -> &'static str {
        match self {
            Self::AutoTerminate => "auto_terminate",
            Self::LessorAction => "lessor_action",
            Self::EscalatePenalty => "escalate_penalty",
        }
    }
}

const PENALTY_PARAMS: &[Param] = &[
    Param::new("rate", INTEREST_RATE, BLANK),
    Param::new("custom", CUSTOM_PENALTY, CUSTOM_PENALTY_PLACEHOLDER),
];

const REMEDY_PARAMS: &[Param] = &[Param::new("days", NOTICE_PERIOD_DAYS, BLANK)];

const STIPULATION: &str = "It is hereby stipulated that if the Lessee defaults in the payment of rent for a period of {months} consecutive months, the Lessor shall have the right, in addition to other rights and remedies available under this Lease Deed and applicable laws, {penalty}{additional}.";

const REMEDY_NOTICE: &str = "However, the Lessor must provide written notice to the Lessee of its intention to enforce the penalty specified in clause 4.3. If the Lessee settles the overdue rent within {days} days from the issuance of the notice by the Lessor, the Lessor shall not have the right to enforce the penalty. Conversely, if the Lessee fails to pay the overdue rent within {days} days from the date of the notice issued by the Lessor, {action}.";

/// Penalty wording; `{fee}` is filled by [`late_fee`].
pub fn penalty_template(kind: PenaltyType) -> &'static str {
    match kind {
        PenaltyType::TerminateAndReclaim => "to terminate the lease granted under this Lease Deed at its sole discretion and reclaim possession of the Leased Premises as the complete and absolute owner, irrespective of the time that has passed",
        PenaltyType::LateFeePenalty => "to impose a late fee penalty of {fee} for each month of default, in addition to the overdue rent amount",
        PenaltyType::InterestAccumulation => "to charge interest at the rate of {rate}% per month on the overdue rent amount, compounded monthly, until full payment is received",
        PenaltyType::LegalAction => "to initiate legal proceedings for recovery of dues and possession of the Leased Premises, in addition to claiming damages for breach of contract",
        // Built piecewise in `multiple_penalties`.
        PenaltyType::MultiplePenalties => "",
        PenaltyType::Custom => "{custom}",
    }
}

pub fn action_text(action: Option<RemedyAction>) -> &'static str {
    match action {
        Some(RemedyAction::AutoTerminate) => "the lease shall be deemed automatically terminated, with no further actions required from the Lessor",
        Some(RemedyAction::LessorAction) => "the Lessor may proceed to take the actions specified in clause 4.3 above",
        Some(RemedyAction::EscalatePenalty) => "the penalty shall escalate, and the Lessor may invoke additional remedies",
        None => SELECT_ACTION_PLACEHOLDER,
    }
}

/// Late fee amount as a rupee figure or a share of the rent.
fn late_fee(amount: &str, config: &ClauseConfig, of_rent: &str) -> String {
    if config.tag(LATE_FEE_CURRENCY) == Some(PERCENTAGE) {
        format!("{amount}% {of_rent}")
    } else {
        format!("₹{amount}")
    }
}

fn multiple_penalties(config: &ClauseConfig) -> String {
    let mut penalties = Vec::with_capacity(3);
    if let Some(amount) = config.text(LATE_FEE_AMOUNT) {
        penalties.push(format!(
            "impose a late fee of {}",
            late_fee(&amount, config, "of monthly rent")
        ));
    }
    if let Some(rate) = config.text(INTEREST_RATE) {
        penalties.push(format!("charge {rate}% interest per month"));
    }
    penalties.push("terminate the lease and reclaim possession".to_string());
    format!("to {}", penalties.join(", and/or "))
}

fn penalty_text(config: &ClauseConfig) -> String {
    let Some(kind) = PenaltyType::read(config, PENALTY_TYPE) else {
        return SELECT_PENALTY_PLACEHOLDER.to_string();
    };
    if kind == PenaltyType::MultiplePenalties {
        return multiple_penalties(config);
    }
    template::fill(penalty_template(kind), |slot| match slot {
        "fee" => {
            let amount = config.text_or(LATE_FEE_AMOUNT, BLANK);
            Some(late_fee(&amount, config, "of the monthly rent"))
        }
        _ => PENALTY_PARAMS
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| config.text_or(p.field, p.fallback)),
    })
}

/// Clause 4.3.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPenalty;

impl ClauseComposer for DefaultPenalty {
    fn id(&self) -> ClauseId {
        ClauseId::DefaultPenalty
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[
            CONSECUTIVE_MONTHS,
            PENALTY_TYPE,
            LATE_FEE_AMOUNT,
            LATE_FEE_CURRENCY,
            INTEREST_RATE,
            CUSTOM_PENALTY,
            ADDITIONAL_RIGHTS,
        ]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        let penalty = penalty_text(config);
        template::fill(STIPULATION, |slot| match slot {
            "months" => Some(config.text_or(CONSECUTIVE_MONTHS, BLANK)),
            "penalty" => Some(penalty.clone()),
            "additional" => Some(
                config
                    .text(ADDITIONAL_RIGHTS)
                    .map(|rights| format!(", {rights}"))
                    .unwrap_or_default(),
            ),
            _ => None,
        })
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !config.is_set(CONSECUTIVE_MONTHS) {
            missing.push(CONSECUTIVE_MONTHS);
        }
        match PenaltyType::read(config, PENALTY_TYPE) {
            None => missing.push(PENALTY_TYPE),
            Some(PenaltyType::LateFeePenalty) if !config.is_set(LATE_FEE_AMOUNT) => {
                missing.push(LATE_FEE_AMOUNT)
            }
            Some(kind) => {
                missing.extend(template::missing(penalty_template(kind), PENALTY_PARAMS, config))
            }
        }
        missing
    }
}

/// Clause 4.4.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRemedy;

impl ClauseComposer for DefaultRemedy {
    fn id(&self) -> ClauseId {
        ClauseId::DefaultRemedy
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[ENABLE_REMEDY_PERIOD, NOTICE_PERIOD_DAYS, REMEDY_ACTION, CUSTOM_REMEDY]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        if !config.is_enabled(ENABLE_REMEDY_PERIOD) {
            return String::new();
        }
        if let Some(custom) = config.text(CUSTOM_REMEDY) {
            return custom;
        }
        let action = action_text(RemedyAction::read(config, REMEDY_ACTION));
        template::fill(REMEDY_NOTICE, |slot| match slot {
            "action" => Some(action.to_string()),
            _ => REMEDY_PARAMS
                .iter()
                .find(|p| p.slot == slot)
                .map(|p| config.text_or(p.field, p.fallback)),
        })
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        if !config.is_enabled(ENABLE_REMEDY_PERIOD) || config.is_set(CUSTOM_REMEDY) {
            return Vec::new();
        }
        let mut missing = template::missing(REMEDY_NOTICE, REMEDY_PARAMS, config);
        if RemedyAction::read(config, REMEDY_ACTION).is_none() {
            missing.push(REMEDY_ACTION);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_fee_in_rupees_by_default() {
        let config = ClauseConfig::new()
            .with(CONSECUTIVE_MONTHS, 2)
            .with(PENALTY_TYPE, "late_fee_penalty")
            .with(LATE_FEE_AMOUNT, 500);
        let text = DefaultPenalty.compose(&config);
        assert!(text.contains("a period of 2 consecutive months"));
        assert!(text.contains("late fee penalty of ₹500 for each month"));
    }

    #[test]
    fn late_fee_as_percentage() {
        let config = ClauseConfig::new()
            .with(PENALTY_TYPE, "late_fee_penalty")
            .with(LATE_FEE_AMOUNT, 5)
            .with(LATE_FEE_CURRENCY, PERCENTAGE);
        assert!(DefaultPenalty
            .compose(&config)
            .contains("late fee penalty of 5% of the monthly rent"));
    }

    #[test]
    fn multiple_penalties_always_end_with_termination() {
        let config = ClauseConfig::new()
            .with(CONSECUTIVE_MONTHS, 3)
            .with(PENALTY_TYPE, "multiple_penalties")
            .with(INTEREST_RATE, 2);
        let text = DefaultPenalty.compose(&config);
        assert!(text.contains(
            "applicable laws, to charge 2% interest per month, and/or terminate the lease and reclaim possession."
        ));
    }

    #[test]
    fn additional_rights_follow_penalty() {
        let config = ClauseConfig::new()
            .with(CONSECUTIVE_MONTHS, 3)
            .with(PENALTY_TYPE, "legal_action")
            .with(ADDITIONAL_RIGHTS, "and to forfeit the deposit");
        assert!(DefaultPenalty
            .compose(&config)
            .ends_with("breach of contract, and to forfeit the deposit."));
    }

    #[test]
    fn remedy_disabled_is_empty() {
        let config = ClauseConfig::new()
            .with(NOTICE_PERIOD_DAYS, 10)
            .with(REMEDY_ACTION, "auto_terminate");
        assert_eq!(DefaultRemedy.compose(&config), "");
        assert!(DefaultRemedy.completeness(&config).is_complete());
    }

    #[test]
    fn remedy_custom_wins() {
        let config = ClauseConfig::new()
            .with(ENABLE_REMEDY_PERIOD, true)
            .with(REMEDY_ACTION, "auto_terminate")
            .with(CUSTOM_REMEDY, "No cure period applies.");
        assert_eq!(DefaultRemedy.compose(&config), "No cure period applies.");
    }

    #[test]
    fn remedy_repeats_days() {
        let config = ClauseConfig::new()
            .with(ENABLE_REMEDY_PERIOD, true)
            .with(NOTICE_PERIOD_DAYS, 15)
            .with(REMEDY_ACTION, "lessor_action");
        let text = DefaultRemedy.compose(&config);
        assert_eq!(text.matches("within 15 days").count(), 2);
        assert!(text.ends_with("actions specified in clause 4.3 above."));
    }
}
