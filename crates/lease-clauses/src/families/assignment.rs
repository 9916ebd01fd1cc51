//! Assignment by lessor (clause 23).
//!
//! Fragment order after the base sentence: assignee restrictions (not for
//! `limited_assignment`, which already names its assignees), assignee
//! obligations, then the lessor's post-assignment liability.

use lease_core::ClauseConfig;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;
use crate::template::{self, Param, VariantTag};

pub const CLAUSE_TYPE: &str = "assignmentClauseType";
pub const LESSEE_LOSS_OF_RIGHTS: &str = "lesseeLossOfRights";
pub const NOTIFICATION_DAYS: &str = "notificationDays";
pub const CUSTOM_CLAUSE: &str = "customAssignmentClause";
pub const ENABLE_RESTRICTIONS: &str = "enableAssignmentRestrictions";
pub const RESTRICTION_TYPE: &str = "restrictionType";
pub const CUSTOM_RESTRICTIONS: &str = "customRestrictions";
pub const ENABLE_OBLIGATIONS: &str = "enableAssigneeObligation";
pub const OBLIGATIONS: &str = "assigneeObligations";
pub const LESSOR_LIABILITY: &str = "postAssignmentLessorLiability";

pub const SELECT_PLACEHOLDER: &str = "[Select assignment type]";
pub const CUSTOM_PLACEHOLDER: &str = "[Your custom assignment clause will appear here]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentType {
    Unrestricted,
    LesseeConsent,
    WithNotification,
    LimitedAssignment,
    Custom,
}

impl VariantTag for AssignmentType {
    const ALL: &'static [Self] = &[
        Self::Unrestricted,
        Self::LesseeConsent,
        Self::WithNotification,
        Self::LimitedAssignment,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::LesseeConsent => "lessee_consent",
            Self::WithNotification => "with_notification",
            Self::LimitedAssignment => "limited_assignment",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestrictionType {
    FinancialStatus,
    BusinessType,
    NoIllegal,
    Compliance,
    Custom,
}

impl VariantTag for RestrictionType {
    const ALL: &'static [Self] = &[
        Self::FinancialStatus,
        Self::BusinessType,
        Self::NoIllegal,
        Self::Compliance,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::FinancialStatus => "financial_status",
            Self::BusinessType => "business_type",
            Self::NoIllegal => "no_illegal",
            Self::Compliance => "compliance",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessorLiability {
    NoLiability,
    JointLiability,
    LimitedLiability,
}

impl VariantTag for LessorLiability {
    const ALL: &'static [Self] = &[
        Self::NoLiability,
        Self::JointLiability,
        Self::LimitedLiability,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::NoLiability => "no_liability",
            Self::JointLiability => "joint_liability",
            Self::LimitedLiability => "limited_liability",
        }
    }
}

const PARAMS: &[Param] = &[
    Param::new("notify_days", NOTIFICATION_DAYS, "30"),
    Param::new("custom", CUSTOM_CLAUSE, CUSTOM_PLACEHOLDER),
];

pub fn base_template(kind: AssignmentType) -> &'static str {
    match kind {
        AssignmentType::Unrestricted => "The Lessor shall have the right to sell, assign, convey, or transfer his interest in the Leased Premises or his rights and obligations under this Lease Deed to any third party without obtaining the written consent of the Lessee, provided that he ensures the prospective purchaser/assignee agrees to be bound by the terms of this Lease Deed.",
        AssignmentType::LesseeConsent => "Any sale, assignment, conveyance, or transfer of the Lessor's interest in the Leased Premises or his rights and obligations under this Lease Deed shall require the prior written consent of the Lessee, which shall not be unreasonably withheld or delayed.",
        AssignmentType::WithNotification => "The Lessor shall have the right to sell, assign, convey, or transfer his interest in the Leased Premises or his rights and obligations under this Lease Deed to any third party. However, the Lessor must provide written notification to the Lessee within {notify_days} days of the assignment, clearly identifying the new assignee and confirming that the assignee agrees to be bound by the terms of this Lease Deed.",
        AssignmentType::LimitedAssignment => "The Lessor may assign this Lease Deed to: (a) Financial institutions or lenders in case of mortgage or refinancing; (b) Property management companies; (c) Related entities or affiliated companies. Any assignment outside these categories requires the Lessee's written consent. The Lessor must notify the Lessee in writing within 15 days of any permitted assignment.",
        AssignmentType::Custom => "{custom}",
    }
}

const LOSS_OF_RIGHTS: &str = " However, if the Lessee unreasonably refuses consent, the Lessor may proceed with the assignment, and the Lessee shall retain all rights under this Lease Deed.";
const OBLIGATIONS_PREFIX: &str = " The assignee shall be bound by the following obligations: ";

/// Restriction sentence; `Custom` is handled by the caller.
fn restriction_text(kind: RestrictionType) -> &'static str {
    match kind {
        RestrictionType::FinancialStatus => " The assignee must demonstrate financial creditworthiness equivalent to or better than the original Lessee.",
        RestrictionType::BusinessType => " The assignee's business activities must be compatible with the nature and purpose of the Leased Premises.",
        RestrictionType::NoIllegal => " The assignee must certify that they will not engage in any illegal activities on the Leased Premises.",
        RestrictionType::Compliance => " The assignee must agree to comply with all applicable laws, regulations, and bylaws related to the use of the Leased Premises.",
        RestrictionType::Custom => "",
    }
}

fn liability_text(kind: LessorLiability) -> &'static str {
    match kind {
        LessorLiability::NoLiability => " Upon assignment, the original Lessor shall be released from all liabilities and obligations under this Lease Deed.",
        LessorLiability::JointLiability => " Upon assignment, the original Lessor shall remain jointly liable with the assignee for all obligations under this Lease Deed until the lease expiry or early termination.",
        LessorLiability::LimitedLiability => " The original Lessor shall remain liable for the obligations of the new lessor for a period of 12 months from the date of assignment or until the expiry of the lease, whichever is earlier.",
    }
}

fn restrictions_apply(kind: Option<AssignmentType>, config: &ClauseConfig) -> bool {
    config.is_enabled(ENABLE_RESTRICTIONS) && kind != Some(AssignmentType::LimitedAssignment)
}

/// Clause 23.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentByLessor;

impl ClauseComposer for AssignmentByLessor {
    fn id(&self) -> ClauseId {
        ClauseId::AssignmentByLessor
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[
            CLAUSE_TYPE,
            LESSEE_LOSS_OF_RIGHTS,
            NOTIFICATION_DAYS,
            CUSTOM_CLAUSE,
            ENABLE_RESTRICTIONS,
            RESTRICTION_TYPE,
            CUSTOM_RESTRICTIONS,
            ENABLE_OBLIGATIONS,
            OBLIGATIONS,
            LESSOR_LIABILITY,
        ]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        let kind = AssignmentType::read(config, CLAUSE_TYPE);
        let mut text = match kind {
            Some(kind) => template::render(base_template(kind), PARAMS, config),
            None => SELECT_PLACEHOLDER.to_string(),
        };

        if kind == Some(AssignmentType::LesseeConsent) && config.is_enabled(LESSEE_LOSS_OF_RIGHTS) {
            text.push_str(LOSS_OF_RIGHTS);
        }

        if restrictions_apply(kind, config) {
            match RestrictionType::read(config, RESTRICTION_TYPE) {
                Some(RestrictionType::Custom) => {
                    if let Some(custom) = config.text(CUSTOM_RESTRICTIONS) {
                        text.push(' ');
                        text.push_str(&custom);
                    }
                }
                Some(restriction) => text.push_str(restriction_text(restriction)),
                None => {}
            }
        }

        if config.is_enabled(ENABLE_OBLIGATIONS) {
            let obligations = config.list(OBLIGATIONS);
            if !obligations.is_empty() {
                text.push_str(OBLIGATIONS_PREFIX);
                text.push_str(&obligations.join("; "));
                text.push('.');
            }
        }

        if let Some(liability) = LessorLiability::read(config, LESSOR_LIABILITY) {
            text.push_str(liability_text(liability));
        }

        text
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        let kind = AssignmentType::read(config, CLAUSE_TYPE);
        let mut missing = match kind {
            Some(kind) => template::missing(base_template(kind), PARAMS, config),
            None => vec![CLAUSE_TYPE],
        };

        if restrictions_apply(kind, config) {
            match RestrictionType::read(config, RESTRICTION_TYPE) {
                Some(RestrictionType::Custom) if !config.is_set(CUSTOM_RESTRICTIONS) => {
                    missing.push(CUSTOM_RESTRICTIONS);
                }
                None => missing.push(RESTRICTION_TYPE),
                _ => {}
            }
        }

        if config.is_enabled(ENABLE_OBLIGATIONS) && config.list(OBLIGATIONS).is_empty() {
            missing.push(OBLIGATIONS);
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_assignment_ignores_restrictions() {
        let config = ClauseConfig::new()
            .with(CLAUSE_TYPE, "limited_assignment")
            .with(ENABLE_RESTRICTIONS, true)
            .with(RESTRICTION_TYPE, "compliance");
        let text = AssignmentByLessor.compose(&config);
        assert!(!text.contains("applicable laws, regulations, and bylaws"));
        assert!(AssignmentByLessor.completeness(&config).is_complete());
    }

    #[test]
    fn loss_of_rights_only_for_lessee_consent() {
        let config = ClauseConfig::new()
            .with(CLAUSE_TYPE, "unrestricted")
            .with(LESSEE_LOSS_OF_RIGHTS, true);
        assert!(!AssignmentByLessor.compose(&config).contains("unreasonably refuses"));

        let config = config.with(CLAUSE_TYPE, "lessee_consent");
        assert!(AssignmentByLessor.compose(&config).ends_with(LOSS_OF_RIGHTS.trim_start()));
    }
}
