//! Right to mortgage (clause 26).
//!
//! Fragment order after the base sentence: lien protection, lease priority,
//! then the selected mortgage restrictions.

use lease_core::ClauseConfig;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;
use crate::template::{self, Param, VariantTag};

pub const CLAUSE_TYPE: &str = "mortgageClauseType";
pub const LIEN_NOTICE_REQUIREMENT: &str = "lienNoticeRequirement";
pub const MORTGAGOR_CONSENT_DAYS: &str = "mortgagorConsentDays";
pub const MAX_MORTGAGE_LTV: &str = "maxMortgageLTV";
pub const CUSTOM_CLAUSE: &str = "customMortgageClause";
pub const ENABLE_LIEN_PROTECTION: &str = "enableLienProtection";
pub const LIEN_PROTECTION_TYPE: &str = "lienProtectionType";
pub const CUSTOM_LIEN_PROTECTION: &str = "customLienProtection";
pub const ENABLE_PRIORITY_RIGHTS: &str = "enablePriorityRights";
pub const PRIORITY_RIGHTS_TYPE: &str = "priorityRightsType";
pub const ENABLE_RESTRICTIONS: &str = "enableMortgageRestrictions";
pub const RESTRICTIONS: &str = "mortgageRestrictions";

pub const SELECT_PLACEHOLDER: &str = "[Select mortgage clause type]";
pub const CUSTOM_PLACEHOLDER: &str = "[Your custom mortgage clause will appear here]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MortgageType {
    Unrestricted,
    LesseeNotice,
    MortgagorConsent,
    LesseeProtected,
    RestrictedAmount,
    Custom,
}

impl VariantTag for MortgageType {
    const ALL: &'static [Self] = &[
        Self::Unrestricted,
        Self::LesseeNotice,
        Self::MortgagorConsent,
        Self::LesseeProtected,
        Self::RestrictedAmount,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::LesseeNotice => "lessee_notice",
            Self::MortgagorConsent => "mortgagor_consent",
            Self::LesseeProtected => "lessee_protected",
            Self::RestrictedAmount => "restricted_amount",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LienProtection {
    NdaRequired,
    LeasePriority,
    QuietEnjoyment,
    Custom,
}

impl VariantTag for LienProtection {
    const ALL: &'static [Self] = &[
        Self::NdaRequired,
        Self::LeasePriority,
        Self::QuietEnjoyment,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::NdaRequired => "nda_required",
            Self::LeasePriority => "lease_priority",
            Self::QuietEnjoyment => "quiet_enjoyment",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityRights {
    Subordination,
    Superior,
    Negotiated,
}

impl VariantTag for PriorityRights {
    const ALL: &'static [Self] = &[Self::Subordination, Self::Superior, Self::Negotiated];

    fn tag(self) -> &'static str {
        match self {
            Self::Subordination => "subordination",
            Self::Superior => "superior",
            Self::Negotiated => "negotiated",
        }
    }
}

const PARAMS: &[Param] = &[
    Param::new("notice_requirement", LIEN_NOTICE_REQUIREMENT, "written notice within 30 days"),
    Param::new("consent_days", MORTGAGOR_CONSENT_DAYS, "30"),
    Param::new("max_ltv", MAX_MORTGAGE_LTV, "70%"),
    Param::new("custom", CUSTOM_CLAUSE, CUSTOM_PLACEHOLDER),
];

pub fn base_template(kind: MortgageType) -> &'static str {
    match kind {
        MortgageType::Unrestricted => "Lessor reserves the right to mortgage or otherwise place a lien on the Leased Premises, and Lessee agrees to accept the Leased Premises subject to and subordinate to any such mortgage or lien. In the event the Lessor has already mortgaged the Leased Premises, it shall ensure that it obtains the consent of the mortgagor, if required, for the lease of the Leased Premises.",
        MortgageType::LesseeNotice => "Lessor reserves the right to mortgage or otherwise place a lien on the Leased Premises. However, the Lessor must provide the Lessee with {notice_requirement} of any such mortgage or lien. The Lessee agrees to accept the Leased Premises subject to and subordinate to any such mortgage or lien. In the event the Lessor has already mortgaged the Leased Premises, it shall obtain the consent of the mortgagor for the lease of the Leased Premises.",
        MortgageType::MortgagorConsent => "The Lessor warrants that it has obtained or shall obtain the mortgagor's consent prior to entering into this Lease Deed. The Lessor shall provide evidence of such consent within {consent_days} days. The Lessee agrees to accept the Leased Premises subject to and subordinate to any existing or future mortgage or lien, provided that the mortgagor consents to the lease. If the mortgagor does not consent, the Lessor shall inform the Lessee in writing within {consent_days} days.",
        MortgageType::LesseeProtected => "The Lessor reserves the right to mortgage the Leased Premises with the following limitations: (a) The mortgage shall not interfere with the Lessee's quiet enjoyment of the premises; (b) The mortgagee shall recognize the Lessee's lease rights and provide a non-disturbance agreement; (c) The Lessee shall not be held liable for the Lessor's mortgage debt or defaults. The Lessee agrees to execute any non-disturbance agreements required by the mortgagee.",
        MortgageType::RestrictedAmount => "The Lessor may mortgage the Leased Premises provided that the total mortgage does not exceed {max_ltv} of the property's assessed value. The Lessor must provide proof of the property valuation and mortgage amount to the Lessee upon request. The Lessee agrees to accept the Leased Premises subject to such mortgage within the specified limit. Any mortgage exceeding this limit requires the Lessee's written consent.",
        MortgageType::Custom => "{custom}",
    }
}

fn lien_protection_text(kind: LienProtection) -> &'static str {
    match kind {
        LienProtection::NdaRequired => " The Lessor shall ensure that any mortgagee provides a Non-Disturbance and Attornment (NDA) agreement protecting the Lessee's lease rights in case of foreclosure.",
        LienProtection::LeasePriority => " The Lessor shall ensure that this lease is recorded and has priority over any mortgage or lien created after the lease commencement date.",
        LienProtection::QuietEnjoyment => " The Lessee's right to quiet enjoyment shall be expressly preserved and shall not be affected by any mortgage, lien, or foreclosure proceedings.",
        LienProtection::Custom => "",
    }
}

fn priority_text(kind: PriorityRights) -> &'static str {
    match kind {
        PriorityRights::Subordination => " The Lessee unconditionally subordinates its lease to all existing and future mortgages, liens, and encumbrances on the Leased Premises.",
        PriorityRights::Superior => " The Lessee's lease rights shall be superior to any mortgage or lien created after the lease commencement date, unless the Lessee consents otherwise.",
        PriorityRights::Negotiated => " The priority of the Lessee's lease relative to any mortgage or lien shall be negotiated and documented in writing between the parties and any mortgagee.",
    }
}

const RESTRICTIONS_PREFIX: &str = " Additional restrictions on mortgage: ";

/// Clause 26.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightToMortgage;

impl ClauseComposer for RightToMortgage {
    fn id(&self) -> ClauseId {
        ClauseId::RightToMortgage
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[
            CLAUSE_TYPE,
            LIEN_NOTICE_REQUIREMENT,
            MORTGAGOR_CONSENT_DAYS,
            MAX_MORTGAGE_LTV,
            CUSTOM_CLAUSE,
            ENABLE_LIEN_PROTECTION,
            LIEN_PROTECTION_TYPE,
            CUSTOM_LIEN_PROTECTION,
            ENABLE_PRIORITY_RIGHTS,
            PRIORITY_RIGHTS_TYPE,
            ENABLE_RESTRICTIONS,
            RESTRICTIONS,
        ]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        let mut text = match MortgageType::read(config, CLAUSE_TYPE) {
            Some(kind) => template::render(base_template(kind), PARAMS, config),
            None => SELECT_PLACEHOLDER.to_string(),
        };

        if config.is_enabled(ENABLE_LIEN_PROTECTION) {
            match LienProtection::read(config, LIEN_PROTECTION_TYPE) {
                Some(LienProtection::Custom) => {
                    if let Some(custom) = config.text(CUSTOM_LIEN_PROTECTION) {
                        text.push(' ');
                        text.push_str(&custom);
                    }
                }
                Some(protection) => text.push_str(lien_protection_text(protection)),
                None => {}
            }
        }

        if config.is_enabled(ENABLE_PRIORITY_RIGHTS) {
            if let Some(priority) = PriorityRights::read(config, PRIORITY_RIGHTS_TYPE) {
                text.push_str(priority_text(priority));
            }
        }

        if config.is_enabled(ENABLE_RESTRICTIONS) {
            let restrictions = config.list(RESTRICTIONS);
            if !restrictions.is_empty() {
                text.push_str(RESTRICTIONS_PREFIX);
                text.push_str(&restrictions.join("; "));
                text.push('.');
            }
        }

        text
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        let mut missing = match MortgageType::read(config, CLAUSE_TYPE) {
            Some(kind) => template::missing(base_template(kind), PARAMS, config),
            None => vec![CLAUSE_TYPE],
        };

        if config.is_enabled(ENABLE_LIEN_PROTECTION) {
            match LienProtection::read(config, LIEN_PROTECTION_TYPE) {
                Some(LienProtection::Custom) if !config.is_set(CUSTOM_LIEN_PROTECTION) => {
                    missing.push(CUSTOM_LIEN_PROTECTION);
                }
                None => missing.push(LIEN_PROTECTION_TYPE),
                _ => {}
            }
        }
        if config.is_enabled(ENABLE_PRIORITY_RIGHTS)
            && PriorityRights::read(config, PRIORITY_RIGHTS_TYPE).is_none()
        {
            missing.push(PRIORITY_RIGHTS_TYPE);
        }
        if config.is_enabled(ENABLE_RESTRICTIONS) && config.list(RESTRICTIONS).is_empty() {
            missing.push(RESTRICTIONS);
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_days_fill_both_slots() {
        let config = ClauseConfig::new()
            .with(CLAUSE_TYPE, "mortgagor_consent")
            .with(MORTGAGOR_CONSENT_DAYS, 45);
        let text = RightToMortgage.compose(&config);
        assert_eq!(text.matches("within 45 days").count(), 2);
    }

    #[test]
    fn fragments_follow_fixed_order() {
        let config = ClauseConfig::new()
            .with(CLAUSE_TYPE, "unrestricted")
            .with(ENABLE_RESTRICTIONS, true)
            .with(RESTRICTIONS, ["Mortgagee must maintain property insurance"])
            .with(ENABLE_PRIORITY_RIGHTS, true)
            .with(PRIORITY_RIGHTS_TYPE, "negotiated")
            .with(ENABLE_LIEN_PROTECTION, true)
            .with(LIEN_PROTECTION_TYPE, "quiet_enjoyment");
        let text = RightToMortgage.compose(&config);
        let lien = text.find("quiet enjoyment shall be expressly preserved").unwrap();
        let priority = text.find("shall be negotiated and documented").unwrap();
        let restrictions = text.find("Additional restrictions on mortgage").unwrap();
        assert!(lien < priority && priority < restrictions);
        assert!(text.ends_with("Mortgagee must maintain property insurance."));
    }
}
