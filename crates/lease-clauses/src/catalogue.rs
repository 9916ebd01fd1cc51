//! Canned option data for the lease deed form.
//!
//! Checkbox lists are offered to the user as-is; [`family_entry`] describes
//! which fields drive each family so a form can be laid out without reaching
//! into the family modules.

use serde::Serialize;

use crate::clause::ClauseFamily;
use crate::families::{
    assignment, counterparts, default_penalty, mortgage, security_deposit, termination,
};
use crate::template::VariantTag;

/// Options for `terminationConsequences`.
pub const TERMINATION_CONSEQUENCES: &[&str] = &[
    "Lessee must settle all utility bills within 15 days",
    "Lessee must repair any damages to the premises",
    "Lessee must remove all installed fixtures and fittings",
    "Lessee must clear all outstanding maintenance fees",
    "Lessee must provide forwarding address for correspondence",
    "Lessor may deduct unpaid rent from security deposit",
    "Lessee forfeits right to renewal or extension",
];

/// Options for `assigneeObligations`.
pub const ASSIGNEE_OBLIGATIONS: &[&str] = &[
    "Assume all obligations of original lessor",
    "Indemnify original lessor from future claims",
    "Maintain property insurance at current levels",
    "Comply with all municipal regulations",
    "Respect existing tenant agreements",
    "Maintain maintenance standards",
    "Provide security deposit protection guarantee",
];

/// Options for `mortgageRestrictions`.
pub const MORTGAGE_RESTRICTIONS: &[&str] = &[
    "No mortgage refinancing without lessee consent",
    "Mortgage cannot exceed current outstanding debt",
    "Mortgagee must maintain property insurance",
    "All mortgage modifications require lessee notice",
    "Lessor must keep mortgage current and in good standing",
    "No pledge of lease payments without permission",
];

/// Options for `deductionTypes`.
pub const DEDUCTION_ITEMS: &[&str] = &[
    "Outstanding rent arrears",
    "Unpaid maintenance charges",
    "Utility bill arrears",
    "Repair costs for damages",
    "Cleaning and restoration expenses",
    "Late payment interest",
    "Legal fees for breach",
];

/// A checkbox list field and its canned options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListField {
    pub field: &'static str,
    pub options: &'static [&'static str],
}

/// Field layout of one clause family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyEntry {
    pub family: ClauseFamily,
    pub discriminator: &'static str,
    pub variants: Vec<&'static str>,
    pub toggles: &'static [&'static str],
    pub lists: &'static [ListField],
}

impl FamilyEntry {
    pub fn is_toggle(&self, field: &str) -> bool {
        self.toggles.contains(&field)
    }
}

pub fn family_entry(family: ClauseFamily) -> FamilyEntry {
    match family {
        ClauseFamily::Termination => FamilyEntry {
            family,
            discriminator: termination::CLAUSE_TYPE,
            variants: termination::TerminationType::tags(),
            toggles: &[
                termination::ENABLE_CONSEQUENCES,
                termination::ENABLE_EARLY_TERMINATION,
            ],
            lists: &[ListField {
                field: termination::CONSEQUENCES,
                options: TERMINATION_CONSEQUENCES,
            }],
        },
        ClauseFamily::AssignmentByLessor => FamilyEntry {
            family,
            discriminator: assignment::CLAUSE_TYPE,
            variants: assignment::AssignmentType::tags(),
            toggles: &[
                assignment::LESSEE_LOSS_OF_RIGHTS,
                assignment::ENABLE_RESTRICTIONS,
                assignment::ENABLE_OBLIGATIONS,
            ],
            lists: &[ListField {
                field: assignment::OBLIGATIONS,
                options: ASSIGNEE_OBLIGATIONS,
            }],
        },
        ClauseFamily::RightToMortgage => FamilyEntry {
            family,
            discriminator: mortgage::CLAUSE_TYPE,
            variants: mortgage::MortgageType::tags(),
            toggles: &[
                mortgage::ENABLE_LIEN_PROTECTION,
                mortgage::ENABLE_PRIORITY_RIGHTS,
                mortgage::ENABLE_RESTRICTIONS,
            ],
            lists: &[ListField {
                field: mortgage::RESTRICTIONS,
                options: MORTGAGE_RESTRICTIONS,
            }],
        },
        ClauseFamily::Counterparts => FamilyEntry {
            family,
            discriminator: counterparts::CLAUSE_TYPE,
            variants: counterparts::CounterpartsType::tags(),
            toggles: &[
                counterparts::ENABLE_DIGITAL_SIGNATURE,
                counterparts::ENABLE_DELIVERY_METHOD,
                counterparts::ENABLE_AUTHENTICATION_METHOD,
                counterparts::ENABLE_EXECUTION_TIMING,
            ],
            lists: &[],
        },
        ClauseFamily::DefaultPenalty => FamilyEntry {
            family,
            discriminator: default_penalty::PENALTY_TYPE,
            variants: default_penalty::PenaltyType::tags(),
            toggles: &[default_penalty::ENABLE_REMEDY_PERIOD],
            lists: &[],
        },
        ClauseFamily::SecurityDeposit => FamilyEntry {
            family,
            discriminator: security_deposit::SETTLEMENT_TYPE,
            variants: security_deposit::SettlementType::tags(),
            toggles: &[
                security_deposit::ENABLE_SETTLEMENT_PERIOD,
                security_deposit::ENABLE_TRANSFER,
            ],
            lists: &[ListField {
                field: security_deposit::DEDUCTION_TYPES,
                options: DEDUCTION_ITEMS,
            }],
        },
    }
}

/// Entries for every family, in document order.
pub fn catalogue() -> Vec<FamilyEntry> {
    ClauseFamily::ALL.iter().copied().map(family_entry).collect()
}

/// Canned options for a list field, if it has any.
pub fn list_options(field: &str) -> Option<&'static [&'static str]> {
    ClauseFamily::ALL
        .iter()
        .flat_map(|&family| family_entry(family).lists.iter())
        .find(|list| list.field == field)
        .map(|list| list.options)
}
