#![allow(dead_code)]
//! Shared fixtures for lease-clauses integration tests.

use lease_clauses::families::{
    assignment, counterparts, default_penalty, mortgage, security_deposit, termination,
};
use lease_core::ClauseConfig;

/// Every parameter, toggle, sub-discriminator, and override filled in.
/// Family discriminators are left unset for the caller to choose.
pub fn complete_inputs() -> ClauseConfig {
    ClauseConfig::new()
        // termination
        .with(termination::NOTICE_DAYS, 15)
        .with(termination::FIRST_WARNING_DAYS, 5)
        .with(termination::CUSTOM_CLAUSE, "Termination by agreement only.")
        .with(termination::POSSESSION_RETURN_DAYS, 30)
        .with(termination::ENABLE_CONSEQUENCES, true)
        .with(
            termination::CONSEQUENCES,
            ["Lessee must repair any damages to the premises"],
        )
        .with(termination::ENABLE_EARLY_TERMINATION, true)
        .with(termination::EARLY_TERMINATION_TYPE, "with_penalty")
        .with(termination::EARLY_TERMINATION_NOTICE, 60)
        .with(termination::EARLY_TERMINATION_PENALTY, "2 months rent")
        .with(termination::EARLY_TERM_AFTER_MONTHS, 6)
        // assignment
        .with(assignment::LESSEE_LOSS_OF_RIGHTS, true)
        .with(assignment::NOTIFICATION_DAYS, 45)
        .with(assignment::CUSTOM_CLAUSE, "Assignment as agreed in writing.")
        .with(assignment::ENABLE_RESTRICTIONS, true)
        .with(assignment::RESTRICTION_TYPE, "financial_status")
        .with(assignment::CUSTOM_RESTRICTIONS, "Assignee must be a bank.")
        .with(assignment::ENABLE_OBLIGATIONS, true)
        .with(
            assignment::OBLIGATIONS,
            ["Assume all obligations of original lessor"],
        )
        .with(assignment::LESSOR_LIABILITY, "joint_liability")
        // mortgage
        .with(mortgage::LIEN_NOTICE_REQUIREMENT, "written notice within 10 days")
        .with(mortgage::MORTGAGOR_CONSENT_DAYS, 20)
        .with(mortgage::MAX_MORTGAGE_LTV, "60%")
        .with(mortgage::CUSTOM_CLAUSE, "Mortgage only with consent.")
        .with(mortgage::ENABLE_LIEN_PROTECTION, true)
        .with(mortgage::LIEN_PROTECTION_TYPE, "quiet_enjoyment")
        .with(mortgage::CUSTOM_LIEN_PROTECTION, "Lessee stays in possession.")
        .with(mortgage::ENABLE_PRIORITY_RIGHTS, true)
        .with(mortgage::PRIORITY_RIGHTS_TYPE, "superior")
        .with(mortgage::ENABLE_RESTRICTIONS, true)
        .with(
            mortgage::RESTRICTIONS,
            ["Mortgagee must maintain property insurance"],
        )
        // counterparts
        .with(counterparts::NUMBER_OF_COUNTERPARTS, 3)
        .with(counterparts::CUSTOM_CLAUSE, "Signed in one original.")
        .with(counterparts::ENABLE_DIGITAL_SIGNATURE, true)
        .with(counterparts::DIGITAL_SIGNATURE_TYPE, "advanced")
        .with(counterparts::ENABLE_DELIVERY_METHOD, true)
        .with(counterparts::DELIVERY_METHOD, "email_pdf")
        .with(counterparts::ENABLE_AUTHENTICATION_METHOD, true)
        .with(counterparts::AUTHENTICATION_METHOD, "digital_cert")
        .with(counterparts::ENABLE_EXECUTION_TIMING, true)
        .with(counterparts::EXECUTION_TIMING_REQUIREMENT, "within 10 days")
        // default
        .with(default_penalty::CONSECUTIVE_MONTHS, 2)
        .with(default_penalty::LATE_FEE_AMOUNT, 1000)
        .with(default_penalty::INTEREST_RATE, 2)
        .with(default_penalty::CUSTOM_PENALTY, "to forfeit the deposit")
        .with(default_penalty::ENABLE_REMEDY_PERIOD, true)
        .with(default_penalty::NOTICE_PERIOD_DAYS, 15)
        .with(default_penalty::REMEDY_ACTION, "auto_terminate")
        // security deposit
        .with(security_deposit::DEDUCTION_TYPES, ["Outstanding rent arrears"])
        .with(security_deposit::CUSTOM_SETTLEMENT, "Deductions as invoiced.")
        .with(security_deposit::ENABLE_SETTLEMENT_PERIOD, true)
        .with(security_deposit::REFUND_DAYS, 30)
        .with(security_deposit::ENABLE_TRANSFER, true)
        .with(security_deposit::TRANSFER_TYPE, "with_notice")
        .with(security_deposit::TRANSFER_NOTICE_DAYS, 15)
        .with(security_deposit::CUSTOM_TRANSFER, "Deposit follows the sale.")
}

/// Complete inputs with every family discriminator set to a non-custom variant.
pub fn complete_deed() -> ClauseConfig {
    complete_inputs()
        .with(termination::CLAUSE_TYPE, "standard")
        .with(assignment::CLAUSE_TYPE, "with_notification")
        .with(mortgage::CLAUSE_TYPE, "lessee_notice")
        .with(counterparts::CLAUSE_TYPE, "hybrid")
        .with(default_penalty::PENALTY_TYPE, "late_fee_penalty")
        .with(security_deposit::SETTLEMENT_TYPE, "standard")
}

/// Any unresolved marker the composers can emit.
pub fn has_gap(text: &str) -> bool {
    text.contains("___") || text.contains("[Select") || text.contains("[Your custom")
}
