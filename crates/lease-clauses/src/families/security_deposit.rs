//! Security deposit (clauses 7.2 and 7.3).

use lease_core::ClauseConfig;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;
use crate::template::{self, Param, VariantTag, BLANK};

pub const SETTLEMENT_TYPE: &str = "settlementClauseType";
pub const DEDUCTION_TYPES: &str = "deductionTypes";
pub const CUSTOM_SETTLEMENT: &str = "customSettlementClause";
pub const ENABLE_SETTLEMENT_PERIOD: &str = "enableSettlementPeriod";
pub const REFUND_DAYS: &str = "securityDepositRefundDays";
pub const ENABLE_TRANSFER: &str = "enableTransferClause";
pub const TRANSFER_TYPE: &str = "transferClauseType";
pub const TRANSFER_NOTICE_DAYS: &str = "transferNoticeDays";
pub const CUSTOM_TRANSFER: &str = "customTransferClause";

pub const SELECT_SETTLEMENT_PLACEHOLDER: &str = "[Select settlement type]";
pub const CUSTOM_SETTLEMENT_PLACEHOLDER: &str = "[Your custom deduction clause will appear here]";
pub const SELECT_TRANSFER_PLACEHOLDER: &str = "[Select transfer clause type]";
pub const CUSTOM_TRANSFER_PLACEHOLDER: &str = "[Your custom transfer clause will appear here]";

/// Deduction wording used when the detailed list is empty.
pub const GENERIC_DEDUCTIONS: &str =
    "rent arrears, maintenance charges, utility bills, repair costs, cleaning expenses, or other charges";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementType {
    Standard,
    Detailed,
    NoDeduction,
    Custom,
}

impl VariantTag for SettlementType {
    const ALL: &'static [Self] = &[Self::Standard, Self::Detailed, Self::NoDeduction, Self::Custom];

    fn tag(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Detailed => "detailed",
            Self::NoDeduction => "no_deduction",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferType {
    Standard,
    WithNotice,
    LessorLiable,
    LesseeConsent,
    Custom,
}

impl VariantTag for TransferType {
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::WithNotice,
        Self::LessorLiable,
        Self::LesseeConsent,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::WithNotice => "with_notice",
            Self::LessorLiable => "lessor_liable",
            Self::LesseeConsent => "lessee_consent",
            Self::Custom => "custom",
        }
    }
}

const REFUND_PARAMS: &[Param] = &[
    Param::new("custom", CUSTOM_SETTLEMENT, CUSTOM_SETTLEMENT_PLACEHOLDER),
    Param::new("days", REFUND_DAYS, BLANK),
];

const TRANSFER_PARAMS: &[Param] = &[
    Param::new("notice", TRANSFER_NOTICE_DAYS, "30"),
    Param::new("custom", CUSTOM_TRANSFER, CUSTOM_TRANSFER_PLACEHOLDER),
];

const REFUND_BASE: &str = "7.2. The security deposit will be returned without interest at the same time as the Lessee delivers possession of the Leased Premises back to the Lessor upon the conclusion of the Lease Period or the earlier termination of this Lease Deed in accordance with the stipulated terms, provided that there are no outstanding dues owed by the Lessee.";

const SETTLEMENT_PERIOD: &str = " Should the security deposit be insufficient to cover the amounts owed to the Lessor, the Lessee will be responsible for settling all such outstanding amounts within {days} days of receiving a written demand from the Lessor.";

/// Deduction sentence; `{deductions}` is filled from the detailed list.
pub fn deduction_template(kind: SettlementType) -> &'static str {
    match kind {
        SettlementType::Standard => " The Lessor reserves the right to deduct any exceptional amounts related to rent, interest, or other charges owed by the Lessee, as well as any costs incurred for repairing damages inflicted on the Leased Premises by the Lessee, from the security deposit prior to its refund to the Lessee.",
        SettlementType::Detailed => " The Lessor reserves the right to deduct from the security deposit: {deductions}, prior to its refund to the Lessee.",
        SettlementType::NoDeduction => " The Lessor shall return the full security deposit without any deductions, subject to proper handover of the premises.",
        SettlementType::Custom => " {custom}",
    }
}

pub fn transfer_template(kind: TransferType) -> &'static str {
    match kind {
        TransferType::Standard => "If the Lessor sells the Leased Premises or assigns all rights under this Lease Deed to a third party (\"New Lessor\"), the security deposit shall also be transferred to the New Lessor, and the Lessor shall thereafter not have any liability towards the return of the security deposit to the Lessee.",
        TransferType::WithNotice => "If the Lessor sells the Leased Premises or assigns all rights under this Lease Deed to a third party (\"New Lessor\"), the Lessor shall provide written notice to the Lessee within {notice} days. The security deposit shall be transferred to the New Lessor, and the Lessor shall thereafter not have any liability towards the return of the security deposit to the Lessee.",
        TransferType::LessorLiable => "If the Lessor sells the Leased Premises or assigns all rights under this Lease Deed to a third party (\"New Lessor\"), the security deposit may be transferred to the New Lessor. However, the original Lessor shall remain jointly liable with the New Lessor for the return of the security deposit to the Lessee.",
        TransferType::LesseeConsent => "If the Lessor intends to sell the Leased Premises or assign all rights under this Lease Deed to a third party (\"New Lessor\"), such transfer shall require the prior written consent of the Lessee. Upon consent, the security deposit shall be transferred to the New Lessor, and the Lessor shall be relieved of liability for its return.",
        TransferType::Custom => "{custom}",
    }
}

fn deductions(config: &ClauseConfig) -> String {
    let items = config.list(DEDUCTION_TYPES);
    if items.is_empty() {
        GENERIC_DEDUCTIONS.to_string()
    } else {
        items.join(", ")
    }
}

fn settlement_period_applies(kind: Option<SettlementType>, config: &ClauseConfig) -> bool {
    config.is_enabled(ENABLE_SETTLEMENT_PERIOD) && kind != Some(SettlementType::NoDeduction)
}

/// Clause 7.2.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityDepositRefund;

impl ClauseComposer for SecurityDepositRefund {
    fn id(&self) -> ClauseId {
        ClauseId::SecurityDepositRefund
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[
            SETTLEMENT_TYPE,
            DEDUCTION_TYPES,
            CUSTOM_SETTLEMENT,
            ENABLE_SETTLEMENT_PERIOD,
            REFUND_DAYS,
        ]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        let kind = SettlementType::read(config, SETTLEMENT_TYPE);
        let mut text = String::from(REFUND_BASE);

        match kind {
            Some(kind) => text.push_str(&template::fill(deduction_template(kind), |slot| {
                match slot {
                    "deductions" => Some(deductions(config)),
                    _ => REFUND_PARAMS
                        .iter()
                        .find(|p| p.slot == slot)
                        .map(|p| config.text_or(p.field, p.fallback)),
                }
            })),
            None => {
                text.push(' ');
                text.push_str(SELECT_SETTLEMENT_PLACEHOLDER);
            }
        }

        if settlement_period_applies(kind, config) {
            text.push_str(&template::render(SETTLEMENT_PERIOD, REFUND_PARAMS, config));
        }

        text
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        let kind = SettlementType::read(config, SETTLEMENT_TYPE);
        let mut missing = match kind {
            Some(kind) => template::missing(deduction_template(kind), REFUND_PARAMS, config),
            None => vec![SETTLEMENT_TYPE],
        };
        if settlement_period_applies(kind, config) {
            missing.extend(template::missing(SETTLEMENT_PERIOD, REFUND_PARAMS, config));
        }
        missing
    }
}

/// Clause 7.3.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityDepositTransfer;

impl ClauseComposer for SecurityDepositTransfer {
    fn id(&self) -> ClauseId {
        ClauseId::SecurityDepositTransfer
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[ENABLE_TRANSFER, TRANSFER_TYPE, TRANSFER_NOTICE_DAYS, CUSTOM_TRANSFER]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        if !config.is_enabled(ENABLE_TRANSFER) {
            return String::new();
        }
        match TransferType::read(config, TRANSFER_TYPE) {
            Some(kind) => template::render(transfer_template(kind), TRANSFER_PARAMS, config),
            None => SELECT_TRANSFER_PLACEHOLDER.to_string(),
        }
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        if !config.is_enabled(ENABLE_TRANSFER) {
            return Vec::new();
        }
        match TransferType::read(config, TRANSFER_TYPE) {
            Some(kind) => template::missing(transfer_template(kind), TRANSFER_PARAMS, config),
            None => vec![TRANSFER_TYPE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_without_items_uses_generic_list() {
        let config = ClauseConfig::new().with(SETTLEMENT_TYPE, "detailed");
        let text = SecurityDepositRefund.compose(&config);
        assert!(text.contains(&format!("security deposit: {GENERIC_DEDUCTIONS}, prior")));
    }

    #[test]
    fn no_deduction_suppresses_settlement_period() {
        let config = ClauseConfig::new()
            .with(SETTLEMENT_TYPE, "no_deduction")
            .with(ENABLE_SETTLEMENT_PERIOD, true);
        let text = SecurityDepositRefund.compose(&config);
        assert!(!text.contains("Should the security deposit be insufficient"));
        assert!(SecurityDepositRefund.completeness(&config).is_complete());
    }

    #[test]
    fn settlement_period_without_days_is_incomplete() {
        let config = ClauseConfig::new()
            .with(SETTLEMENT_TYPE, "standard")
            .with(ENABLE_SETTLEMENT_PERIOD, true);
        assert!(SecurityDepositRefund
            .compose(&config)
            .contains("within ___ days of receiving a written demand"));
        assert_eq!(SecurityDepositRefund.missing_fields(&config), vec![REFUND_DAYS]);
    }

    #[test]
    fn unknown_settlement_keeps_leading_space() {
        let config = ClauseConfig::new().with(SETTLEMENT_TYPE, "partial");
        assert!(SecurityDepositRefund
            .compose(&config)
            .ends_with("owed by the Lessee. [Select settlement type]"));
    }

    #[test]
    fn transfer_with_notice_defaults_to_thirty_days() {
        let config = ClauseConfig::new()
            .with(ENABLE_TRANSFER, true)
            .with(TRANSFER_TYPE, "with_notice");
        assert!(SecurityDepositTransfer
            .compose(&config)
            .contains("to the Lessee within 30 days."));
    }

    #[test]
    fn transfer_disabled_is_empty() {
        let config = ClauseConfig::new().with(TRANSFER_TYPE, "standard");
        assert_eq!(SecurityDepositTransfer.compose(&config), "");
    }
}
