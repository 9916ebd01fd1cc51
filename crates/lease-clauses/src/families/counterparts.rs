//! Counterparts (clause 30).
//!
//! Fragment order: digital signature, delivery method, authentication,
//! execution timing. A custom clause is used verbatim and takes no fragments.

use lease_core::ClauseConfig;

use crate::clause::ClauseId;
use crate::composer::ClauseComposer;
use crate::template::{self, Param, VariantTag};

pub const CLAUSE_TYPE: &str = "counterpartsClauseType";
pub const NUMBER_OF_COUNTERPARTS: &str = "numberOfCounterparts";
pub const CUSTOM_CLAUSE: &str = "customCounterpartsClause";
pub const ENABLE_DIGITAL_SIGNATURE: &str = "enableDigitalSignature";
pub const DIGITAL_SIGNATURE_TYPE: &str = "digitalSignatureType";
pub const ENABLE_DELIVERY_METHOD: &str = "enableDeliveryMethod";
pub const DELIVERY_METHOD: &str = "deliveryMethod";
pub const ENABLE_AUTHENTICATION_METHOD: &str = "enableAuthenticationMethod";
pub const AUTHENTICATION_METHOD: &str = "authenticationMethod";
pub const ENABLE_EXECUTION_TIMING: &str = "enableExecutionTiming";
pub const EXECUTION_TIMING_REQUIREMENT: &str = "executionTimingRequirement";

pub const SELECT_PLACEHOLDER: &str = "[Select counterparts type]";
pub const CUSTOM_PLACEHOLDER: &str = "[Your custom counterparts clause will appear here]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterpartsType {
    StandardTwo,
    SpecificNumber,
    Unlimited,
    ElectronicOnly,
    Hybrid,
    Custom,
}

impl VariantTag for CounterpartsType {
    const ALL: &'static [Self] = &[
        Self::StandardTwo,
        Self::SpecificNumber,
        Self::Unlimited,
        Self::ElectronicOnly,
        Self::Hybrid,
        Self::Custom,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::StandardTwo => "standard_two",
            Self::SpecificNumber => "specific_number",
            Self::Unlimited => "unlimited",
            Self::ElectronicOnly => "electronic_only",
            Self::Hybrid => "hybrid",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitalSignature {
    BasicDigital,
    Encrypted,
    Authenticated,
    Advanced,
}

impl VariantTag for DigitalSignature {
    const ALL: &'static [Self] = &[
        Self::BasicDigital,
        Self::Encrypted,
        Self::Authenticated,
        Self::Advanced,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::BasicDigital => "basic_digital",
            Self::Encrypted => "encrypted",
            Self::Authenticated => "authenticated",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryMethod {
    EmailPdf,
    CourierEmail,
    MultipleMethods,
    PhysicalOriginal,
}

impl VariantTag for DeliveryMethod {
    const ALL: &'static [Self] = &[
        Self::EmailPdf,
        Self::CourierEmail,
        Self::MultipleMethods,
        Self::PhysicalOriginal,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::EmailPdf => "email_pdf",
            Self::CourierEmail => "courier_email",
            Self::MultipleMethods => "multiple_methods",
            Self::PhysicalOriginal => "physical_original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationMethod {
    WetSignature,
    DigitalCert,
    EmailVerification,
    NoSpecific,
}

impl VariantTag for AuthenticationMethod {
    const ALL: &'static [Self] = &[
        Self::WetSignature,
        Self::DigitalCert,
        Self::EmailVerification,
        Self::NoSpecific,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::WetSignature => "wet_signature",
            Self::DigitalCert => "digital_cert",
            Self::EmailVerification => "email_verification",
            Self::NoSpecific => "no_specific",
        }
    }
}

const PARAMS: &[Param] = &[
    Param::new("copies", NUMBER_OF_COUNTERPARTS, "2"),
    Param::new("custom", CUSTOM_CLAUSE, CUSTOM_PLACEHOLDER),
    Param::new("timing", EXECUTION_TIMING_REQUIREMENT, "within 15 days"),
];

pub fn base_template(kind: CounterpartsType) -> &'static str {
    match kind {
        CounterpartsType::StandardTwo => "This Lease Deed may be executed in two or more counterparts, each of which shall be deemed to be an original.",
        CounterpartsType::SpecificNumber => "This Lease Deed may be executed in {copies} counterparts, each of which shall be deemed to be an original. All counterparts together shall constitute one and the same instrument.",
        CounterpartsType::Unlimited => "This Lease Deed may be executed in any number of counterparts, each of which shall be deemed to be an original. The delivery of executed counterparts by facsimile or electronic means (PDF/email) shall have the same force and effect as delivery of manually executed originals.",
        CounterpartsType::ElectronicOnly => "This Lease Deed shall be executed electronically and may be signed in multiple counterparts. Each electronic signature shall be deemed an original, and electronic signatures shall have the same legal force and effect as manual signatures. All counterparts together shall constitute one and the same instrument.",
        CounterpartsType::Hybrid => "This Lease Deed may be executed in counterparts, including both physical originals and electronic copies. Each counterpart (whether physical or electronic) shall be deemed an original. The parties agree that any combination of physical and electronic counterparts shall together constitute one and the same instrument.",
        CounterpartsType::Custom => "{custom}",
    }
}

fn signature_text(kind: DigitalSignature) -> &'static str {
    match kind {
        DigitalSignature::BasicDigital => " Digital signatures on electronic counterparts shall be deemed valid and binding.",
        DigitalSignature::Encrypted => " All digital signatures must be encrypted and comply with encryption standards specified by both parties. Each party retains the right to verify digital signatures.",
        DigitalSignature::Authenticated => " Digital signatures must be authenticated through a mutually agreed upon digital authentication platform. Evidence of authentication shall be maintained by both parties.",
        DigitalSignature::Advanced => " Digital signatures shall comply with electronic signatures laws and regulations. Each party agrees to use advanced digital signature technology with timestamp verification and non-repudiation.",
    }
}

fn delivery_text(kind: DeliveryMethod) -> &'static str {
    match kind {
        DeliveryMethod::EmailPdf => " Counterparts may be delivered via email in PDF format. PDF copies shall be treated as original documents for all purposes.",
        DeliveryMethod::CourierEmail => " Counterparts may be delivered either by courier service or via email in PDF format. At least one original physical counterpart shall be retained by the Lessor.",
        DeliveryMethod::MultipleMethods => " Counterparts may be delivered by any means including courier, email, facsimile, or electronic delivery service. All delivery methods shall be deemed equivalent.",
        DeliveryMethod::PhysicalOriginal => " At least one original physical counterpart signed by both parties shall be prepared and retained. Digital copies may be used for reference purposes only.",
    }
}

fn authentication_text(kind: AuthenticationMethod) -> &'static str {
    match kind {
        AuthenticationMethod::WetSignature => " Each counterpart must be signed with wet ink signatures. Photocopies or digital reproductions do not substitute for original signatures.",
        AuthenticationMethod::DigitalCert => " Digital counterparts must be signed using digital certificates issued by a recognized certificate authority.",
        AuthenticationMethod::EmailVerification => " Counterparts delivered via email shall be authenticated through email verification and may include digital signature verification tokens.",
        AuthenticationMethod::NoSpecific => " Counterparts need not be notarized or authenticated by any third party and shall be binding as executed.",
    }
}

const EXECUTION_TIMING: &str = " All counterparts must be executed and exchanged {timing} of the execution date. The lease becomes effective upon execution of all counterparts by both parties.";

/// Clause 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counterparts;

impl ClauseComposer for Counterparts {
    fn id(&self) -> ClauseId {
        ClauseId::Counterparts
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[
            CLAUSE_TYPE,
            NUMBER_OF_COUNTERPARTS,
            CUSTOM_CLAUSE,
            ENABLE_DIGITAL_SIGNATURE,
            DIGITAL_SIGNATURE_TYPE,
            ENABLE_DELIVERY_METHOD,
            DELIVERY_METHOD,
            ENABLE_AUTHENTICATION_METHOD,
            AUTHENTICATION_METHOD,
            ENABLE_EXECUTION_TIMING,
            EXECUTION_TIMING_REQUIREMENT,
        ]
    }

    fn compose(&self, config: &ClauseConfig) -> String {
        let kind = CounterpartsType::read(config, CLAUSE_TYPE);
        let mut text = match kind {
            Some(kind) => template::render(base_template(kind), PARAMS, config),
            None => SELECT_PLACEHOLDER.to_string(),
        };
        if kind == Some(CounterpartsType::Custom) {
            return text;
        }

        if config.is_enabled(ENABLE_DIGITAL_SIGNATURE) {
            if let Some(signature) = DigitalSignature::read(config, DIGITAL_SIGNATURE_TYPE) {
                text.push_str(signature_text(signature));
            }
        }
        if config.is_enabled(ENABLE_DELIVERY_METHOD) {
            if let Some(delivery) = DeliveryMethod::read(config, DELIVERY_METHOD) {
                text.push_str(delivery_text(delivery));
            }
        }
        if config.is_enabled(ENABLE_AUTHENTICATION_METHOD) {
            if let Some(auth) = AuthenticationMethod::read(config, AUTHENTICATION_METHOD) {
                text.push_str(authentication_text(auth));
            }
        }
        if config.is_enabled(ENABLE_EXECUTION_TIMING) {
            text.push_str(&template::render(EXECUTION_TIMING, PARAMS, config));
        }

        text
    }

    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str> {
        let kind = CounterpartsType::read(config, CLAUSE_TYPE);
        let mut missing = match kind {
            Some(kind) => template::missing(base_template(kind), PARAMS, config),
            None => vec![CLAUSE_TYPE],
        };
        if kind == Some(CounterpartsType::Custom) {
            return missing;
        }

        if config.is_enabled(ENABLE_DIGITAL_SIGNATURE)
            && DigitalSignature::read(config, DIGITAL_SIGNATURE_TYPE).is_none()
        {
            missing.push(DIGITAL_SIGNATURE_TYPE);
        }
        if config.is_enabled(ENABLE_DELIVERY_METHOD)
            && DeliveryMethod::read(config, DELIVERY_METHOD).is_none()
        {
            missing.push(DELIVERY_METHOD);
        }
        if config.is_enabled(ENABLE_AUTHENTICATION_METHOD)
            && AuthenticationMethod::read(config, AUTHENTICATION_METHOD).is_none()
        {
            missing.push(AUTHENTICATION_METHOD);
        }

        missing
    }
}
