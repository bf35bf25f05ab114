use facturas_core::{DomainError, DomainResult};

/// Invoice identifier.
///
/// Opaque text: the store decides its shape (numeric counters, uuids, ...).
/// The only rule enforced here is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvoiceId(String);

impl InvoiceId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("invoice id must not be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A billed transaction record.
///
/// Validated once at construction; everything downstream (rendering,
/// persistence) can assume a well-formed record. Amount and date are kept as
/// the exact text they were ingested with and are never reformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    client_name: String,
    total_amount: String,
    date: String,
}

impl Invoice {
    /// Build a validated invoice record.
    ///
    /// Rules:
    /// - client name has at least two characters,
    /// - total amount reads as a non-negative decimal number
    ///   (ASCII digits with at most one dot),
    /// - date is non-empty (its format is not interpreted).
    pub fn new(
        id: InvoiceId,
        client_name: impl Into<String>,
        total_amount: impl Into<String>,
        date: impl Into<String>,
    ) -> DomainResult<Self> {
        let client_name = client_name.into();
        let total_amount = total_amount.into();
        let date = date.into();

        if client_name.trim().chars().count() < 2 {
            return Err(DomainError::validation(
                "client name must have at least two characters",
            ));
        }
        if !is_plain_decimal(&total_amount) {
            return Err(DomainError::validation(
                "total amount must be a non-negative decimal number",
            ));
        }
        if date.trim().is_empty() {
            return Err(DomainError::validation("date must not be empty"));
        }

        Ok(Self {
            id,
            client_name,
            total_amount,
            date,
        })
    }

    pub fn id(&self) -> &InvoiceId {
        &self.id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// The amount exactly as ingested; no currency symbol, no rounding.
    pub fn total_amount(&self) -> &str {
        &self.total_amount
    }

    /// The date exactly as ingested; no normalization.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// ASCII digits with at most one dot, at least one digit.
fn is_plain_decimal(s: &str) -> bool {
    let mut dots = 0usize;
    let mut digits = 0usize;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(s: &str) -> InvoiceId {
        InvoiceId::new(s).unwrap()
    }

    #[test]
    fn valid_invoice_keeps_fields_verbatim() {
        let inv = Invoice::new(id("1"), "Ana", "100", "2024-01-01").unwrap();
        assert_eq!(inv.id().as_str(), "1");
        assert_eq!(inv.client_name(), "Ana");
        assert_eq!(inv.total_amount(), "100");
        assert_eq!(inv.date(), "2024-01-01");
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = InvoiceId::new("  ").unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn short_client_name_is_rejected() {
        let err = Invoice::new(id("1"), "A", "100", "2024-01-01").unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("client name") => {}
            other => panic!("expected name validation failure, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        for bad in ["", "abc", "10,5", "-3", "1.2.3", "."] {
            assert!(
                Invoice::new(id("1"), "Ana", bad, "2024-01-01").is_err(),
                "amount {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn decimal_amount_is_accepted_verbatim() {
        let inv = Invoice::new(id("7"), "Ana", "99.50", "01/02/2024").unwrap();
        assert_eq!(inv.total_amount(), "99.50");
        assert_eq!(inv.date(), "01/02/2024");
    }

    #[test]
    fn empty_date_is_rejected() {
        assert!(Invoice::new(id("1"), "Ana", "100", " ").is_err());
    }

    proptest! {
        /// Property: any amount made of digits with at most one dot is
        /// accepted and exposed without transformation.
        #[test]
        fn plain_decimal_amounts_round_trip(
            whole in "[0-9]{1,12}",
            frac in proptest::option::of("[0-9]{1,6}"),
        ) {
            let amount = match &frac {
                Some(f) => format!("{whole}.{f}"),
                None => whole.clone(),
            };
            let inv = Invoice::new(id("x"), "Cliente", amount.clone(), "2024-01-01").unwrap();
            prop_assert_eq!(inv.total_amount(), amount.as_str());
        }

        /// Property: amounts containing any character outside digits and a
        /// single dot never validate.
        #[test]
        fn amounts_with_foreign_chars_are_rejected(
            prefix in "[0-9]{0,4}",
            bad in "[a-zA-Z,$ -]",
            suffix in "[0-9]{0,4}",
        ) {
            let amount = format!("{prefix}{bad}{suffix}");
            prop_assert!(Invoice::new(id("x"), "Cliente", amount, "2024-01-01").is_err());
        }
    }
}
