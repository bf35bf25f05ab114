use serde::Deserialize;
use serde_json::json;

use facturas_core::{DomainError, DomainResult};
use facturas_invoicing::Invoice;

/// Body of `POST /invoices`.
///
/// Field names are camelCase on the wire.
/// `totalAmount` may arrive as a JSON number or string. Strings are kept
/// verbatim; numbers take their JSON text form (clients that care about
/// trailing zeros send the amount as a string).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Generated when absent.
    pub id: Option<String>,
    pub client_name: String,
    pub total_amount: serde_json::Value,
    pub date: String,
}

/// Amount as the verbatim text of the JSON value it arrived as.
pub fn amount_text(value: &serde_json::Value) -> DomainResult<String> {
    match value {
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::String(s) => Ok(s.clone()),
        _ => Err(DomainError::validation(
            "totalAmount must be a number or a string",
        )),
    }
}

pub fn invoice_to_json(invoice: &Invoice) -> serde_json::Value {
    json!({
        "id": invoice.id().as_str(),
        "clientName": invoice.client_name(),
        "totalAmount": invoice.total_amount(),
        "date": invoice.date(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_amount_keeps_its_json_text() {
        let v: serde_json::Value = serde_json::from_str("100").unwrap();
        assert_eq!(amount_text(&v).unwrap(), "100");

        let v: serde_json::Value = serde_json::from_str("99.5").unwrap();
        assert_eq!(amount_text(&v).unwrap(), "99.5");
    }

    #[test]
    fn string_amount_is_taken_verbatim() {
        let v = serde_json::Value::String("0042.10".to_string());
        assert_eq!(amount_text(&v).unwrap(), "0042.10");
    }

    #[test]
    fn non_scalar_amount_is_rejected() {
        assert!(amount_text(&json!([1, 2])).is_err());
        assert!(amount_text(&json!(null)).is_err());
    }
}
