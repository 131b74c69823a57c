//! ==============================================================================
//! lib.rs - shared wire types for the click page
//! ==============================================================================
//!
//! purpose:
//!     defines the json contract spoken with the click backend. the backend
//!     itself lives elsewhere; this crate only pins down the shapes the page
//!     sends and receives so they stay in one versioned place.
//!
//! relationships:
//!     - used by: page (api client, modal payload, counters)
//!
//! backend contract:
//! ```text
//!     POST /clique
//!         body: {"botao": "Botão 1"}
//!         200:  {"botao": "...", "sequencial": 7, "data": "2026-08-30",
//!                "hora": "12:34", "total_botao_hoje": 3}
//!         4xx/5xx: optional {"erro": "..."}
//!
//!     GET /contagens_hoje
//!         200:  {"data": "2026-08-30", "contagens": {"Botão 1": 3, ...}}
//! ```
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==============================================================================
// button set
// ==============================================================================

/// the fixed set of buttons the backend accepts. the identity on the wire is
/// the display name, not a numeric id.
pub const BUTTON_IDS: [&str; 4] = ["Botão 1", "Botão 2", "Botão 3", "Botão 4"];

// ==============================================================================
// click registration
// ==============================================================================

/// body of POST /clique
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRequest {
    pub botao: String,
}

/// success body of POST /clique
///
/// `sequencial` is the day-wide running sequence number of the click across
/// all buttons; older backend variants omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickReceipt {
    pub botao: String,
    #[serde(default)]
    pub sequencial: Option<u64>,
    pub data: String,
    pub hora: String,
    pub total_botao_hoje: u64,
}

/// optional failure body from either endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub erro: Option<String>,
}

// ==============================================================================
// today's counts
// ==============================================================================

/// per-button totals for the current day, keyed by button identity
pub type CountsSnapshot = BTreeMap<String, u64>;

/// success body of GET /contagens_hoje
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodayCounts {
    #[serde(default)]
    pub data: String,
    pub contagens: CountsSnapshot,
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_request_wire_field_is_botao() {
        let request = ClickRequest {
            botao: "Botão 1".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"botao":"Botão 1"}"#);
    }

    #[test]
    fn test_click_receipt_parses_full_backend_body() {
        let receipt: ClickReceipt = serde_json::from_str(
            r#"{"botao":"Botão 2","sequencial":7,"data":"2026-08-30","hora":"12:34","total_botao_hoje":3}"#,
        )
        .unwrap();
        assert_eq!(receipt.botao, "Botão 2");
        assert_eq!(receipt.sequencial, Some(7));
        assert_eq!(receipt.data, "2026-08-30");
        assert_eq!(receipt.hora, "12:34");
        assert_eq!(receipt.total_botao_hoje, 3);
    }

    #[test]
    fn test_click_receipt_tolerates_missing_sequencial() {
        let receipt: ClickReceipt = serde_json::from_str(
            r#"{"botao":"Botão 1","data":"2026-08-30","hora":"09:00","total_botao_hoje":1}"#,
        )
        .unwrap();
        assert_eq!(receipt.sequencial, None);
    }

    #[test]
    fn test_today_counts_maps_every_button() {
        let today: TodayCounts = serde_json::from_str(
            r#"{"data":"2026-08-30","contagens":{"Botão 1":4,"Botão 2":0,"Botão 3":12,"Botão 4":1}}"#,
        )
        .unwrap();
        assert_eq!(today.contagens.len(), 4);
        assert_eq!(today.contagens.get("Botão 3"), Some(&12));
        for id in BUTTON_IDS {
            assert!(today.contagens.contains_key(id));
        }
    }

    #[test]
    fn test_error_body_with_and_without_erro() {
        let body: ErrorBody = serde_json::from_str(r#"{"erro":"Botão inválido."}"#).unwrap();
        assert_eq!(body.erro.as_deref(), Some("Botão inválido."));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.erro.is_none());
    }
}
