//! Supplier (fornecedor) resource.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A garment supplier. Referenced by [`super::Roupa`] through
/// `fornecedor_id`; the reference is an opaque string and is never
/// checked for existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fornecedor {
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub cidade: String,
    /// Freight cost charged by this supplier.
    pub frete: f64,
}

impl Resource for Fornecedor {
    const COLLECTION: &'static str = "fornecedores";
    const SINGULAR: &'static str = "fornecedor";
    const COUNT_ENVELOPE: bool = true;

    const MSG_CREATE_FAILED: &'static str = "Erro ao criar fornecedor";
    const MSG_NOT_FOUND: &'static str = "Fornecedor não encontrado";
    const MSG_DELETED: &'static str = "Fornecedor deletado com sucesso";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_from_wire_payload() {
        let fornecedor: Fornecedor = serde_json::from_value(json!({
            "nome": "Malhas Sul",
            "telefone": "51999990000",
            "email": "contato@malhassul.com",
            "cidade": "Porto Alegre",
            "frete": 25.5
        }))
        .unwrap();

        assert_eq!(fornecedor.nome, "Malhas Sul");
        assert_eq!(fornecedor.frete, 25.5);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result: Result<Fornecedor, _> =
            serde_json::from_value(json!({"nome": "Malhas Sul", "frete": 25.5}));
        assert!(result.is_err());
    }

    #[test]
    fn to_document_keeps_every_field() {
        let fornecedor = Fornecedor {
            nome: "Malhas Sul".to_string(),
            telefone: "51999990000".to_string(),
            email: "contato@malhassul.com".to_string(),
            cidade: "Porto Alegre".to_string(),
            frete: 25.5,
        };

        let doc = fornecedor.to_document().unwrap();
        assert_eq!(doc.get_str("nome").unwrap(), "Malhas Sul");
        assert_eq!(doc.get_f64("frete").unwrap(), 25.5);
        assert!(!doc.contains_key("_id"));
    }
}
