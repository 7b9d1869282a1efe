//! Chat messages for the description rewrite request.

use serde::{Deserialize, Serialize};

use crate::fabricate::FictionalProperty;

const SYSTEM_PROMPT: &str = "Você é um copywriter especializado em descrições de propriedades para aluguel por temporada.";

/// Amenities quoted in the prompt.
const PROMPT_AMENITIES: usize = 10;
/// Characters of the current description quoted as reference.
const PROMPT_REFERENCE_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

pub fn build_prompt(prop: &FictionalProperty) -> String {
    let amenities = prop
        .amenity_list()
        .take(PROMPT_AMENITIES)
        .collect::<Vec<_>>()
        .join(", ");
    let reference: String = prop
        .description_rewritten
        .chars()
        .take(PROMPT_REFERENCE_CHARS)
        .collect();
    let name = &prop.fictional_name;

    format!(
        "Você é um copywriter especializado em plataformas de aluguel por temporada no Brasil.

Reescreva a descrição desta propriedade de forma COMPLETAMENTE ORIGINAL e profissional:

**Nome**: {name}
**Capacidade**: {guests} hóspedes, {bedrooms} quartos, {beds} camas, {bathrooms} banheiros
**Comodidades principais**: {amenities}
**Descrição original** (apenas para referência, NÃO copie): {reference}

**Instruções**:
1. Escreva 3-4 parágrafos (150-250 palavras)
2. Tom acolhedor, profissional e persuasivo
3. Destaque: natureza, piscina, churrasqueira, descanso em família
4. Use o nome \"{name}\" na introdução
5. Seja 100% original - não copie a descrição de referência
6. Estilo brasileiro, familiar e convidativo

Retorne APENAS a nova descrição, sem títulos ou formatação extra.",
        guests = prop.guests,
        bedrooms = prop.bedrooms,
        beds = prop.beds,
        bathrooms = prop.bathrooms,
    )
}

/// System message followed by the listing prompt.
pub fn build_messages(prop: &FictionalProperty) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(build_prompt(prop))]
}
