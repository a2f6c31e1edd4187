//! Declarative response rules: ordered keyword groups mapped to candidate
//! replies. Rule order is a priority order — the first matching rule wins,
//! even when keywords overlap across rules.

use serde::{Deserialize, Serialize};

/// One keyword group and its candidate replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Lowercase substrings; a rule matches if the input contains any.
    pub keywords: Vec<String>,
    /// Non-empty list of candidate replies.
    pub replies: Vec<String>,
}

/// The full ordered rule set plus the fallback replies.
///
/// Built once at startup and shared by reference; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<RuleEntry>,
    pub default_replies: Vec<String>,
}

impl RuleTable {
    /// Find the first rule whose keywords match the (already lowercased)
    /// input, in declaration order.
    pub fn find_match(&self, lowered_input: &str) -> Option<&RuleEntry> {
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered_input.contains(kw.as_str())))
    }

    /// The built-in supportive reply corpus (Brazilian Portuguese).
    pub fn builtin() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            rules: vec![
                RuleEntry {
                    keywords: strings(&["ansioso", "ansiedade", "preocupado", "nervoso"]),
                    replies: strings(&[
                        "Entendo. A ansiedade pode ser avassaladora. Lembre-se de respirar fundo. Na aba \"Bem-estar\", temos um conteúdo sobre \"Entendendo a Ansiedade\" que pode ser útil.",
                        "Parece que você está passando por um momento de ansiedade. Falar sobre isso é um bom primeiro passo. O que está causando essa sensação?",
                    ]),
                },
                RuleEntry {
                    keywords: strings(&["triste", "deprimido", "pra baixo", "sozinho"]),
                    replies: strings(&[
                        "Sinto muito que você esteja se sentindo assim. É válido se sentir triste. Lembre-se que não está sozinho. Que tal tentar o nosso áudio de \"Respiração Diafragmática\" para relaxar um pouco?",
                        "Obrigado por compartilhar sua tristeza comigo. Falar sobre o que sentimos é importante. O que aconteceu?",
                    ]),
                },
                RuleEntry {
                    keywords: strings(&["feliz", "bem", "ótimo", "contente"]),
                    replies: strings(&[
                        "Que ótimo saber que você está se sentindo bem! Fico feliz por você. O que te deixou feliz hoje?",
                        "Maravilha! Aproveite esse sentimento. Que tal registrar esse humor na aba \"Bem-estar\"?",
                    ]),
                },
                RuleEntry {
                    keywords: strings(&["irritado", "bravo", "raiva", "frustrado"]),
                    replies: strings(&[
                        "A raiva é uma emoção forte. O que a desencadeou? Às vezes, uma pausa para respirar pode ajudar a clarear a mente.",
                        "Entendo sua frustração. Se precisar, temos áudios de relaxamento na aba \"Bem-estar\" que podem ajudar a acalmar os ânimos.",
                    ]),
                },
                RuleEntry {
                    keywords: strings(&["desabafar", "conversar"]),
                    replies: strings(&[
                        "Claro, estou aqui para ouvir. Pode falar o que estiver em sua mente, sem julgamentos.",
                        "Sou todo ouvidos. Sinta-se à vontade para desabafar.",
                    ]),
                },
            ],
            default_replies: strings(&[
                "Entendido. Agradeço por compartilhar. Como você se sente sobre isso?",
                "Obrigado por me contar. Gostaria de explorar mais esse sentimento?",
                "Isso parece importante. Continue, por favor.",
                "Estou aqui para ouvir. O que mais você gostaria de dizer?",
            ]),
        }
    }
}
