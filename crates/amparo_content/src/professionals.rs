//! Professional directory for the monthly-session booking screen.
//! Booking itself is not implemented; the directory only resolves records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

/// The seeded directory, in display order.
pub fn professionals() -> Vec<Professional> {
    fn pro(id: &str, name: &str, specialty: &str) -> Professional {
        Professional {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }

    vec![
        pro("1", "Dra. Ana Silva", "Terapia Cognitivo-Comportamental"),
        pro("2", "Dr. Bruno Costa", "Psicanálise"),
        pro("3", "Dra. Carla Mendes", "Terapia Humanista"),
        pro("4", "Dr. Ricardo Lima", "Terapia de Casal e Família"),
    ]
}

/// Resolve a professional by id.
pub fn find_professional(id: &str) -> Option<Professional> {
    professionals().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_four_professionals() {
        let all = professionals();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].name, "Dra. Ana Silva");
    }

    #[test]
    fn test_find_by_id() {
        let p = find_professional("2").unwrap();
        assert_eq!(p.specialty, "Psicanálise");
        assert!(find_professional("42").is_none());
    }
}
