//! Pools of fictional listing names and owners, assigned by position.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    F,
    M,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub gender: Gender,
}

impl Owner {
    pub fn new(name: &str, gender: Gender) -> Self {
        Self {
            name: name.to_string(),
            gender,
        }
    }
}

/// Name and owner pools. Listing `i` gets `names[i]` and `owners[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    pub names: Vec<String>,
    pub owners: Vec<Owner>,
}

const BUILTIN_NAMES: [&str; 11] = [
    "Chácara Primavera",
    "Sítio Cantinho do Céu",
    "Rancho Vista Alegre",
    "Chácara Recanto das Águas",
    "Sítio Flor do Campo",
    "Chácara Bela Vista",
    "Rancho Paraíso Verde",
    "Chácara Sonho Meu",
    "Sítio Morada do Sol",
    "Chácara Vale Encantado",
    "Rancho Pedra Alta",
];

const BUILTIN_OWNERS: [(&str, Gender); 11] = [
    ("Maria Silva", Gender::F),
    ("João Santos", Gender::M),
    ("Ana Paula Costa", Gender::F),
    ("Carlos Eduardo Oliveira", Gender::M),
    ("Juliana Ferreira", Gender::F),
    ("Roberto Almeida", Gender::M),
    ("Patricia Rodrigues", Gender::F),
    ("Fernando Lima", Gender::M),
    ("Camila Martins", Gender::F),
    ("Ricardo Pereira", Gender::M),
    ("Luciana Souza", Gender::F),
];

impl Fixtures {
    /// The eleven built-in names and owners.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES.iter().map(|s| s.to_string()).collect(),
            owners: BUILTIN_OWNERS
                .iter()
                .map(|(name, gender)| Owner::new(name, *gender))
                .collect(),
        }
    }

    /// Number of listings these pools can cover.
    pub fn capacity(&self) -> usize {
        self.names.len().min(self.owners.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pools_are_aligned() {
        let f = Fixtures::builtin();
        assert_eq!(f.names.len(), 11);
        assert_eq!(f.owners.len(), 11);
        assert_eq!(f.capacity(), 11);
        assert_eq!(f.owners[1], Owner::new("João Santos", Gender::M));
    }

    #[test]
    fn owner_serializes_gender_as_letter() {
        let json = serde_json::to_string(&Owner::new("Maria Silva", Gender::F)).unwrap();
        assert_eq!(json, r#"{"name":"Maria Silva","gender":"F"}"#);
    }
}
