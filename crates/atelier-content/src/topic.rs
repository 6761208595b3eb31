//! Course topics and their display metadata.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContentError;

/// The seven course chapters, one helper variant each.
///
/// Ordering follows the course: chapter 1 (`Python`) through chapter 7
/// (`Api`). The machine [`name`](Self::name) is what the command line and
/// config files accept; the [`title`](Self::title) is what rendered output
/// shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    /// Chapter 1: Python language basics.
    Python,
    /// Chapter 2: tabular data manipulation with pandas.
    Pandas,
    /// Chapter 3: extract-transform-load pipelines.
    Etl,
    /// Chapter 4: relational databases with SQLite.
    Sqlite,
    /// Chapter 5: containerization with Docker.
    Docker,
    /// Chapter 6: document databases with MongoDB.
    Mongo,
    /// Chapter 7: REST APIs and web services.
    Api,
}

impl Topic {
    /// All topics in course order.
    pub const ALL: [Self; 7] = [
        Self::Python,
        Self::Pandas,
        Self::Etl,
        Self::Sqlite,
        Self::Docker,
        Self::Mongo,
        Self::Api,
    ];

    /// Machine name accepted on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Pandas => "pandas",
            Self::Etl => "etl",
            Self::Sqlite => "sqlite",
            Self::Docker => "docker",
            Self::Mongo => "mongo",
            Self::Api => "api",
        }
    }

    /// French display title used in rendered output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Pandas => "Pandas",
            Self::Etl => "ETL",
            Self::Sqlite => "SQLite",
            Self::Docker => "Docker",
            Self::Mongo => "MongoDB",
            Self::Api => "API",
        }
    }

    /// Course chapter number, the first component of every identifier
    /// in this topic's registry.
    #[must_use]
    pub const fn chapter(self) -> u8 {
        match self {
            Self::Python => 1,
            Self::Pandas => 2,
            Self::Etl => 3,
            Self::Sqlite => 4,
            Self::Docker => 5,
            Self::Mongo => 6,
            Self::Api => 7,
        }
    }

    /// Emblem shown in banners, headings, and loader status lines.
    #[must_use]
    pub const fn emblem(self) -> &'static str {
        match self {
            Self::Python => "🐍",
            Self::Pandas => "📊",
            Self::Etl => "🏭",
            Self::Sqlite => "🗄️",
            Self::Docker => "🐳",
            Self::Mongo => "🍃",
            Self::Api => "🌐",
        }
    }

    /// Ready line emitted by the loader after first construction.
    #[must_use]
    pub const fn ready_line(self) -> &'static str {
        match self {
            Self::Python => "Prêt pour les exercices Python !",
            Self::Pandas => "Prêt pour l'analyse de données !",
            Self::Etl => "Prêt pour Extract, Transform, Load !",
            Self::Sqlite => "Prêt pour les bases de données relationnelles !",
            Self::Docker => "Prêt pour la conteneurisation !",
            Self::Mongo => "Prêt pour les bases de données NoSQL !",
            Self::Api => "Prêt pour les APIs et services web !",
        }
    }

    /// Parses a string into a `Topic`, case-insensitively.
    ///
    /// Accepts the machine name plus a few spellings users actually type
    /// (`"mongodb"`, `"basics"`).
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "python" | "basics" => Some(Self::Python),
            "pandas" => Some(Self::Pandas),
            "etl" => Some(Self::Etl),
            "sqlite" => Some(Self::Sqlite),
            "docker" => Some(Self::Docker),
            "mongo" | "mongodb" => Some(Self::Mongo),
            "api" => Some(Self::Api),
            _ => None,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Topic {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_case_insensitive(s).ok_or_else(|| ContentError::unknown_topic(s))
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str_case_insensitive(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid topic '{s}': expected one of 'python', 'pandas', 'etl', 'sqlite', 'docker', 'mongo', 'api'"
            ))
        })
    }
}

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
