use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text", enum_name = "idea_status_enum")]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[sea_orm(string_value = "idea")]
    Idea,
    #[sea_orm(string_value = "research")]
    Research,
    #[sea_orm(string_value = "progress")]
    Progress,
    #[sea_orm(string_value = "launched")]
    Launched,
    #[sea_orm(string_value = "archived")]
    Archived,
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdeaStatus::Idea => "idea",
            IdeaStatus::Research => "research",
            IdeaStatus::Progress => "progress",
            IdeaStatus::Launched => "launched",
            IdeaStatus::Archived => "archived",
        };
        write!(f, "{s}")
    }
}

impl FromStr for IdeaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(IdeaStatus::Idea),
            "research" => Ok(IdeaStatus::Research),
            "progress" => Ok(IdeaStatus::Progress),
            "launched" => Ok(IdeaStatus::Launched),
            "archived" => Ok(IdeaStatus::Archived),
            other => Err(format!("Unknown idea status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text", enum_name = "idea_color_enum")]
#[serde(rename_all = "lowercase")]
pub enum IdeaColor {
    #[sea_orm(string_value = "yellow")]
    Yellow,
    #[sea_orm(string_value = "blue")]
    Blue,
    #[sea_orm(string_value = "green")]
    Green,
    #[sea_orm(string_value = "pink")]
    Pink,
    #[sea_orm(string_value = "purple")]
    Purple,
    #[sea_orm(string_value = "orange")]
    Orange,
    #[sea_orm(string_value = "gray")]
    Gray,
}

impl fmt::Display for IdeaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdeaColor::Yellow => "yellow",
            IdeaColor::Blue => "blue",
            IdeaColor::Green => "green",
            IdeaColor::Pink => "pink",
            IdeaColor::Purple => "purple",
            IdeaColor::Orange => "orange",
            IdeaColor::Gray => "gray",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["idea", "research", "progress", "launched", "archived"] {
            let parsed: IdeaStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("shipped".parse::<IdeaStatus>().is_err());
        assert!("".parse::<IdeaStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&IdeaStatus::Launched).unwrap(),
            "\"launched\""
        );
        let parsed: IdeaStatus = serde_json::from_str("\"research\"").unwrap();
        assert_eq!(parsed, IdeaStatus::Research);
    }
}
