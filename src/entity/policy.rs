//! Construction-time validation policies
//!
//! Culture-restricted artifacts and role-restricted artists are not
//! separate types. They are ordinary entities that passed a policy check
//! at construction. A [`CulturePolicy`] additionally stamps its fixed tag
//! and Wikidata URI onto the artifact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::artifact::Artifact;
use super::artist::Artist;
use super::error::{EntityError, EntityResult};

/// Culture restriction for artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CulturePolicy {
    Greek,
    Roman,
}

impl CulturePolicy {
    /// All known policies
    pub const ALL: [CulturePolicy; 2] = [Self::Greek, Self::Roman];

    /// Lowercase token the culture field must contain
    pub fn required_token(&self) -> &'static str {
        match self {
            Self::Greek => "greek",
            Self::Roman => "roman",
        }
    }

    /// Tag appended on successful construction
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Greek => "Ancient Greece",
            Self::Roman => "Roman Empire",
        }
    }

    /// Wikidata URI appended on successful construction
    pub fn wikidata_uri(&self) -> &'static str {
        match self {
            Self::Greek => "https://www.wikidata.org/wiki/Q11772",
            Self::Roman => "https://www.wikidata.org/wiki/Q2277",
        }
    }

    /// Policy name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greek => "Greek",
            Self::Roman => "Roman",
        }
    }

    /// Case-insensitive substring check on the culture field
    pub fn matches(&self, culture: Option<&str>) -> bool {
        culture.is_some_and(|c| c.to_lowercase().contains(self.required_token()))
    }

    /// Check an artifact's culture field
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Validation`] when the token is missing
    pub fn validate(&self, artifact: &Artifact) -> EntityResult<()> {
        if self.matches(artifact.culture.as_deref()) {
            Ok(())
        } else {
            Err(EntityError::validation(
                self.as_str(),
                "culture",
                artifact.culture.as_deref().unwrap_or_default(),
                self.required_token(),
            ))
        }
    }

    /// Validate, then append the fixed tag and URI
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Validation`] and leaves the artifact untouched
    /// when the culture field does not match
    pub fn apply(&self, artifact: &mut Artifact) -> EntityResult<()> {
        self.validate(artifact)?;
        artifact.tags.push(self.tag().to_string());
        artifact
            .tags_wikidata_url
            .push(self.wikidata_uri().to_string());
        Ok(())
    }
}

impl fmt::Display for CulturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CulturePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.required_token() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown culture policy '{s}' (expected greek or roman)"))
    }
}

/// Role restriction for artists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtistRole {
    Potter,
}

impl ArtistRole {
    /// Lowercase token the display name must contain
    pub fn required_token(&self) -> &'static str {
        match self {
            Self::Potter => "potter",
        }
    }

    /// Role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Potter => "Potter",
        }
    }

    /// Check an artist's display name
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Validation`] when the token is missing
    pub fn validate(&self, artist: &Artist) -> EntityResult<()> {
        if artist
            .display_name
            .to_lowercase()
            .contains(self.required_token())
        {
            Ok(())
        } else {
            Err(EntityError::validation(
                self.as_str(),
                "display_name",
                artist.display_name.as_str(),
                self.required_token(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_with_culture(culture: &str) -> Artifact {
        Artifact {
            culture: Some(culture.to_string()),
            tags: vec!["Vases".to_string()],
            ..Artifact::default()
        }
    }

    #[test]
    fn test_greek_policy_appends_fixed_pair() {
        let mut artifact = artifact_with_culture("Ancient Greek Pottery");
        CulturePolicy::Greek.apply(&mut artifact).unwrap();
        assert_eq!(artifact.tags, vec!["Vases", "Ancient Greece"]);
        assert_eq!(
            artifact.tags_wikidata_url,
            vec!["https://www.wikidata.org/wiki/Q11772"]
        );
    }

    #[test]
    fn test_policy_rejects_and_leaves_untouched() {
        let mut artifact = artifact_with_culture("Roman Villa");
        let err = CulturePolicy::Greek.apply(&mut artifact).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(artifact.tags, vec!["Vases"]);
        assert!(artifact.tags_wikidata_url.is_empty());
    }

    #[test]
    fn test_missing_culture_is_rejected() {
        let artifact = Artifact::default();
        assert!(CulturePolicy::Roman.validate(&artifact).is_err());
    }

    #[test]
    fn test_roman_case_insensitive() {
        let mut artifact = artifact_with_culture("ROMAN, Imperial");
        CulturePolicy::Roman.apply(&mut artifact).unwrap();
        assert_eq!(artifact.tags.last().map(String::as_str), Some("Roman Empire"));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Roman".parse::<CulturePolicy>(), Ok(CulturePolicy::Roman));
        assert_eq!(" greek ".parse::<CulturePolicy>(), Ok(CulturePolicy::Greek));
        assert!("etruscan".parse::<CulturePolicy>().is_err());
    }

    #[test]
    fn test_potter_role() {
        assert!(ArtistRole::Potter
            .validate(&Artist::new("Nikosthenes, potter"))
            .is_ok());
        assert!(ArtistRole::Potter
            .validate(&Artist::new("Exekias"))
            .is_err());
    }
}
