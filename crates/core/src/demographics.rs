//! Demographic constraints attached to a medical case

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProfileError, Result};

/// Concrete patient gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender allowed by a case. `Any` lets the generator pick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GenderConstraint {
    Male,
    Female,
    #[default]
    Any,
}

impl GenderConstraint {
    /// The concrete gender this constraint pins, if any
    pub fn fixed(&self) -> Option<Gender> {
        match self {
            GenderConstraint::Male => Some(Gender::Male),
            GenderConstraint::Female => Some(Gender::Female),
            GenderConstraint::Any => None,
        }
    }
}

/// Non-fatal problems found in an otherwise valid constraint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintWarning {
    /// `isPregnant` is set on a case that only allows male patients
    PregnantMale,
}

impl fmt::Display for ConstraintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintWarning::PregnantMale => {
                f.write_str("isPregnant is set but the case only allows male patients")
            }
        }
    }
}

/// Patient demographics a case allows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default)]
    pub gender: GenderConstraint,

    #[serde(default = "default_min_age")]
    pub min_age: u32,

    #[serde(default = "default_max_age")]
    pub max_age: u32,

    #[serde(default)]
    pub is_pregnant: bool,
}

fn default_min_age() -> u32 {
    17
}

fn default_max_age() -> u32 {
    60
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            gender: GenderConstraint::Any,
            min_age: default_min_age(),
            max_age: default_max_age(),
            is_pregnant: false,
        }
    }
}

impl Demographics {
    /// Check `0 < minAge <= maxAge` and collect warnings.
    ///
    /// Contradictions the generator cannot satisfy are errors. Suspicious but
    /// satisfiable combinations are returned as warnings and left untouched.
    pub fn validate(&self) -> Result<Vec<ConstraintWarning>> {
        if self.min_age == 0 {
            return Err(ProfileError::Constraint(
                "minAge must be greater than 0".to_string(),
            ));
        }
        if self.min_age > self.max_age {
            return Err(ProfileError::Constraint(format!(
                "minAge ({}) is greater than maxAge ({})",
                self.min_age, self.max_age
            )));
        }

        let mut warnings = Vec::new();
        if self.is_pregnant && self.gender == GenderConstraint::Male {
            warnings.push(ConstraintWarning::PregnantMale);
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_case_schema() {
        let d: Demographics = serde_json::from_str("{}").unwrap();
        assert_eq!(d, Demographics::default());
        assert_eq!(d.gender, GenderConstraint::Any);
        assert_eq!((d.min_age, d.max_age), (17, 60));
        assert!(!d.is_pregnant);
    }

    #[test]
    fn parses_camel_case_keys() {
        let d: Demographics = serde_json::from_str(
            r#"{"gender":"Female","minAge":20,"maxAge":30,"isPregnant":true}"#,
        )
        .unwrap();
        assert_eq!(d.gender, GenderConstraint::Female);
        assert_eq!(d.min_age, 20);
        assert_eq!(d.max_age, 30);
        assert!(d.is_pregnant);
    }

    #[test]
    fn rejects_unknown_gender_token() {
        let res = serde_json::from_str::<Demographics>(r#"{"gender":"Other"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_inverted_range() {
        let d = Demographics {
            min_age: 40,
            max_age: 30,
            ..Default::default()
        };
        assert!(matches!(d.validate(), Err(ProfileError::Constraint(_))));
    }

    #[test]
    fn rejects_zero_min_age() {
        let d = Demographics {
            min_age: 0,
            max_age: 5,
            ..Default::default()
        };
        assert!(matches!(d.validate(), Err(ProfileError::Constraint(_))));
    }

    #[test]
    fn single_age_range_is_valid() {
        let d = Demographics {
            min_age: 20,
            max_age: 20,
            ..Default::default()
        };
        assert!(d.validate().unwrap().is_empty());
    }

    #[test]
    fn pregnant_male_is_a_warning_not_an_error() {
        let d = Demographics {
            gender: GenderConstraint::Male,
            is_pregnant: true,
            ..Default::default()
        };
        assert_eq!(d.validate().unwrap(), vec![ConstraintWarning::PregnantMale]);
        // Left as authored
        assert!(d.is_pregnant);
    }

    #[test]
    fn fixed_gender() {
        assert_eq!(GenderConstraint::Male.fixed(), Some(Gender::Male));
        assert_eq!(GenderConstraint::Female.fixed(), Some(Gender::Female));
        assert_eq!(GenderConstraint::Any.fixed(), None);
    }
}
