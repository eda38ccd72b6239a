use serde::Deserialize;

use crate::script::{Abugida, RomanScheme};

/// Value of a Devanagari or Bengali table entry.
///
/// Serialized as `[siblingForm, iastForm, itransForm]`, where the sibling is
/// the other abugida (Bengali for the Devanagari table and vice versa).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "[String; 3]")]
pub struct IndicForms {
    pub sibling: String,
    pub iast: String,
    pub itrans: String,
}

impl From<[String; 3]> for IndicForms {
    fn from([sibling, iast, itrans]: [String; 3]) -> Self {
        Self {
            sibling,
            iast,
            itrans,
        }
    }
}

impl IndicForms {
    pub fn roman(&self, scheme: RomanScheme) -> &str {
        match scheme {
            RomanScheme::Iast => &self.iast,
            RomanScheme::Itrans => &self.itrans,
        }
    }
}

/// How one Roman unit is written in one abugida.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct ScriptForms {
    /// Independent form, used where a vowel starts a syllable.
    pub standalone: String,
    /// Form attached to a preceding consonant (vowel sign).
    pub attached: String,
}

impl TryFrom<Vec<String>> for ScriptForms {
    type Error = String;

    /// `[form]` serves both positions; `[standalone, attached]` splits them.
    fn try_from(forms: Vec<String>) -> Result<Self, Self::Error> {
        let mut iter = forms.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(standalone), None, None) => Ok(Self {
                attached: standalone.clone(),
                standalone,
            }),
            (Some(standalone), Some(attached), None) => Ok(Self {
                standalone,
                attached,
            }),
            (None, ..) => Err("expected one or two forms, got none".to_string()),
            _ => Err("expected one or two forms, got more".to_string()),
        }
    }
}

/// Value of an IAST or ITRANS table entry:
/// `[[devanagari forms], [bengali forms]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "[ScriptForms; 2]")]
pub struct RomanForms {
    pub devanagari: ScriptForms,
    pub bengali: ScriptForms,
}

impl From<[ScriptForms; 2]> for RomanForms {
    fn from([devanagari, bengali]: [ScriptForms; 2]) -> Self {
        Self {
            devanagari,
            bengali,
        }
    }
}

impl RomanForms {
    pub fn target(&self, script: Abugida) -> &ScriptForms {
        match script {
            Abugida::Devanagari => &self.devanagari,
            Abugida::Bengali => &self.bengali,
        }
    }
}
