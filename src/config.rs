use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Base rule set the canonical record extends.
pub const CONVENTIONAL_BASE: &str = "@commitlint/config-conventional";

/// Commit type tokens permitted by the canonical `type-enum` rule, in order.
pub const CONVENTIONAL_TYPES: [&str; 11] = [
    "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "ci", "revert", "build",
];

/// Header length bound enforced by the canonical `header-max-length` rule.
pub const HEADER_MAX_LENGTH: u64 = 100;

/// Enforcement level of a single rule. Persisted as the integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    pub fn code(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }

    /// Severity codes form a closed set; anything else is malformed.
    pub fn from_code(code: u8) -> Result<Self, UnknownSeverity> {
        match code {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warn),
            2 => Ok(Severity::Error),
            other => Err(UnknownSeverity(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSeverity(pub u8);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity code {} (expected 0, 1, or 2)", self.0)
    }
}

impl std::error::Error for UnknownSeverity {}

/// Whether a rule applies positively or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

/// Rule parameter: an ordered set of allowed strings, or an integer bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleParam {
    Allowed(Vec<String>),
    Bound(u64),
}

/// One rule override: severity, optional applicability, optional parameter.
///
/// Persisted as a heterogeneous sequence, e.g. `[2, "always", 100]` or the
/// severity-only form `[0]`. A parameter is only ever present alongside an
/// applicability; the constructors keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub severity: Severity,
    pub applicability: Option<Applicability>,
    pub param: Option<RuleParam>,
}

impl RuleSpec {
    /// Severity-only form that disables a rule: `[0]`.
    pub fn off() -> Self {
        Self {
            severity: Severity::Off,
            applicability: None,
            param: None,
        }
    }

    pub fn enabled(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability: Some(applicability),
            param: None,
        }
    }

    pub fn with_allowed<I, S>(severity: Severity, applicability: Applicability, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity,
            applicability: Some(applicability),
            param: Some(RuleParam::Allowed(
                values.into_iter().map(Into::into).collect(),
            )),
        }
    }

    pub fn with_bound(severity: Severity, applicability: Applicability, bound: u64) -> Self {
        Self {
            severity,
            applicability: Some(applicability),
            param: Some(RuleParam::Bound(bound)),
        }
    }

    pub fn is_off(&self) -> bool {
        self.severity == Severity::Off
    }
}

impl Serialize for RuleSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len =
            1 + usize::from(self.applicability.is_some()) + usize::from(self.param.is_some());
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity.code())?;
        if let Some(applicability) = &self.applicability {
            seq.serialize_element(applicability)?;
            if let Some(param) = &self.param {
                seq.serialize_element(param)?;
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = RuleSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rule tuple [severity, applicability?, parameter?]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RuleSpec, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let code: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let severity = Severity::from_code(code).map_err(de::Error::custom)?;

                let applicability: Option<Applicability> = seq.next_element()?;
                let param: Option<RuleParam> = if applicability.is_some() {
                    seq.next_element()?
                } else {
                    None
                };

                Ok(RuleSpec {
                    severity,
                    applicability,
                    param,
                })
            }
        }

        deserializer.deserialize_seq(SpecVisitor)
    }
}

/// The configuration record: base rule sets to inherit plus rule overrides.
///
/// Immutable after load; the consuming engine reads it once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSpec>,
}

impl ConfigRecord {
    /// The canonical conventional-commit record: eleven allowed type tokens,
    /// subject-case disabled, header capped at 100 characters.
    pub fn conventional() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            "type-enum".to_string(),
            RuleSpec::with_allowed(Severity::Error, Applicability::Always, CONVENTIONAL_TYPES),
        );
        rules.insert("subject-case".to_string(), RuleSpec::off());
        rules.insert(
            "header-max-length".to_string(),
            RuleSpec::with_bound(Severity::Error, Applicability::Always, HEADER_MAX_LENGTH),
        );

        Self {
            extends: vec![CONVENTIONAL_BASE.to_string()],
            rules,
        }
    }

    pub fn rule(&self, id: &str) -> Option<&RuleSpec> {
        self.rules.get(id)
    }
}
