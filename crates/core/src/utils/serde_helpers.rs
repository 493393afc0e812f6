//! Serde helpers for descriptor and config files written by hand

/// Implement case-insensitive deserialization for a fieldless enum.
///
/// Descriptor files come from several generators, so `"CLASS"`, `"Class"` and
/// `"class"` must all decode to the same variant.
///
/// ```
/// use serde::Serialize;
/// use stubsmith_core::impl_case_insensitive_deserialize;
///
/// #[derive(Debug, PartialEq, Serialize)]
/// enum Flavour {
///     Relaxed,
///     Strict,
/// }
///
/// impl_case_insensitive_deserialize!(
///     Flavour,
///     Relaxed => "relaxed",
///     Strict => "strict"
/// );
///
/// let flavour: Flavour = serde_json::from_str(r#""STRICT""#).unwrap();
/// assert_eq!(flavour, Flavour::Strict);
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::types::{ClassKind, Visibility};

    #[test]
    fn test_class_kind_any_case() {
        for raw in [r#""class""#, r#""CLASS""#, r#""Class""#] {
            let kind: ClassKind = serde_json::from_str(raw).unwrap();
            assert_eq!(kind, ClassKind::Class);
        }
        let kind: ClassKind = serde_json::from_str(r#""Interface""#).unwrap();
        assert_eq!(kind, ClassKind::Interface);
    }

    #[test]
    fn test_unknown_variant_lists_choices() {
        let result: Result<Visibility, _> = serde_json::from_str(r#""package""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant 'package'"));
        assert!(err.contains("expected one of: public, protected, internal, private"));
    }
}
