/*!
Serde support for the value types in this crate.

When the `serde` crate feature is enabled, every value type implements
`Serialize` and `Deserialize`. Values are always serialized as their
canonical ISO 8601 string, that is, the output of their `Display`
implementation. Deserialization accepts anything their `FromStr`
implementation accepts.

# Example

```
# #[cfg(feature = "serde")] {
use isochron::{tz::ZoneOffset, OffsetDateTime, Period};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    when: OffsetDateTime,
    offset: ZoneOffset,
    period: Period,
}

let json = r#"{"when":"2008-06-30T11:30:59+01:00","offset":"-05:00","period":"P1Y2M3D"}"#;
let got: Record = serde_json::from_str(&json).unwrap();
assert_eq!(got.offset, ZoneOffset::of_hours(-5).unwrap());
assert_eq!(got.period, Period::new(1, 2, 3));
assert_eq!(serde_json::to_string(&got).unwrap(), json);
# }
```
*/

/// Implements `Serialize` and `Deserialize` for a type in terms of its
/// `Display` and `FromStr` implementations.
macro_rules! impl_serde_str {
    ($ty:ty, $expecting:expr) => {
        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            #[inline]
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            #[inline]
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<$ty, D::Error> {
                use serde::de;

                struct StrVisitor;

                impl<'de> de::Visitor<'de> for StrVisitor {
                    type Value = $ty;

                    fn expecting(
                        &self,
                        f: &mut core::fmt::Formatter,
                    ) -> core::fmt::Result {
                        f.write_str($expecting)
                    }

                    #[inline]
                    fn visit_bytes<E: de::Error>(
                        self,
                        value: &[u8],
                    ) -> Result<$ty, E> {
                        let value = core::str::from_utf8(value)
                            .map_err(de::Error::custom)?;
                        self.visit_str(value)
                    }

                    #[inline]
                    fn visit_str<E: de::Error>(
                        self,
                        value: &str,
                    ) -> Result<$ty, E> {
                        value.parse::<$ty>().map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_str(StrVisitor)
            }
        }
    };
}

pub(crate) use impl_serde_str;
