//! Declarative helpers shared by the schema modules.

/// Declare an OCSF integer enumeration.
///
/// Each variant carries its OCSF id and caption. The generated type
/// serializes as the bare integer id (OCSF `*_id` attributes are integers on
/// the wire), rejects ids it does not know during deserialization, and
/// exposes `id()`, `caption()`, `ALL` and `TryFrom<i64>`.
macro_rules! ocsf_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $id:literal => $caption:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i64)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $id,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The OCSF integer identifier.
            pub const fn id(self) -> i64 {
                self as i64
            }

            /// The OCSF caption, as used by the sibling string attribute.
            pub const fn caption(self) -> &'static str {
                match self {
                    $($name::$variant => $caption,)+
                }
            }
        }

        impl ::std::convert::TryFrom<i64> for $name {
            type Error = i64;

            fn try_from(id: i64) -> ::std::result::Result<Self, i64> {
                match id {
                    $($id => Ok($name::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.caption())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.id())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let id = <i64 as ::serde::Deserialize>::deserialize(deserializer)?;
                $name::try_from(id).map_err(|id| {
                    ::serde::de::Error::custom(format!(
                        "unknown {} value {id}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

pub(crate) use ocsf_enum;
