/// Serializes a `bitflags` type as its raw integer, keeping unknown bits on
/// the way in.
macro_rules! impl_bits_serde {
    ($Flags:ident, $Bits:ty) => {
        impl serde::Serialize for $Flags {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.bits(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $Flags {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                <$Bits as serde::Deserialize>::deserialize(deserializer)
                    .map(Self::from_bits_retain)
            }
        }
    };
}

/// Fallible conversion from a wire integer into a `serde_repr` enum.
macro_rules! impl_try_from_repr {
    ($Enum:ident, $Repr:ty, [$($Variant:ident),* $(,)?]) => {
        impl std::convert::TryFrom<$Repr> for $Enum {
            type Error = $Repr;

            fn try_from(value: $Repr) -> std::result::Result<Self, Self::Error> {
                $(
                    if value == $Enum::$Variant as $Repr {
                        return Ok($Enum::$Variant);
                    }
                )*
                Err(value)
            }
        }
    };
}
