//! `define_port_error!`: error enums for driven ports.
//!
//! Every variant gets a snake_case constructor taking `impl Into<_>` for each
//! field, and the enum gets `kind()`, a stable snake_case label used as a
//! structured log field when an adapter failure is absorbed.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            ::paste::paste! {
                /// Snake_case variant label for log fields.
                pub const fn kind(&self) -> &'static str {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum SensorError {
            Denied { message: String } => "denied: {message}",
            TimedOut { timeout_ms: u64 } => "timed out after {timeout_ms} ms",
            Degraded { message: String, satellites: u32 } => "degraded: {message} ({satellites})",
            NoHardware => "no hardware",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SensorError::denied("user said no");
        assert_eq!(err.to_string(), "denied: user said no");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = SensorError::timed_out(10_000_u64);
        assert_eq!(err, SensorError::TimedOut { timeout_ms: 10_000 });
        assert_eq!(err.to_string(), "timed out after 10000 ms");
    }

    #[test]
    fn several_fields_are_passed_in_order() {
        let err = SensorError::degraded("gps", 3_u32);
        assert_eq!(err.to_string(), "degraded: gps (3)");
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SensorError::no_hardware(), SensorError::NoHardware);
    }

    #[rstest]
    #[case(SensorError::denied("x"), "denied")]
    #[case(SensorError::timed_out(1_u64), "timed_out")]
    #[case(SensorError::degraded("x", 0_u32), "degraded")]
    #[case(SensorError::no_hardware(), "no_hardware")]
    fn kind_is_the_snake_case_variant(#[case] err: SensorError, #[case] expected: &str) {
        assert_eq!(err.kind(), expected);
    }
}
