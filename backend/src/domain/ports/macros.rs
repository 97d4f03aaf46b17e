//! Helper macro for driven-port error enums.
//!
//! Each variant gets a snake_case constructor accepting `impl Into<_>` for its
//! fields. Variants tagged `; unavailable` classify as connection failures;
//! every other variant classifies as an operation failure.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (@class) => {
        $crate::domain::InfrastructureFailure::Operation
    };

    (@class unavailable) => {
        $crate::domain::InfrastructureFailure::Connection
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )?
                    => $message:expr $( ; $class:ident )?
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

            /// Whether the backing store was unreachable or the operation failed.
            pub fn failure(&self) -> $crate::domain::InfrastructureFailure {
                match self {
                    $(
                        Self::$variant { .. } => define_port_error!(@class $($class)?),
                    )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
