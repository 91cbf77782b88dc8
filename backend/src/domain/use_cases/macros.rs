//! Helper macro for generating per-use-case error types.
//!
//! Each invocation produces two types:
//! - a closed code enum serialised as `SCREAMING_SNAKE_CASE`, whose
//!   `Display` is the human-readable message;
//! - an error enum holding either exactly one of those codes or an opaque
//!   [`UnexpectedError`](crate::domain::UnexpectedError).
//!
//! Every repository port error converts into the generated error, so use
//! cases propagate collaborator failures with `?`.

macro_rules! define_use_case_error {
    (
        $(#[$code_meta:meta])*
        pub enum $code:ident;

        $(#[$error_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$code_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $code {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $code {
            /// Human-readable description of this code.
            #[must_use]
            pub const fn message(self) -> &'static str {
                match self {
                    $( Self::$variant => $message, )+
                }
            }
        }

        impl ::std::fmt::Display for $code {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.message())
            }
        }

        $(#[$error_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// A business rule rejected the request.
            #[error("{0}")]
            Code($code),
            /// A collaborator failed outside the business rules.
            #[error(transparent)]
            Unexpected(#[from] $crate::domain::UnexpectedError),
        }

        impl $name {
            /// The business code, or `None` for an unexpected failure.
            #[must_use]
            pub const fn code(&self) -> Option<$code> {
                match self {
                    Self::Code(code) => Some(*code),
                    Self::Unexpected(_) => None,
                }
            }

            $(
                ::paste::paste! {
                    #[doc = "Construct the `" $variant "` failure."]
                    #[must_use]
                    pub const fn [<$variant:snake>]() -> Self {
                        Self::Code($code::$variant)
                    }
                }
            )+
        }

        impl From<$code> for $name {
            fn from(code: $code) -> Self {
                Self::Code(code)
            }
        }

        impl From<$crate::domain::ports::UserRepositoryError> for $name {
            fn from(error: $crate::domain::ports::UserRepositoryError) -> Self {
                Self::Unexpected(error.into())
            }
        }

        impl From<$crate::domain::ports::PostRepositoryError> for $name {
            fn from(error: $crate::domain::ports::PostRepositoryError) -> Self {
                Self::Unexpected(error.into())
            }
        }

        impl From<$crate::domain::ports::CommentRepositoryError> for $name {
            fn from(error: $crate::domain::ports::CommentRepositoryError) -> Self {
                Self::Unexpected(error.into())
            }
        }
    };
}

pub(crate) use define_use_case_error;
