//! Request and response types exposed by the HTTP API.
//!
//! Every enumerated field of the domain (product category, order status, expense type,
//! payment method, notification type) is declared here with its wire spelling. The
//! database stores these as plain strings, so conversion from an entity model back into
//! a DTO is fallible and reports an [`InvalidVariant`].

use thiserror::Error;

/// A string did not match any accepted value of an enumerated field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value {0:?}")]
pub struct InvalidVariant(pub String);

/// Declares a closed set of string values with serde, OpenAPI and `FromStr` support.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
        )]
        $vis enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire and database spelling of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Accepted values joined with `", "`, used in validation messages
            pub fn choices() -> String {
                Self::ALL
                    .iter()
                    .map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::InvalidVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err($crate::model::InvalidVariant(value.to_string())),
                }
            }
        }
    };
}

pub mod api;
pub mod cart;
pub mod expense;
pub mod notification;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
