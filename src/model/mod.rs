//! Typed parameters for the reseller API.
//!
//! Every enumerated parameter is a closed set. `FromStr` is the validated
//! string boundary and `Display` yields the exact wire form.

/// Declares a closed set of wire strings as a fieldless enum.
///
/// Parsing is exact and case-sensitive; unknown values fail with
/// `Error::InvalidArgument` naming the parameter and the allowed values.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($param:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(crate::error::Error::invalid(format!(
                        "Invalid {} '{}'. Valid values are: {}.",
                        $param,
                        s,
                        [$($wire),+].join(", ")
                    ))),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

mod amount;
mod credentials;
mod plan;

pub use amount::Amount;
pub use credentials::{CredentialPlan, PlanType, ProxyType};
pub use plan::{
    DatacenterTerm, IspRegion, Ipv6Order, PlanKind, PlanOption, PlanOrder, PurchaseParams,
};

closed_set! {
    /// Whether to add or remove (whitelist entries, gigabytes).
    pub enum Action("action") {
        Add => "add",
        Remove => "remove",
    }
}
