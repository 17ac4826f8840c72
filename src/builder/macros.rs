//! Macros for ergonomic state definitions.

/// Generate a State trait implementation for simple enums.
///
/// The enum derives everything [`State`](crate::core::State) requires, plus
/// `Copy` and serde support, so it can be used directly as a transition key.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
/// use turnstile::core::State;
///
/// state_enum! {
///     pub enum OrderState {
///         Placed,
///         Paid,
///         Shipped,
///     }
/// }
///
/// assert_eq!(OrderState::Paid.name(), "Paid");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
