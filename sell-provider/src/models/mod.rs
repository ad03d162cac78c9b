//! Partner Center Sell API models
//!
//! Request and response bodies exchanged with the SDK client. Optional
//! fields are omitted from serialized output, so a patch struct carries
//! only what was set on it.

/// Locales every translated block is offered in
pub const LOCALES: [&str; 10] = [
    "en", "de", "es", "fr", "it", "ja", "ko", "pt_br", "zh_tw", "zh_cn",
];

/// Define a struct holding one `$item` block per locale
macro_rules! localized_blocks {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        localized_blocks!(@define $(#[$meta])* $name, $item,
            [en, de, es, fr, it, ja, ko, pt_br, zh_tw, zh_cn]);
    };
    (@define $(#[$meta:meta])* $name:ident, $item:ty, [$($locale:ident),*]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $locale: Option<$item>,
            )*
        }

        impl $crate::convert::MapTo for $name {
            fn map_to(
                map: &sell_core::resource::Attributes,
            ) -> $crate::convert::ConvertResult<Self> {
                Ok(Self {
                    $($locale: $crate::convert::block(map, stringify!($locale))?,)*
                })
            }
        }

        impl $crate::convert::ToMap for $name {
            fn to_map(&self) -> sell_core::resource::Attributes {
                $crate::convert::MapBuilder::new()
                    $(.block(stringify!($locale), &self.$locale))*
                    .build()
            }
        }
    };
}

/// Define a struct holding a default string plus one string per locale
macro_rules! localized_strings {
    ($(#[$meta:meta])* $name:ident) => {
        localized_strings!(@define $(#[$meta])* $name,
            [default, en, de, es, fr, it, ja, ko, pt_br, zh_tw, zh_cn]);
    };
    (@define $(#[$meta:meta])* $name:ident, [$($locale:ident),*]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $locale: Option<String>,
            )*
        }

        impl $crate::convert::MapTo for $name {
            fn map_to(
                map: &sell_core::resource::Attributes,
            ) -> $crate::convert::ConvertResult<Self> {
                Ok(Self {
                    $($locale: $crate::convert::string(map, stringify!($locale))?,)*
                })
            }
        }

        impl $crate::convert::ToMap for $name {
            fn to_map(&self) -> sell_core::resource::Attributes {
                $crate::convert::MapBuilder::new()
                    $(.string(stringify!($locale), &self.$locale))*
                    .build()
            }
        }
    };
}

pub mod broker;
pub mod catalog;
pub mod catalog_deployment;
pub mod catalog_plan;
pub mod catalog_product;
pub mod iam;
pub mod product;
pub mod registration;

pub use broker::*;
pub use catalog::*;
pub use catalog_deployment::*;
pub use catalog_plan::*;
pub use catalog_product::*;
pub use iam::*;
pub use product::*;
pub use registration::*;
