//! Scanning SDK enum mirrors.
//!
//! The scanning engine owns these enums. Only the members needed by the
//! attribute defaults and type tags are mirrored here, using the SDK's own
//! string values so they can be passed through unchanged.

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// Variants must stay undocumented: schemars turns documented unit variants
// into `oneOf` instead of a plain string `enum`.
macro_rules! sdk_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All members in SDK declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// SDK string value of this member.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| SchemaError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

sdk_enum! {
    /// Camera facing direction (`Camera.Type`).
    CameraType as "cameraType" {
        Front => "front",
        Back => "back",
    }
}

sdk_enum! {
    /// Overlay drawn over the video feed (`BarcodePicker.GuiStyle`): nothing,
    /// a horizontal laser line, or a rectangular viewfinder.
    GuiStyle as "guiStyle" {
        None => "none",
        Laser => "laser",
        Viewfinder => "viewfinder",
    }
}

sdk_enum! {
    /// How the video feed fills the picker element (`BarcodePicker.ObjectFit`).
    ///
    /// `contain` letterboxes the whole frame; `cover` fills the element and
    /// crops the frame.
    VideoFit as "videoFit" {
        Contain => "contain",
        Cover => "cover",
    }
}

sdk_enum! {
    /// Expected orientation of codes in the frame (`ScanSettings.CodeDirection`).
    CodeDirection as "codeDirection" {
        LeftToRight => "leftToRight",
        RightToLeft => "rightToLeft",
        BottomToTop => "bottomToTop",
        TopToBottom => "topToBottom",
        VerticalToHorizontal => "verticalToHorizontal",
        HorizontalToVertical => "horizontalToVertical",
        None => "none",
    }
}
