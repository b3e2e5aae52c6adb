use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sdk::{CameraType, CodeDirection, GuiStyle, VideoFit};

/// Declared type of an attribute's value.
///
/// Primitive tags describe plain JSON shapes; the remaining tags name types
/// owned by the scanning SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TypeTag {
    Boolean,
    Integer,
    String,
    Array,
    /// SDK `Camera` object.
    Camera,
    /// SDK `CameraSettings` object.
    CameraSettings,
    /// [`CameraType`] member.
    CameraType,
    /// [`GuiStyle`] member.
    GuiStyle,
    /// SDK `SearchArea` rectangle.
    SearchArea,
    /// [`CodeDirection`] member.
    CodeDirection,
    /// SDK `SingleImageModeSettings` object.
    SingleImageModeSettings,
    /// [`VideoFit`] member.
    VideoFit,
}

impl TypeTag {
    /// Tag name as written in the schema table.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Integer => "integer",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Camera => "camera",
            TypeTag::CameraSettings => "cameraSettings",
            TypeTag::CameraType => "cameraType",
            TypeTag::GuiStyle => "guiStyle",
            TypeTag::SearchArea => "searchArea",
            TypeTag::CodeDirection => "codeDirection",
            TypeTag::SingleImageModeSettings => "singleImageModeSettings",
            TypeTag::VideoFit => "videoFit",
        }
    }

    /// Whether values of this tag are SDK objects rather than scalars.
    pub const fn is_object(self) -> bool {
        matches!(
            self,
            TypeTag::Camera
                | TypeTag::CameraSettings
                | TypeTag::SearchArea
                | TypeTag::SingleImageModeSettings
        )
    }

    /// Whether values of this tag are members of an SDK enum.
    pub const fn is_enum(self) -> bool {
        matches!(
            self,
            TypeTag::CameraType | TypeTag::GuiStyle | TypeTag::CodeDirection | TypeTag::VideoFit
        )
    }

    /// Check that a JSON value has the shape this tag declares.
    ///
    /// No coercion is attempted: `"true"` is not a boolean and `"30"` is
    /// not an integer.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            TypeTag::Boolean => value.is_boolean(),
            TypeTag::Integer => value.is_i64() || value.is_u64(),
            TypeTag::String => value.is_string(),
            TypeTag::Array => value.is_array(),
            TypeTag::CameraType => enum_member::<CameraType>(value),
            TypeTag::GuiStyle => enum_member::<GuiStyle>(value),
            TypeTag::CodeDirection => enum_member::<CodeDirection>(value),
            TypeTag::VideoFit => enum_member::<VideoFit>(value),
            TypeTag::Camera
            | TypeTag::CameraSettings
            | TypeTag::SearchArea
            | TypeTag::SingleImageModeSettings => value.is_object(),
        }
    }
}

fn enum_member<E: std::str::FromStr>(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.parse::<E>().is_ok())
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default value of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Boolean(bool),
    Integer(i64),
    String(&'static str),
    Array(&'static [&'static str]),
    CameraType(CameraType),
    GuiStyle(GuiStyle),
    VideoFit(VideoFit),
    CodeDirection(CodeDirection),
}

impl DefaultValue {
    /// Serialize the default into a JSON value.
    pub fn as_json(&self) -> Value {
        match self {
            DefaultValue::Boolean(b) => Value::Bool(*b),
            DefaultValue::Integer(i) => Value::Number((*i).into()),
            DefaultValue::String(s) => Value::String((*s).to_string()),
            DefaultValue::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|s| Value::String((*s).to_string()))
                    .collect(),
            ),
            DefaultValue::CameraType(v) => Value::String(v.as_str().to_string()),
            DefaultValue::GuiStyle(v) => Value::String(v.as_str().to_string()),
            DefaultValue::VideoFit(v) => Value::String(v.as_str().to_string()),
            DefaultValue::CodeDirection(v) => Value::String(v.as_str().to_string()),
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_json())
    }
}

/// Declared type and default of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    /// How the attribute's raw value is interpreted.
    pub ty: TypeTag,
    /// Default value; `None` means the caller must supply one.
    pub default: Option<DefaultValue>,
}

impl SchemaEntry {
    pub(crate) const fn new(ty: TypeTag, default: DefaultValue) -> Self {
        Self {
            ty,
            default: Some(default),
        }
    }

    pub(crate) const fn required(ty: TypeTag) -> Self {
        Self { ty, default: None }
    }

    /// Serialize the entry as `{ "type": .., "default": .. }`.
    ///
    /// The `default` key is omitted when there is no default.
    pub fn as_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("type".into(), Value::String(self.ty.as_str().to_string()));
        if let Some(default) = &self.default {
            obj.insert("default".into(), default.as_json());
        }
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_tag_serde_matches_as_str() {
        for tag in [
            TypeTag::Boolean,
            TypeTag::CameraSettings,
            TypeTag::SingleImageModeSettings,
            TypeTag::VideoFit,
        ] {
            assert_eq!(serde_json::to_value(tag).unwrap(), json!(tag.as_str()));
        }
        let tag: TypeTag = serde_json::from_value(json!("codeDirection")).unwrap();
        assert_eq!(tag, TypeTag::CodeDirection);
    }

    #[test]
    fn test_matches_primitives() {
        assert!(TypeTag::Boolean.matches(&json!(false)));
        assert!(!TypeTag::Boolean.matches(&json!("true")));

        assert!(TypeTag::Integer.matches(&json!(30)));
        assert!(TypeTag::Integer.matches(&json!(-1)));
        assert!(!TypeTag::Integer.matches(&json!(1.5)));
        assert!(!TypeTag::Integer.matches(&json!("30")));

        assert!(TypeTag::String.matches(&json!("")));
        assert!(!TypeTag::String.matches(&Value::Null));

        assert!(TypeTag::Array.matches(&json!(["ean13", "code128"])));
        assert!(!TypeTag::Array.matches(&json!({})));
    }

    #[test]
    fn test_matches_sdk_types() {
        assert!(TypeTag::CameraType.matches(&json!("front")));
        assert!(!TypeTag::CameraType.matches(&json!("FRONT")));
        assert!(!TypeTag::CameraType.matches(&json!(0)));

        assert!(TypeTag::VideoFit.matches(&json!("cover")));
        assert!(TypeTag::CodeDirection.matches(&json!("none")));
        assert!(!TypeTag::GuiStyle.matches(&json!("contain")));

        let area = json!({ "x": 0, "y": 0.25, "width": 1, "height": 0.5 });
        assert!(TypeTag::SearchArea.matches(&area));
        assert!(!TypeTag::SearchArea.matches(&json!([0, 0, 1, 1])));
        assert!(TypeTag::Camera.is_object());
        assert!(!TypeTag::Camera.is_enum());
    }

    #[test]
    fn test_entry_json() {
        let fps = SchemaEntry::new(TypeTag::Integer, DefaultValue::Integer(30));
        assert_eq!(fps.as_json(), json!({ "type": "integer", "default": 30 }));

        let camera = SchemaEntry::required(TypeTag::Camera);
        assert_eq!(camera.as_json(), json!({ "type": "camera" }));

        let symbologies = SchemaEntry::new(TypeTag::Array, DefaultValue::Array(&[]));
        assert_eq!(symbologies.as_json(), json!({ "type": "array", "default": [] }));
    }

    #[test]
    fn test_default_display() {
        assert_eq!(DefaultValue::String("/").to_string(), "\"/\"");
        assert_eq!(DefaultValue::GuiStyle(GuiStyle::Laser).to_string(), "\"laser\"");
        assert_eq!(DefaultValue::Boolean(true).to_string(), "true");
    }
}
