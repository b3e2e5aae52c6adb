//! JSON export of the schema table.
//!
//! All exports are flat: `configure` is itself a boolean attribute and also
//! the prefix of the `configure.*` attributes, so nesting by dotted path
//! would collide.

use schemars::JsonSchema;
use serde_json::{Map, Value, json};

use crate::{
    data::{item::TypeTag, schema::Schema},
    error::Result,
    sdk::{CameraType, CodeDirection, GuiStyle, VideoFit},
};

const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

impl Schema {
    /// Export the table as a JSON object keyed by attribute name.
    ///
    /// Keys are in declaration order and each value is
    /// [`SchemaEntry::as_json`](crate::SchemaEntry::as_json).
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(attr, entry)| (attr.name().to_string(), entry.as_json()))
            .collect();
        Value::Object(map)
    }

    /// Default values keyed by attribute name.
    ///
    /// Attributes without a default are left out.
    pub fn defaults(&self) -> Map<String, Value> {
        self.iter()
            .filter_map(|(attr, entry)| {
                entry
                    .default
                    .map(|d| (attr.name().to_string(), d.as_json()))
            })
            .collect()
    }

    /// Describe the attribute surface as a JSON Schema (Draft 2020-12).
    ///
    /// SDK enums are emitted once under `$defs` and referenced from each
    /// property that uses them. SDK object types are left open.
    pub fn json_schema(&self) -> Result<Value> {
        let mut defs = Map::new();
        let mut properties = Map::new();

        for (attr, entry) in self.iter() {
            let mut property = property_schema(entry.ty, &mut defs)?;
            if let Some(default) = &entry.default {
                property.insert("default".into(), default.as_json());
            }
            properties.insert(attr.name().to_string(), Value::Object(property));
        }

        Ok(json!({
            "$schema": JSON_SCHEMA_DIALECT,
            "title": "BarcodePicker attributes",
            "type": "object",
            "properties": properties,
            "additionalProperties": false,
            "$defs": defs,
        }))
    }
}

fn property_schema(ty: TypeTag, defs: &mut Map<String, Value>) -> Result<Map<String, Value>> {
    let value = match ty {
        TypeTag::Boolean => json!({ "type": "boolean" }),
        TypeTag::Integer => json!({ "type": "integer" }),
        TypeTag::String => json!({ "type": "string" }),
        TypeTag::Array => json!({ "type": "array", "items": { "type": "string" } }),
        TypeTag::CameraType => definition_ref::<CameraType>(defs)?,
        TypeTag::GuiStyle => definition_ref::<GuiStyle>(defs)?,
        TypeTag::CodeDirection => definition_ref::<CodeDirection>(defs)?,
        TypeTag::VideoFit => definition_ref::<VideoFit>(defs)?,
        TypeTag::Camera
        | TypeTag::CameraSettings
        | TypeTag::SearchArea
        | TypeTag::SingleImageModeSettings => json!({ "type": "object" }),
    };

    let mut property = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    property.insert("x-type-tag".into(), Value::String(ty.as_str().to_string()));
    Ok(property)
}

/// Register `T` under `$defs` and return a `$ref` pointing at it.
fn definition_ref<T: JsonSchema>(defs: &mut Map<String, Value>) -> Result<Value> {
    let name = T::schema_name().to_string();
    if !defs.contains_key(&name) {
        let mut schema = serde_json::to_value(schemars::schema_for!(T))?;
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
        }
        defs.insert(name.clone(), schema);
    }
    Ok(json!({ "$ref": format!("#/$defs/{name}") }))
}
