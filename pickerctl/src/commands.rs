//! Command handlers.
//!
//! Each handler writes its output to the supplied writer so the binary can
//! pass stdout and tests can capture it.

use std::{io::Write, path::Path};

use anyhow::Result;
use colored::Colorize;
use picker_schema::{Attribute, Schema, SchemaEntry};
use serde_json::Value;

use crate::{config::CliConfig, utils};

/// Handler for schema commands.
pub struct SchemaHandler<'a> {
    schema: &'a Schema,
    config: CliConfig,
}

impl<'a> SchemaHandler<'a> {
    pub fn new(schema: &'a Schema, config: CliConfig) -> Self {
        Self { schema, config }
    }

    /// Print every attribute name in declaration order.
    pub fn list(&self, out: &mut impl Write) -> Result<()> {
        for (attr, _) in self.schema.iter() {
            writeln!(out, "{attr}")?;
        }
        Ok(())
    }

    /// Print the type tag and default of one attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a declared attribute.
    pub fn show(&self, name: &str, out: &mut impl Write) -> Result<()> {
        let attr: Attribute = name.parse()?;
        let SchemaEntry { ty, default } = self.schema.get(attr);

        writeln!(out, "{}", attr.name().bold())?;
        writeln!(out, "  type:    {ty}")?;
        match default {
            Some(default) => writeln!(out, "  default: {default}")?,
            None => writeln!(out, "  default: {}", "none (required)".yellow())?,
        }
        Ok(())
    }

    /// Print the whole table.
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let s = utils::render(&self.schema.to_json(), self.config.format)?;
        writeln!(out, "{s}")?;
        Ok(())
    }

    /// Print the default values.
    pub fn defaults(&self, out: &mut impl Write) -> Result<()> {
        let value = Value::Object(self.schema.defaults());
        let s = utils::render(&value, self.config.format)?;
        writeln!(out, "{s}")?;
        Ok(())
    }

    /// Print the JSON Schema document.
    pub fn json_schema(&self, out: &mut impl Write) -> Result<()> {
        let doc = self.schema.json_schema()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }

    /// Print the JSON Schema of `.pickerctl.toml`.
    pub fn config_schema(&self, out: &mut impl Write) -> Result<()> {
        let doc = CliConfig::json_schema()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }

    /// Type-tag the document at `path` and print the findings.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or has findings.
    pub fn check(&self, path: &Path, out: &mut impl Write) -> Result<()> {
        let doc = utils::load_document(path)?;
        let findings = self.schema.check_document(&doc);

        if findings.is_empty() {
            writeln!(
                out,
                "{} {} ({} attributes)",
                "ok".green(),
                path.display(),
                doc.len()
            )?;
            return Ok(());
        }

        for finding in &findings {
            writeln!(out, "{} {finding}", "error:".red().bold())?;
        }
        Err(anyhow!(
            "{}: {} finding(s)",
            path.display(),
            findings.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use picker_schema::get_schema;

    use super::*;
    use crate::config::OutputFormat;

    fn handler(format: OutputFormat) -> SchemaHandler<'static> {
        colored::control::set_override(false);
        SchemaHandler::new(
            get_schema(),
            CliConfig {
                format,
                color: false,
            },
        )
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list() {
        let h = handler(OutputFormat::Json);
        let s = output(|out| h.list(out));
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "accessCamera");
        assert_eq!(lines[29], "scanSettings.searchArea");
    }

    #[test]
    fn test_show() {
        let h = handler(OutputFormat::Json);
        let s = output(|out| h.show("targetScanningFPS", out));
        assert_eq!(s, "targetScanningFPS\n  type:    integer\n  default: 30\n");

        let s = output(|out| h.show("viewfinderArea", out));
        assert!(s.contains("type:    searchArea"));
        assert!(s.contains("none (required)"));

        let mut buf = Vec::new();
        assert!(h.show("nope", &mut buf).is_err());
    }

    #[test]
    fn test_dump_json() {
        let h = handler(OutputFormat::Json);
        let s = output(|out| h.dump(out));
        let v: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v, get_schema().to_json());
    }

    #[test]
    fn test_defaults_toml() {
        let h = handler(OutputFormat::Toml);
        let s = output(|out| h.defaults(out));
        assert!(s.contains("cameraType = \"back\""));
        assert!(!s.contains("laserArea"));
    }

    #[test]
    fn test_json_schema() {
        let h = handler(OutputFormat::Json);
        let s = output(|out| h.json_schema(out));
        let v: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["properties"]["visible"]["default"], true);
    }

    #[test]
    fn test_dump_toml() {
        let h = handler(OutputFormat::Toml);
        let s = output(|out| h.dump(out));
        assert!(s.contains("[configure]"));
        assert!(s.contains("[\"configure.engineLocation\"]"));

        let back: toml::Value = toml::from_str(&s).unwrap();
        let table = back.as_table().unwrap();
        assert_eq!(table.len(), 30);
        assert_eq!(back["configure"]["type"].as_str(), Some("boolean"));
        assert_eq!(back["configure"]["default"].as_bool(), Some(true));
        assert!(back["configure"].get("engineLocation").is_none());
        assert_eq!(
            back["configure.engineLocation"]["default"].as_str(),
            Some("/")
        );
        assert_eq!(back["camera"]["type"].as_str(), Some("camera"));
        assert!(back["camera"].get("default").is_none());
    }

    #[test]
    fn test_config_schema() {
        let h = handler(OutputFormat::Json);
        let s = output(|out| h.config_schema(out));
        let v: Value = serde_json::from_str(&s).unwrap();
        assert!(v["properties"]["format"].is_object());
    }

    #[test]
    fn test_check() {
        let h = handler(OutputFormat::Json);
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{ "visible": false, "videoFit": "cover" }"#).unwrap();
        let s = output(|out| h.check(&good, out));
        assert!(s.starts_with("ok "));
        assert!(s.contains("(2 attributes)"));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{ "visible": "yes", "zoom": 2 }"#).unwrap();
        let mut buf = Vec::new();
        let err = h.check(&bad, &mut buf).unwrap_err();
        assert!(err.to_string().contains("2 finding(s)"));

        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("error: visible: expected boolean, found \"yes\""));
        assert!(s.contains("error: unknown attribute \"zoom\""));
    }
}
