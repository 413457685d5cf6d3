use std::collections::HashMap;

use crate::project::xcode_project::XcodeProject;
use crate::types::id::IdRef;
use crate::types::map::{MapEntry, PMap};
use crate::types::value::Value;

use super::comments::create_reference_list;
use super::quotes::ensure_quotes;

/// Writer knobs. `tab` is the per-level indent string; `shebang` is the
/// banner line every real `.pbxproj` opens with.
pub struct WriterOptions {
    pub tab: String,
    pub shebang: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions { tab: "\t".to_string(), shebang: "// !$*UTF8*$!\n".to_string() }
    }
}

const MAX_CACHED_INDENT: usize = 8;

/// Keys whose literal value renders as an id reference in real projects but
/// must never carry a resolved comment suffix.
fn is_uncommented_id_key(key: &str) -> bool {
    matches!(key, "remoteGlobalIDString" | "TestTargetID")
}

/// Keys whose literal value is forced to render with a trailing `.0` when it
/// looks like a bare integer, matching Xcode's own writer for these settings.
fn key_has_float_value(key: &str) -> bool {
    matches!(key, "SWIFT_VERSION" | "MARKETING_VERSION") || key.ends_with("_DEPLOYMENT_TARGET")
}

struct Writer {
    buf: String,
    indent: usize,
    comments: HashMap<String, String>,
    options: WriterOptions,
    indents: Vec<String>,
}

impl Writer {
    fn new(project: &XcodeProject, options: WriterOptions) -> Self {
        let mut indents = Vec::with_capacity(MAX_CACHED_INDENT + 1);
        for i in 0..=MAX_CACHED_INDENT {
            indents.push(options.tab.repeat(i));
        }
        Writer { buf: String::new(), indent: 0, comments: create_reference_list(project.objects()), options, indents }
    }

    fn indent_str(&self) -> String {
        if self.indent <= MAX_CACHED_INDENT {
            self.indents[self.indent].clone()
        } else {
            self.options.tab.repeat(self.indent)
        }
    }

    fn write_indent(&mut self) {
        let s = self.indent_str();
        self.buf.push_str(&s);
    }

    fn write_line(&mut self, s: &str) {
        self.write_indent();
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    fn write_assign_line(&mut self, key: &str, rendered_value: &str) {
        self.write_indent();
        self.buf.push_str(key);
        self.buf.push_str(" = ");
        self.buf.push_str(rendered_value);
        self.buf.push_str(";\n");
    }

    /// Resolve the comment to print after an id: the id's own comment, if
    /// non-empty, otherwise the computed fallback for this document.
    fn resolve_comment(&self, id_hex: &str, own_comment: &Option<String>) -> Option<String> {
        if let Some(c) = own_comment {
            return if c.is_empty() { None } else { Some(c.clone()) };
        }
        self.comments.get(id_hex).filter(|c| !c.is_empty()).cloned()
    }

    fn format_id(&self, id: &IdRef) -> String {
        match self.resolve_comment(&id.to_hex(), &id.comment) {
            Some(c) => format!("{} /* {} */", id.to_hex(), c),
            None => ensure_quotes(&id.to_hex()),
        }
    }

    /// Comment to print after an `objects`-table key: the key's own parsed
    /// comment, then the object's own id comment (builder path), then the
    /// computed fallback — in that priority order.
    fn object_key_comment(&self, entry_comment: &Option<String>, id: &IdRef) -> Option<String> {
        if let Some(c) = entry_comment {
            if !c.is_empty() {
                return Some(c.clone());
            }
        }
        self.resolve_comment(&id.to_hex(), &id.comment)
    }

    fn float_coerced(key: &str, s: &str) -> String {
        if key_has_float_value(key) && !s.contains('.') {
            if let Ok(n) = s.parse::<i64>() {
                return format!("{n}.0");
            }
        }
        s.to_string()
    }

    fn write_id_value(&mut self, key: &str, id: &IdRef) {
        self.write_indent();
        self.buf.push_str(&ensure_quotes(key));
        self.buf.push_str(" = ");
        if is_uncommented_id_key(key) {
            self.buf.push_str(&ensure_quotes(&id.to_hex()));
        } else {
            self.buf.push_str(&self.format_id(id));
        }
        self.buf.push_str(";\n");
    }

    fn write_array_value(&mut self, key: &str, items: &[Value]) {
        self.write_indent();
        self.buf.push_str(&ensure_quotes(key));
        self.buf.push_str(" = (\n");
        self.indent += 1;
        for item in items {
            let rendered = self.render_inline_value(item);
            self.write_indent();
            self.buf.push_str(&rendered);
            self.buf.push_str(",\n");
        }
        self.indent -= 1;
        self.write_line(");");
    }

    /// Render a bare value (no trailing key) for use inside an array or an
    /// inlined object — never a top-level `key = value;` line.
    fn render_inline_value(&self, value: &Value) -> String {
        match value {
            Value::Literal(s) => ensure_quotes(s),
            Value::Id(id) => self.format_id(id),
            Value::Array(items) => {
                let inner: Vec<String> = items.iter().map(|v| self.render_inline_value(v)).collect();
                if inner.is_empty() {
                    "()".to_string()
                } else {
                    format!("({}, )", inner.join(", "))
                }
            }
            Value::Map(m) => self.render_inline_map(m),
            Value::Object(o) => self.render_inline_map(o.map()),
        }
    }

    fn render_inline_map(&self, map: &PMap) -> String {
        if map.is_empty() {
            return "{}".to_string();
        }
        let mut parts = Vec::new();
        for (key, entry) in map.iter_entries() {
            parts.push(self.render_inline_entry(key, entry));
        }
        format!("{{{}}}", parts.join(" "))
    }

    fn render_inline_entry(&self, key: &str, entry: &MapEntry) -> String {
        let rendered = match &entry.value {
            Value::Literal(s) => ensure_quotes(&Self::float_coerced(key, s)),
            Value::Id(id) => {
                if is_uncommented_id_key(key) {
                    ensure_quotes(&id.to_hex())
                } else {
                    self.format_id(id)
                }
            }
            other => self.render_inline_value(other),
        };
        format!("{} = {};", ensure_quotes(key), rendered)
    }

    /// Write a `PBXBuildFile`/`PBXFileReference` object entirely on one
    /// line, the way real Xcode projects do for these two high-volume kinds.
    fn write_inline_object(&mut self, key: &str, comment: Option<&str>, map: &PMap) {
        self.write_indent();
        self.buf.push_str(key);
        if let Some(c) = comment {
            self.buf.push_str(" /* ");
            self.buf.push_str(c);
            self.buf.push_str(" */");
        }
        self.buf.push_str(" = ");
        self.buf.push_str(&self.render_inline_map(map));
        self.buf.push_str(";\n");
    }

    fn write_expanded_map(&mut self, key: &str, comment: Option<&str>, map: &PMap) {
        self.write_indent();
        self.buf.push_str(key);
        if let Some(c) = comment {
            self.buf.push_str(" /* ");
            self.buf.push_str(c);
            self.buf.push_str(" */");
        }
        if map.is_empty() {
            self.buf.push_str(" = {\n");
            self.write_line("};");
            return;
        }
        self.buf.push_str(" = {\n");
        self.indent += 1;
        for (k, entry) in map.iter_entries() {
            self.write_map_entry(k, entry);
        }
        self.indent -= 1;
        self.write_line("};");
    }

    fn write_map_entry(&mut self, key: &str, entry: &MapEntry) {
        match &entry.value {
            Value::Literal(s) => self.write_assign_line(&ensure_quotes(key), &ensure_quotes(&Self::float_coerced(key, s))),
            Value::Id(id) => self.write_id_value(key, id),
            Value::Array(items) => self.write_array_value(key, items),
            Value::Map(m) => self.write_expanded_map(&ensure_quotes(key), None, m),
            Value::Object(o) => self.write_expanded_map(&ensure_quotes(key), None, o.map()),
        }
    }

    /// Write the `objects = { ... }` table: isa-grouped, banner-delimited
    /// sections, alphabetically sorted by isa, each entry sorted by key.
    fn write_pbx_objects(&mut self, objects: &PMap) {
        let mut by_isa: std::collections::BTreeMap<&str, Vec<(&str, &MapEntry)>> = std::collections::BTreeMap::new();
        for (key, entry) in objects.iter_entries() {
            if let Some(obj) = entry.value.as_object() {
                by_isa.entry(obj.isa()).or_default().push((key, entry));
            }
        }

        let mut first_section = true;
        for (isa, mut entries) in by_isa {
            entries.sort_by(|a, b| a.0.cmp(b.0));

            if !first_section {
                self.buf.push('\n');
            }
            first_section = false;

            self.write_line(&format!("/* Begin {isa} section */"));
            for (key, entry) in entries {
                let obj = entry.value.as_object().unwrap();
                let comment = self.object_key_comment(&entry.comment, obj.id());
                if super::comments::is_pbx_build_file(isa) || super::comments::is_pbx_file_reference(isa) {
                    self.write_inline_object(key, comment.as_deref(), obj.map());
                } else {
                    self.write_expanded_map(key, comment.as_deref(), obj.map());
                }
            }
            self.write_line(&format!("/* End {isa} section */"));
        }
    }

    fn write_document(&mut self, project: &XcodeProject) {
        self.write_line("{");
        self.indent += 1;
        self.write_assign_line("archiveVersion", &project.archive_version().to_string());
        self.write_expanded_map("classes", None, project.classes());
        self.write_assign_line("objectVersion", &project.object_version().to_string());

        self.write_indent();
        self.buf.push_str("objects = {\n");
        self.indent += 1;
        self.write_pbx_objects(project.objects());
        self.indent -= 1;
        self.write_line("};");

        let rendered_root = match project.root_object() {
            Some(root) => {
                let hex = root.id().to_hex();
                match self.object_key_comment(&None, root.id()) {
                    Some(c) => format!("{hex} /* {c} */"),
                    None => ensure_quotes(&hex),
                }
            }
            None => "\"\"".to_string(),
        };
        self.write_assign_line("rootObject", &rendered_root);

        self.indent -= 1;
        self.write_line("}");
    }
}

/// Serialize `project` back into `.pbxproj` text.
pub fn build(project: &XcodeProject) -> String {
    build_with_options(project, WriterOptions::default())
}

pub fn build_with_options(project: &XcodeProject, options: WriterOptions) -> String {
    let shebang = options.shebang.clone();
    let mut writer = Writer::new(project, options);
    writer.buf.push_str(&shebang);
    writer.write_document(project);
    writer.buf
}
