use std::io::Cursor;

/// Parse a plist string into a serde_json::Value.
///
/// Auto-detects XML vs binary format. Handles `.entitlements`, `Info.plist`,
/// and any other Apple plist file.
pub fn parse_plist(content: &str) -> Result<serde_json::Value, String> {
    let cursor = Cursor::new(content.as_bytes());
    plist::from_reader(cursor).map_err(|e| format!("Failed to parse plist: {}", e))
}

/// Serialize a serde_json::Value to an XML plist string.
pub fn build_plist(value: &serde_json::Value) -> Result<String, String> {
    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, value).map_err(|e| format!("Failed to serialize plist: {}", e))?;
    String::from_utf8(buf).map_err(|e| format!("Plist output is not valid UTF-8: {}", e))
}
