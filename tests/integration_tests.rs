//! Integration tests for the pbxproj parser, writer, and project builder.

use sushi_xcode::parser::parse;
use sushi_xcode::project::XcodeProject;
use sushi_xcode::types::value::Value;

const BANNER: &str = "// !$*UTF8*$!\n";

fn parse_map(input: &str) -> Value {
    let text = format!("{BANNER}{input}");
    parse(&text).unwrap_or_else(|e| panic!("failed to parse {text:?}: {e}"))
}

mod structural_tests {
    use super::*;

    #[test]
    fn numeric_object_keys_are_strings() {
        let input = "{ 123 = abc; 456 = { 789 = def; }; }";
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("123").and_then(Value::as_literal), Some("abc"));
        let inner = obj.get("456").unwrap().as_map().unwrap();
        assert_eq!(inner.get("789").and_then(Value::as_literal), Some("def"));
    }

    #[test]
    fn array_values_preserve_order() {
        let input = "{ list = (one, two, three); }";
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        let list = obj.get("list").unwrap().as_array().unwrap();
        let items: Vec<&str> = list.iter().filter_map(Value::as_literal).collect();
        assert_eq!(items, vec!["one", "two", "three"]);
    }

    #[test]
    fn isa_tagged_map_reifies_to_object() {
        let input = r#"{ 0123456789ABCDEF01234567 = { isa = PBXGroup; children = (); sourceTree = "<group>"; }; }"#;
        let result = parse_map(input);
        let outer = result.as_map().unwrap();
        let value = outer.get("0123456789ABCDEF01234567").unwrap();
        assert!(value.as_object().is_some(), "map with isa should reify into an Object");
        assert_eq!(value.as_object().unwrap().isa(), "PBXGroup");
    }
}

mod escape_tests {
    use super::*;

    #[test]
    fn unicode_escape_sequences() {
        let input = r#"{ testKey = "\U0041\U0042\U0043"; }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("testKey").and_then(Value::as_literal), Some("ABC"));
    }

    #[test]
    fn standard_escape_sequences() {
        let input = r#"{
            newline = "line1\nline2";
            tab = "col1\tcol2";
            quote = "say \"hello\"";
            backslash = "path\\to\\file";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("newline").and_then(Value::as_literal), Some("line1\nline2"));
        assert_eq!(obj.get("tab").and_then(Value::as_literal), Some("col1\tcol2"));
        assert_eq!(obj.get("quote").and_then(Value::as_literal), Some("say \"hello\""));
        assert_eq!(obj.get("backslash").and_then(Value::as_literal), Some("path\\to\\file"));
    }

    #[test]
    fn control_character_escapes() {
        let input = r#"{
            bell = "\a";
            backspace = "\b";
            formfeed = "\f";
            carriage = "\r";
            vertical = "\v";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("bell").and_then(Value::as_literal), Some("\x07"));
        assert_eq!(obj.get("backspace").and_then(Value::as_literal), Some("\x08"));
        assert_eq!(obj.get("formfeed").and_then(Value::as_literal), Some("\x0C"));
        assert_eq!(obj.get("carriage").and_then(Value::as_literal), Some("\r"));
        assert_eq!(obj.get("vertical").and_then(Value::as_literal), Some("\x0B"));
    }

    #[test]
    fn invalid_unicode_escape_is_left_verbatim() {
        let input = r#"{
            invalidUnicode = "\UZZZZ";
            partialUnicode = "\U123";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("invalidUnicode").and_then(Value::as_literal), Some("\\UZZZZ"));
        assert_eq!(obj.get("partialUnicode").and_then(Value::as_literal), Some("\\U123"));
    }

    #[test]
    fn nextstep_high_bit_characters() {
        let input = r#"{
            nonBreakSpace = "\200";
            copyright = "\240";
            registeredSign = "\260";
            bullet = "\267";
            enDash = "\261";
            emDash = "\320";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("nonBreakSpace").and_then(Value::as_literal), Some("\u{00a0}"));
        assert_eq!(obj.get("copyright").and_then(Value::as_literal), Some("\u{00a9}"));
        assert_eq!(obj.get("registeredSign").and_then(Value::as_literal), Some("\u{00ae}"));
        assert_eq!(obj.get("bullet").and_then(Value::as_literal), Some("\u{2022}"));
        assert_eq!(obj.get("enDash").and_then(Value::as_literal), Some("\u{2013}"));
        assert_eq!(obj.get("emDash").and_then(Value::as_literal), Some("\u{2014}"));
    }

    #[test]
    fn nextstep_accented_characters() {
        let input = r#"{
            aGrave = "\201";
            aAcute = "\202";
            aTilde = "\204";
            ccedilla = "\207";
            eGrave = "\210";
            oSlash = "\351";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("aGrave").and_then(Value::as_literal), Some("\u{00c0}"));
        assert_eq!(obj.get("aAcute").and_then(Value::as_literal), Some("\u{00c1}"));
        assert_eq!(obj.get("aTilde").and_then(Value::as_literal), Some("\u{00c3}"));
        assert_eq!(obj.get("ccedilla").and_then(Value::as_literal), Some("\u{00c7}"));
        assert_eq!(obj.get("eGrave").and_then(Value::as_literal), Some("\u{00c8}"));
        assert_eq!(obj.get("oSlash").and_then(Value::as_literal), Some("\u{00d8}"));
    }

    #[test]
    fn octal_escapes_of_varying_width() {
        let input = r#"{
            null = "\0";
            one = "\1";
            ten = "\12";
            seventySeven = "\115";
            max = "\377";
            withTrailingDigit = "\1234";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("null").and_then(Value::as_literal), Some("\x00"));
        assert_eq!(obj.get("one").and_then(Value::as_literal), Some("\x01"));
        assert_eq!(obj.get("ten").and_then(Value::as_literal), Some("\n"));
        assert_eq!(obj.get("seventySeven").and_then(Value::as_literal), Some("\x4d"));
        assert_eq!(obj.get("max").and_then(Value::as_literal), Some("\u{fffd}"));
        // \123 consumes three octal digits (S = 0o123), leaving the trailing "4".
        assert_eq!(obj.get("withTrailingDigit").and_then(Value::as_literal), Some("S4"));
    }

    #[test]
    fn mixed_quote_styles() {
        let input = r#"{
            doubleQuoted = "double";
            singleQuoted = 'single';
            doubleInSingle = 'say "hello"';
            singleInDouble = "it's working";
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("doubleQuoted").and_then(Value::as_literal), Some("double"));
        assert_eq!(obj.get("singleQuoted").and_then(Value::as_literal), Some("single"));
        assert_eq!(obj.get("doubleInSingle").and_then(Value::as_literal), Some("say \"hello\""));
        assert_eq!(obj.get("singleInDouble").and_then(Value::as_literal), Some("it's working"));
    }

    #[test]
    fn unquoted_identifiers_allow_path_and_dotted_chars() {
        let input = r#"{
            unquoted = value;
            withNumbers = value123;
            withPath = path/to/file;
            withDots = com.example.app;
            withHyphens = with-hyphens;
            withUnderscores = with_underscores;
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("unquoted").and_then(Value::as_literal), Some("value"));
        assert_eq!(obj.get("withNumbers").and_then(Value::as_literal), Some("value123"));
        assert_eq!(obj.get("withPath").and_then(Value::as_literal), Some("path/to/file"));
        assert_eq!(obj.get("withDots").and_then(Value::as_literal), Some("com.example.app"));
        assert_eq!(obj.get("withHyphens").and_then(Value::as_literal), Some("with-hyphens"));
        assert_eq!(obj.get("withUnderscores").and_then(Value::as_literal), Some("with_underscores"));
    }

    #[test]
    fn complex_nested_escapes() {
        let input = r#"{ complex = "prefix\n\tindented\\backslash\U0041suffix"; }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(
            obj.get("complex").and_then(Value::as_literal),
            Some("prefix\n\tindented\\backslashAsuffix")
        );
    }

    #[test]
    fn numeric_literals_stay_strings() {
        let input = r#"{
            octalLooking = 0755;
            trailingZero = 1.0;
            integer = 42;
            float = 3.14;
            scientific = 1e5;
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("octalLooking").and_then(Value::as_literal), Some("0755"));
        assert_eq!(obj.get("trailingZero").and_then(Value::as_literal), Some("1.0"));
        assert_eq!(obj.get("integer").and_then(Value::as_integer), Some(42));
        assert_eq!(obj.get("float").and_then(Value::as_literal), Some("3.14"));
        assert_eq!(obj.get("scientific").and_then(Value::as_literal), Some("1e5"));
    }

    #[test]
    fn data_literals_are_kept_as_raw_angle_bracket_text() {
        let input = r#"{ singleByte = <48>; dataWithSpaces = <48 65 6c 6c 6f>; }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("singleByte").and_then(Value::as_literal), Some("<48>"));
        assert_eq!(obj.get("dataWithSpaces").and_then(Value::as_literal), Some("<48 65 6c 6c 6f>"));
    }

    #[test]
    fn empty_strings_both_quote_styles() {
        let input = r#"{
            empty1 = "";
            empty2 = '';
        }"#;
        let result = parse_map(input);
        let obj = result.as_map().unwrap();
        assert_eq!(obj.get("empty1").and_then(Value::as_literal), Some(""));
        assert_eq!(obj.get("empty2").and_then(Value::as_literal), Some(""));
    }

    #[test]
    fn unclosed_string_is_a_parse_error() {
        let input = format!(
            "{BANNER}{{\n            unclosed = \"missing quote;\n        }}"
        );
        assert!(parse(&input).is_err());
    }
}

mod project_round_trip_tests {
    use super::*;

    const MINIMAL_PROJECT: &str = r#"// !$*UTF8*$!
{
    archiveVersion = 1;
    classes = {};
    objectVersion = 46;
    objects = {
        0000000000000000000000A0 /* Project object */ = {
            isa = PBXProject;
            mainGroup = 0000000000000000000000A1;
            buildConfigurationList = 0000000000000000000000A2;
            targets = ();
        };
        0000000000000000000000A1 /* Main group */ = {
            isa = PBXGroup;
            children = ();
            sourceTree = "<group>";
        };
        0000000000000000000000A2 /* Build configuration list */ = {
            isa = XCConfigurationList;
            buildConfigurations = ();
        };
    };
    rootObject = 0000000000000000000000A0 /* Project object */;
}
"#;

    #[test]
    fn parsing_and_rebuilding_a_minimal_project_is_a_fixed_point() {
        let original_text = XcodeProject::empty("Demo").to_pbxproj();
        assert!(original_text.starts_with("// !$*UTF8*$!\n"));
        assert!(original_text.contains("/* Begin PBXProject section */"));

        let parsed = XcodeProject::from_pbxproj(&original_text).unwrap();
        let rebuilt = parsed.to_pbxproj();
        assert_eq!(rebuilt, original_text, "re-serializing a freshly parsed project must reproduce it exactly");

        // Parsing the rebuilt text again should be stable from here on.
        let reparsed = XcodeProject::from_pbxproj(&rebuilt).unwrap();
        assert_eq!(reparsed.to_pbxproj(), rebuilt);
    }

    #[test]
    fn empty_project_round_trips_through_to_json_and_from_json() {
        let project = XcodeProject::empty("Demo");
        let json = project.to_json();
        let rebuilt = XcodeProject::from_json(&json).unwrap();
        assert_eq!(rebuilt.to_pbxproj(), project.to_pbxproj());
    }

    #[test]
    fn orphaned_reference_is_detected_after_manual_edit() {
        let mut project = XcodeProject::from_pbxproj(MINIMAL_PROJECT).unwrap();
        let dangling = project.allocator().mint();
        if let Some(main_group) = project.get_object_mut("0000000000000000000000A1") {
            main_group.map_mut().set_array("children", vec![Value::Id(dangling)]);
        }
        assert_eq!(project.find_orphaned_references().len(), 1);
    }
}
