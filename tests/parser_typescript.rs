use service_map::parsers::typescript::TypeScriptImportParser;
use service_map::parsers::ImportParser;
use std::fs;

fn parser() -> TypeScriptImportParser {
    TypeScriptImportParser::new(".ts").unwrap()
}

#[test]
fn typescript_parser_extracts_local_imports_in_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("orders.ts");
    let code = r#"
import { X } from './foo';
import Y from "./bar.ts";
import Z from 'external-package';
import { scoped } from '@org/pkg';
import { again } from './foo';

export class Orders {}
"#;
    fs::write(&file, code).unwrap();

    let deps = parser().parse_file(&file).unwrap();
    assert_eq!(deps, vec!["foo", "bar", "foo"]);
}

#[test]
fn brace_import_yields_name() {
    assert_eq!(parser().parse_source("import { X } from './foo'"), vec!["foo"]);
}

#[test]
fn default_import_strips_extension() {
    assert_eq!(parser().parse_source("import Y from './bar.ts'"), vec!["bar"]);
}

#[test]
fn external_import_is_ignored() {
    assert!(parser()
        .parse_source("import Z from 'external-package'")
        .is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = parser()
        .parse_file(&dir.path().join("gone.ts"))
        .unwrap_err();
    assert!(format!("{err:#}").contains("gone.ts"));
}
