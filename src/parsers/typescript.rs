use anyhow::Result;
use regex::Regex;

use super::common::strip_extension;
use super::ImportParser;

/// `import { a, b } from './x'` or `import x from "./x"`; captures the path after `./`
const LOCAL_IMPORT_PATTERN: &str =
    r#"import\s+(?:\{[^}]*\}|\w+)\s+from\s+['"]\./([^'"]+)['"]"#;

/// Regex-based import extraction for TypeScript services.
///
/// Only same-directory imports are recognised. Re-exports, dynamic imports,
/// namespace imports and aliased paths are outside what the pattern matches.
pub struct TypeScriptImportParser {
    pattern: Regex,
    extension: String,
}

impl TypeScriptImportParser {
    pub fn new(extension: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(LOCAL_IMPORT_PATTERN)?,
            extension: extension.to_string(),
        })
    }
}

impl ImportParser for TypeScriptImportParser {
    fn parse_source(&self, source: &str) -> Vec<String> {
        self.pattern
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|path| strip_extension(path.as_str(), &self.extension).to_string())
            .collect()
    }

    fn language_name(&self) -> &str {
        "typescript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Vec<String> {
        TypeScriptImportParser::new(".ts")
            .unwrap()
            .parse_source(source)
    }

    #[test]
    fn brace_list_spanning_lines_matches() {
        let source = "import {\n  A,\n  B,\n} from './multi';";
        assert_eq!(parse(source), vec!["multi"]);
    }

    #[test]
    fn namespace_and_parent_imports_do_not_match() {
        let source = r#"
import * as all from './everything';
import up from '../parent';
import type { T } from './types';
"#;
        assert!(parse(source).is_empty());
    }

    #[test]
    fn nested_path_is_kept_after_dot_slash() {
        assert_eq!(parse("import x from './dir/x.ts'"), vec!["dir/x"]);
    }
}
