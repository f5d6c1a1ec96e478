//! Discovery of `Collection::computed(...)` registrations.
//!
//! Only one idiom is recognized: a static call on the Collection facade whose
//! second argument names the fields, either as a single string or as an array
//! whose string keys (or, failing that, string values) are the handles.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use statamic_fields::FieldDefinition;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Parser, Query, QueryCursor, StreamingIterator};
use walkdir::WalkDir;

use crate::error::{ComputedError, Result};
use crate::language::PHP;

/// Static method that registers computed fields.
pub const REGISTRATION_METHOD: &str = "computed";

/// Facade class names accepted as the call scope, without a leading `\`.
pub const FACADE_CLASSES: &[&str] = &["Collection", "Statamic\\Facades\\Collection"];

/// Files that do not mention this token are never parsed.
const PREFILTER_TOKEN: &str = "computed";

const CALL_QUERY: &str = "(scoped_call_expression) @call";

/// Node kinds that carry no value inside argument and array lists.
const TRIVIA_KINDS: &[&str] = &["comment", "by_ref", "reference_modifier"];

/// Children of a double-quoted string or heredoc that keep it a plain literal.
const PLAIN_STRING_PARTS: &[&str] = &["string_content", "string_value", "escape_sequence"];

/// Walks PHP sources for computed field registrations.
///
/// The first call to [`scan`](Self::scan) does the work; later calls return
/// the same slice even if the files changed in between.
#[derive(Debug)]
pub struct ComputedFieldScanner {
    scan_paths: Vec<PathBuf>,
    cache: OnceCell<Vec<FieldDefinition>>,
}

impl ComputedFieldScanner {
    /// Create a scanner over files and directories.
    pub fn new(scan_paths: Vec<PathBuf>) -> Self {
        Self {
            scan_paths,
            cache: OnceCell::new(),
        }
    }

    pub fn scan_paths(&self) -> &[PathBuf] {
        &self.scan_paths
    }

    /// Every computed field registered under the scan paths, in file order.
    pub fn scan(&self) -> &[FieldDefinition] {
        self.cache.get_or_init(|| self.discover())
    }

    /// Extract registrations from PHP source held in memory.
    ///
    /// Source that does not mention `computed` yields nothing without being
    /// parsed. Source with syntax errors is an error.
    pub fn scan_source(source: &str) -> Result<Vec<FieldDefinition>> {
        CallExtractor::new()?.extract(source, Path::new("<memory>"))
    }

    fn discover(&self) -> Vec<FieldDefinition> {
        let mut extractor = match CallExtractor::new() {
            Ok(extractor) => extractor,
            Err(e) => {
                warn!("Computed field scanning disabled: {}", e);
                return Vec::new();
            }
        };

        let mut fields = Vec::new();
        for file in self.source_files() {
            match extractor.extract_file(&file) {
                Ok(found) => {
                    trace!(path = %file.display(), fields = found.len(), "scanned source file");
                    fields.extend(found);
                }
                Err(e @ ComputedError::ParseError { .. }) => debug!("Skipping source file: {}", e),
                Err(e) => warn!("Skipping source file: {}", e),
            }
        }

        debug!(count = fields.len(), "discovered computed fields");
        fields
    }

    /// PHP files reachable from the scan paths.
    fn source_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.scan_paths {
            if path.is_file() {
                if PHP.matches(path) {
                    files.push(path.clone());
                }
            } else if path.is_dir() {
                for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
                    match entry {
                        Ok(entry) if entry.file_type().is_file() && PHP.matches(entry.path()) => {
                            files.push(entry.into_path());
                        }
                        Ok(_) => {}
                        Err(e) => warn!("Failed to walk '{}': {}", path.display(), e),
                    }
                }
            } else {
                debug!(path = %path.display(), "scan path does not exist");
            }
        }

        files
    }
}

/// A PHP parser paired with the compiled call query.
struct CallExtractor {
    parser: Parser,
    query: Query,
}

impl CallExtractor {
    fn new() -> Result<Self> {
        let language = PHP.language();

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ComputedError::language(PHP.name, e.to_string()))?;

        let query = Query::new(&language, CALL_QUERY)
            .map_err(|e| ComputedError::query_error(PHP.name, e.to_string()))?;

        Ok(Self { parser, query })
    }

    fn extract_file(&mut self, path: &Path) -> Result<Vec<FieldDefinition>> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ComputedError::file_read(path.to_path_buf(), e))?;
        self.extract(&source, path)
    }

    fn extract(&mut self, source: &str, path: &Path) -> Result<Vec<FieldDefinition>> {
        if !source.contains(PREFILTER_TOKEN) {
            return Ok(Vec::new());
        }

        let tree = self.parser.parse(source, None).ok_or_else(|| {
            ComputedError::parse_error(path.to_path_buf(), "Parse returned None")
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ComputedError::parse_error(
                path.to_path_buf(),
                "source contains syntax errors",
            ));
        }

        let mut fields = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, root, source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                fields.extend(
                    registered_handles(capture.node, source)
                        .into_iter()
                        .map(FieldDefinition::computed),
                );
            }
        }

        Ok(fields)
    }
}

/// Handles registered by one scoped call, or none if it is some other call.
fn registered_handles(call: Node<'_>, source: &str) -> Vec<String> {
    let Some(scope) = call.child_by_field_name("scope") else {
        return Vec::new();
    };
    if !is_collection_facade(node_text(scope, source)) {
        return Vec::new();
    }

    let Some(method) = call.child_by_field_name("name") else {
        return Vec::new();
    };
    if node_text(method, source) != REGISTRATION_METHOD {
        return Vec::new();
    }

    let Some(arguments) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    let arguments: Vec<Node<'_>> = named_children(arguments)
        .into_iter()
        .filter(|n| n.kind() == "argument")
        .collect();

    let Some(registered) = arguments.get(1).and_then(|arg| named_children(*arg).pop()) else {
        return Vec::new();
    };

    if registered.kind() == "array_creation_expression" {
        array_handles(registered, source)
    } else {
        string_literal(registered, source).into_iter().collect()
    }
}

fn is_collection_facade(scope: &str) -> bool {
    let class = scope.trim().trim_start_matches('\\');
    FACADE_CLASSES.contains(&class)
}

/// Per element: a string key wins, then a string value, else nothing.
fn array_handles(array: Node<'_>, source: &str) -> Vec<String> {
    named_children(array)
        .into_iter()
        .filter(|n| n.kind() == "array_element_initializer")
        .filter_map(|element| match named_children(element).as_slice() {
            [key, value] => string_literal(*key, source).or_else(|| string_literal(*value, source)),
            [value] => string_literal(*value, source),
            _ => None,
        })
        .collect()
}

/// The value of a string literal without interpolation.
fn string_literal(node: Node<'_>, source: &str) -> Option<String> {
    match node.kind() {
        "string" => unquote(node_text(node, source), '\'').map(unescape_single_quoted),
        "encapsed_string" => {
            if !is_plain(node) {
                return None;
            }
            unquote(node_text(node, source), '"').map(|body| unescape_interpolated(body, Some('"')))
        }
        "heredoc" => {
            let body = doc_body(node)?;
            if !is_plain(body) {
                return None;
            }
            Some(unescape_interpolated(&doc_text(node, body, source), None))
        }
        "nowdoc" => Some(doc_text(node, doc_body(node)?, source)),
        _ => None,
    }
}

/// True when a string node holds no interpolation.
fn is_plain(node: Node<'_>) -> bool {
    named_children(node)
        .iter()
        .all(|part| PLAIN_STRING_PARTS.contains(&part.kind()))
}

fn doc_body(doc: Node<'_>) -> Option<Node<'_>> {
    named_children(doc)
        .into_iter()
        .find(|n| matches!(n.kind(), "heredoc_body" | "nowdoc_body"))
}

/// Text of a heredoc or nowdoc body with the closing marker's indentation
/// removed from every line.
fn doc_text(doc: Node<'_>, body: Node<'_>, source: &str) -> String {
    let text = node_text(body, source);
    let text = text
        .strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
        .trim_end_matches(|c| c == ' ' || c == '\t');

    let indent = named_children(doc)
        .into_iter()
        .find(|n| n.kind() == "heredoc_end")
        .map(|end| line_indent(source, end.start_byte()))
        .unwrap_or("");

    text.lines()
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Leading whitespace of the line containing `byte`.
fn line_indent(source: &str, byte: usize) -> &str {
    let start = source[..byte].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[start..];
    let rest = line.trim_start_matches(|c| c == ' ' || c == '\t');
    &line[..line.len() - rest.len()]
}

/// Strip the optional binary prefix and the surrounding quotes.
fn unquote(text: &str, quote: char) -> Option<&str> {
    let text = text.strip_prefix(|c| c == 'b' || c == 'B').unwrap_or(text);
    text.strip_prefix(quote)?.strip_suffix(quote)
}

fn unescape_single_quoted(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('\\', Some(&next @ ('\\' | '\''))) => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Unescape a double-quoted or heredoc body. `quote` is the delimiter that
/// may itself be escaped, if any.
fn unescape_interpolated(body: &str, quote: Option<char>) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let replacement = match chars.peek() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('v') => '\u{0B}',
            Some('e') => '\u{1B}',
            Some('f') => '\u{0C}',
            Some(&other) if other == '\\' || other == '$' || Some(other) == quote => other,
            _ => {
                out.push('\\');
                continue;
            }
        };
        out.push(replacement);
        chars.next();
    }
    out
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| !TRIVIA_KINDS.contains(&n.kind()))
        .collect()
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SERVICE_PROVIDER: &str = r#"<?php

namespace App\Providers;

use Illuminate\Support\ServiceProvider;
use Statamic\Facades\Collection;

class ComputedServiceProvider extends ServiceProvider
{
    public function boot(): void
    {
        Collection::computed('articles', 'brand_slug', function ($entry, $value) {
            return strtolower($entry->get('brand'));
        });

        Collection::computed(['articles', 'pages'], 'view_count', fn ($entry) => 0);

        Collection::computed('articles', [
            'shares' => fn ($entry) => 0,
            'likes' => fn ($entry) => 0,
        ]);
    }
}
"#;

    const FQCN: &str = r#"<?php

\Statamic\Facades\Collection::computed('articles', 'fqcn_field', fn () => null);
"#;

    fn handles(fields: &[FieldDefinition]) -> Vec<&str> {
        fields.iter().map(|f| f.handle()).collect()
    }

    fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn extracts_string_and_array_registrations() {
        let fields = ComputedFieldScanner::scan_source(SERVICE_PROVIDER).unwrap();
        assert_eq!(
            handles(&fields),
            vec!["brand_slug", "view_count", "shares", "likes"]
        );
        assert!(fields.iter().all(|f| f.kind() == "computed"));
        assert!(fields.iter().all(|f| f.config().is_empty()));
    }

    #[test]
    fn accepts_fully_qualified_facade() {
        let fields = ComputedFieldScanner::scan_source(FQCN).unwrap();
        assert_eq!(handles(&fields), vec!["fqcn_field"]);

        let fields = ComputedFieldScanner::scan_source(
            "<?php\nStatamic\\Facades\\Collection::computed('a', 'relative_fqcn', fn () => 1);\n",
        )
        .unwrap();
        assert_eq!(handles(&fields), vec!["relative_fqcn"]);
    }

    #[test]
    fn ignores_other_calls() {
        let source = r#"<?php

Taxonomy::computed('tags', 'other_class', fn () => 1);
Collection::register('articles', 'other_method', fn () => 1);
Collection::computed('too_few_arguments');
Collection::computed('articles', $dynamic);
$collection->computed('articles', 'instance_call', fn () => 1);
"#;
        let fields = ComputedFieldScanner::scan_source(source).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn array_keys_win_over_values() {
        let source = r#"<?php

Collection::computed('articles', [
    'first',
    'second' => fn () => 1,
    3 => 'third',
    $dynamic => 'fallback',
    $neither => $value,
]);
"#;
        let fields = ComputedFieldScanner::scan_source(source).unwrap();
        assert_eq!(handles(&fields), vec!["first", "second", "third", "fallback"]);
    }

    #[test]
    fn double_quoted_literals_without_interpolation() {
        let source = r#"<?php

Collection::computed('articles', "plain_double");
Collection::computed('articles', "prefix_{$suffix}");
Collection::computed('articles', "with_$variable");
"#;
        let fields = ComputedFieldScanner::scan_source(source).unwrap();
        assert_eq!(handles(&fields), vec!["plain_double"]);
    }

    #[test]
    fn heredoc_and_nowdoc_literals() {
        let source = "<?php

Collection::computed('articles', <<<'EOT'
nowdoc_field
EOT);
Collection::computed('articles', <<<EOT
    heredoc_field
    EOT);
Collection::computed('articles', <<<EOT
prefix_{$suffix}
EOT);
";
        let fields = ComputedFieldScanner::scan_source(source).unwrap();
        assert_eq!(handles(&fields), vec!["nowdoc_field", "heredoc_field"]);
    }

    #[test]
    fn source_without_token_is_not_parsed() {
        let fields = ComputedFieldScanner::scan_source("<?php this is ( not php").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn syntax_errors_are_reported() {
        let result = ComputedFieldScanner::scan_source("<?php Collection::computed('a', 'broken'");
        assert!(matches!(result, Err(ComputedError::ParseError { .. })));
    }

    #[test]
    fn unescapes_literals() {
        assert_eq!(unescape_single_quoted(r"it\'s"), "it's");
        assert_eq!(unescape_single_quoted(r"a\\b"), r"a\b");
        assert_eq!(unescape_single_quoted(r"a\nb"), r"a\nb");
        assert_eq!(unescape_interpolated(r"a\tb", Some('"')), "a\tb");
        assert_eq!(unescape_interpolated(r#"say \"hi\""#, Some('"')), "say \"hi\"");
        assert_eq!(unescape_interpolated(r#"say \"hi\""#, None), r#"say \"hi\""#);
        assert_eq!(unescape_interpolated(r"keep\q", Some('"')), r"keep\q");
    }

    #[test]
    fn unquote_handles_binary_prefix() {
        assert_eq!(unquote("'x'", '\''), Some("x"));
        assert_eq!(unquote("b'x'", '\''), Some("x"));
        assert_eq!(unquote("\"x\"", '"'), Some("x"));
        assert_eq!(unquote("x", '\''), None);
    }

    #[test_log::test]
    fn scans_directories_recursively() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Providers/ComputedServiceProvider.php", SERVICE_PROVIDER);
        write(temp_dir.path(), "Support/fqcn.php", FQCN);
        write(
            temp_dir.path(),
            "Support/notes.txt",
            "Collection::computed('articles', 'not_php');",
        );
        write(temp_dir.path(), "Broken.php", "<?php Collection::computed('a', 'broken'");

        let scanner = ComputedFieldScanner::new(vec![temp_dir.path().to_path_buf()]);
        assert_eq!(
            handles(scanner.scan()),
            vec!["brand_slug", "view_count", "shares", "likes", "fqcn_field"]
        );
    }

    #[test]
    fn accepts_individual_files() {
        let temp_dir = TempDir::new().unwrap();
        let php = write(temp_dir.path(), "fqcn.php", FQCN);
        let other = write(
            temp_dir.path(),
            "fqcn.inc",
            "<?php Collection::computed('a', 'wrong_extension');",
        );

        let scanner = ComputedFieldScanner::new(vec![php, other]);
        assert_eq!(handles(scanner.scan()), vec!["fqcn_field"]);
    }

    #[test]
    fn missing_and_empty_paths_yield_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let scanner = ComputedFieldScanner::new(vec![temp_dir.path().join("missing")]);
        assert!(scanner.scan().is_empty());

        let scanner = ComputedFieldScanner::new(Vec::new());
        assert!(scanner.scan().is_empty());
    }

    #[test]
    fn scan_is_memoized() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "fqcn.php", FQCN);

        let scanner = ComputedFieldScanner::new(vec![temp_dir.path().to_path_buf()]);
        let first = scanner.scan();
        assert_eq!(first.len(), 1);

        write(
            temp_dir.path(),
            "late.php",
            "<?php Collection::computed('a', 'late_field', fn () => 1);",
        );
        let second = scanner.scan();
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.len(), 1);

        let fresh = ComputedFieldScanner::new(vec![temp_dir.path().to_path_buf()]);
        assert_eq!(fresh.scan().len(), 2);
    }
}
