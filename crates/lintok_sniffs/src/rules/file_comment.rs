//! Commenting.FileComment: the file doc comment carries the required tags,
//! in order, with well-formed content.

use crate::file::SniffFile;
use crate::helpers::{is_underscore_name, suggest_underscore_name};
use crate::{ProcessOutcome, Sniff};
use lintok_diagnostics::ViolationCode;
use lintok_tokens::{TokenKind, TokenStream};
use regex::Regex;
use std::collections::BTreeMap;

const SNIFF: &str = "Commenting.FileComment";

const MISSING: ViolationCode = ViolationCode::new(SNIFF, "Missing");
const WRONG_STYLE: ViolationCode = ViolationCode::new(SNIFF, "WrongStyle");
const INVALID_CATEGORY: ViolationCode = ViolationCode::new(SNIFF, "InvalidCategory");
const INVALID_PACKAGE: ViolationCode = ViolationCode::new(SNIFF, "InvalidPackage");
const INVALID_PACKAGE_VALUE: ViolationCode = ViolationCode::new(SNIFF, "InvalidPackageValue");
const EMPTY_SUBPACKAGE: ViolationCode = ViolationCode::new(SNIFF, "EmptySubpackage");
const INVALID_AUTHORS: ViolationCode = ViolationCode::new(SNIFF, "InvalidAuthors");
const COPYRIGHT_HYPHEN: ViolationCode = ViolationCode::new(SNIFF, "CopyrightHyphen");
const INVALID_COPYRIGHT: ViolationCode = ViolationCode::new(SNIFF, "InvalidCopyright");
const INCOMPLETE_COPYRIGHT: ViolationCode = ViolationCode::new(SNIFF, "IncompleteCopyright");
const INCOMPLETE_LICENSE: ViolationCode = ViolationCode::new(SNIFF, "IncompleteLicense");
const INCLUDED_VERSION: ViolationCode = ViolationCode::new(SNIFF, "IncludedVersion");

/// `Display Name <local@domain>`, where `.` may appear in the email local
/// part only strictly between other allowed characters.
const AUTHOR_PATTERN: &str = r"^([^<]*)\s+<([\da-zA-Z\-_+]([\da-zA-Z\-_+.\w]*[\da-zA-Z\-_+])*@[\da-zA-Z][\-.\w]*[\da-zA-Z]\.[a-zA-Z]{2,7})>$";

/// A 4-digit year, an optional single-character separator plus second year,
/// then the holder name.
const COPYRIGHT_PATTERN: &str = r"^.*?([0-9]{4})((.)([0-9]{4}))? (.+)$";

/// A URL-like token, whitespace, and a license name.
const LICENSE_PATTERN: &str = r"^(\S+)\s+(.*)";

type TagHandler = fn(&FileComment, &SniffFile, &[usize]);

/// One row of the tag specification: cardinality contract, content handler,
/// and the violation codes the generic machinery reports under for this tag.
struct TagRule {
    name: &'static str,
    required: bool,
    allow_multiple: bool,
    handler: Option<TagHandler>,
    duplicate: ViolationCode,
    empty: ViolationCode,
    missing: ViolationCode,
    order: ViolationCode,
}

impl TagRule {
    fn new(
        name: &'static str,
        required: bool,
        allow_multiple: bool,
        handler: Option<TagHandler>,
        codes: [&'static str; 4],
    ) -> Self {
        Self {
            name,
            required,
            allow_multiple,
            handler,
            duplicate: ViolationCode::new(SNIFF, codes[0]),
            empty: ViolationCode::new(SNIFF, codes[1]),
            missing: ViolationCode::new(SNIFF, codes[2]),
            order: ViolationCode::new(SNIFF, codes[3]),
        }
    }
}

/// Verifies the first documentation comment block of a file against the tag
/// specification: presence, cardinality, canonical ordering, and per-tag
/// content grammar.
///
/// Only the first comment block is ever checked; processing always tells the
/// engine to skip the remainder of the file.
pub struct FileComment {
    /// The tag specification in canonical order. Built once per instance and
    /// read-only during scans.
    tags: Vec<TagRule>,
    author_re: Regex,
    copyright_re: Regex,
    license_re: Regex,
}

impl FileComment {
    /// Builds the sniff, compiling its content-grammar patterns and the tag
    /// specification table.
    pub fn new() -> Self {
        let tags = vec![
            TagRule::new(
                "@version",
                false,
                false,
                Some(Self::process_version as TagHandler),
                ["DuplicateVersionTag", "EmptyVersionTag", "MissingVersionTag", "VersionTagOrder"],
            ),
            TagRule::new(
                "@category",
                false,
                false,
                Some(Self::process_category as TagHandler),
                ["DuplicateCategoryTag", "EmptyCategoryTag", "MissingCategoryTag", "CategoryTagOrder"],
            ),
            TagRule::new(
                "@package",
                true,
                false,
                Some(Self::process_package as TagHandler),
                ["DuplicatePackageTag", "EmptyPackageTag", "MissingPackageTag", "PackageTagOrder"],
            ),
            TagRule::new(
                "@subpackage",
                false,
                false,
                Some(Self::process_subpackage as TagHandler),
                [
                    "DuplicateSubpackageTag",
                    "EmptySubpackageTag",
                    "MissingSubpackageTag",
                    "SubpackageTagOrder",
                ],
            ),
            TagRule::new(
                "@author",
                false,
                true,
                Some(Self::process_author as TagHandler),
                ["DuplicateAuthorTag", "EmptyAuthorTag", "MissingAuthorTag", "AuthorTagOrder"],
            ),
            TagRule::new(
                "@copyright",
                true,
                true,
                Some(Self::process_copyright as TagHandler),
                [
                    "DuplicateCopyrightTag",
                    "EmptyCopyrightTag",
                    "MissingCopyrightTag",
                    "CopyrightTagOrder",
                ],
            ),
            TagRule::new(
                "@license",
                true,
                false,
                Some(Self::process_license as TagHandler),
                ["DuplicateLicenseTag", "EmptyLicenseTag", "MissingLicenseTag", "LicenseTagOrder"],
            ),
            TagRule::new(
                "@link",
                false,
                true,
                None,
                ["DuplicateLinkTag", "EmptyLinkTag", "MissingLinkTag", "LinkTagOrder"],
            ),
            TagRule::new(
                "@see",
                false,
                true,
                None,
                ["DuplicateSeeTag", "EmptySeeTag", "MissingSeeTag", "SeeTagOrder"],
            ),
            TagRule::new(
                "@since",
                false,
                false,
                None,
                ["DuplicateSinceTag", "EmptySinceTag", "MissingSinceTag", "SinceTagOrder"],
            ),
            TagRule::new(
                "@deprecated",
                false,
                false,
                None,
                [
                    "DuplicateDeprecatedTag",
                    "EmptyDeprecatedTag",
                    "MissingDeprecatedTag",
                    "DeprecatedTagOrder",
                ],
            ),
        ];

        Self {
            tags,
            author_re: Regex::new(AUTHOR_PATTERN).expect("author pattern is valid"),
            copyright_re: Regex::new(COPYRIGHT_PATTERN).expect("copyright pattern is valid"),
            license_re: Regex::new(LICENSE_PATTERN).expect("license pattern is valid"),
        }
    }

    /// Checks each found tag against the specification: duplicates, content
    /// grammar, required tags, and canonical ordering.
    fn process_tags(&self, file: &SniffFile, comment_start: usize) {
        let stream = file.stream();
        let Some(opener) = stream.get(comment_start) else {
            return;
        };
        // An opener without a closer link is malformed tokenizer metadata;
        // abort this sniff's processing rather than guessing.
        let Some(comment_end) = opener.comment_closer else {
            return;
        };
        let comment_tags = opener.comment_tags.clone();

        let mut found_tags: Vec<&'static str> = Vec::new();
        let mut tag_tokens: BTreeMap<&'static str, Vec<usize>> = BTreeMap::new();

        for &tag in &comment_tags {
            let Some(tag_text) = stream.get(tag).map(|t| t.text.as_str()) else {
                continue;
            };
            let Some(rule) = self.tags.iter().find(|r| r.name == tag_text) else {
                continue;
            };

            if !rule.allow_multiple && tag_tokens.contains_key(rule.name) {
                file.add_error(
                    "Only one %s tag is allowed in a %s comment",
                    tag,
                    rule.duplicate,
                    vec![rule.name.to_string(), "file".to_string()],
                );
            }

            found_tags.push(rule.name);
            tag_tokens.entry(rule.name).or_default().push(tag);

            let content_ok = stream
                .find_next(&[TokenKind::DocCommentString], tag, Some(comment_end))
                .is_some_and(|s| {
                    stream.get(s).map(|t| t.line) == stream.get(tag).map(|t| t.line)
                });
            if !content_ok {
                file.add_error(
                    "Content missing for %s tag in %s comment",
                    tag,
                    rule.empty,
                    vec![rule.name.to_string(), "file".to_string()],
                );
            }
        }

        // Package tags are not used in namespaced code.
        let namespaced = stream
            .find_next(
                &[
                    TokenKind::Namespace,
                    TokenKind::Class,
                    TokenKind::Interface,
                    TokenKind::Trait,
                ],
                0,
                None,
            )
            .is_some_and(|i| stream.kind(i) == Some(TokenKind::Namespace));

        let mut pos = 0usize;
        for rule in &self.tags {
            let Some(occurrences) = tag_tokens.get(rule.name) else {
                if rule.required {
                    if rule.name == "@package" && namespaced {
                        continue;
                    }
                    file.add_error(
                        "Missing %s tag in %s comment",
                        comment_end,
                        rule.missing,
                        vec![rule.name.to_string(), "file".to_string()],
                    );
                }
                continue;
            };

            if let Some(handler) = rule.handler {
                handler(self, file, occurrences);
            }

            if pos >= found_tags.len() {
                break;
            }
            if found_tags[pos] != rule.name {
                let anchor = comment_tags.get(pos).copied().unwrap_or(comment_start);
                file.add_error(
                    "The tag in position %s should be the %s tag",
                    anchor,
                    rule.order,
                    vec![(pos + 1).to_string(), rule.name.to_string()],
                );
            }

            pos += 1;
            while pos < found_tags.len() && found_tags[pos] == rule.name {
                pos += 1;
            }
        }
    }

    fn process_category(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            let Some(content) = tag_content(file.stream(), tag) else {
                continue;
            };
            if !is_underscore_name(&content) {
                let suggestion = suggest_underscore_name(&content.replace(' ', "_"));
                file.add_error(
                    "Category name \"%s\" is not valid; consider \"%s\" instead",
                    tag,
                    INVALID_CATEGORY,
                    vec![content, suggestion],
                );
            }
        }
    }

    fn process_package(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            let Some(content) = tag_content(file.stream(), tag) else {
                continue;
            };
            if is_underscore_name(&content) {
                continue;
            }

            let replaced = content.replace(' ', "_");
            let trimmed = replaced.trim_matches('_');
            let filtered: String = trimmed
                .chars()
                .filter(|c| c.is_ascii_alphabetic() || *c == '_')
                .collect();

            if filtered.is_empty() {
                file.add_error(
                    "Package name \"%s\" is not valid",
                    tag,
                    INVALID_PACKAGE_VALUE,
                    vec![content],
                );
            } else {
                let suggestion = suggest_underscore_name(&filtered);
                file.add_error(
                    "Package name \"%s\" is not valid; consider \"%s\" instead",
                    tag,
                    INVALID_PACKAGE,
                    vec![content, suggestion],
                );
            }
        }
    }

    fn process_subpackage(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            let Some(content) = tag_content(file.stream(), tag) else {
                continue;
            };
            if content.is_empty() {
                file.add_error(
                    "if included, @subpackage tag must contain a name",
                    tag,
                    EMPTY_SUBPACKAGE,
                    Vec::new(),
                );
            }
        }
    }

    fn process_author(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            let Some(content) = tag_content(file.stream(), tag) else {
                continue;
            };
            if !self.author_re.is_match(&content) {
                file.add_error(
                    "Content of the @author tag must be in the form \"Display Name <username@example.com>\"",
                    tag,
                    INVALID_AUTHORS,
                    Vec::new(),
                );
            }
        }
    }

    fn process_copyright(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            let Some(content) = tag_content(file.stream(), tag) else {
                continue;
            };
            let Some(caps) = self.copyright_re.captures(&content) else {
                file.add_error(
                    "@copyright tag must contain a year and the name of the copyright holder",
                    tag,
                    INCOMPLETE_COPYRIGHT,
                    Vec::new(),
                );
                continue;
            };

            // Both separator checks fire independently: a bad separator is an
            // error, and a reversed year span is a warning regardless.
            if let Some(separator) = caps.get(3) {
                if separator.as_str() != "-" {
                    file.add_error(
                        "A hyphen must be used between the earliest and latest year",
                        tag,
                        COPYRIGHT_HYPHEN,
                        Vec::new(),
                    );
                }

                if let Some(second) = caps.get(4) {
                    let first_str = caps.get(1).map_or("", |m| m.as_str());
                    let first_year: Option<u32> = first_str.parse().ok();
                    let second_year: Option<u32> = second.as_str().parse().ok();
                    if let (Some(first), Some(later)) = (first_year, second_year) {
                        if later < first {
                            let message = format!(
                                "Invalid year span \"{}{}{}\" found; consider \"{}-{}\" instead",
                                first_str,
                                separator.as_str(),
                                second.as_str(),
                                second.as_str(),
                                first_str,
                            );
                            file.add_warning(message, tag, INVALID_COPYRIGHT, Vec::new());
                        }
                    }
                }
            }
        }
    }

    fn process_license(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            let Some(content) = tag_content(file.stream(), tag) else {
                continue;
            };
            if !self.license_re.is_match(&content) {
                file.add_error(
                    "@license tag must contain a URL and a license name",
                    tag,
                    INCOMPLETE_LICENSE,
                    Vec::new(),
                );
            }
        }
    }

    fn process_version(&self, file: &SniffFile, tags: &[usize]) {
        for &tag in tags {
            file.add_warning(
                "@version tag in file comment in not required; consider removing or using @since",
                tag,
                INCLUDED_VERSION,
                Vec::new(),
            );
        }
    }
}

impl Default for FileComment {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the content string sitting exactly two tokens after a tag token,
/// or `None` when the tag has no content there; the caller skips the check.
fn tag_content(stream: &TokenStream, tag: usize) -> Option<String> {
    let tok = stream.get(tag + 2)?;
    (tok.kind == TokenKind::DocCommentString).then(|| tok.text.clone())
}

impl Sniff for FileComment {
    fn name(&self) -> &'static str {
        SNIFF
    }

    fn description(&self) -> &'static str {
        "file doc comments carry the required tags in order with valid content"
    }

    fn register(&self) -> &'static [TokenKind] {
        &[TokenKind::OpenTag]
    }

    fn process(&self, file: &mut SniffFile, index: usize) -> ProcessOutcome {
        let error_token = if index + 1 < file.stream().len() {
            index + 1
        } else {
            index
        };

        let mut comment_start = file
            .stream()
            .find_next_not(&[TokenKind::Whitespace], index + 1, None);

        // Allow a declare() statement at the top of the file.
        if let Some(cs) = comment_start {
            if file.stream().kind(cs) == Some(TokenKind::Declare) {
                comment_start = file
                    .stream()
                    .find_next(&[TokenKind::Semicolon], cs + 1, None)
                    .and_then(|semi| {
                        file.stream()
                            .find_next_not(&[TokenKind::Whitespace], semi + 1, None)
                    });
            }
        }

        // Ignore an editor directive header.
        if let Some(cs) = comment_start {
            let is_vim_header = file.stream().kind(cs) == Some(TokenKind::LineComment)
                && file
                    .stream()
                    .get(cs)
                    .is_some_and(|t| t.text.contains("vim:"));
            if is_vim_header {
                comment_start = file
                    .stream()
                    .find_next_not(&[TokenKind::Whitespace], cs + 1, None);
            }
        }

        let Some(comment_start) = comment_start else {
            file.add_error("Missing file doc comment", error_token, MISSING, Vec::new());
            file.record_metric(index, "File has doc comment", "no");
            return ProcessOutcome::SkipRest;
        };

        match file.stream().kind(comment_start) {
            // Only the first open tag is of interest.
            Some(TokenKind::CloseTag) => return ProcessOutcome::SkipRest,
            Some(TokenKind::LineComment) | Some(TokenKind::BlockComment) => {
                file.add_error(
                    "You must use \"/**\" style comments for a file comment",
                    error_token,
                    WRONG_STYLE,
                    Vec::new(),
                );
                file.record_metric(index, "File has doc comment", "yes");
                return ProcessOutcome::SkipRest;
            }
            Some(TokenKind::DocCommentOpen) => {
                file.record_metric(index, "File has doc comment", "yes");
            }
            _ => {
                file.add_error("Missing file doc comment", error_token, MISSING, Vec::new());
                file.record_metric(index, "File has doc comment", "no");
                return ProcessOutcome::SkipRest;
            }
        }

        self.process_tags(file, comment_start);
        ProcessOutcome::SkipRest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintok_diagnostics::{Severity, Violation};
    use lintok_source::FileId;
    use lintok_tokens::lex;

    fn scan(source: &str) -> SniffFile {
        let mut file = SniffFile::new(lex(source, FileId::from_raw(0)));
        let sniff = FileComment::new();
        if let Some(idx) = file.stream().find_next(&[TokenKind::OpenTag], 0, None) {
            sniff.process(&mut file, idx);
        }
        file
    }

    fn check(source: &str) -> Vec<Violation> {
        scan(source).take_violations()
    }

    fn code_names(violations: &[Violation]) -> Vec<&'static str> {
        violations.iter().map(|v| v.code.name).collect()
    }

    const VALID_HEADER: &str = concat!(
        "<?php\n",
        "/**\n",
        " * Widget loading helpers.\n",
        " *\n",
        " * @package    Acme.Widgets\n",
        " * @author     Jo Coder <jo.coder@example.com>\n",
        " * @copyright  Copyright (C) 2015-2019 Acme Corp. All rights reserved.\n",
        " * @license    http://www.gnu.org/licenses/gpl-2.0.txt GNU General Public License Version 2 or Later\n",
        " */\n",
        "namespace Acme\\Widgets;\n",
    );

    #[test]
    fn valid_header_passes() {
        assert!(check(VALID_HEADER).is_empty());
    }

    #[test]
    fn records_doc_comment_metric() {
        let file = scan(VALID_HEADER);
        assert_eq!(file.metrics()["File has doc comment"]["yes"], 1);
    }

    #[test]
    fn missing_comment_reported() {
        let violations = check("<?php\nnamespace Acme;\n");
        assert_eq!(code_names(&violations), vec!["Missing"]);
    }

    #[test]
    fn missing_comment_metric_is_no() {
        let file = scan("<?php\nnamespace Acme;\n");
        assert_eq!(file.metrics()["File has doc comment"]["no"], 1);
    }

    #[test]
    fn wrong_comment_style_reported() {
        let violations = check("<?php\n/* Acme widgets */\nnamespace Acme;\n");
        assert_eq!(code_names(&violations), vec!["WrongStyle"]);
    }

    #[test]
    fn close_tag_right_after_open_is_ignored() {
        assert!(check("<?php ?>").is_empty());
    }

    #[test]
    fn declare_statement_is_allowed_before_comment() {
        let source = VALID_HEADER.replacen("<?php\n", "<?php\ndeclare(strict_types=1);\n", 1);
        assert!(check(&source).is_empty());
    }

    #[test]
    fn vim_header_is_allowed_before_comment() {
        let source = VALID_HEADER.replacen("<?php\n", "<?php\n// vim: set ts=4 sw=4:\n", 1);
        assert!(check(&source).is_empty());
    }

    #[test]
    fn duplicate_single_occurrence_tag_reported() {
        let source = VALID_HEADER.replacen(
            " */",
            " * @license    http://example.com/other Other License\n */",
            1,
        );
        let violations = check(&source);
        assert_eq!(code_names(&violations), vec!["DuplicateLicenseTag"]);
    }

    #[test]
    fn multiple_authors_are_allowed() {
        let source = VALID_HEADER.replacen(
            " * @copyright",
            " * @author     Sam Coder <sam.coder@example.com>\n * @copyright",
            1,
        );
        assert!(check(&source).is_empty());
    }

    #[test]
    fn missing_required_tags_reported() {
        let source = concat!(
            "<?php\n",
            "/**\n",
            " * @package  Acme.Widgets\n",
            " */\n",
            "namespace Acme;\n",
        );
        let violations = check(source);
        assert_eq!(
            code_names(&violations),
            vec!["MissingCopyrightTag", "MissingLicenseTag"]
        );
        assert!(violations.iter().all(|v| v.severity == Severity::Error));
    }

    #[test]
    fn missing_package_excused_in_namespaced_file() {
        let source = concat!(
            "<?php\n",
            "/**\n",
            " * @copyright  Copyright (C) 2019 Acme Corp\n",
            " * @license    http://example.com/license MIT\n",
            " */\n",
            "namespace Acme;\n",
        );
        assert!(check(source).is_empty());
    }

    #[test]
    fn missing_package_reported_without_namespace() {
        let source = concat!(
            "<?php\n",
            "/**\n",
            " * @copyright  Copyright (C) 2019 Acme Corp\n",
            " * @license    http://example.com/license MIT\n",
            " */\n",
            "class Widget {}\n",
        );
        let violations = check(source);
        assert_eq!(code_names(&violations), vec!["MissingPackageTag"]);
    }

    #[test]
    fn canonical_order_passes() {
        // @package, @author, @copyright, @license matches the specification
        // order exactly: no ordering violations.
        assert!(check(VALID_HEADER).is_empty());
    }

    #[test]
    fn author_before_package_reports_order_violation() {
        let source = concat!(
            "<?php\n",
            "/**\n",
            " * @author     Jo Coder <jo.coder@example.com>\n",
            " * @package    Acme.Widgets\n",
            " * @copyright  Copyright (C) 2019 Acme Corp\n",
            " * @license    http://example.com/license MIT\n",
            " */\n",
            "namespace Acme;\n",
        );
        let violations = check(source);
        let package_order: Vec<_> = violations
            .iter()
            .filter(|v| v.code.name == "PackageTagOrder")
            .collect();
        assert_eq!(package_order.len(), 1);
        assert_eq!(
            package_order[0].rendered_message(),
            "The tag in position 1 should be the @package tag"
        );
    }

    #[test]
    fn tag_without_content_reported() {
        let source = concat!(
            "<?php\n",
            "/**\n",
            " * @package\n",
            " * @copyright  Copyright (C) 2019 Acme Corp\n",
            " * @license    http://example.com/license MIT\n",
            " */\n",
            "namespace Acme;\n",
        );
        let violations = check(source);
        assert_eq!(code_names(&violations), vec!["EmptyPackageTag"]);
    }

    #[test]
    fn invalid_category_suggests_correction() {
        let source = VALID_HEADER.replacen(
            " * @package",
            " * @category   my widgets\n * @package",
            1,
        );
        let violations = check(&source);
        assert_eq!(code_names(&violations), vec!["InvalidCategory"]);
        assert_eq!(
            violations[0].args,
            vec!["my widgets".to_string(), "My_Widgets".to_string()]
        );
    }

    #[test]
    fn invalid_package_suggests_correction() {
        let source = VALID_HEADER.replacen("Acme.Widgets", "acme widgets", 1);
        let violations = check(&source);
        assert_eq!(code_names(&violations), vec!["InvalidPackage"]);
        assert_eq!(
            violations[0].args,
            vec!["acme widgets".to_string(), "Acme_Widgets".to_string()]
        );
    }

    #[test]
    fn author_without_email_reported() {
        let source = VALID_HEADER.replacen(
            "Jo Coder <jo.coder@example.com>",
            "Jo Coder at example dot com",
            1,
        );
        assert_eq!(code_names(&check(&source)), vec!["InvalidAuthors"]);
    }

    #[test]
    fn author_local_part_must_not_start_with_dot() {
        let source = VALID_HEADER.replacen(
            "<jo.coder@example.com>",
            "<.coder@example.com>",
            1,
        );
        assert_eq!(code_names(&check(&source)), vec!["InvalidAuthors"]);
    }

    #[test]
    fn reversed_year_span_warns_with_suggestion() {
        let source = VALID_HEADER.replacen(
            "Copyright (C) 2015-2019 Acme Corp. All rights reserved.",
            "2020-2015 Example Corp",
            1,
        );
        let violations = check(&source);
        assert_eq!(code_names(&violations), vec!["InvalidCopyright"]);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(
            violations[0].rendered_message(),
            "Invalid year span \"2020-2015\" found; consider \"2015-2020\" instead"
        );
    }

    #[test]
    fn non_hyphen_separator_errors_independently_of_year_order() {
        let source = VALID_HEADER.replacen(
            "Copyright (C) 2015-2019 Acme Corp. All rights reserved.",
            "2020,2015 Example Corp",
            1,
        );
        let violations = check(&source);
        assert_eq!(
            code_names(&violations),
            vec!["CopyrightHyphen", "InvalidCopyright"]
        );
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[1].severity, Severity::Warning);
    }

    #[test]
    fn copyright_without_year_reported() {
        let source = VALID_HEADER.replacen(
            "Copyright (C) 2015-2019 Acme Corp. All rights reserved.",
            "Acme Corp",
            1,
        );
        assert_eq!(code_names(&check(&source)), vec!["IncompleteCopyright"]);
    }

    #[test]
    fn license_without_name_reported() {
        let source = VALID_HEADER.replacen(
            "http://www.gnu.org/licenses/gpl-2.0.txt GNU General Public License Version 2 or Later",
            "GPL-2.0",
            1,
        );
        assert_eq!(code_names(&check(&source)), vec!["IncompleteLicense"]);
    }

    #[test]
    fn version_tag_warns_as_deprecated() {
        let source = VALID_HEADER.replacen(
            " * @package",
            " * @version    1.2.3\n * @package",
            1,
        );
        let violations = check(&source);
        assert_eq!(code_names(&violations), vec!["IncludedVersion"]);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let source = VALID_HEADER.replacen(
            " * @package",
            " * @internal  not part of the specification\n * @package",
            1,
        );
        assert!(check(&source).is_empty());
    }
}
