//! NamingConventions.ValidMethodName: method names are camelCase, double
//! underscores are reserved for magic methods, and explicitly-scoped methods
//! never start with an underscore.

use crate::file::SniffFile;
use crate::helpers::{is_camel_caps, ucfirst};
use crate::{ProcessOutcome, Sniff};
use lintok_diagnostics::ViolationCode;
use lintok_tokens::{TokenKind, TokenStream};

const SNIFF: &str = "NamingConventions.ValidMethodName";

const METHOD_DOUBLE_UNDERSCORE: ViolationCode = ViolationCode::new(SNIFF, "MethodDoubleUnderscore");
const METHOD_UNDERSCORE: ViolationCode = ViolationCode::new(SNIFF, "MethodUnderscore");
const SCOPE_NOT_CAMEL_CAPS: ViolationCode = ViolationCode::new(SNIFF, "ScopeNotCamelCaps");
const NOT_CAMEL_CAPS: ViolationCode = ViolationCode::new(SNIFF, "NotCamelCaps");

/// The reserved double-underscore method names, stored without the prefix.
const MAGIC_METHODS: &[&str] = &[
    "construct",
    "destruct",
    "call",
    "callstatic",
    "get",
    "set",
    "isset",
    "unset",
    "sleep",
    "wakeup",
    "serialize",
    "unserialize",
    "tostring",
    "invoke",
    "set_state",
    "clone",
    "debuginfo",
];

/// Declaration modifiers that may sit between the visibility keyword and
/// `function`.
const DECLARATION_TRIVIA: &[TokenKind] = &[
    TokenKind::Whitespace,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
];

/// Checks method names declared inside classes, interfaces, and traits.
///
/// Magic methods must come from the reserved set; legacy constructors and
/// destructors named after the class are exempt; any method with an explicit
/// visibility keyword must not start with an underscore; everything else must
/// be camelCase. When visibility was left unspecified, one leading underscore
/// is stripped before the camelCase check, since the intended visibility
/// cannot be known.
pub struct ValidMethodName;

impl Sniff for ValidMethodName {
    fn name(&self) -> &'static str {
        SNIFF
    }

    fn description(&self) -> &'static str {
        "method names are camelCase and underscore prefixes are reserved"
    }

    fn register(&self) -> &'static [TokenKind] {
        &[TokenKind::Function]
    }

    fn process(&self, file: &mut SniffFile, index: usize) -> ProcessOutcome {
        let stream = file.stream();

        let Some(name_idx) = stream.find_next_not(&[TokenKind::Whitespace], index + 1, None)
        else {
            return ProcessOutcome::Continue;
        };
        // A parenthesis here means a closure; those have no name to check.
        if stream.kind(name_idx) != Some(TokenKind::Ident) {
            return ProcessOutcome::Continue;
        }

        let Some(class_name) = enclosing_class_name(stream, index) else {
            return ProcessOutcome::Continue;
        };

        let method_name = match stream.get(name_idx) {
            Some(tok) => tok.text.clone(),
            None => return ProcessOutcome::Continue,
        };
        let error_data = format!("{class_name}::{method_name}");

        if method_name.len() > 2 && method_name.starts_with("__") && !method_name[2..].starts_with('_')
        {
            let magic_part = method_name[2..].to_ascii_lowercase();
            if !MAGIC_METHODS.contains(&magic_part.as_str()) {
                file.add_error(
                    "Method name \"%s\" is invalid; only magic methods should be prefixed with a double underscore",
                    index,
                    METHOD_DOUBLE_UNDERSCORE,
                    vec![error_data],
                );
            }
            return ProcessOutcome::Continue;
        }

        // Legacy constructors and destructors named after the class are
        // allowed to break the rules.
        if method_name == class_name || method_name == format!("_{class_name}") {
            return ProcessOutcome::Continue;
        }

        let (scope, scope_specified) = method_scope(stream, index);

        if scope_specified && method_name.starts_with('_') {
            file.add_error(
                "%s method name \"%s\" must not be prefixed with an underscore",
                index,
                METHOD_UNDERSCORE,
                vec![ucfirst(scope), error_data],
            );
            file.record_metric(index, "Method prefixed with underscore", "yes");
            return ProcessOutcome::Continue;
        }

        // Without an explicit scope we cannot tell whether the underscore
        // marks an intended private method, so strip one before the check.
        let test_name = if !scope_specified && method_name.starts_with('_') {
            &method_name[1..]
        } else {
            method_name.as_str()
        };

        if !is_camel_caps(test_name, false, false) {
            if scope_specified {
                file.add_error(
                    "%s method name \"%s\" is not in camel caps format",
                    index,
                    SCOPE_NOT_CAMEL_CAPS,
                    vec![ucfirst(scope), error_data],
                );
            } else {
                file.add_error(
                    "Method name \"%s\" is not in camel caps format",
                    index,
                    NOT_CAMEL_CAPS,
                    vec![error_data],
                );
            }
        }

        ProcessOutcome::Continue
    }
}

/// Returns the name of the class/interface/trait whose body encloses `index`,
/// or `None` when the token is not inside one.
///
/// Walks backward for type-declaration keywords and uses the brace matching
/// links to test enclosure. An anonymous class yields an empty name.
fn enclosing_class_name(stream: &TokenStream, index: usize) -> Option<String> {
    let mut i = index;
    while i > 0 {
        i -= 1;
        let kind = stream.kind(i)?;
        if !matches!(
            kind,
            TokenKind::Class | TokenKind::Interface | TokenKind::Trait
        ) {
            continue;
        }
        let Some(brace) = stream.find_next(&[TokenKind::OpenBrace], i + 1, None) else {
            continue;
        };
        if brace >= index {
            continue;
        }
        let Some(closer) = stream.get(brace).and_then(|t| t.matching_closer) else {
            continue;
        };
        if closer > index {
            let name = stream
                .find_next(&[TokenKind::Ident], i + 1, Some(brace))
                .and_then(|n| stream.get(n))
                .map(|t| t.text.clone())
                .unwrap_or_default();
            return Some(name);
        }
    }
    None
}

/// Collects the visibility written on a method declaration by walking
/// backward over its modifier keywords.
fn method_scope(stream: &TokenStream, index: usize) -> (&'static str, bool) {
    let mut scope = "public";
    let mut specified = false;
    let mut i = index;
    while i > 0 {
        i -= 1;
        match stream.kind(i) {
            Some(kind) if DECLARATION_TRIVIA.contains(&kind) => {}
            Some(TokenKind::Public) => {
                scope = "public";
                specified = true;
            }
            Some(TokenKind::Protected) => {
                scope = "protected";
                specified = true;
            }
            Some(TokenKind::Private) => {
                scope = "private";
                specified = true;
            }
            _ => break,
        }
    }
    (scope, specified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintok_diagnostics::Violation;
    use lintok_source::FileId;
    use lintok_tokens::lex;

    fn check(source: &str) -> Vec<Violation> {
        let mut file = SniffFile::new(lex(source, FileId::from_raw(0)));
        let sniff = ValidMethodName;
        for idx in 0..file.stream().len() {
            if file.stream().kind(idx) == Some(TokenKind::Function) {
                sniff.process(&mut file, idx);
            }
        }
        file.take_violations()
    }

    fn in_class(body: &str) -> String {
        format!("<?php\nclass Widget\n{{\n{body}\n}}\n")
    }

    #[test]
    fn camel_case_method_passes() {
        assert!(check(&in_class("public function getName() {}")).is_empty());
        assert!(check(&in_class("function render() {}")).is_empty());
    }

    #[test]
    fn scoped_underscore_prefix_is_one_violation() {
        let violations = check(&in_class("protected function _foo() {}"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, METHOD_UNDERSCORE);
        assert_eq!(
            violations[0].rendered_message(),
            "Protected method name \"Widget::_foo\" must not be prefixed with an underscore"
        );
    }

    #[test]
    fn known_magic_method_passes() {
        assert!(check(&in_class("public function __toString() {}")).is_empty());
        assert!(check(&in_class("public function __get($name) {}")).is_empty());
    }

    #[test]
    fn unknown_magic_style_name_is_one_violation() {
        let violations = check(&in_class("public function __bogus() {}"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, METHOD_DOUBLE_UNDERSCORE);
    }

    #[test]
    fn legacy_constructor_and_destructor_are_exempt() {
        assert!(check(&in_class("public function Widget() {}")).is_empty());
        assert!(check(&in_class("public function _Widget() {}")).is_empty());
    }

    #[test]
    fn unscoped_underscore_prefix_is_tolerated() {
        // Visibility was not written, so the underscore may be an old-style
        // private marker; it is stripped before the camelCase check.
        assert!(check(&in_class("function _render() {}")).is_empty());
    }

    #[test]
    fn scoped_name_not_camel_caps() {
        let violations = check(&in_class("public function RenderAll() {}"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, SCOPE_NOT_CAMEL_CAPS);
        assert_eq!(
            violations[0].rendered_message(),
            "Public method name \"Widget::RenderAll\" is not in camel caps format"
        );
    }

    #[test]
    fn unscoped_name_not_camel_caps() {
        let violations = check(&in_class("function render_all() {}"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, NOT_CAMEL_CAPS);
        assert_eq!(
            violations[0].rendered_message(),
            "Method name \"Widget::render_all\" is not in camel caps format"
        );
    }

    #[test]
    fn underscores_inside_scoped_names_are_rejected() {
        let violations = check(&in_class("private function do_stuff() {}"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, SCOPE_NOT_CAMEL_CAPS);
    }

    #[test]
    fn modifiers_between_scope_and_function_are_skipped() {
        let violations = check(&in_class("protected static function _cache() {}"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, METHOD_UNDERSCORE);
        assert!(check(&in_class("final public static function getName() {}")).is_empty());
    }

    #[test]
    fn top_level_functions_are_ignored() {
        assert!(check("<?php\nfunction do_stuff() {}\n").is_empty());
    }

    #[test]
    fn closures_are_ignored() {
        assert!(check(&in_class("public function run() { $f = function () {}; }")).is_empty());
    }

    #[test]
    fn methods_in_interfaces_are_checked() {
        let source = "<?php\ninterface Renderer\n{\n    public function Draw();\n}\n";
        let violations = check(source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, SCOPE_NOT_CAMEL_CAPS);
    }

    #[test]
    fn acronyms_are_allowed_in_non_strict_mode() {
        assert!(check(&in_class("public function parseXMLInput() {}")).is_empty());
    }
}
