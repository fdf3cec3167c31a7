use super::*;
use crate::{format_message, FormatArg};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn every_id_listed_once() {
    let unique: HashSet<DiagnosticId> = DiagnosticId::ALL.iter().copied().collect();
    assert_eq!(unique.len(), DiagnosticId::ALL.len());
}

#[test]
fn errors_precede_warnings() {
    let first_warning = DiagnosticId::ALL
        .iter()
        .position(|id| id.is_warning())
        .unwrap_or(DiagnosticId::ALL.len());
    assert!(DiagnosticId::ALL[..first_warning].iter().all(|id| id.is_error()));
    assert!(DiagnosticId::ALL[first_warning..].iter().all(|id| id.is_warning()));
    assert_eq!(DiagnosticId::ALL.len() - first_warning, 11);
}

#[test]
fn message_style() {
    // Keywords and constants that legitimately open a message.
    let allowed_upper = ["BEGIN", "END", "UTF-8"];
    for id in DiagnosticId::ALL {
        let message = id.message();
        assert!(!message.is_empty(), "{id:?}");
        assert!(!message.ends_with('.'), "{id:?}: {message}");
        assert!(!message.contains("can't"), "{id:?}: {message}");
        let first = message.as_bytes()[0];
        assert!(
            !first.is_ascii_uppercase() || allowed_upper.iter().any(|w| message.starts_with(w)),
            "{id:?}: {message}"
        );
    }
}

#[test]
fn literal_tokens_are_not_templates() {
    assert!(!DiagnosticId::InvalidPercent.is_template());
    assert!(!DiagnosticId::ListWLowerTerm.is_template());
    assert!(!DiagnosticId::XstringTerm.is_template());
    assert!(!DiagnosticId::DefTerm.is_template());
}

#[test]
fn templates_detected() {
    for id in [
        DiagnosticId::MixedEncoding,
        DiagnosticId::ParameterNumberedReserved,
        DiagnosticId::DuplicatedHashKey,
        DiagnosticId::DuplicatedWhenClause,
        DiagnosticId::InvalidMagicCommentValue,
        DiagnosticId::LiteralInCondition,
    ] {
        assert!(id.is_template(), "{id:?}");
    }
}

#[test]
fn static_messages_render_as_is() {
    for id in DiagnosticId::ALL
        .into_iter()
        .filter(|id| !id.message().contains('%'))
    {
        assert_eq!(format_message(id.message(), &[]).as_deref(), Ok(id.message()));
    }
}

#[test]
fn numbered_parameter_template_truncates() {
    let rendered = format_message(DiagnosticId::ParameterNumberedReserved.message(), &["_1abc".into()]);
    assert_eq!(rendered.as_deref(), Ok("_1 is reserved for numbered parameters"));
}

#[test]
fn warning_text() {
    assert_eq!(
        DiagnosticId::DuplicatedWhenClause.message(),
        "'when' clause on line %d duplicates 'when' clause on line %d and is ignored"
    );
    assert_eq!(DiagnosticId::EndInMethod.severity(), Severity::Warning);
    assert_eq!(DiagnosticId::DefTerm.severity(), Severity::Error);
}

/// Argument shapes passed where each template is reported.
fn call_site_arguments(id: DiagnosticId) -> Vec<FormatArg<'static>> {
    match id {
        DiagnosticId::InvalidCharacter => vec!["\\x01".into()],
        DiagnosticId::InvalidMultibyteCharacter
        | DiagnosticId::MixedEncoding => vec!["Shift_JIS".into()],
        DiagnosticId::ParameterNumberedReserved => vec!["_1".into()],
        DiagnosticId::RegexpUnknownOptions => vec!["qz".into()],
        DiagnosticId::UnexpectedTokenCloseContext => vec!["`end`".into(), "block".into()],
        DiagnosticId::UnexpectedTokenIgnore => vec!["`]`".into()],
        DiagnosticId::LiteralInCondition => vec!["string".into()],
        DiagnosticId::InvalidMagicCommentValue => vec!["frozen_string_literal".into(), "maybe".into()],
        DiagnosticId::DuplicatedHashKey => vec![":a".into(), 3.into()],
        DiagnosticId::DuplicatedWhenClause => vec![3.into(), 2.into()],
        other => panic!("{other:?} is a template without call-site arguments"),
    }
}

#[test]
fn every_template_renders_with_its_call_site_arguments() {
    for id in DiagnosticId::ALL.into_iter().filter(|id| id.is_template()) {
        let rendered = format_message(id.message(), &call_site_arguments(id));
        let message = rendered.unwrap_or_else(|err| panic!("{id:?}: {err}"));
        assert!(!message.contains("%s") && !message.contains("%d"), "{id:?}: {message}");
    }
}
