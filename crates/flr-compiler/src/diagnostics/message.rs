use flr_core::IdentityKey;

/// Non-fatal diagnostic kinds.
///
/// Fatal conditions are [`crate::Error`] variants instead; nothing here stops
/// a table from being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// A field's record reference points at a key that was never registered.
    DanglingRecordRef,
    /// The same typedef name was bound to the same record twice.
    RedundantAlias,
    /// A typedef names a record that no unit of the run registered.
    UnboundAlias,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DanglingRecordRef => Severity::Warning,
            Self::RedundantAlias | Self::UnboundAlias => Severity::Note,
        }
    }

    /// Stable kebab-case code shown in brackets after the severity.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DanglingRecordRef => "dangling-record-ref",
            Self::RedundantAlias => "redundant-alias",
            Self::UnboundAlias => "unbound-alias",
        }
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::DanglingRecordRef => Some(
                "the target was only forward-declared, or its file was not part of this run; \
                 the field is emitted with record index -1",
            ),
            Self::RedundantAlias => None,
            Self::UnboundAlias => Some("the alias is left out of the table"),
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::DanglingRecordRef => "field refers to an unregistered record",
            Self::RedundantAlias => "typedef delivered twice",
            Self::UnboundAlias => "typedef names an unregistered record",
        }
    }

    /// Template with a `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> &'static str {
        match self {
            Self::DanglingRecordRef => "field `{}` refers to an unregistered record",
            Self::RedundantAlias => "alias `{}` is already bound to this record",
            Self::UnboundAlias => "typedef `{}` names an unregistered record",
        }
    }

    /// - `None` → `fallback_message()`
    /// - `Some(detail)` → `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Warning,
    Note,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Record the finding is about, if any.
    pub(crate) subject: Option<IdentityKey>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            subject: None,
            message: kind.fallback_message().to_string(),
            hints: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn subject(&self) -> Option<&IdentityKey> {
        self.subject.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity(), self.kind.code(), self.message)?;
        if let Some(subject) = &self.subject {
            write!(f, " (in {subject})")?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}
