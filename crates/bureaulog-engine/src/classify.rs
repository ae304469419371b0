use crate::catalog::REFERENCE_CATALOG;
use bureaulog_types::{AgentPath, Classification, ReferencePath, TransitionKind};

/// Compare a transition sequence against `catalog`, first match wins.
///
/// An empty sequence is a prefix of every reference and therefore comes
/// back as `Partial` of the first one.
pub fn classify<'a>(
    transitions: &[TransitionKind],
    catalog: &'a [ReferencePath],
) -> Classification<'a> {
    for reference in catalog {
        if transitions == reference.transitions {
            return Classification::Exact(reference);
        }
        if reference.transitions.starts_with(transitions) {
            return Classification::Partial(reference);
        }
    }
    Classification::Invalid
}

/// Classify a reconstructed path against [`REFERENCE_CATALOG`]
pub fn classify_path(path: &AgentPath) -> Classification<'static> {
    classify(&path.transitions(), REFERENCE_CATALOG)
}
