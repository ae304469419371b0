use bureaulog_types::ReferencePath;
use bureaulog_types::TransitionKind::*;

/// Known-good agent lifecycles.
///
/// Order matters: classification stops at the first reference that matches
/// exactly or as a prefix.
pub static REFERENCE_CATALOG: &[ReferencePath] = &[
    ReferencePath {
        label: "Aborted",
        transitions: &[PendingCreate, Destroy],
    },
    ReferencePath {
        label: "Pending-normal",
        transitions: &[
            PendingCreate,
            DelayedCreate,
            CreateConfirmed,
            Destroy,
            DestroyConfirmed,
        ],
    },
    ReferencePath {
        label: "Pending-stillborn",
        transitions: &[
            PendingCreate,
            DelayedCreate,
            Destroy,
            CreateConfirmed,
            DestroyConfirmed,
        ],
    },
    ReferencePath {
        label: "Normal",
        transitions: &[ImmediateCreate, CreateConfirmed, Destroy, DestroyConfirmed],
    },
    ReferencePath {
        label: "Stillborn",
        transitions: &[ImmediateCreate, Destroy, CreateConfirmed, DestroyConfirmed],
    },
];

pub fn find_reference(label: &str) -> Option<&'static ReferencePath> {
    REFERENCE_CATALOG.iter().find(|r| r.label == label)
}
