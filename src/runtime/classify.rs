//! Failure classification for container runtime errors
//!
//! Docker reports failures as free text on stderr. Rather than branching on
//! ad hoc substring checks at every call site, the known phrases live in one
//! table mapping onto a closed set of kinds. Anything unrecognized is
//! `Unknown` and always escalates; it is never used to pick a recovery path.
//! Substring matching against human-readable text is inherently fragile and
//! tied to the runtime's wording, which is why the table is small and tested.

/// Closed set of recognizable container runtime failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The named container does not exist
    NoSuchContainer,
    /// A container with the requested name already exists
    NameInUse,
    /// The requested host port is already bound
    PortAllocated,
    /// The named image does not exist (image removal during cleanup)
    NoSuchImage,
    /// Not a phrase we know; escalate as-is
    Unknown,
}

/// Known stderr phrases, all matched case-insensitively
const PATTERNS: &[(&str, FailureKind)] = &[
    ("no such container", FailureKind::NoSuchContainer),
    ("already in use", FailureKind::NameInUse),
    ("port is already allocated", FailureKind::PortAllocated),
    ("no such image", FailureKind::NoSuchImage),
];

/// Classify a runtime failure by its stderr text.
pub fn classify(stderr: &str) -> FailureKind {
    let lower = stderr.to_lowercase();
    for (phrase, kind) in PATTERNS {
        if lower.contains(phrase) {
            return *kind;
        }
    }
    FailureKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_container() {
        assert_eq!(
            classify("Error response from daemon: No such container: demo-pb"),
            FailureKind::NoSuchContainer
        );
    }

    #[test]
    fn test_name_in_use() {
        assert_eq!(
            classify(
                "docker: Error response from daemon: Conflict. The container name \
                 \"/demo-pb\" is already in use by container \"4f1a\"."
            ),
            FailureKind::NameInUse
        );
    }

    #[test]
    fn test_port_allocated() {
        assert_eq!(
            classify(
                "docker: Error response from daemon: driver failed programming external \
                 connectivity: Bind for 0.0.0.0:8090 failed: port is already allocated."
            ),
            FailureKind::PortAllocated
        );
    }

    #[test]
    fn test_no_such_image() {
        assert_eq!(
            classify("Error response from daemon: No such image: demo-pb:latest"),
            FailureKind::NoSuchImage
        );
    }

    #[test]
    fn test_unknown_escalates() {
        assert_eq!(classify("Cannot connect to the Docker daemon"), FailureKind::Unknown);
        assert_eq!(classify(""), FailureKind::Unknown);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("NO SUCH CONTAINER"), FailureKind::NoSuchContainer);
    }
}
