//! Published version vector tracking.

use dns_status_types::{Condition, VersionVector};
use tracing::debug;

/// Decide which version vector to publish.
///
/// While the Progressing condition is anything but `False` the previously
/// published vector is kept as is. Once it is `False` the desired vector
/// replaces it in full. Components are never mixed between the two.
pub fn advance_versions(
    progressing: &Condition,
    old_versions: &VersionVector,
    desired_versions: &VersionVector,
) -> VersionVector {
    if progressing.status.is_false() {
        debug!(versions = %desired_versions, "Publishing desired versions");
        desired_versions.clone()
    } else {
        debug!(
            progressing = %progressing.status,
            versions = %old_versions,
            "Holding published versions"
        );
        old_versions.clone()
    }
}
