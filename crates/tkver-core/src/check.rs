//! Compatibility Check
use crate::error::{Incompatibility, IncompatibilityKind};
use crate::policy::CompatPolicy;
use crate::version::{Version, VersionInfo};

impl VersionInfo {
    /// Check that this library satisfies a caller requiring `required`.
    ///
    /// Branches run in order: major, then "required is newer than us", then
    /// the policy floor. The first failure decides the kind.
    pub fn check(&self, required: Version, policy: &CompatPolicy) -> Result<(), Incompatibility> {
        let oldest_supported = policy.oldest_supported(self);
        let fail = |kind: IncompatibilityKind| {
            tracing::debug!(
                kind = %kind,
                required = %required,
                linked = %self.version,
                policy = %policy.name,
                "version check failed"
            );
            Err(Incompatibility {
                kind,
                required,
                linked: self.version,
                oldest_supported,
            })
        };

        if required.major != self.version.major {
            return fail(IncompatibilityKind::MajorMismatch);
        }
        if (required.minor, required.micro) > (self.version.minor, self.version.micro) {
            return fail(IncompatibilityKind::TooNew);
        }
        if !policy.supports(self, &required) {
            return fail(IncompatibilityKind::TooOld);
        }
        Ok(())
    }

    /// Like [`VersionInfo::check`], returning only the failure tag.
    pub fn check_kind(&self, required: Version, policy: &CompatPolicy) -> Option<IncompatibilityKind> {
        self.check(required, policy).err().map(|e| e.kind)
    }
}
