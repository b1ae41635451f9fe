//! Device capability requests
//!
//! The shell asks for camera and location access once per app session,
//! sequentially, and never blocks startup on the outcome: a denial (or a
//! broken permission API) only produces a user-facing notification while the
//! hosted page continues to load.

use crate::Result;

/// A device capability the hosted page relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Camera,
    Location,
}

impl Capability {
    /// Request order: camera first, then location, always.
    pub const REQUEST_ORDER: [Capability; 2] = [Capability::Camera, Capability::Location];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Location => "location",
        }
    }

    /// Title of the notification shown when the capability is not granted.
    pub fn denial_title(&self) -> &'static str {
        match self {
            Self::Camera => "Camera Access Denied",
            Self::Location => "Location Access Denied",
        }
    }

    /// Why the app wants the capability, in user-facing terms.
    pub fn denial_rationale(&self) -> &'static str {
        match self {
            Self::Camera => "Camera is needed for QR scan or photo upload.",
            Self::Location => "Location is needed for attendance tracking.",
        }
    }
}

/// Tri-state grant result as reported by the OS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Not requested yet, or the request itself failed.
    #[default]
    Unknown,
}

/// Resolved grant state per capability. Each field moves away from
/// `Unknown` at most once, when its request resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermissionOutcome {
    pub camera: PermissionStatus,
    pub location: PermissionStatus,
}

impl PermissionOutcome {
    pub fn status(&self, capability: Capability) -> PermissionStatus {
        match capability {
            Capability::Camera => self.camera,
            Capability::Location => self.location,
        }
    }

    fn resolve(&mut self, capability: Capability, status: PermissionStatus) {
        match capability {
            Capability::Camera => self.camera = status,
            Capability::Location => self.location = status,
        }
    }
}

/// The OS permission dialog, as seen by the shell.
///
/// `request` puts up the dialog (or resolves immediately when the grant is
/// already decided) and awaits the user's response. There is no timeout: the
/// UI stays interactive while this future is pending.
pub trait PermissionApi {
    async fn request(&mut self, capability: Capability) -> Result<PermissionStatus>;
}

/// Request every capability the shell uses, strictly in order, awaiting each
/// OS response before issuing the next request.
///
/// Non-granted results invoke `on_denied` once per capability so the UI can
/// surface a non-blocking notification; errors from the permission API itself
/// are logged and treated as denial. The sequence never aborts early and its
/// outcome never gates readiness — callers run this fire-and-forget.
pub async fn request_all<A: PermissionApi>(
    api: &mut A,
    mut on_denied: impl FnMut(Capability),
) -> PermissionOutcome {
    let mut outcome = PermissionOutcome::default();

    for capability in Capability::REQUEST_ORDER {
        let status = match api.request(capability).await {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(
                    "{} permission request failed, treating as denied: {err}",
                    capability.label()
                );
                PermissionStatus::Denied
            }
        };

        if status != PermissionStatus::Granted {
            on_denied(capability);
        }

        outcome.resolve(capability, status);
        tracing::debug!("{} permission resolved: {status:?}", capability.label());
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShellError;

    /// Scripted permission API recording the order of requests.
    struct ScriptedApi {
        camera: Result<PermissionStatus>,
        location: Result<PermissionStatus>,
        requested: Vec<Capability>,
    }

    impl ScriptedApi {
        fn new(camera: Result<PermissionStatus>, location: Result<PermissionStatus>) -> Self {
            Self {
                camera,
                location,
                requested: Vec::new(),
            }
        }
    }

    impl PermissionApi for ScriptedApi {
        async fn request(&mut self, capability: Capability) -> Result<PermissionStatus> {
            self.requested.push(capability);
            let scripted = match capability {
                Capability::Camera => &self.camera,
                Capability::Location => &self.location,
            };
            match scripted {
                Ok(status) => Ok(*status),
                Err(_) => Err(ShellError::Permission("scripted failure".into())),
            }
        }
    }

    #[tokio::test]
    async fn test_requests_camera_first_then_location() {
        let mut api = ScriptedApi::new(Ok(PermissionStatus::Granted), Ok(PermissionStatus::Granted));
        let outcome = request_all(&mut api, |_| {}).await;

        assert_eq!(api.requested, vec![Capability::Camera, Capability::Location]);
        assert_eq!(outcome.camera, PermissionStatus::Granted);
        assert_eq!(outcome.location, PermissionStatus::Granted);
    }

    #[tokio::test]
    async fn test_camera_denial_does_not_stop_location_request() {
        let mut api = ScriptedApi::new(Ok(PermissionStatus::Denied), Ok(PermissionStatus::Granted));
        let mut denied = Vec::new();
        let outcome = request_all(&mut api, |cap| denied.push(cap)).await;

        // Both were requested, and exactly one alert was surfaced.
        assert_eq!(api.requested, vec![Capability::Camera, Capability::Location]);
        assert_eq!(denied, vec![Capability::Camera]);
        assert_eq!(outcome.camera, PermissionStatus::Denied);
        assert_eq!(outcome.location, PermissionStatus::Granted);
    }

    #[tokio::test]
    async fn test_api_error_counts_as_denial() {
        let mut api = ScriptedApi::new(
            Err(ShellError::Permission("unavailable".into())),
            Ok(PermissionStatus::Granted),
        );
        let mut denied = Vec::new();
        let outcome = request_all(&mut api, |cap| denied.push(cap)).await;

        assert_eq!(denied, vec![Capability::Camera]);
        assert_eq!(outcome.camera, PermissionStatus::Denied);
        assert_eq!(outcome.location, PermissionStatus::Granted);
    }

    #[tokio::test]
    async fn test_both_denied_surfaces_two_alerts_in_order() {
        let mut api = ScriptedApi::new(Ok(PermissionStatus::Denied), Ok(PermissionStatus::Denied));
        let mut denied = Vec::new();
        request_all(&mut api, |cap| denied.push(cap)).await;

        assert_eq!(denied, vec![Capability::Camera, Capability::Location]);
    }

    #[test]
    fn test_outcome_starts_unknown() {
        let outcome = PermissionOutcome::default();
        assert_eq!(outcome.status(Capability::Camera), PermissionStatus::Unknown);
        assert_eq!(outcome.status(Capability::Location), PermissionStatus::Unknown);
    }
}
