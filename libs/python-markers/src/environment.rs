//! The values environment markers are evaluated against

use pyreq_version::RuntimeVersion;

/// Values for the marker variables this crate understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerEnvironment {
    /// `major.minor` of the runtime, e.g. `3.11`.
    pub python_version: RuntimeVersion,
    /// Full runtime version, e.g. `3.11.4`.
    pub python_full_version: RuntimeVersion,
    pub sys_platform: String,
    pub platform_system: String,
    pub os_name: String,
    pub implementation_name: String,
}

impl MarkerEnvironment {
    /// Environment for `python` running on the platform this binary was built for.
    pub fn for_host(python: RuntimeVersion) -> Self {
        let (sys_platform, platform_system, os_name) = host_platform(std::env::consts::OS);
        Self {
            python_version: python.major_minor(),
            python_full_version: python,
            sys_platform: sys_platform.to_string(),
            platform_system: platform_system.to_string(),
            os_name: os_name.to_string(),
            implementation_name: "cpython".to_string(),
        }
    }

    pub fn with_sys_platform(mut self, sys_platform: impl Into<String>) -> Self {
        self.sys_platform = sys_platform.into();
        self
    }

    pub fn with_platform_system(mut self, platform_system: impl Into<String>) -> Self {
        self.platform_system = platform_system.into();
        self
    }

    pub fn with_os_name(mut self, os_name: impl Into<String>) -> Self {
        self.os_name = os_name.into();
        self
    }

    pub fn with_implementation_name(mut self, implementation_name: impl Into<String>) -> Self {
        self.implementation_name = implementation_name.into();
        self
    }
}

/// Map a Rust target OS to Python's `sys.platform`, `platform.system()` and `os.name`.
fn host_platform(os: &str) -> (&str, &str, &str) {
    match os {
        "linux" => ("linux", "Linux", "posix"),
        "macos" => ("darwin", "Darwin", "posix"),
        "windows" => ("win32", "Windows", "nt"),
        "freebsd" => ("freebsd", "FreeBSD", "posix"),
        "openbsd" => ("openbsd", "OpenBSD", "posix"),
        "netbsd" => ("netbsd", "NetBSD", "posix"),
        "android" => ("android", "Android", "posix"),
        "ios" => ("ios", "iOS", "posix"),
        other => (other, other, "posix"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_host_splits_versions() {
        let env = MarkerEnvironment::for_host(RuntimeVersion::from((3, 11, 4)));
        assert_eq!(env.python_version.to_string(), "3.11");
        assert_eq!(env.python_full_version.to_string(), "3.11.4");
        assert_eq!(env.implementation_name, "cpython");
        assert!(!env.sys_platform.is_empty());
    }

    #[test]
    fn test_host_platform_mapping() {
        assert_eq!(host_platform("macos"), ("darwin", "Darwin", "posix"));
        assert_eq!(host_platform("windows"), ("win32", "Windows", "nt"));
        assert_eq!(host_platform("haiku"), ("haiku", "haiku", "posix"));
    }

    #[test]
    fn test_overrides() {
        let env = MarkerEnvironment::for_host(RuntimeVersion::from((2, 7)))
            .with_sys_platform("win32")
            .with_os_name("nt");
        assert_eq!(env.sys_platform, "win32");
        assert_eq!(env.os_name, "nt");
        assert_eq!(env.python_version, env.python_full_version);
    }
}
