/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    pub fn summary(&self) -> String {
        format!(
            "onboard_cli {} ({} {}, {} {}, built {})\n{}",
            self.version,
            self.git_hash,
            self.git_status,
            self.target,
            self.profile,
            self.timestamp,
            self.rustc
        )
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("ONBOARD_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("ONBOARD_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("ONBOARD_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("ONBOARD_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("ONBOARD_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("ONBOARD_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::BuildMetadata;

    #[test]
    fn summary_lists_toolchain_on_second_line() {
        let meta = BuildMetadata {
            version: "1.2.3",
            git_hash: "abc1234",
            git_status: "clean",
            timestamp: "2024-01-01T00:00:00Z",
            target: "x86_64-unknown-linux-gnu",
            profile: "release",
            rustc: "rustc 1.80.0",
        };
        assert_eq!(
            meta.summary(),
            "onboard_cli 1.2.3 (abc1234 clean, x86_64-unknown-linux-gnu release, built 2024-01-01T00:00:00Z)\nrustc 1.80.0"
        );
    }

    #[test]
    fn summary_starts_with_package_version() {
        let summary = super::current().summary();
        assert!(summary.starts_with(&format!("onboard_cli {}", env!("CARGO_PKG_VERSION"))));
    }
}
