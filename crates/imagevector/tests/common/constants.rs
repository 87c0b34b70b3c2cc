//! Shared constants for test infrastructure

// Component names
pub const ETCD: &str = "etcd";
pub const PAUSE: &str = "pause";
pub const KUBE_PROXY: &str = "kube-proxy";
pub const OIDC_WEBHOOK: &str = "oidc-webhook-authenticator";

// Repositories
pub const REPO_ETCD: &str = "reg/etcd";
pub const REPO_PAUSE: &str = "reg/pause";
pub const REPO_KUBE_PROXY: &str = "reg/kube-proxy";
pub const REPO_OIDC_WEBHOOK: &str = "reg/oidc-webhook-authenticator";
pub const REPO_MIRROR_ETCD: &str = "mirror/etcd";
pub const REPO_MIRROR_PAUSE: &str = "mirror/pause";

// Versions
pub const VERSION_1_24_0: &str = "1.24.0";
pub const VERSION_1_27_3: &str = "1.27.3";
pub const VERSION_1_28_0: &str = "1.28.0";
pub const VERSION_3_5_0: &str = "3.5.0";

// Architectures
pub const AMD64: &str = "amd64";
pub const ARM64: &str = "arm64";

// Digests
pub const DIGEST_PAUSE: &str =
    "sha256:7031c1b283388d2c2e09b57badb803c05ebed362dc88d84b480cc47f72a21097";
