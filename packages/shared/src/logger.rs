//! Logger setup shared by the Yoriai binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise events from `bin_name`
/// and the Yoriai crates are shown at `default_level`, and everything else
/// at `warn`.
///
/// Returns `false` if a global subscriber was already installed (for example
/// by a test harness); the existing subscriber is left untouched.
pub fn setup_logger(bin_name: &str, default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    format!(
        "warn,{bin_target}={default_level},yoriai_chat={default_level},yoriai_mediator={default_level}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_normalise_bin_name() {
        // テスト項目: バイナリ名のハイフンはターゲット名用にアンダースコアへ変換される
        // when (操作):
        let directives = default_directives("yoriai-demo", "debug");

        // then (期待する結果):
        assert_eq!(
            directives,
            "warn,yoriai_demo=debug,yoriai_chat=debug,yoriai_mediator=debug"
        );
    }

    #[test]
    fn test_default_directives_parse_as_env_filter() {
        // テスト項目: 既定のディレクティブは EnvFilter として解釈できる
        // given (前提条件):
        let directives = default_directives("yoriai", "info");

        // when (操作):
        let filter = EnvFilter::try_new(&directives);

        // then (期待する結果):
        assert!(filter.is_ok());
    }
}
